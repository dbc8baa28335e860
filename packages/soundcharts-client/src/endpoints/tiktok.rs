//! TikTok music, user and video endpoints
//!
//! These endpoints are restricted to specific Soundcharts plans.

use chrono::NaiveDate;
use serde_json::Value;

use super::urls_body;
use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Query};

/// Default look-back of [`TiktokApi::get_music_video_count`], in days
pub const DEFAULT_VIDEO_COUNT_PERIOD: u32 = 90;

/// TikTok endpoints (`client.tiktok()`)
#[derive(Debug, Clone, Copy)]
pub struct TiktokApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> TiktokApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Metadata for a TikTok music id
    pub async fn get_music(&self, identifier: &str) -> SoundchartsResult<Value> {
        let identifier = path_segment("tiktok music id", identifier)?;
        self.client
            .get(&format!("/api/v2/tiktok/music/{}", identifier), Query::new())
            .await
    }

    /// Number of videos using the music over `period` days ending at `end`
    pub async fn get_music_video_count(
        &self,
        identifier: &str,
        end: Option<NaiveDate>,
        period: u32,
    ) -> SoundchartsResult<Value> {
        let identifier = path_segment("tiktok music id", identifier)?;
        let query = Query::new().date("endDate", end).set("period", period);
        self.client
            .get(
                &format!("/api/v2/tiktok/music/{}/video/volume", identifier),
                query,
            )
            .await
    }

    /// Top videos using the music with their comments, shares, likes and plays
    pub async fn get_music_videos(&self, identifier: &str, page: Page) -> SoundchartsResult<Value> {
        let identifier = path_segment("tiktok music id", identifier)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/tiktok/music/{}/videos", identifier)).page(page),
            )
            .await
    }

    pub async fn get_user(&self, username: &str) -> SoundchartsResult<Value> {
        let username = path_segment("tiktok username", username)?;
        self.client
            .get(&format!("/api/v2/tiktok/user/{}", username), Query::new())
            .await
    }

    pub async fn get_video(&self, identifier: &str) -> SoundchartsResult<Value> {
        let identifier = path_segment("tiktok video id", identifier)?;
        self.client
            .get(&format!("/api/v2/tiktok/video/{}", identifier), Query::new())
            .await
    }

    /// Submit missing TikTok music links
    pub async fn add_music_links<S: AsRef<str>>(&self, links: &[S]) -> SoundchartsResult<Value> {
        self.client
            .post("/api/v2/tiktok/music/urls/add", urls_body(links))
            .await
    }

    /// Submit missing TikTok users
    pub async fn add_user_links<S: AsRef<str>>(&self, links: &[S]) -> SoundchartsResult<Value> {
        self.client
            .post("/api/v2/tiktok/user/urls/add", urls_body(links))
            .await
    }
}
