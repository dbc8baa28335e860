//! Festival endpoints

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, SortOrder};

/// Festival endpoints (`client.festival()`)
#[derive(Debug, Clone, Copy)]
pub struct FestivalApi<'a> {
    client: &'a SoundchartsClient,
}

fn festival_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("festival uuid", uuid)
}

impl<'a> FestivalApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    pub async fn get_festival_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = festival_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2/festival/{}", uuid), Query::new())
            .await
    }

    pub async fn get_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = festival_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/festival/{}/identifiers", uuid))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }

    /// Editions of the festival, most recent first (no 90-day windows)
    pub async fn get_editions(
        &self,
        uuid: &str,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = festival_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/festival/{}/editions", uuid))
                    .period(period)
                    .page(page)
                    .without_windows()
                    .sort_by_date("startedAt", SortOrder::Desc),
            )
            .await
    }

    pub async fn get_edition_details(&self, edition_uuid: &str) -> SoundchartsResult<Value> {
        let edition_uuid = path_segment("edition uuid", edition_uuid)?;
        self.client
            .get(&format!("/api/v2/festival/edition/{}", edition_uuid), Query::new())
            .await
    }
}
