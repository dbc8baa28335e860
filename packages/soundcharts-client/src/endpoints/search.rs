//! Name search across entity types

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::params::{path_segment, Query};

/// The search endpoints return at most 20 results
pub const MAX_SEARCH_LIMIT: u32 = 20;

/// Search endpoints (`client.search()`)
#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    async fn by_type(
        &self,
        kind: &str,
        term: &str,
        offset: u32,
        limit: u32,
    ) -> SoundchartsResult<Value> {
        let term = path_segment("search term", term)?;
        let query = Query::new()
            .set("offset", offset)
            .set("limit", limit.min(MAX_SEARCH_LIMIT));
        self.client
            .get(&format!("/api/v2/{}/search/{}", kind, term), query)
            .await
    }

    pub async fn artist_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("artist", term, offset, limit).await
    }

    pub async fn song_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("song", term, offset, limit).await
    }

    pub async fn playlist_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("playlist", term, offset, limit).await
    }

    pub async fn radio_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("radio", term, offset, limit).await
    }

    pub async fn festival_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("festival", term, offset, limit).await
    }

    pub async fn venue_by_name(&self, term: &str, offset: u32, limit: u32) -> SoundchartsResult<Value> {
        self.by_type("venue", term, offset, limit).await
    }
}
