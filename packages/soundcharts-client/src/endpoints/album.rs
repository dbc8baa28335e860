//! Album endpoints

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Query, Sort};

/// Album endpoints (`client.album()`)
#[derive(Debug, Clone, Copy)]
pub struct AlbumApi<'a> {
    client: &'a SoundchartsClient,
}

fn album_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("album uuid", uuid)
}

impl<'a> AlbumApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    pub async fn get_album_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = album_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2.36/album/by-uuid/{}", uuid), Query::new())
            .await
    }

    pub async fn get_album_by_upc(&self, upc: &str) -> SoundchartsResult<Value> {
        let upc = path_segment("upc", upc)?;
        self.client
            .get(&format!("/api/v2.36/album/by-upc/{}", upc), Query::new())
            .await
    }

    pub async fn get_album_by_platform_id(
        &self,
        platform: &str,
        identifier: &str,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        let identifier = path_segment("identifier", identifier)?;
        self.client
            .get(
                &format!("/api/v2.36/album/by-platform/{}/{}", platform, identifier),
                Query::new(),
            )
            .await
    }

    pub async fn get_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = album_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2.26/album/{}/identifiers", uuid))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }

    /// Tracks of the album, in disc order
    pub async fn get_tracklisting(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = album_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2.36/album/{}/tracks", uuid), Query::new())
            .await
    }

    /// Chart positions (default sort position asc)
    pub async fn get_chart_entries(
        &self,
        uuid: &str,
        platform: &str,
        current_only: bool,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = album_uuid(uuid)?;
        let platform = path_segment("platform", platform)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("position"));
        let query = Query::new()
            .set("currentOnly", u8::from(current_only))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.26/album/{}/charts/ranks/{}",
                    uuid, platform
                ))
                .query(query)
                .page(page),
            )
            .await
    }
}
