//! "My Library": the artists and songs tracked by the account

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::Page;

/// A profile reference by platform identifier, e.g. `9635624` on `deezer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformIdentifier {
    pub identifier: String,
    pub platform_code: String,
}

impl PlatformIdentifier {
    pub fn new(identifier: impl Into<String>, platform_code: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            platform_code: platform_code.into(),
        }
    }
}

fn identifiers_body(identifiers: &[PlatformIdentifier]) -> Value {
    json!({ "identifiers": identifiers })
}

/// Library endpoints (`client.library()`)
#[derive(Debug, Clone, Copy)]
pub struct LibraryApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> LibraryApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    pub async fn get_artist_list(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(Listing::new("/api/v2/library/artist").page(page))
            .await
    }

    pub async fn add_artist_ids(
        &self,
        identifiers: &[PlatformIdentifier],
    ) -> SoundchartsResult<Value> {
        self.client
            .post("/api/v2/library/artist", identifiers_body(identifiers))
            .await
    }

    pub async fn delete_artist_ids(
        &self,
        identifiers: &[PlatformIdentifier],
    ) -> SoundchartsResult<Value> {
        self.client
            .delete("/api/v2/library/artist", identifiers_body(identifiers))
            .await
    }

    pub async fn get_song_list(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(Listing::new("/api/v2/library/song").page(page))
            .await
    }

    pub async fn add_song_ids(&self, identifiers: &[PlatformIdentifier]) -> SoundchartsResult<Value> {
        self.client
            .post("/api/v2/library/song", identifiers_body(identifiers))
            .await
    }

    pub async fn delete_song_ids(
        &self,
        identifiers: &[PlatformIdentifier],
    ) -> SoundchartsResult<Value> {
        self.client
            .delete("/api/v2/library/song", identifiers_body(identifiers))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_body_uses_camel_case() {
        let body = identifiers_body(&[PlatformIdentifier::new("1577594494", "apple-music")]);
        assert_eq!(
            body,
            json!({"identifiers": [{"identifier": "1577594494", "platformCode": "apple-music"}]})
        );
    }
}
