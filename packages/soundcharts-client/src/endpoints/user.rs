//! Dashboard user endpoints

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page};

/// User endpoints (`client.user()`)
#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    async fn blocklist(&self, email: &str, kind: &str, page: Page) -> SoundchartsResult<Value> {
        let email = path_segment("user email", email)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/user/{}/blocklist/{}", email, kind)).page(page),
            )
            .await
    }

    /// Artist profiles the dashboard user has blocked
    pub async fn get_blocklist_artists(&self, email: &str, page: Page) -> SoundchartsResult<Value> {
        self.blocklist(email, "artists", page).await
    }

    pub async fn get_blocklist_songs(&self, email: &str, page: Page) -> SoundchartsResult<Value> {
        self.blocklist(email, "songs", page).await
    }

    pub async fn get_blocklist_labels(&self, email: &str, page: Page) -> SoundchartsResult<Value> {
        self.blocklist(email, "labels", page).await
    }
}
