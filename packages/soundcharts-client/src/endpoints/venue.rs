//! Concert venue endpoints

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, SortOrder};

/// Venue endpoints (`client.venue()`)
#[derive(Debug, Clone, Copy)]
pub struct VenueApi<'a> {
    client: &'a SoundchartsClient,
}

fn venue_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("venue uuid", uuid)
}

impl<'a> VenueApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    pub async fn get_venue_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = venue_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2/venue/{}", uuid), Query::new())
            .await
    }

    pub async fn get_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = venue_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/venue/{}/identifiers", uuid))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }

    /// Concerts held at the venue, most recent first
    ///
    /// The date range is sent as-is, without 90-day windows.
    pub async fn get_concerts(
        &self,
        uuid: &str,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = venue_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/venue/{}/concerts", uuid))
                    .period(period)
                    .page(page)
                    .without_windows()
                    .sort_by_date("date", SortOrder::Desc),
            )
            .await
    }

    pub async fn get_concert_details(&self, concert_uuid: &str) -> SoundchartsResult<Value> {
        let concert_uuid = path_segment("concert uuid", concert_uuid)?;
        self.client
            .get(&format!("/api/v2/venue/concert/{}", concert_uuid), Query::new())
            .await
    }
}
