//! Radio station endpoints

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, SortOrder};

/// Radio endpoints (`client.radio()`)
#[derive(Debug, Clone, Copy)]
pub struct RadioApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> RadioApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Every radio tracked by Soundcharts
    pub async fn get_radios(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(Listing::new("/api/v2.22/radio").page(page))
            .await
    }

    pub async fn get_radios_by_country(
        &self,
        country_code: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let country_code = path_segment("country code", country_code)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2.22/radio/by-country/{}", country_code)).page(page),
            )
            .await
    }

    /// Songs aired by one radio, most recent first
    pub async fn get_live_feed(
        &self,
        slug: &str,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let slug = path_segment("radio slug", slug)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/radio/{}/live-feed", slug))
                    .period(period)
                    .page(page)
                    .sort_by_date("airedAt", SortOrder::Desc),
            )
            .await
    }

    pub async fn get_ids(
        &self,
        slug: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let slug = path_segment("radio slug", slug)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/radio/{}/identifiers", slug))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }
}
