//! Playlist endpoints

use serde_json::{json, Value};

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, Sort};

/// Audience metric each platform ranks playlists by; others use 28-day adds
fn ranking_metric(platform: &str) -> Option<&'static str> {
    match platform {
        "spotify" => Some("likes"),
        "youtube" => Some("views"),
        "deezer" => Some("fans"),
        "jiosaavn" => Some("followers"),
        "boomplay" => Some("favorites"),
        _ => None,
    }
}

fn default_ranking_body(platform: &str) -> Value {
    match ranking_metric(platform) {
        Some(metric_type) => json!({
            "sort": {
                "type": "metric",
                "platform": platform,
                "metricType": metric_type,
                "sortBy": "total",
                "period": "month",
                "order": "desc",
            },
            "filters": [],
        }),
        None => json!({
            "sort": { "type": "28DayAdds", "order": "desc" },
            "filters": [],
        }),
    }
}

/// Playlist endpoints (`client.playlist()`)
#[derive(Debug, Clone, Copy)]
pub struct PlaylistApi<'a> {
    client: &'a SoundchartsClient,
}

fn playlist_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("playlist uuid", uuid)
}

impl<'a> PlaylistApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Rank and filter the playlists of one platform
    ///
    /// Without a `body` playlists are ranked by the platform's audience
    /// metric when it has one, otherwise by 28-day adds.
    pub async fn get_playlists(
        &self,
        platform: &str,
        page: Page,
        body: Option<Value>,
    ) -> SoundchartsResult<Value> {
        let segment = path_segment("platform", platform)?;
        let body = body.unwrap_or_else(|| default_ranking_body(platform.trim()));
        self.client
            .paginate(
                Listing::new(format!("/api/v2/top/playlists/{}", segment))
                    .body(body)
                    .page(page),
            )
            .await
    }

    pub async fn get_playlist_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = playlist_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2.8/playlist/{}", uuid), Query::new())
            .await
    }

    /// `country_code` is required for apple-music and amazon
    pub async fn get_playlist_by_platform_id(
        &self,
        platform: &str,
        identifier: &str,
        country_code: Option<&str>,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        let identifier = path_segment("identifier", identifier)?;
        self.client
            .get(
                &format!("/api/v2.8/playlist/by-platform/{}/{}", platform, identifier),
                Query::new().opt("countryCode", country_code),
            )
            .await
    }

    pub async fn get_curators_by_platform(
        &self,
        platform: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        self.client
            .paginate(Listing::new(format!("/api/v2/playlist/curators/{}", platform)).page(page))
            .await
    }

    /// Playlists made by one curator (default sort name asc)
    pub async fn get_playlists_by_curator(
        &self,
        platform: &str,
        curator: &str,
        country_code: Option<&str>,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        let curator = path_segment("curator identifier", curator)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("name"));
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.20/playlist/by-curator/{}/{}",
                    platform, curator
                ))
                .query(Query::new().opt("countryCode", country_code).sort(&sort))
                .page(page),
            )
            .await
    }

    /// Playlists of one type, e.g. `editorial` or `this_is` (default sort name asc)
    pub async fn get_playlists_by_type(
        &self,
        platform: &str,
        playlist_type: &str,
        country_code: Option<&str>,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        let playlist_type = path_segment("playlist type", playlist_type)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("name"));
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.20/playlist/by-type/{}/{}",
                    platform, playlist_type
                ))
                .query(Query::new().opt("countryCode", country_code).sort(&sort))
                .page(page),
            )
            .await
    }

    /// Followers, fans or views over time
    pub async fn get_audience(&self, uuid: &str, period: Period) -> SoundchartsResult<Value> {
        let uuid = playlist_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2.20/playlist/{}/audience", uuid)).period(period),
            )
            .await
    }

    pub async fn get_tracklisting_latest(&self, uuid: &str, page: Page) -> SoundchartsResult<Value> {
        let uuid = playlist_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2.20/playlist/{}/tracks/latest", uuid)).page(page),
            )
            .await
    }

    pub async fn get_tracklisting_dates(
        &self,
        uuid: &str,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = playlist_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.20/playlist/{}/available-tracklistings",
                    uuid
                ))
                .period(period)
                .page(page),
            )
            .await
    }

    /// Tracklisting captured at `datetime` (ATOM format)
    pub async fn get_tracklisting_for_a_date(
        &self,
        uuid: &str,
        datetime: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = playlist_uuid(uuid)?;
        let datetime = path_segment("tracklisting date", datetime)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2.20/playlist/{}/tracks/{}", uuid, datetime))
                    .page(page),
            )
            .await
    }
}
