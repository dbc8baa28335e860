//! Artist metadata, audience and performance endpoints

use chrono::NaiveDate;
use serde_json::Value;

use super::{metric_sort_body, urls_body};
use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, Sort, SortOrder, DATE_FORMAT};

/// "Fans also like" returns at most 20 artists
pub const MAX_SIMILAR_LIMIT: u32 = 20;

/// Artist endpoints (`client.artist()`)
#[derive(Debug, Clone, Copy)]
pub struct ArtistApi<'a> {
    client: &'a SoundchartsClient,
}

fn artist_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("artist uuid", uuid)
}

fn platform_segment(platform: &str) -> SoundchartsResult<String> {
    path_segment("platform", platform)
}

impl<'a> ArtistApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Rank and filter artists across the whole catalogue
    ///
    /// Without a `body` the ranking is by Spotify followers globally,
    /// Instagram followers for a country, and Spotify monthly listeners for
    /// a city (`city_key` requires `country_code`).
    pub async fn get_artists(
        &self,
        country_code: Option<&str>,
        city_key: Option<&str>,
        page: Page,
        body: Option<Value>,
    ) -> SoundchartsResult<Value> {
        let body = body.unwrap_or_else(|| {
            let (platform, metric_type) = match (country_code, city_key) {
                (_, Some(_)) => ("spotify", "monthly_listeners"),
                (Some(_), None) => ("instagram", "followers"),
                (None, None) => ("spotify", "followers"),
            };
            metric_sort_body(platform, metric_type)
        });

        let query = Query::new()
            .opt("countryCode", country_code)
            .opt("cityKey", city_key);
        self.client
            .paginate(
                Listing::new("/api/v2/top/artists")
                    .query(query)
                    .body(body)
                    .page(page),
            )
            .await
    }

    /// Artist metadata with ISNI/IPI numbers
    pub async fn get_artist_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2.9/artist/{}", uuid), Query::new())
            .await
    }

    /// Soundcharts UUID and metadata for a platform identifier
    pub async fn get_artist_by_platform_id(
        &self,
        platform: &str,
        identifier: &str,
    ) -> SoundchartsResult<Value> {
        let platform = platform_segment(platform)?;
        let identifier = path_segment("identifier", identifier)?;
        self.client
            .get(
                &format!("/api/v2.9/artist/by-platform/{}/{}", platform, identifier),
                Query::new(),
            )
            .await
    }

    /// Platform URLs and identifiers for the artist
    pub async fn get_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/artist/{}/identifiers", uuid))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }

    /// Songs by the artist, including features (default sort: name asc)
    pub async fn get_songs(
        &self,
        uuid: &str,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("name"));
        self.client
            .paginate(
                Listing::new(format!("/api/v2.21/artist/{}/songs", uuid))
                    .query(Query::new().sort(&sort))
                    .page(page),
            )
            .await
    }

    /// Albums featuring the artist
    ///
    /// `album_type` is one of `all`, `album`, `single`, `compil` (default
    /// `all`); default sort is title asc.
    pub async fn get_albums(
        &self,
        uuid: &str,
        album_type: Option<&str>,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("title"));
        let query = Query::new()
            .set("type", album_type.unwrap_or("all"))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!("/api/v2.21/artist/{}/albums", uuid))
                    .query(query)
                    .page(page),
            )
            .await
    }

    /// Spotify "Fans also like" (single request, at most 20 results)
    pub async fn get_similar_artists(
        &self,
        uuid: &str,
        offset: u32,
        limit: u32,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let query = Query::new()
            .set("offset", offset)
            .set("limit", limit.min(MAX_SIMILAR_LIMIT));
        self.client
            .get(&format!("/api/v2/artist/{}/related", uuid), query)
            .await
    }

    /// Current audience, streaming, popularity and retention stats
    ///
    /// `period` is the evolution period in days (the API default is 7).
    pub async fn get_current_stats(&self, uuid: &str, period: u32) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        self.client
            .get(
                &format!("/api/v2/artist/{}/current/stats", uuid),
                Query::new().set("period", period),
            )
            .await
    }

    /// Soundcharts score, fanbase score and trending score
    pub async fn get_soundcharts_score(
        &self,
        uuid: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let query = Query::new()
            .date("startDate", period.start)
            .date("endDate", period.end);
        self.client
            .get(&format!("/api/v2/artist/{}/soundcharts/score", uuid), query)
            .await
    }

    async fn audience_series(&self, path: String, period: Period) -> SoundchartsResult<Value> {
        self.client
            .paginate(
                Listing::new(path)
                    .period(period)
                    .sort_by_date("date", SortOrder::Asc),
            )
            .await
    }

    /// Followers on a social platform over time
    pub async fn get_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2/artist/{}/audience/{}", uuid, platform),
            period,
        )
        .await
    }

    /// Followers with their located breakdown (instagram, tiktok, youtube)
    pub async fn get_local_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2.37/artist/{}/social/{}/followers/", uuid, platform),
            period,
        )
        .await
    }

    /// Listeners, streams or views on a streaming platform
    pub async fn get_streaming_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2/artist/{}/streaming/{}/listening", uuid, platform),
            period,
        )
        .await
    }

    /// Daily Spotify monthly listeners or YouTube views, with locations
    pub async fn get_local_streaming_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2/artist/{}/streaming/{}", uuid, platform),
            period,
        )
        .await
    }

    /// Fan retention rate (spotify, youtube, anghami, jiosaavn)
    pub async fn get_retention(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2/artist/{}/{}/retention", uuid, platform),
            period,
        )
        .await
    }

    /// Daily popularity (spotify, tidal)
    pub async fn get_popularity(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.audience_series(
            format!("/api/v2/artist/{}/popularity/{}", uuid, platform),
            period,
        )
        .await
    }

    /// Latest demographics report (instagram, youtube, tiktok)
    pub async fn get_audience_report_latest(
        &self,
        uuid: &str,
        platform: &str,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.client
            .get(
                &format!("/api/v2/artist/{}/audience/{}/report/latest", uuid, platform),
                Query::new(),
            )
            .await
    }

    /// Dates with an available demographics report, newest first
    pub async fn get_audience_report_dates(
        &self,
        uuid: &str,
        platform: &str,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/artist/{}/audience/{}/report/available-dates",
                    uuid, platform
                ))
                .period(period)
                .page(page)
                .sort_by_date("date", SortOrder::Desc),
            )
            .await
    }

    /// Demographics report for one date
    pub async fn get_audience_report_for_a_date(
        &self,
        uuid: &str,
        platform: &str,
        date: NaiveDate,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.client
            .get(
                &format!(
                    "/api/v2/artist/{}/audience/{}/report/{}",
                    uuid,
                    platform,
                    date.format(DATE_FORMAT)
                ),
                Query::new(),
            )
            .await
    }

    /// Short videos and their current audience (instagram, youtube)
    pub async fn get_short_videos(
        &self,
        uuid: &str,
        platform: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/artist/{}/shorts/{}/videos", uuid, platform))
                    .page(page),
            )
            .await
    }

    /// Audience history of one short video, newest first
    pub async fn get_short_video_audience(
        &self,
        identifier: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let identifier = path_segment("video identifier", identifier)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/artist/shorts/{}/audience", identifier))
                    .period(period)
                    .sort_by_date("date", SortOrder::Desc),
            )
            .await
    }

    async fn chart_entries(
        &self,
        path: String,
        current_only: bool,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let sort = sort.unwrap_or_else(|| Sort::asc("position"));
        let query = Query::new()
            .set("currentOnly", u8::from(current_only))
            .sort(&sort);
        self.client
            .paginate(Listing::new(path).query(query).page(page))
            .await
    }

    /// Song chart positions; `current_only = false` includes past entries
    pub async fn get_chart_song_entries(
        &self,
        uuid: &str,
        platform: &str,
        current_only: bool,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.chart_entries(
            format!("/api/v2/artist/{}/charts/song/ranks/{}", uuid, platform),
            current_only,
            page,
            sort,
        )
        .await
    }

    /// Album chart positions; `current_only = false` includes past entries
    pub async fn get_chart_album_entries(
        &self,
        uuid: &str,
        platform: &str,
        current_only: bool,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        self.chart_entries(
            format!("/api/v2.28/artist/{}/charts/album/ranks/{}", uuid, platform),
            current_only,
            page,
            sort,
        )
        .await
    }

    /// Current playlist entries (default type `all`, sort entryDate desc)
    pub async fn get_playlist_entries(
        &self,
        uuid: &str,
        platform: &str,
        playlist_type: Option<&str>,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let platform = platform_segment(platform)?;
        let sort = sort.unwrap_or_else(|| Sort::desc("entryDate"));
        let query = Query::new()
            .set("type", playlist_type.unwrap_or("all"))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.20/artist/{}/playlist/current/{}",
                    uuid, platform
                ))
                .query(query)
                .page(page),
            )
            .await
    }

    /// Radio spins across all of the artist's tracks
    ///
    /// `radio_slugs` is a comma-separated filter.
    pub async fn get_radio_spins(
        &self,
        uuid: &str,
        radio_slugs: Option<&str>,
        country_code: Option<&str>,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let query = Query::new()
            .opt("radioSlugs", radio_slugs)
            .opt("countryCode", country_code);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/artist/{}/broadcasts", uuid))
                    .query(query)
                    .period(period)
                    .page(page),
            )
            .await
    }

    /// Radio spin counts grouped by radio
    pub async fn get_radio_spin_count(
        &self,
        uuid: &str,
        radio_slugs: Option<&str>,
        country_code: Option<&str>,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let query = Query::new()
            .opt("radioSlugs", radio_slugs)
            .opt("countryCode", country_code);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/artist/{}/broadcast-groups", uuid))
                    .query(query)
                    .period(period)
                    .page(page),
            )
            .await
    }

    /// Past and future events with venue, capacity and ticket price
    ///
    /// `event_type` is `all` (default), `concert`, `festival` or `online`.
    /// The date range is sent as-is; events are not split into windows.
    pub async fn get_events(
        &self,
        uuid: &str,
        event_type: Option<&str>,
        period: Period,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("date"));
        let query = Query::new()
            .set("type", event_type.unwrap_or("all"))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!("/api/v2.19/artist/{}/songkick/events", uuid))
                    .query(query)
                    .period(period)
                    .page(page)
                    .without_windows(),
            )
            .await
    }

    /// Submit missing profile links
    pub async fn add_links<S: AsRef<str>>(
        &self,
        uuid: &str,
        links: &[S],
    ) -> SoundchartsResult<Value> {
        let uuid = artist_uuid(uuid)?;
        self.client
            .post(
                &format!("/api/v2/artist/{}/sources/add", uuid),
                urls_body(links),
            )
            .await
    }
}
