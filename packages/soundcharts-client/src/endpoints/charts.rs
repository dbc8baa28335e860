//! Song, album and TikTok chart rankings

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Query};

/// Filters for [`ChartsApi::get_radio_ranking`]
///
/// The endpoint pages with an opaque `token` taken from the previous
/// response rather than offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioRankingQuery {
    /// `global`, `instagram`, `facebook`, `tiktok`, `twitter` or `youtube`
    pub platform: String,
    /// `fan`, `followers` or `reach`
    pub metric_type: String,
    /// `total`, `change` or `percent`
    pub sort_by: String,
    /// `month` or `quarter`
    pub period: String,
    pub country_code: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_change: Option<f64>,
    pub max_change: Option<f64>,
    pub token: Option<String>,
}

impl Default for RadioRankingQuery {
    fn default() -> Self {
        Self {
            platform: "instagram".to_string(),
            metric_type: "followers".to_string(),
            sort_by: "total".to_string(),
            period: "month".to_string(),
            country_code: None,
            min_value: None,
            max_value: None,
            min_change: None,
            max_change: None,
            token: None,
        }
    }
}

impl RadioRankingQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set("sortBy", &self.sort_by)
            .set("period", &self.period)
            .opt("songCountryCode", self.country_code.as_deref())
            .opt("minValue", self.min_value)
            .opt("maxValue", self.max_value)
            .opt("minChange", self.min_change)
            .opt("maxChange", self.max_change)
            .opt("token", self.token.as_deref())
    }
}

/// Which chart family a ranking call targets
#[derive(Debug, Clone, Copy)]
enum ChartKind {
    Song,
    Album,
}

impl ChartKind {
    fn segment(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Album => "album",
        }
    }

    fn ranking_version(self) -> &'static str {
        match self {
            Self::Song => "v2.14",
            Self::Album => "v2.26",
        }
    }
}

/// Chart endpoints (`client.charts()`)
#[derive(Debug, Clone, Copy)]
pub struct ChartsApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> ChartsApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Artists ranked by a radio-audience metric (single page)
    pub async fn get_radio_ranking(&self, query: &RadioRankingQuery) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", &query.platform)?;
        let metric_type = path_segment("metric type", &query.metric_type)?;
        self.client
            .get(
                &format!("/api/v2/top-song/{}/{}", platform, metric_type),
                query.to_query(),
            )
            .await
    }

    async fn chart_list(
        &self,
        kind: ChartKind,
        platform: &str,
        country_code: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/chart/{}/by-platform/{}",
                    kind.segment(),
                    platform
                ))
                .query(Query::new().opt("countryCode", country_code))
                .page(page),
            )
            .await
    }

    async fn ranking_latest(
        &self,
        kind: ChartKind,
        slug: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let slug = path_segment("chart slug", slug)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/{}/chart/{}/{}/ranking/latest",
                    kind.ranking_version(),
                    kind.segment(),
                    slug
                ))
                .page(page),
            )
            .await
    }

    async fn ranking_dates(&self, kind: ChartKind, slug: &str, page: Page) -> SoundchartsResult<Value> {
        let slug = path_segment("chart slug", slug)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/chart/{}/{}/available-rankings",
                    kind.segment(),
                    slug
                ))
                .page(page),
            )
            .await
    }

    async fn ranking_for_a_date(
        &self,
        kind: ChartKind,
        slug: &str,
        datetime: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let slug = path_segment("chart slug", slug)?;
        let datetime = path_segment("ranking date", datetime)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/{}/chart/{}/{}/ranking/{}",
                    kind.ranking_version(),
                    kind.segment(),
                    slug,
                    datetime
                ))
                .page(page),
            )
            .await
    }

    /// Song charts available on a platform, optionally for one country
    pub async fn get_song_chart_list_by_platform(
        &self,
        platform: &str,
        country_code: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        self.chart_list(ChartKind::Song, platform, country_code, page)
            .await
    }

    pub async fn get_song_ranking_latest(&self, slug: &str, page: Page) -> SoundchartsResult<Value> {
        self.ranking_latest(ChartKind::Song, slug, page).await
    }

    pub async fn get_song_ranking_dates(&self, slug: &str, page: Page) -> SoundchartsResult<Value> {
        self.ranking_dates(ChartKind::Song, slug, page).await
    }

    /// Ranking published at `datetime` (ATOM format, as listed by the dates call)
    pub async fn get_song_ranking_for_a_date(
        &self,
        slug: &str,
        datetime: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        self.ranking_for_a_date(ChartKind::Song, slug, datetime, page)
            .await
    }

    pub async fn get_album_chart_list_by_platform(
        &self,
        platform: &str,
        country_code: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        self.chart_list(ChartKind::Album, platform, country_code, page)
            .await
    }

    pub async fn get_album_ranking_latest(&self, slug: &str, page: Page) -> SoundchartsResult<Value> {
        self.ranking_latest(ChartKind::Album, slug, page).await
    }

    pub async fn get_album_ranking_dates(&self, slug: &str, page: Page) -> SoundchartsResult<Value> {
        self.ranking_dates(ChartKind::Album, slug, page).await
    }

    pub async fn get_album_ranking_for_a_date(
        &self,
        slug: &str,
        datetime: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        self.ranking_for_a_date(ChartKind::Album, slug, datetime, page)
            .await
    }

    /// Weekly TikTok music ranking, latest edition
    pub async fn get_tiktok_music_links_ranking_latest(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(Listing::new("/api/v2/chart/tiktok/music/weekly/ranking/latest").page(page))
            .await
    }

    pub async fn get_tiktok_music_links_ranking_dates(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(
                Listing::new("/api/v2/chart/tiktok/music/weekly/available-rankings").page(page),
            )
            .await
    }

    pub async fn get_tiktok_music_links_ranking_for_a_date(
        &self,
        datetime: &str,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let datetime = path_segment("ranking date", datetime)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/chart/tiktok/music/weekly/ranking/{}",
                    datetime
                ))
                .page(page),
            )
            .await
    }
}
