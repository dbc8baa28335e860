//! Reference data: platforms, countries, genres and cities

use serde_json::Value;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Query, SortOrder};

/// Referential endpoints (`client.referential()`)
#[derive(Debug, Clone, Copy)]
pub struct ReferentialApi<'a> {
    client: &'a SoundchartsClient,
}

impl<'a> ReferentialApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    async fn lookup(&self, path: &str) -> SoundchartsResult<Value> {
        self.client.get(path, Query::new()).await
    }

    /// Every platform code known to the API
    pub async fn get_platforms(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/referential/platforms").await
    }

    pub async fn get_platforms_for_audience_data(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/referential/platforms/social").await
    }

    pub async fn get_platforms_for_streaming_data(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/referential/platforms/streaming").await
    }

    pub async fn get_platforms_for_song_charts(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/chart/song/platforms").await
    }

    pub async fn get_platforms_for_album_charts(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/chart/album/platforms").await
    }

    pub async fn get_platforms_for_playlist_data(&self) -> SoundchartsResult<Value> {
        self.lookup("/api/v2/playlist/platforms").await
    }

    /// Countries with at least one tracked radio
    pub async fn get_radio_country_list(&self, page: Page) -> SoundchartsResult<Value> {
        self.client
            .paginate(Listing::new("/api/v2/radio/countries").page(page))
            .await
    }

    /// Genre tree; `genre` narrows it to one parent genre (default `all`)
    pub async fn get_artist_genres(
        &self,
        genre: Option<&str>,
        order: SortOrder,
    ) -> SoundchartsResult<Value> {
        let query = Query::new()
            .set("genre", genre.unwrap_or("all"))
            .set("sortOrder", order);
        self.client.get("/api/v2/artist/genres", query).await
    }

    /// Cities usable as `city_key` when ranking artists
    pub async fn get_cities_for_artist_ranking(
        &self,
        country_code: &str,
        search_city: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let country_code = path_segment("country code", country_code)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/top-artist/referential/cities/{}",
                    country_code
                ))
                .query(Query::new().opt("searchCity", search_city))
                .page(page),
            )
            .await
    }
}
