//! Song metadata, audience and performance endpoints

use serde_json::Value;

use super::{metric_sort_body, urls_body};
use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::pagination::Listing;
use crate::params::{path_segment, Page, Period, Query, Sort, SortOrder};

/// Song endpoints (`client.song()`)
#[derive(Debug, Clone, Copy)]
pub struct SongApi<'a> {
    client: &'a SoundchartsClient,
}

fn song_uuid(uuid: &str) -> SoundchartsResult<String> {
    path_segment("song uuid", uuid)
}

impl<'a> SongApi<'a> {
    pub(crate) fn new(client: &'a SoundchartsClient) -> Self {
        Self { client }
    }

    /// Rank and filter songs across the whole catalogue
    ///
    /// Without a `body` songs are ranked by monthly Spotify streams.
    pub async fn get_songs(&self, page: Page, body: Option<Value>) -> SoundchartsResult<Value> {
        let body = body.unwrap_or_else(|| metric_sort_body("spotify", "streams"));
        self.client
            .paginate(Listing::new("/api/v2/top/songs").body(body).page(page))
            .await
    }

    pub async fn get_song_metadata(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2.25/song/{}", uuid), Query::new())
            .await
    }

    pub async fn get_song_by_isrc(&self, isrc: &str) -> SoundchartsResult<Value> {
        let isrc = path_segment("isrc", isrc)?;
        self.client
            .get(&format!("/api/v2.25/song/by-isrc/{}", isrc), Query::new())
            .await
    }

    pub async fn get_song_by_platform_id(
        &self,
        platform: &str,
        identifier: &str,
    ) -> SoundchartsResult<Value> {
        let platform = path_segment("platform", platform)?;
        let identifier = path_segment("identifier", identifier)?;
        self.client
            .get(
                &format!("/api/v2.25/song/by-platform/{}/{}", platform, identifier),
                Query::new(),
            )
            .await
    }

    /// Themes, moods and other attributes derived from the lyrics
    pub async fn get_lyrics_analysis(&self, uuid: &str) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        self.client
            .get(&format!("/api/v2/song/{}/lyrics-analysis", uuid), Query::new())
            .await
    }

    pub async fn get_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/identifiers", uuid))
                    .query(Query::new().opt("platform", platform))
                    .page(page),
            )
            .await
    }

    /// Albums containing the song (default type `all`, sort title asc)
    pub async fn get_albums(
        &self,
        uuid: &str,
        album_type: Option<&str>,
        page: Page,
        sort: Option<Sort>,
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("title"));
        let query = Query::new()
            .set("type", album_type.unwrap_or("all"))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/albums", uuid))
                    .query(query)
                    .page(page),
            )
            .await
    }

    /// Streams, plays, favorites or views on one platform, newest first
    ///
    /// `identifier` narrows the series to one platform track.
    pub async fn get_audience(
        &self,
        uuid: &str,
        platform: &str,
        identifier: Option<&str>,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        let platform = path_segment("platform", platform)?;
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/audience/{}", uuid, platform))
                    .query(Query::new().opt("identifier", identifier))
                    .period(period)
                    .sort_by_date("date", SortOrder::Desc),
            )
            .await
    }

    /// Daily Spotify popularity, newest first
    pub async fn get_spotify_popularity(
        &self,
        uuid: &str,
        period: Period,
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2/song/{}/spotify/identifier/popularity",
                    uuid
                ))
                .period(period)
                .sort_by_date("date", SortOrder::Desc),
            )
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
        let uuid = song_uuid(uuid)?;
        let platform = path_segment("platform", platform)?;
        let sort = sort.unwrap_or_else(|| Sort::asc("position"));
        let query = Query::new()
            .set("currentOnly", u8::from(current_only))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/charts/ranks/{}", uuid, platform))
                    .query(query)
                    .page(page),
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
        let uuid = song_uuid(uuid)?;
        let platform = path_segment("platform", platform)?;
        let sort = sort.unwrap_or_else(|| Sort::desc("entryDate"));
        let query = Query::new()
            .set("type", playlist_type.unwrap_or("all"))
            .sort(&sort);
        self.client
            .paginate(
                Listing::new(format!(
                    "/api/v2.20/song/{}/playlist/current/{}",
                    uuid, platform
                ))
                .query(query)
                .page(page),
            )
            .await
    }

    /// Individual radio spins, oldest first
    pub async fn get_radio_spins(
        &self,
        uuid: &str,
        radio_slugs: Option<&str>,
        country_code: Option<&str>,
        period: Period,
        page: Page,
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        let query = Query::new()
            .opt("radioSlugs", radio_slugs)
            .opt("countryCode", country_code);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/broadcasts", uuid))
                    .query(query)
                    .period(period)
                    .page(page)
                    .sort_by_date("airedAt", SortOrder::Asc),
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
        let uuid = song_uuid(uuid)?;
        let query = Query::new()
            .opt("radioSlugs", radio_slugs)
            .opt("countryCode", country_code);
        self.client
            .paginate(
                Listing::new(format!("/api/v2/song/{}/broadcast-groups", uuid))
                    .query(query)
                    .period(period)
                    .page(page),
            )
            .await
    }

    /// Submit missing platform links
    pub async fn add_links<S: AsRef<str>>(
        &self,
        uuid: &str,
        links: &[S],
    ) -> SoundchartsResult<Value> {
        let uuid = song_uuid(uuid)?;
        self.client
            .post(&format!("/api/v2/song/{}/sources/add", uuid), urls_body(links))
            .await
    }
}
