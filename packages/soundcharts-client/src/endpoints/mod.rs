//! Per-category endpoint namespaces
//!
//! Each namespace borrows the client, so `client.artist().get_audience(..)`
//! costs nothing beyond the request itself.

mod album;
mod artist;
mod charts;
mod festival;
mod library;
mod playlist;
mod radio;
mod referential;
mod search;
mod song;
mod tiktok;
mod user;
mod venue;

pub use album::AlbumApi;
pub use artist::{ArtistApi, MAX_SIMILAR_LIMIT};
pub use charts::{ChartsApi, RadioRankingQuery};
pub use festival::FestivalApi;
pub use library::{LibraryApi, PlatformIdentifier};
pub use playlist::PlaylistApi;
pub use radio::RadioApi;
pub use referential::ReferentialApi;
pub use search::{SearchApi, MAX_SEARCH_LIMIT};
pub use song::SongApi;
pub use tiktok::{TiktokApi, DEFAULT_VIDEO_COUNT_PERIOD};
pub use user::UserApi;
pub use venue::VenueApi;

use serde_json::{json, Value};

use crate::client::SoundchartsClient;

impl SoundchartsClient {
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    pub fn artist(&self) -> ArtistApi<'_> {
        ArtistApi::new(self)
    }

    pub fn song(&self) -> SongApi<'_> {
        SongApi::new(self)
    }

    pub fn album(&self) -> AlbumApi<'_> {
        AlbumApi::new(self)
    }

    pub fn charts(&self) -> ChartsApi<'_> {
        ChartsApi::new(self)
    }

    pub fn playlist(&self) -> PlaylistApi<'_> {
        PlaylistApi::new(self)
    }

    pub fn radio(&self) -> RadioApi<'_> {
        RadioApi::new(self)
    }

    pub fn tiktok(&self) -> TiktokApi<'_> {
        TiktokApi::new(self)
    }

    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// The account's tracked artists and songs ("My Library")
    pub fn library(&self) -> LibraryApi<'_> {
        LibraryApi::new(self)
    }

    pub fn referential(&self) -> ReferentialApi<'_> {
        ReferentialApi::new(self)
    }

    pub fn venue(&self) -> VenueApi<'_> {
        VenueApi::new(self)
    }

    pub fn festival(&self) -> FestivalApi<'_> {
        FestivalApi::new(self)
    }
}

/// `{"urls": [...]}` payload used by the link submission endpoints
pub(crate) fn urls_body<S: AsRef<str>>(links: &[S]) -> Value {
    let urls: Vec<&str> = links.iter().map(AsRef::as_ref).collect();
    json!({ "urls": urls })
}

/// Default ranking body: sort by one platform metric, no filters
pub(crate) fn metric_sort_body(platform: &str, metric_type: &str) -> Value {
    json!({
        "sort": {
            "platform": platform,
            "metricType": metric_type,
            "period": "month",
            "sortBy": "total",
            "order": "desc",
        },
        "filters": [],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_body() {
        let body = urls_body(&["https://open.spotify.com/artist/1", "https://x.com/a"]);
        assert_eq!(body["urls"].as_array().unwrap().len(), 2);
        assert_eq!(body["urls"][0], "https://open.spotify.com/artist/1");
    }

    #[test]
    fn test_urls_body_accepts_owned_strings() {
        let links = vec!["https://www.tiktok.com/music/x-1".to_string()];
        assert_eq!(
            urls_body(&links),
            json!({"urls": ["https://www.tiktok.com/music/x-1"]})
        );
    }

    #[test]
    fn test_metric_sort_body() {
        let body = metric_sort_body("spotify", "followers");
        assert_eq!(body["sort"]["platform"], "spotify");
        assert_eq!(body["sort"]["metricType"], "followers");
        assert_eq!(body["sort"]["order"], "desc");
        assert!(body["filters"].as_array().unwrap().is_empty());
    }
}
