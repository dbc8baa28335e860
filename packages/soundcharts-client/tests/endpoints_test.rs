//! Integration tests for the category namespaces
//!
//! These check the request each method builds: path, method, query and body.

mod common;

use common::*;
use serde_json::{json, Value};
use soundcharts_client::{
    Page, Period, PlatformIdentifier, RadioRankingQuery, Sort, SortOrder, SoundchartsError,
};

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_encodes_term_and_caps_limit() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json(
            "GET",
            "/api/v2/artist/search/Billie%20Eilish",
            json!({"items": [{"uuid": "11e81bcc", "name": "Billie Eilish"}]}),
        )
        .await;

    let client = client_for(&server);
    let results = client
        .search()
        .artist_by_name("Billie Eilish", 0, 50)
        .await
        .unwrap();
    assert_eq!(results["items"][0]["name"], "Billie Eilish");

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "limit").as_deref(), Some("20"));
    assert_eq!(query_value(&requests[0], "offset").as_deref(), Some("0"));
}

#[tokio::test]
async fn test_blank_identifier_is_rejected_without_requests() {
    let server = MockSoundchartsServer::start().await;
    let client = client_for(&server);

    let result = client.song().get_song_metadata("   ").await;

    assert!(matches!(result, Err(SoundchartsError::InvalidInput(_))));
    assert!(received(&server).await.is_empty());
}

// ============================================================================
// Single requests
// ============================================================================

#[tokio::test]
async fn test_song_by_isrc() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json(
            "GET",
            "/api/v2.25/song/by-isrc/USUM71900764",
            json!({"object": {"uuid": "7d53", "name": "bad guy"}}),
        )
        .await;

    let client = client_for(&server);
    let song = client.song().get_song_by_isrc("USUM71900764").await.unwrap();

    assert_eq!(song["object"]["name"], "bad guy");
}

#[tokio::test]
async fn test_current_stats_sends_period() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json("GET", "/api/v2/artist/11e81bcc/current/stats", json!({"object": {}}))
        .await;

    let client = client_for(&server);
    client.artist().get_current_stats("11e81bcc", 28).await.unwrap();

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "period").as_deref(), Some("28"));
}

#[tokio::test]
async fn test_audience_report_for_a_date_formats_date() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json(
            "GET",
            "/api/v2/artist/11e81bcc/audience/instagram/report/2024-02-29",
            json!({"object": {"likes": 10}}),
        )
        .await;

    let client = client_for(&server);
    let report = client
        .artist()
        .get_audience_report_for_a_date("11e81bcc", "instagram", date("2024-02-29"))
        .await
        .unwrap();

    assert_eq!(report["object"]["likes"], 10);
}

#[tokio::test]
async fn test_tiktok_video_count_query() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json("GET", "/api/v2/tiktok/music/6705/video/volume", json!({"items": []}))
        .await;

    let client = client_for(&server);
    client
        .tiktok()
        .get_music_video_count("6705", Some(date("2024-05-31")), 30)
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "endDate").as_deref(), Some("2024-05-31"));
    assert_eq!(query_value(&requests[0], "period").as_deref(), Some("30"));
}

#[tokio::test]
async fn test_radio_ranking_forwards_filters() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json("GET", "/api/v2/top-song/youtube/reach", json!({"items": [], "token": "t2"}))
        .await;

    let client = client_for(&server);
    let query = RadioRankingQuery {
        platform: "youtube".to_string(),
        metric_type: "reach".to_string(),
        token: Some("t1".to_string()),
        ..Default::default()
    };
    let ranking = client.charts().get_radio_ranking(&query).await.unwrap();
    assert_eq!(ranking["token"], "t2");

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "token").as_deref(), Some("t1"));
    assert_eq!(query_value(&requests[0], "sortBy").as_deref(), Some("total"));
}

#[tokio::test]
async fn test_referential_genres_defaults() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json("GET", "/api/v2/artist/genres", json!({"items": []}))
        .await;

    let client = client_for(&server);
    client
        .referential()
        .get_artist_genres(None, SortOrder::Desc)
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "genre").as_deref(), Some("all"));
    assert_eq!(query_value(&requests[0], "sortOrder").as_deref(), Some("desc"));
}

// ============================================================================
// Listings with defaults
// ============================================================================

#[tokio::test]
async fn test_playlist_entries_default_sort() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items(
            "GET",
            "/api/v2.20/song/7d53/playlist/current/spotify",
            &named_items(2),
            100,
        )
        .await;

    let client = client_for(&server);
    client
        .song()
        .get_playlist_entries("7d53", "spotify", None, Page::default(), None)
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "type").as_deref(), Some("all"));
    assert_eq!(query_value(&requests[0], "sortBy").as_deref(), Some("entryDate"));
    assert_eq!(query_value(&requests[0], "sortOrder").as_deref(), Some("desc"));
}

#[tokio::test]
async fn test_chart_entries_current_only_flag() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items(
            "GET",
            "/api/v2.26/album/a1b2/charts/ranks/apple-music",
            &named_items(1),
            100,
        )
        .await;

    let client = client_for(&server);
    client
        .album()
        .get_chart_entries(
            "a1b2",
            "apple-music",
            false,
            Page::default(),
            Some(Sort::desc("rankDate")),
        )
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(query_value(&requests[0], "currentOnly").as_deref(), Some("0"));
    assert_eq!(query_value(&requests[0], "sortBy").as_deref(), Some("rankDate"));
}

#[tokio::test]
async fn test_playlist_ranking_body_for_platform() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items("POST", "/api/v2/top/playlists/youtube", &named_items(1), 100)
        .await;

    let client = client_for(&server);
    client
        .playlist()
        .get_playlists("youtube", Page::default(), None)
        .await
        .unwrap();

    let requests = received(&server).await;
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["sort"]["metricType"], "views");
}

#[tokio::test]
async fn test_radio_live_feed_sorted_newest_first() {
    let server = MockSoundchartsServer::start().await;
    let items = vec![
        json!({"airedAt": "2024-05-01T08:00:00+00:00", "song": "a"}),
        json!({"airedAt": "2024-05-01T09:00:00+00:00", "song": "b"}),
    ];
    server
        .mock_date_window("/api/v2/radio/bbc-radio-1/live-feed", "2024-05-01", "2024-05-01", &items)
        .await;

    let client = client_for(&server);
    let feed = client
        .radio()
        .get_live_feed(
            "bbc-radio-1",
            Period::between(date("2024-05-01"), date("2024-05-01")),
            Page::default(),
        )
        .await
        .unwrap();

    assert_eq!(feed["items"][0]["song"], "b");
    assert_eq!(feed["items"][1]["song"], "a");
}

// ============================================================================
// Library writes
// ============================================================================

#[tokio::test]
async fn test_library_add_and_delete() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_json("POST", "/api/v2/library/artist", json!({"errors": []}))
        .await;
    server
        .mock_json("DELETE", "/api/v2/library/artist", json!({"errors": []}))
        .await;

    let client = client_for(&server);
    let ids = [PlatformIdentifier::new("9635624", "deezer")];
    client.library().add_artist_ids(&ids).await.unwrap();
    client.library().delete_artist_ids(&ids).await.unwrap();

    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method.to_string(), "POST");
    assert_eq!(requests[1].method.to_string(), "DELETE");
    let body: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(
        body,
        json!({"identifiers": [{"identifier": "9635624", "platformCode": "deezer"}]})
    );
}
