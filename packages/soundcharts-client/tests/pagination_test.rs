//! Integration tests for offset pagination and 90-day date windows

mod common;

use common::*;
use serde_json::{json, Value};
use soundcharts_client::{Page, Period, SoundchartsError};

fn item_names(value: &Value) -> Vec<String> {
    value["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// The five 90-day windows covering 2023
const YEAR_2023_WINDOWS: [(&str, &str); 5] = [
    ("2023-01-01", "2023-03-31"),
    ("2023-04-01", "2023-06-29"),
    ("2023-06-30", "2023-09-27"),
    ("2023-09-28", "2023-12-26"),
    ("2023-12-27", "2023-12-31"),
];

/// Mount one daily series per window, newest window first
async fn mount_windows(server: &MockSoundchartsServer, endpoint: &str, windows: &[(&str, &str)]) {
    for (start, end) in windows.iter().rev() {
        server
            .mock_date_window(endpoint, start, end, &daily_points(start, end))
            .await;
    }
}

fn start_dates(requests: &[wiremock::Request]) -> Vec<String> {
    requests
        .iter()
        .map(|r| query_value(r, "startDate").unwrap_or_default())
        .collect()
}

fn window_starts(windows: &[(&str, &str)]) -> Vec<String> {
    windows.iter().map(|(start, _)| start.to_string()).collect()
}

// ============================================================================
// Offset pages
// ============================================================================

#[tokio::test]
async fn test_unlimited_listing_fetches_every_page() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2.21/artist/11e81bcc/songs";
    server
        .mock_paged_items("GET", endpoint, &named_items(250), 100)
        .await;

    let client = client_for(&server);
    let songs = client
        .artist()
        .get_songs("11e81bcc", Page::all(), None)
        .await
        .unwrap();

    let names = item_names(&songs);
    assert_eq!(names.len(), 250);
    assert_eq!(names[0], "Item 1");
    assert_eq!(names[100], "Item 101");
    assert_eq!(names[249], "Item 250");
    assert_eq!(songs["page"]["total"], 250);

    // ceil(250 / 100) requests
    let requests = received(&server).await;
    assert_eq!(requests.len(), 3);
    let offsets: Vec<String> = requests
        .iter()
        .map(|r| query_value(r, "offset").unwrap())
        .collect();
    assert_eq!(offsets, vec!["0", "100", "200"]);
    assert_eq!(query_value(&requests[0], "sortBy").as_deref(), Some("name"));
    assert_eq!(query_value(&requests[0], "sortOrder").as_deref(), Some("asc"));
}

#[tokio::test]
async fn test_limit_truncates_merged_items() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/library/artist";
    server
        .mock_paged_items("GET", endpoint, &named_items(200), 100)
        .await;

    let client = client_for(&server);
    let artists = client
        .library()
        .get_artist_list(Page::first(150))
        .await
        .unwrap();

    assert_eq!(item_names(&artists).len(), 150);
    assert_eq!(received(&server).await.len(), 2);
}

#[tokio::test]
async fn test_small_limit_sets_page_size() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items("GET", "/api/v2.22/radio", &named_items(20), 20)
        .await;

    let client = client_for(&server);
    let radios = client.radio().get_radios(Page::first(20)).await.unwrap();

    assert_eq!(item_names(&radios).len(), 20);
    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(query_value(&requests[0], "limit").as_deref(), Some("20"));
}

#[tokio::test]
async fn test_empty_listing_returns_empty_items() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items("GET", "/api/v2/playlist/curators/spotify", &[], 100)
        .await;

    let client = client_for(&server);
    let curators = client
        .playlist()
        .get_curators_by_platform("spotify", Page::default())
        .await
        .unwrap();

    assert_eq!(curators["items"], json!([]));
    assert_eq!(received(&server).await.len(), 1);
}

#[tokio::test]
async fn test_ranking_posts_default_body() {
    let server = MockSoundchartsServer::start().await;
    server
        .mock_paged_items("POST", "/api/v2/top/artists", &named_items(3), 100)
        .await;

    let client = client_for(&server);
    let ranking = client
        .artist()
        .get_artists(Some("FR"), None, Page::default(), None)
        .await
        .unwrap();
    assert_eq!(item_names(&ranking).len(), 3);

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(query_value(&requests[0], "countryCode").as_deref(), Some("FR"));
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["sort"]["platform"], "instagram");
    assert_eq!(body["sort"]["metricType"], "followers");
}

// ============================================================================
// Date windows
// ============================================================================

#[tokio::test]
async fn test_long_period_is_split_into_chronological_windows() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/artist/11e81bcc/audience/spotify";
    // 181 days: 90 + 90 + 1
    let windows = [
        ("2024-01-01", "2024-03-30"),
        ("2024-03-31", "2024-06-28"),
        ("2024-06-29", "2024-06-29"),
    ];
    // Mounted newest first so ordering cannot come from mount order
    for (start, end) in windows.iter().rev() {
        server
            .mock_date_window(endpoint, start, end, &daily_points(start, end))
            .await;
    }

    let client = client_for(&server);
    let audience = client
        .artist()
        .get_audience(
            "11e81bcc",
            "spotify",
            Period::between(date("2024-01-01"), date("2024-06-29")),
        )
        .await
        .unwrap();

    let items = audience["items"].as_array().unwrap();
    assert_eq!(items.len(), 181);
    assert_eq!(items[0]["date"], "2024-01-01T00:00:00+00:00");
    assert_eq!(items[89]["date"], "2024-03-30T00:00:00+00:00");
    assert_eq!(items[90]["date"], "2024-03-31T00:00:00+00:00");
    assert_eq!(items[180]["date"], "2024-06-29T00:00:00+00:00");

    let requests = received(&server).await;
    assert_eq!(requests.len(), 3);
    let starts: Vec<String> = requests
        .iter()
        .map(|r| query_value(r, "startDate").unwrap())
        .collect();
    assert_eq!(starts, vec!["2024-01-01", "2024-03-31", "2024-06-29"]);
}

#[tokio::test]
async fn test_year_of_artist_audience_fetches_every_window() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/artist/11e81bcc/audience/instagram";
    mount_windows(&server, endpoint, &YEAR_2023_WINDOWS).await;

    let client = client_for(&server);
    let audience = client
        .artist()
        .get_audience(
            "11e81bcc",
            "instagram",
            Period::between(date("2023-01-01"), date("2023-12-31")),
        )
        .await
        .unwrap();

    let items = audience["items"].as_array().unwrap();
    assert_eq!(items.len(), 365);
    assert_eq!(items[0]["date"], "2023-01-01T00:00:00+00:00");
    assert_eq!(items[364]["date"], "2023-12-31T00:00:00+00:00");

    let requests = received(&server).await;
    assert_eq!(requests.len(), 5);
    assert_eq!(start_dates(&requests), window_starts(&YEAR_2023_WINDOWS));
    for request in &requests {
        assert_eq!(query_value(request, "offset"), None);
        assert_eq!(query_value(request, "limit"), None);
    }
}

#[tokio::test]
async fn test_year_of_song_audience_is_merged_newest_first() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/song/7d53/audience/spotify";
    mount_windows(&server, endpoint, &YEAR_2023_WINDOWS).await;

    let client = client_for(&server);
    let audience = client
        .song()
        .get_audience(
            "7d53",
            "spotify",
            None,
            Period::between(date("2023-01-01"), date("2023-12-31")),
        )
        .await
        .unwrap();

    let items = audience["items"].as_array().unwrap();
    assert_eq!(items.len(), 365);
    assert_eq!(items[0]["date"], "2023-12-31T00:00:00+00:00");
    assert_eq!(items[1]["date"], "2023-12-30T00:00:00+00:00");
    assert_eq!(items[364]["date"], "2023-01-01T00:00:00+00:00");

    // Requests still go out oldest window first
    let requests = received(&server).await;
    assert_eq!(start_dates(&requests), window_starts(&YEAR_2023_WINDOWS));
}

#[tokio::test]
async fn test_year_of_playlist_audience_is_merged_newest_first() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2.20/playlist/5b3e/audience";
    mount_windows(&server, endpoint, &YEAR_2023_WINDOWS).await;

    let client = client_for(&server);
    let audience = client
        .playlist()
        .get_audience(
            "5b3e",
            Period::between(date("2023-01-01"), date("2023-12-31")),
        )
        .await
        .unwrap();

    let items = audience["items"].as_array().unwrap();
    assert_eq!(items.len(), 365);
    assert_eq!(items[0]["date"], "2023-12-31T00:00:00+00:00");
    assert_eq!(items[364]["date"], "2023-01-01T00:00:00+00:00");
    assert_eq!(received(&server).await.len(), 5);
}

#[tokio::test]
async fn test_limit_stops_windowed_listing_early() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/song/7d53/broadcasts";
    // 181 days: 90 + 90 + 1, only the first two windows are needed
    let windows = [
        ("2024-01-01", "2024-03-30"),
        ("2024-03-31", "2024-06-28"),
    ];
    for (start, end) in &windows {
        let spins: Vec<Value> = daily_points(start, end)
            .into_iter()
            .map(|point| json!({"airedAt": point["date"], "radio": {"slug": "fip"}}))
            .collect();
        server.mock_date_window(endpoint, start, end, &spins).await;
    }

    let client = client_for(&server);
    let spins = client
        .song()
        .get_radio_spins(
            "7d53",
            None,
            Some("FR"),
            Period::between(date("2024-01-01"), date("2024-06-29")),
            Page::first(150),
        )
        .await
        .unwrap();

    let items = spins["items"].as_array().unwrap();
    assert_eq!(items.len(), 150);
    assert_eq!(items[0]["airedAt"], "2024-01-01T00:00:00+00:00");
    assert_eq!(items[149]["airedAt"], "2024-05-29T00:00:00+00:00");

    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(start_dates(&requests), window_starts(&windows));
    for request in &requests {
        assert_eq!(query_value(request, "offset").as_deref(), Some("0"));
        assert_eq!(query_value(request, "limit").as_deref(), Some("100"));
        assert_eq!(query_value(request, "countryCode").as_deref(), Some("FR"));
    }
}

#[tokio::test]
async fn test_end_date_only_requests_ninety_days() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/artist/11e81bcc/popularity/spotify";
    server
        .mock_date_window(
            endpoint,
            "2024-02-01",
            "2024-04-30",
            &daily_points("2024-02-01", "2024-04-30"),
        )
        .await;

    let client = client_for(&server);
    let popularity = client
        .artist()
        .get_popularity("11e81bcc", "spotify", Period::until(date("2024-04-30")))
        .await
        .unwrap();

    assert_eq!(popularity["items"].as_array().unwrap().len(), 90);
    assert_eq!(received(&server).await.len(), 1);
}

#[tokio::test]
async fn test_no_dates_sends_no_date_parameters() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2.20/playlist/5b3e/audience";
    let points = daily_points("2024-01-01", "2024-01-10");
    server
        .mock_json("GET", endpoint, page_body(&points, 0, points.len(), None))
        .await;

    let client = client_for(&server);
    client
        .playlist()
        .get_audience("5b3e", Period::latest())
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(query_value(&requests[0], "startDate"), None);
    assert_eq!(query_value(&requests[0], "endDate"), None);
    assert_eq!(query_value(&requests[0], "offset"), None);
    assert_eq!(query_value(&requests[0], "limit"), None);
}

#[tokio::test]
async fn test_song_audience_is_sorted_newest_first() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2/song/7d53/audience/spotify";
    server
        .mock_date_window(
            endpoint,
            "2024-01-01",
            "2024-01-05",
            &daily_points("2024-01-01", "2024-01-05"),
        )
        .await;

    let client = client_for(&server);
    let audience = client
        .song()
        .get_audience(
            "7d53",
            "spotify",
            None,
            Period::between(date("2024-01-01"), date("2024-01-05")),
        )
        .await
        .unwrap();

    assert_eq!(audience["items"][0]["date"], "2024-01-05T00:00:00+00:00");
    assert_eq!(audience["items"][4]["date"], "2024-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn test_events_pass_long_range_through_unsplit() {
    let server = MockSoundchartsServer::start().await;
    let endpoint = "/api/v2.19/artist/11e81bcc/songkick/events";
    server
        .mock_paged_items("GET", endpoint, &named_items(5), 100)
        .await;

    let client = client_for(&server);
    client
        .artist()
        .get_events(
            "11e81bcc",
            None,
            Period::between(date("2020-01-01"), date("2024-01-01")),
            Page::default(),
            None,
        )
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        query_value(&requests[0], "startDate").as_deref(),
        Some("2020-01-01")
    );
    assert_eq!(
        query_value(&requests[0], "endDate").as_deref(),
        Some("2024-01-01")
    );
    assert_eq!(query_value(&requests[0], "type").as_deref(), Some("all"));
}

// ============================================================================
// Input validation
// ============================================================================

#[tokio::test]
async fn test_inverted_period_is_rejected_without_requests() {
    let server = MockSoundchartsServer::start().await;
    let client = client_for(&server);

    let result = client
        .artist()
        .get_audience(
            "11e81bcc",
            "spotify",
            Period::between(date("2024-03-01"), date("2024-01-01")),
        )
        .await;

    assert!(matches!(result, Err(SoundchartsError::InvalidInput(_))));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_zero_limit_is_rejected() {
    let server = MockSoundchartsServer::start().await;
    let client = client_for(&server);

    let result = client.library().get_song_list(Page::first(0)).await;

    assert!(matches!(result, Err(SoundchartsError::InvalidInput(_))));
    assert!(received(&server).await.is_empty());
}
