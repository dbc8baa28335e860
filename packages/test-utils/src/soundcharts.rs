//! Mock Soundcharts server for client tests
//!
//! Provides a [`MockSoundchartsServer`] that answers the paginated list,
//! date-windowed time series and error responses of the Soundcharts API.

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Mock Soundcharts server
///
/// Every mock requires the `x-app-id` and `x-api-key` headers, so a
/// request without credentials gets wiremock's default 404.
///
/// # Example
///
/// ```rust,ignore
/// use soundcharts_test_utils::{named_items, MockSoundchartsServer};
///
/// #[tokio::test]
/// async fn test_all_songs() {
///     let server = MockSoundchartsServer::start().await;
///     server
///         .mock_paged_items("GET", "/api/v2.21/artist/abc/songs", &named_items(250), 100)
///         .await;
///
///     // Point the client at server.url() with server.app_id() / server.api_key()
/// }
/// ```
pub struct MockSoundchartsServer {
    server: MockServer,
    app_id: String,
    api_key: String,
}

impl MockSoundchartsServer {
    /// Start a mock server expecting the default test credentials
    pub async fn start() -> Self {
        Self::start_with_credentials("test-app-id", "test-api-key").await
    }

    pub async fn start_with_credentials(app_id: &str, api_key: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            app_id: app_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The underlying server, for custom mocks and request inspection
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    fn authenticated(&self, http_method: &str, endpoint: &str) -> MockBuilder {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .and(header("x-app-id", self.app_id.as_str()))
            .and(header("x-api-key", self.api_key.as_str()))
    }

    /// Mount a 200 response with a JSON body
    pub async fn mock_json(&self, http_method: &str, endpoint: &str, body: Value) {
        self.authenticated(http_method, endpoint)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 response with an empty body
    pub async fn mock_empty(&self, http_method: &str, endpoint: &str) {
        self.authenticated(http_method, endpoint)
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// Mount `items` as offset pages of `page_size`
    ///
    /// Each page must be requested exactly once; the expectation is
    /// verified when the server is dropped.
    pub async fn mock_paged_items(
        &self,
        http_method: &str,
        endpoint: &str,
        items: &[Value],
        page_size: usize,
    ) {
        let total = items.len();
        let page_size = page_size.max(1);
        let chunks: Vec<&[Value]> = if items.is_empty() {
            vec![items]
        } else {
            items.chunks(page_size).collect()
        };

        for (index, chunk) in chunks.into_iter().enumerate() {
            let offset = index * page_size;
            let next = (offset + chunk.len() < total)
                .then(|| format!("{}?offset={}&limit={}", endpoint, offset + page_size, page_size));
            self.authenticated(http_method, endpoint)
                .and(query_param("offset", offset.to_string()))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(page_body(chunk, offset, total, next.as_deref())),
                )
                .expect(1)
                .mount(&self.server)
                .await;
        }
    }

    /// Mount one date window of a time series; it must be requested exactly once
    pub async fn mock_date_window(&self, endpoint: &str, start: &str, end: &str, items: &[Value]) {
        self.authenticated("GET", endpoint)
            .and(query_param("startDate", start))
            .and(query_param("endDate", end))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(items, 0, items.len(), None)),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount an error response for every request to `endpoint`
    pub async fn mock_error(&self, endpoint: &str, status: u16, message: &str) {
        Mock::given(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(status, message)))
            .mount(&self.server)
            .await;
    }

    /// Mount an error response for the next `times` requests only
    ///
    /// Later requests fall through to mocks mounted afterwards.
    pub async fn mock_error_times(&self, endpoint: &str, status: u16, message: &str, times: u64) {
        Mock::given(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(status, message)))
            .up_to_n_times(times)
            .expect(times)
            .mount(&self.server)
            .await;
    }
}

/// A list response the way the API shapes it
pub fn page_body(items: &[Value], offset: usize, total: usize, next: Option<&str>) -> Value {
    json!({
        "items": items,
        "page": {
            "offset": offset,
            "total": total,
            "next": next,
            "previous": null,
        },
        "errors": [],
    })
}

/// An error response the way the API shapes it
pub fn error_body(status: u16, message: &str) -> Value {
    json!({
        "errors": [{ "code": status, "message": message }],
    })
}

/// `count` items with distinct uuids and names `Item 1`, `Item 2`, ...
pub fn named_items(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|n| {
            json!({
                "uuid": uuid::Uuid::new_v4().to_string(),
                "name": format!("Item {}", n),
            })
        })
        .collect()
}

/// One daily data point per day from `start` to `end` inclusive
pub fn daily_points(start: &str, end: &str) -> Vec<Value> {
    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(start, "%Y-%m-%d"),
        NaiveDate::parse_from_str(end, "%Y-%m-%d"),
    ) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut day = start;
    while day <= end {
        points.push(json!({
            "date": format!("{}T00:00:00+00:00", day.format("%Y-%m-%d")),
            "value": points.len() + 1,
        }));
        day += Duration::days(1);
    }
    points
}
