//! Common test utilities for client integration tests
//!
//! Builds clients pointed at a [`MockSoundchartsServer`] with retry delays
//! removed, plus helpers for inspecting what the client sent.

#![allow(unused_imports)]
#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use soundcharts_client::{SoundchartsClient, SoundchartsConfig};
use wiremock::Request;

pub use soundcharts_test_utils::{
    daily_points, error_body, named_items, page_body, MockSoundchartsServer,
};

/// Attempts per request in tests
pub const TEST_ATTEMPTS: u32 = 3;

/// A client for `server` that retries without sleeping
pub fn client_for(server: &MockSoundchartsServer) -> SoundchartsClient {
    let config =
        SoundchartsConfig::new(server.app_id(), server.api_key()).with_base_url(server.url());
    SoundchartsClient::new(&config)
        .expect("client should build")
        .with_retry_config(TEST_ATTEMPTS, Duration::ZERO)
        .with_rate_limit_delay(Duration::ZERO)
}

/// Every request the server received, in order
pub async fn received(server: &MockSoundchartsServer) -> Vec<Request> {
    server
        .server()
        .received_requests()
        .await
        .expect("request recording is enabled")
}

/// Value of one query parameter of a recorded request
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
