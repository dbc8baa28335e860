//! Shared test utilities for the Soundcharts workspace
//!
//! This crate provides a mock Soundcharts API for testing the client
//! without network access.
//!
//! # Mock Services
//!
//! - [`MockSoundchartsServer`] - Mock Soundcharts API with pagination and error helpers

mod soundcharts;

pub use soundcharts::{daily_points, error_body, named_items, page_body, MockSoundchartsServer};
