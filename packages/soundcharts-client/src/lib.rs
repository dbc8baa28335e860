//! Soundcharts API client
//!
//! This crate wraps the Soundcharts music-analytics REST API:
//! - Header authentication with an app id and API key
//! - One namespace per entity category (`client.artist()`, `client.charts()`, ...)
//! - Transparent pagination over 100-item pages and 90-day date windows
//! - Configurable console, file and error-escalation log thresholds
//!
//! Every operation returns the API's JSON document as a
//! [`serde_json::Value`]; paginated operations return one merged document.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use soundcharts_client::{init_logging, Page, Period, SoundchartsClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SoundchartsClient::from_env()?;
//! init_logging(&client.config().logging)?;
//!
//! let results = client.search().artist_by_name("Billie Eilish", 0, 1).await?;
//! let uuid = results["items"][0]["uuid"].as_str().unwrap_or_default();
//!
//! // 2024 is 366 days: five requests, merged oldest first
//! let period = Period::between(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! );
//! let audience = client.artist().get_audience(uuid, "spotify", period).await?;
//!
//! // Every song, 100 per request
//! let songs = client.artist().get_songs(uuid, Page::all(), None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SOUNDCHARTS_APP_ID`: application id (required)
//! - `SOUNDCHARTS_API_KEY`: API key (required)
//! - `SOUNDCHARTS_BASE_URL`: API root (default: `https://customer.api.soundcharts.com`)
//! - `SOUNDCHARTS_TIMEOUT`: request timeout in seconds (default: 10)
//! - `SOUNDCHARTS_MAX_RETRIES`: attempts per request (default: 5)
//! - `SOUNDCHARTS_RETRY_DELAY`: seconds between server-error retries (default: 10)
//! - `SOUNDCHARTS_RATE_LIMIT_DELAY`: seconds to wait after a quota 429 (default: 30)
//! - `SOUNDCHARTS_CONSOLE_LOG_LEVEL`: stderr threshold (default: `info`)
//! - `SOUNDCHARTS_FILE_LOG_LEVEL`: log file threshold (default: `warn`)
//! - `SOUNDCHARTS_EXCEPTION_LOG_LEVEL`: failures at or above this are errors (default: `error`)
//! - `SOUNDCHARTS_LOG_FILE`: log file path (default: `soundcharts_api.log`)

mod client;
mod endpoints;
mod error;
mod logging;
mod pagination;
mod params;

pub use client::SoundchartsClient;
pub use endpoints::{
    AlbumApi, ArtistApi, ChartsApi, FestivalApi, LibraryApi, PlatformIdentifier, PlaylistApi,
    RadioApi, RadioRankingQuery, ReferentialApi, SearchApi, SongApi, TiktokApi, UserApi, VenueApi,
    DEFAULT_VIDEO_COUNT_PERIOD, MAX_SEARCH_LIMIT, MAX_SIMILAR_LIMIT,
};
pub use error::{SoundchartsError, SoundchartsResult};
pub use logging::{console_layer, file_layer, init_logging, LOG_TARGET};
pub use pagination::{date_windows, MAX_WINDOW_DAYS};
pub use params::{Page, Period, Sort, SortOrder, DEFAULT_LIMIT, MAX_PAGE_SIZE};

pub use soundcharts_shared_config::{LoggingConfig, SoundchartsConfig};
