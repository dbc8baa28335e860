//! Console and file log output for the client
//!
//! Both outputs only carry events emitted by this crate; each has its own
//! threshold from [`LoggingConfig`]. The log file is opened in append mode
//! and only when its threshold is not `OFF`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use soundcharts_shared_config::LoggingConfig;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::error::{SoundchartsError, SoundchartsResult};

/// Log target shared by every event this crate emits
pub const LOG_TARGET: &str = "soundcharts_client";

fn crate_filter(level: LevelFilter) -> Targets {
    Targets::new().with_target(LOG_TARGET, level)
}

/// Human-readable output for `writer`, filtered at `level`
pub fn console_layer<S, W>(level: LevelFilter, writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_filter(crate_filter(level))
}

/// Plain-text output appended to the configured log file
///
/// Returns `None` when file logging is disabled.
pub fn file_layer<S>(config: &LoggingConfig) -> SoundchartsResult<Option<impl Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if !config.file_enabled() {
        return Ok(None);
    }

    let file = open_log_file(&config.log_file)?;
    Ok(Some(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_filter(crate_filter(config.file_level)),
    ))
}

fn open_log_file(path: &Path) -> SoundchartsResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SoundchartsError::Logging(format!(
                "cannot open log file {}: {}",
                path.display(),
                e
            ))
        })
}

/// Install console (stderr) and file output as the global subscriber
///
/// Applications that already install their own subscriber should add
/// [`console_layer`] and [`file_layer`] to it instead.
///
/// # Errors
/// `SoundchartsError::Logging` if the log file cannot be opened or a
/// global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> SoundchartsResult<()> {
    let file = file_layer(config)?;

    tracing_subscriber::registry()
        .with(console_layer(config.console_level, std::io::stderr))
        .with(file)
        .try_init()
        .map_err(|e| SoundchartsError::Logging(e.to_string()))
}
