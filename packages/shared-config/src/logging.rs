//! Log threshold configuration

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Default log file, created on first use in the working directory
pub const DEFAULT_LOG_FILE: &str = "soundcharts_api.log";

/// Severity thresholds for console output, file output and errors
///
/// `exception_level` decides which failures are returned to the caller:
/// a failure whose severity passes this filter becomes an `Err`, anything
/// below it is logged and the call yields no data. `LevelFilter::OFF`
/// turns every remote failure into an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum severity written to stderr
    pub console_level: LevelFilter,

    /// Minimum severity written to the log file
    pub file_level: LevelFilter,

    /// Minimum severity of a failure that is returned as an error
    pub exception_level: LevelFilter,

    /// Log file location
    pub log_file: PathBuf,
}

impl LoggingConfig {
    /// Load log thresholds from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            console_level: parse_env("SOUNDCHARTS_CONSOLE_LOG_LEVEL", LevelFilter::INFO)?,
            file_level: parse_env("SOUNDCHARTS_FILE_LOG_LEVEL", LevelFilter::WARN)?,
            exception_level: parse_env("SOUNDCHARTS_EXCEPTION_LOG_LEVEL", LevelFilter::ERROR)?,
            log_file: PathBuf::from(get_env_or_default("SOUNDCHARTS_LOG_FILE", DEFAULT_LOG_FILE)),
        })
    }

    /// Whether the log file should be opened at all
    pub fn file_enabled(&self) -> bool {
        self.file_level != LevelFilter::OFF
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::INFO,
            file_level: LevelFilter::WARN,
            exception_level: LevelFilter::ERROR,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
