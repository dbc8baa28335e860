//! Configuration types for the Soundcharts client
//!
//! Settings are read from `SOUNDCHARTS_*` environment variables (and a
//! `.env` file, when present) with defaults matching the production API.

mod error;
mod logging;
mod soundcharts;

pub use error::{ConfigError, ConfigResult};
pub use logging::{LoggingConfig, DEFAULT_LOG_FILE};
pub use soundcharts::{SoundchartsConfig, DEFAULT_BASE_URL};

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        temp_env::with_var_unset("SOUNDCHARTS_TEST_NUMBER", || {
            assert_eq!(parse_env("SOUNDCHARTS_TEST_NUMBER", 7u32).unwrap(), 7);
        });
    }

    #[test]
    fn test_parse_env_trims_value() {
        temp_env::with_var("SOUNDCHARTS_TEST_NUMBER", Some(" 12 "), || {
            assert_eq!(parse_env("SOUNDCHARTS_TEST_NUMBER", 7u32).unwrap(), 12);
        });
    }

    #[test]
    fn test_parse_env_invalid() {
        temp_env::with_var("SOUNDCHARTS_TEST_NUMBER", Some("seven"), || {
            let err = parse_env("SOUNDCHARTS_TEST_NUMBER", 7u32).unwrap_err();
            assert!(err.to_string().contains("SOUNDCHARTS_TEST_NUMBER"));
        });
    }

    #[test]
    fn test_get_required_env_missing() {
        temp_env::with_var_unset("SOUNDCHARTS_TEST_REQUIRED", || {
            assert!(matches!(
                get_required_env("SOUNDCHARTS_TEST_REQUIRED"),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }
}
