//! Configuration Module
//!
//! Handles loading demo configuration from environment variables.

use std::env;
use std::str::FromStr;

/// How `display` output is rendered by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// `key -> value` lines plus a size summary
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown display format '{}'", other)),
        }
    }
}

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Rendering used when the demo dumps the cache
    pub display_format: DisplayFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `DISPLAY_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            display_format: parse_var("DISPLAY_FORMAT").unwrap_or(defaults.display_format),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            display_format: DisplayFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.display_format, DisplayFormat::Text);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env to avoid races between test threads
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("DISPLAY_FORMAT");
        let config = Config::from_env();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.display_format, DisplayFormat::Text);

        env::set_var("CACHE_CAPACITY", "not-a-number");
        env::set_var("DISPLAY_FORMAT", "JSON");
        let config = Config::from_env();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.display_format, DisplayFormat::Json);

        env::set_var("CACHE_CAPACITY", "8");
        assert_eq!(Config::from_env().capacity, 8);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("DISPLAY_FORMAT");
    }

    #[test]
    fn test_display_format_parse() {
        assert_eq!(" text ".parse(), Ok(DisplayFormat::Text));
        assert!("yaml".parse::<DisplayFormat>().is_err());
    }
}
