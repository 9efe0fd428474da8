//! Single-setting updates, as issued by `set <param> <value>` in the shell

use crate::config::types::CrawlConfig;
use crate::ConfigError;
use std::str::FromStr;

/// Names accepted by [`CrawlConfig::apply_setting`]
pub const SETTING_NAMES: &[&str] = &[
    "url",
    "depth",
    "threads",
    "delay",
    "output",
    "ignore_robots",
    "timeout",
    "user_agent",
];

impl CrawlConfig {
    /// Updates one setting from its textual form
    ///
    /// Integer settings (`depth`, `threads`) and float settings (`delay`,
    /// `timeout`) are parsed strictly; `ignore_robots` is true for `true`,
    /// `1` or `yes` (case-insensitive) and false for anything else. The
    /// configuration is left untouched when an error is returned.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "url" => self.start_url = Some(value.to_string()),
            "depth" => self.max_depth = parse_value(key, value)?,
            "threads" => {
                let threads: usize = parse_value(key, value)?;
                if threads < 1 {
                    return Err(invalid(key, value));
                }
                self.max_concurrency = threads;
            }
            "delay" => {
                let delay: f64 = parse_value(key, value)?;
                if !delay.is_finite() || delay < 0.0 {
                    return Err(invalid(key, value));
                }
                self.delay_secs = delay;
            }
            "output" => {
                if value.is_empty() {
                    return Err(invalid(key, value));
                }
                self.output_prefix = value.to_string();
            }
            "ignore_robots" => {
                self.ignore_robots = matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
            }
            "timeout" => {
                let timeout: f64 = parse_value(key, value)?;
                if !timeout.is_finite() || timeout <= 0.0 {
                    return Err(invalid(key, value));
                }
                self.timeout_secs = timeout;
            }
            "user_agent" => self.user_agent = value.to_string(),
            other => return Err(ConfigError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
