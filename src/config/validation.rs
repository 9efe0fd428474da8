use crate::config::types::CrawlConfig;
use crate::ConfigError;
use url::Url;

/// Validates the numeric and textual settings of a configuration
///
/// The seed URL is optional here; see [`validate_for_run`].
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_concurrency < 1 {
        return Err(ConfigError::Validation(format!(
            "threads must be >= 1, got {}",
            config.max_concurrency
        )));
    }

    if !config.delay_secs.is_finite() || config.delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            config.delay_secs
        )));
    }

    if !config.timeout_secs.is_finite() || config.timeout_secs <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "timeout must be a positive number of seconds, got {}",
            config.timeout_secs
        )));
    }

    if config.output_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "output prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates a configuration that is about to start a crawl
///
/// On top of [`validate`], requires a seed URL with an `http` or `https`
/// scheme and a host.
pub fn validate_for_run(config: &CrawlConfig) -> Result<Url, ConfigError> {
    validate(config)?;

    let start_url = config.start_url().ok_or(ConfigError::MissingStartUrl)?;
    let url = Url::parse(start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start URL '{}': {}", start_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Start URL '{}' must use http or https",
            start_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Start URL '{}' has no host",
            start_url
        )));
    }

    Ok(url)
}
