/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{MonitorError, Result};
use crate::time::parse_session_time;
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MonitorError::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| MonitorError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    // Validate credentials
    if config.telegram_bot_token.is_empty() {
        return Err(MonitorError::ConfigError(
            "telegram_bot_token is empty".to_string(),
        ));
    }

    if config.telegram_chat_id.is_empty() {
        return Err(MonitorError::ConfigError(
            "telegram_chat_id is empty".to_string(),
        ));
    }

    if config.finnhub_api_key.is_empty() {
        return Err(MonitorError::ConfigError(
            "finnhub_api_key is empty".to_string(),
        ));
    }

    if config.proxy_symbol.is_empty() {
        return Err(MonitorError::ConfigError(
            "proxy_symbol is empty".to_string(),
        ));
    }

    // Validate band parameters
    if config.tolerance <= 0.0 {
        return Err(MonitorError::ConfigError(format!(
            "Invalid tolerance: {}",
            config.tolerance
        )));
    }

    if config.index_multiplier <= 0.0 {
        return Err(MonitorError::ConfigError(format!(
            "Invalid index_multiplier: {}",
            config.index_multiplier
        )));
    }

    if !config.band_center.is_finite() {
        return Err(MonitorError::ConfigError(format!(
            "Invalid band_center: {}",
            config.band_center
        )));
    }

    // Validate polling
    if config.poll_interval_secs == 0 {
        return Err(MonitorError::ConfigError(
            "poll_interval_secs must be >= 1".to_string(),
        ));
    }

    // Validate session window
    let open = parse_session_time(&config.market_open_time)?;
    let close = parse_session_time(&config.market_close_time)?;
    if open >= close {
        return Err(MonitorError::ConfigError(format!(
            "market_open_time {} must be before market_close_time {}",
            config.market_open_time, config.market_close_time
        )));
    }

    Ok(())
}
