/// Core type definitions for the alert monitor
use serde::Deserialize;

/// Application configuration, loaded once from TOML at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Telegram
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,

    // Market Data
    pub finnhub_api_key: String,
    pub proxy_symbol: String,
    pub index_symbol: String,
    pub index_multiplier: f64,

    // Alert Band
    pub band_center: f64,
    pub tolerance: f64,

    // Polling
    pub poll_interval_secs: u64,

    // Market Session (exchange-local, HH:MM or HH:MM:SS)
    pub market_open_time: String,
    pub market_close_time: String,

    // Logging
    pub log_level: String,
}

/// Latest quote as returned by the Finnhub /quote endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    /// Current price; absent or null on API errors
    #[serde(rename = "c")]
    pub current: Option<f64>,
    #[serde(rename = "d")]
    pub change: Option<f64>,
    #[serde(rename = "dp")]
    pub percent_change: Option<f64>,
    #[serde(rename = "h")]
    pub high: Option<f64>,
    #[serde(rename = "l")]
    pub low: Option<f64>,
    #[serde(rename = "o")]
    pub open: Option<f64>,
    #[serde(rename = "pc")]
    pub previous_close: Option<f64>,
    /// Unix timestamp of the quote
    #[serde(rename = "t")]
    pub timestamp: Option<i64>,
}

/// Outcome of evaluating one price against the tolerance band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandEvent {
    /// Price moved into the band and no alert has fired for this excursion
    Entered { price: f64 },
    /// Price is in the band but the alert already fired
    InBand,
    /// Price is outside the band; the watcher is re-armed
    OutOfBand,
}
