/// Centralized error types for the alert monitor
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    // Network Errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    // Quote Errors
    #[error("Quote API error: {0}")]
    QuoteApiError(String),

    #[error("Missing quote data: {0}")]
    MissingQuote(String),

    // Notification Errors
    #[error("Notification send failed: {0}")]
    NotifyFailed(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // Market Session Errors
    #[error("Invalid session time: {0}")]
    InvalidSessionTime(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    // Generic Errors
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Check if error is recoverable (logged, tick skipped, loop continues)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MonitorError::HttpError(_)
                | MonitorError::DeserializationError(_)
                | MonitorError::QuoteApiError(_)
                | MonitorError::MissingQuote(_)
                | MonitorError::NotifyFailed(_)
        )
    }

    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            MonitorError::HttpError(_) => "NET_001",
            MonitorError::DeserializationError(_) => "DATA_001",
            MonitorError::QuoteApiError(_) => "QUOTE_001",
            MonitorError::MissingQuote(_) => "QUOTE_002",
            MonitorError::NotifyFailed(_) => "NOTIFY_001",
            MonitorError::ConfigError(_) => "CFG_001",
            MonitorError::InvalidParameter(_) => "CFG_002",
            MonitorError::InvalidSessionTime(_) => "MKT_001",
            MonitorError::FileError(_) => "FILE_001",
            MonitorError::Other(_) => "GEN_001",
        }
    }
}
