/// Finnhub REST client for index-proxy quotes
use reqwest::Client;
use tracing::debug;

use crate::error::{MonitorError, Result};
use crate::types::Quote;

const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub market-data client
pub struct FinnhubClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        FinnhubClient {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API host (tests, proxies)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the latest quote for a symbol
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let response = self
            .client
            .get(format!("{}/quote", self.base_url))
            .query(&[("symbol", symbol), ("token", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Quote response status: {}, body: {}", status, body);

        if !status.is_success() {
            return Err(MonitorError::QuoteApiError(format!(
                "Quote fetch for {} failed with HTTP {}: {}",
                symbol, status, body
            )));
        }

        let quote: Quote = serde_json::from_str(&body)?;
        Ok(quote)
    }

    /// Extract the current price, rejecting absent/zero/non-finite values.
    /// Finnhub reports 0 for unknown symbols and null on errors.
    pub fn current_price(quote: &Quote, symbol: &str) -> Result<f64> {
        match quote.current {
            Some(price) if price.is_finite() && price > 0.0 => Ok(price),
            Some(price) => Err(MonitorError::MissingQuote(format!(
                "Unusable current price {} for {}",
                price, symbol
            ))),
            None => Err(MonitorError::MissingQuote(format!(
                "No current price field for {}",
                symbol
            ))),
        }
    }
}

/// Derive the index estimate from the proxy price
pub fn index_approximation(proxy_price: f64, multiplier: f64) -> f64 {
    proxy_price * multiplier
}
