/// Polling monitor loop: session gate, quote fetch, band evaluation, alerting
use std::sync::Arc;

use chrono::NaiveTime;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::market::finnhub::index_approximation;
use crate::market::FinnhubClient;
use crate::monitor::band::BandWatcher;
use crate::notify::telegram::format_alert;
use crate::notify::TelegramNotifier;
use crate::time::{is_market_open, next_market_open, parse_session_time};
use crate::types::{BandEvent, Config};

pub struct Monitor {
    config: Arc<Config>,
    quotes: FinnhubClient,
    notifier: TelegramNotifier,
    watcher: BandWatcher,
    market_open: NaiveTime,
    market_close: NaiveTime,
    shutdown: Arc<RwLock<bool>>,
}

impl Monitor {
    pub fn new(config: Arc<Config>, shutdown: Arc<RwLock<bool>>) -> Result<Self> {
        let quotes = FinnhubClient::new(config.finnhub_api_key.clone());
        let notifier = TelegramNotifier::new(
            config.telegram_bot_token.clone(),
            config.telegram_chat_id.clone(),
        );
        let watcher = BandWatcher::new(config.band_center, config.tolerance);
        let market_open = parse_session_time(&config.market_open_time)?;
        let market_close = parse_session_time(&config.market_close_time)?;

        Ok(Monitor {
            config,
            quotes,
            notifier,
            watcher,
            market_open,
            market_close,
            shutdown,
        })
    }

    /// Run the poll loop until the shutdown flag is set
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Monitoring {} (via {} x{}) for band {} +/- {}",
            self.config.index_symbol,
            self.config.proxy_symbol,
            self.config.index_multiplier,
            self.config.band_center,
            self.config.tolerance
        );

        loop {
            {
                let shutdown = self.shutdown.read().await;
                if *shutdown {
                    info!("Shutdown signal received");
                    break;
                }
            }

            let now = chrono::Utc::now();
            if is_market_open(now, self.market_open, self.market_close) {
                if let Err(e) = self.run_tick().await {
                    if e.is_recoverable() {
                        warn!("Tick skipped: {} ({})", e, e.error_code());
                    } else {
                        error!("Fatal monitor error: {} ({})", e, e.error_code());
                        return Err(e);
                    }
                }
            } else {
                info!(
                    "Market closed - next open at {}",
                    next_market_open(now, self.market_open)
                );
            }

            tokio::time::sleep(tokio::time::Duration::from_secs(
                self.config.poll_interval_secs,
            ))
            .await;
        }

        Ok(())
    }

    /// One poll cycle: fetch, approximate, evaluate, alert on band entry
    async fn run_tick(&mut self) -> Result<()> {
        let quote = self.quotes.get_quote(&self.config.proxy_symbol).await?;
        let proxy_price = FinnhubClient::current_price(&quote, &self.config.proxy_symbol)?;
        let index_price = index_approximation(proxy_price, self.config.index_multiplier);

        info!(
            "Approximated {} price: {:.2} ({} at {:.2})",
            self.config.index_symbol, index_price, self.config.proxy_symbol, proxy_price
        );

        if let BandEvent::Entered { price } = self.watcher.evaluate(index_price) {
            let text = format_alert(&self.config.index_symbol, price, self.watcher.center());
            if let Err(e) = self.notifier.send_message(&text).await {
                // Keep the excursion armed so the next in-band tick retries
                self.watcher.rearm();
                return Err(e);
            }
        }

        Ok(())
    }
}
