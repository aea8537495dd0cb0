/// Main entry point for the index band alert monitor
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use spxwatch::{config::load_config, error::Result, monitor::Monitor};

/// Setup graceful shutdown handler
async fn setup_shutdown_handler(shutdown: Arc<RwLock<bool>>) {
    tokio::spawn(async move {
        // Wait for Ctrl+C
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }

        info!("Ctrl+C received - initiating graceful shutdown");

        let mut flag = shutdown.write().await;
        *flag = true;
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    let config = Arc::new(load_config(&config_path)?);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(format!("spxwatch={},info", config.log_level))
        .init();

    info!("Configuration loaded from {}", config_path);

    let shutdown = Arc::new(RwLock::new(false));
    setup_shutdown_handler(Arc::clone(&shutdown)).await;

    let mut monitor = Monitor::new(config, shutdown)?;
    monitor.run().await?;

    info!("Monitor stopped");
    Ok(())
}
