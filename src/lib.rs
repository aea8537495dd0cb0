pub mod config;
pub mod error;
pub mod market;
pub mod monitor;
pub mod notify;
pub mod time;
pub mod types;

pub use error::{MonitorError, Result};
pub use types::*;
