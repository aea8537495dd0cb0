pub mod session;

pub use session::{is_market_open, is_trading_day, next_market_open, parse_session_time};
