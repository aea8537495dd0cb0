pub mod band;
pub mod runner;

pub use band::BandWatcher;
pub use runner::Monitor;
