//! Logging setup: daily-rolled file logs, optionally mirrored to stderr.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
