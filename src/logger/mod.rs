//! Structured logging for the stock price service
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output with aligned tag and level columns
//!
//! ## Usage
//!
//! ```rust
//! use stock_price_checker::logger::{self, LogTag};
//!
//! logger::error(LogTag::Likes, "Failed to open like store");
//! logger::warning(LogTag::Quotes, "Upstream returned 503 for GOOG");
//! logger::info(LogTag::Webserver, "Listening on 127.0.0.1:3000");
//! logger::debug(LogTag::Stocks, "Request details: ..."); // Only if --debug-stocks
//! ```
//!
//! Call `logger::init()` once at startup so the command-line flags apply.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{
    get_logger_config, init_from_args, set_logger_config, update_logger_config, LoggerConfig,
};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown, written to stderr)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown when --debug-<module> is given for the tag
///
/// # Example
/// ```rust
/// use stock_price_checker::logger::{self, LogTag};
///
/// // Only shown with --debug-quotes flag
/// logger::debug(LogTag::Quotes, "GET https://.../v1/stock/GOOG/quote");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing, --verbose only)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
