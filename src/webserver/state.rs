/// Shared application state for the webserver
///
/// Holds the listener configuration and the stock lookup pipeline that
/// route handlers call into.
use crate::config::WebserverConfig;
use crate::stocks::StockPriceService;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Webserver configuration
    pub config: Arc<WebserverConfig>,

    /// Quote + like pipeline
    pub stocks: Arc<StockPriceService>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: WebserverConfig, stocks: Arc<StockPriceService>) -> Self {
        Self {
            config: Arc::new(config),
            stocks,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
