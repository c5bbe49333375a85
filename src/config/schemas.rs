/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro which provides
/// embedded defaults and serde support.
use serde::{Deserialize, Serialize};

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// Cross-origin settings for browser clients
    pub struct CorsConfig {
        enabled: bool = true,
        /// `"*"` allows any origin
        allowed_origins: Vec<String> = vec!["*".to_string()],
    }
}

config_struct! {
    /// HTTP listener configuration
    pub struct WebserverConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 3000,
        /// Use the first X-Forwarded-For entry as the caller address (only behind a trusted proxy)
        trust_forwarded_for: bool = false,
        cors: CorsConfig = CorsConfig::default(),
    }
}

// ============================================================================
// QUOTES CONFIGURATION
// ============================================================================

config_struct! {
    /// Upstream quote source
    pub struct QuotesConfig {
        /// Quotes are read from `{base_url}/v1/stock/{SYMBOL}/quote`
        base_url: String = "https://stock-price-checker-proxy.freecodecamp.rocks".to_string(),
        timeout_secs: u64 = 10,
        user_agent: String = "StockPriceChecker/1.0".to_string(),
    }
}

// ============================================================================
// LIKES CONFIGURATION
// ============================================================================

/// Storage backend for like records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LikeStoreBackend {
    #[default]
    Memory,
    Sqlite,
}

impl LikeStoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeStoreBackend::Memory => "memory",
            LikeStoreBackend::Sqlite => "sqlite",
        }
    }
}

config_struct! {
    /// Like store configuration
    pub struct LikesConfig {
        backend: LikeStoreBackend = LikeStoreBackend::Memory,
        sqlite_path: String = "data/likes.db".to_string(),
        /// Create an empty record when a symbol is viewed without liking
        create_on_view: bool = true,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        webserver: WebserverConfig = WebserverConfig::default(),
        quotes: QuotesConfig = QuotesConfig::default(),
        likes: LikesConfig = LikesConfig::default(),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Config {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), String> {
        if self.webserver.host.trim().is_empty() {
            return Err("webserver.host must not be empty".to_string());
        }
        if self.quotes.timeout_secs == 0 {
            return Err("quotes.timeout_secs must be greater than 0".to_string());
        }
        url::Url::parse(&self.quotes.base_url)
            .map_err(|e| format!("quotes.base_url '{}' is invalid: {}", self.quotes.base_url, e))?;
        if self.likes.backend == LikeStoreBackend::Sqlite && self.likes.sqlite_path.trim().is_empty() {
            return Err("likes.sqlite_path is required for the sqlite backend".to_string());
        }
        Ok(())
    }

    /// Socket address string the webserver binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.webserver.host, self.webserver.port)
    }
}
