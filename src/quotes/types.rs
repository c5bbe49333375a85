/// Quote types shared by every quote source
use serde::Deserialize;
use thiserror::Error;

/// Price of one symbol, or the marker for a failed fetch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    /// Finite, non-negative upstream price at full precision
    Available(f64),
    Unavailable,
}

impl Price {
    pub fn is_available(&self) -> bool {
        matches!(self, Price::Available(_))
    }

    /// Numeric value for responses; an unavailable price reports 0
    pub fn value_or_zero(&self) -> f64 {
        match self {
            Price::Available(value) => *value,
            Price::Unavailable => 0.0,
        }
    }
}

/// Normalized outcome of one quote fetch
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteResult {
    pub symbol: String,
    pub price: Price,
}

impl QuoteResult {
    pub fn available(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price: Price::Available(price),
        }
    }

    pub fn unavailable(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: Price::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.price.is_available()
    }
}

/// Upstream payload, `{ "symbol": "GOOG", "latestPrice": 123.45, ... }`
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamQuote {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "latestPrice", default)]
    pub latest_price: Option<serde_json::Value>,
}

/// Reasons a quote could not be obtained; logged, never returned to callers
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid quote URL for {symbol}: {reason}")] InvalidUrl {
        symbol: String,
        reason: String,
    },

    #[error("Quote request for {symbol} failed: {message}")] Transport {
        symbol: String,
        message: String,
    },

    #[error("Quote request for {symbol} returned HTTP {status}")] HttpStatus {
        symbol: String,
        status: u16,
    },

    #[error("Malformed quote for {symbol}: {reason}")] Malformed {
        symbol: String,
        reason: String,
    },
}
