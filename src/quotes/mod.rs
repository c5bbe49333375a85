//! Quote fetching
//!
//! `QuoteSource` is the seam between the request pipeline and the upstream
//! price feed. Implementations never fail: any problem degrades to
//! `Price::Unavailable` so other symbols in the same request keep going.

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use client::HttpQuoteClient;
pub use types::{Price, QuoteError, QuoteResult};

#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quote for one symbol
    async fn fetch_quote(&self, symbol: &str) -> QuoteResult;
}
