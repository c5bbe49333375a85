//! Stock price lookups with per-symbol likes
//!
//! `StockPriceService` owns the request pipeline; `response` holds the
//! single/pair payload shapes.

pub mod response;
pub mod service;

pub use response::{RelativeStockLikes, StockData, StockLikes, StockPriceResponse, SymbolOutcome};
pub use service::{normalize_symbols, StockPriceService, StockRequest, MAX_SYMBOLS};
