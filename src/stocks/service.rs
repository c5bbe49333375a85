/// Stock price lookup pipeline
///
/// For each requested symbol, concurrently: fetch the quote, then (only if
/// the quote is available) read or update the symbol's like record. The
/// caller address is anonymized once and shared by every symbol.
use super::response::{shape_stock_data, StockData, SymbolOutcome};
use crate::anonymizer::anonymize;
use crate::arguments::is_debug_stocks_enabled;
use crate::errors::{ServiceError, ServiceResult};
use crate::likes::{LikeStore, StoreError};
use crate::logger::{self, LogTag};
use crate::quotes::{Price, QuoteSource};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

/// Largest number of symbols one request may compare
pub const MAX_SYMBOLS: usize = 2;

/// One incoming lookup, before normalization
#[derive(Debug, Clone, Default)]
pub struct StockRequest {
    /// Raw `stock` values in request order
    pub symbols: Vec<String>,
    /// Register a like from this caller
    pub like: bool,
    /// Caller network address (IP only)
    pub client_address: String,
}

/// Trim, drop blanks, and uppercase requested symbols
pub fn normalize_symbols(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_uppercase())
        .collect()
}

pub struct StockPriceService {
    quotes: Arc<dyn QuoteSource>,
    likes: Arc<dyn LikeStore>,
    create_on_view: bool,
}

impl StockPriceService {
    pub fn new(quotes: Arc<dyn QuoteSource>, likes: Arc<dyn LikeStore>) -> Self {
        Self {
            quotes,
            likes,
            create_on_view: true,
        }
    }

    /// Whether viewing an unknown symbol without liking writes an empty record
    pub fn with_create_on_view(mut self, create_on_view: bool) -> Self {
        self.create_on_view = create_on_view;
        self
    }

    /// Resolve one or two symbols into the response payload
    ///
    /// Rejects zero or more than two symbols before touching quotes or
    /// storage. Every symbol's branch runs to completion even if another
    /// one fails.
    pub async fn get_stock_data(&self, request: &StockRequest) -> ServiceResult<StockData> {
        let symbols = normalize_symbols(&request.symbols);
        if symbols.is_empty() || symbols.len() > MAX_SYMBOLS {
            return Err(ServiceError::invalid_request(format!(
                "expected 1 to {} symbols, got {}",
                MAX_SYMBOLS,
                symbols.len()
            )));
        }

        let identifier = anonymize(&request.client_address);

        if is_debug_stocks_enabled() {
            logger::debug(
                LogTag::Stocks,
                &format!("Lookup {:?} like={} caller={}", symbols, request.like, &identifier[..12]),
            );
        }

        let results = join_all(
            symbols
                .iter()
                .map(|symbol| self.process_symbol(symbol, &identifier, request.like)),
        )
        .await;

        let outcomes = results.into_iter().collect::<ServiceResult<Vec<_>>>()?;
        shape_stock_data(outcomes)
    }

    async fn process_symbol(
        &self,
        symbol: &str,
        identifier: &str,
        like: bool,
    ) -> ServiceResult<SymbolOutcome> {
        let quote = self.quotes.fetch_quote(symbol).await;

        let likes = match quote.price {
            Price::Available(_) => self.resolve_likes(symbol, identifier, like).await?,
            Price::Unavailable => 0,
        };

        let stock = if quote.is_available() {
            quote.symbol
        } else {
            symbol.to_string()
        };

        Ok(SymbolOutcome {
            stock,
            price: quote.price,
            likes,
        })
    }

    /// Current like count for `symbol`, adding the caller's like when asked
    async fn resolve_likes(&self, symbol: &str, identifier: &str, like: bool) -> ServiceResult<usize> {
        if let Some(record) = self.likes.find(symbol).await? {
            if like && !record.has_liked(identifier) {
                return Ok(self.likes.add_like(symbol, identifier).await?);
            }
            return Ok(record.like_count());
        }

        if !like && !self.create_on_view {
            return Ok(0);
        }

        let mut initial = HashSet::new();
        if like {
            initial.insert(identifier.to_string());
        }

        match self.likes.create(symbol, initial).await {
            Ok(record) => Ok(record.like_count()),
            Err(StoreError::AlreadyExists(_)) => {
                // Another request created it between find and create.
                if like {
                    Ok(self.likes.add_like(symbol, identifier).await?)
                } else {
                    let record = self.likes.find(symbol).await?;
                    Ok(record.map(|r| r.like_count()).unwrap_or(0))
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}
