/// Response shapes for stock price lookups
///
/// One symbol yields an absolute like count; two symbols yield each one's
/// like count relative to the other.
use crate::errors::{ServiceError, ServiceResult};
use crate::quotes::Price;
use serde::{Deserialize, Serialize};

/// Per-symbol result of the fetch + like bookkeeping step
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolOutcome {
    pub stock: String,
    pub price: Price,
    pub likes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLikes {
    pub stock: String,
    pub price: f64,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeStockLikes {
    pub stock: String,
    pub price: f64,
    pub rel_likes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockData {
    Single(StockLikes),
    Pair([RelativeStockLikes; 2]),
}

/// Body of a successful `GET /api/stock-prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceResponse {
    #[serde(rename = "stockData")]
    pub stock_data: StockData,
}

/// Build the single- or pair-shaped payload from per-symbol outcomes
///
/// Callers validate the symbol count first, so any other count is an
/// internal error.
pub fn shape_stock_data(outcomes: Vec<SymbolOutcome>) -> ServiceResult<StockData> {
    match <[SymbolOutcome; 1]>::try_from(outcomes) {
        Ok([only]) => Ok(StockData::Single(StockLikes {
            stock: only.stock,
            price: only.price.value_or_zero(),
            likes: only.likes as u64,
        })),
        Err(outcomes) => match <[SymbolOutcome; 2]>::try_from(outcomes) {
            Ok([first, second]) => {
                let diff = first.likes as i64 - second.likes as i64;
                Ok(StockData::Pair([
                    RelativeStockLikes {
                        stock: first.stock,
                        price: first.price.value_or_zero(),
                        rel_likes: diff,
                    },
                    RelativeStockLikes {
                        stock: second.stock,
                        price: second.price.value_or_zero(),
                        rel_likes: -diff,
                    },
                ]))
            }
            Err(outcomes) => Err(ServiceError::internal_error(format!(
                "cannot shape {} symbol outcomes",
                outcomes.len()
            ))),
        },
    }
}
