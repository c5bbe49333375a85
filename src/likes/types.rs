/// Like record model and store errors
use std::collections::HashSet;
use thiserror::Error;

/// One record per uppercase ticker symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    pub symbol: String,
    /// Anonymized caller identifiers; the set size is the like count
    pub likes: HashSet<String>,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, likes: HashSet<String>) -> Self {
        Self {
            symbol: symbol.into(),
            likes,
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn has_liked(&self, identifier: &str) -> bool {
        self.likes.contains(identifier)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record already exists for {0}")] AlreadyExists(String),

    #[error("No record for {0}")] NotFound(String),

    #[error("Database error: {0}")] Database(String),

    #[error("Lock error: {0}")] Lock(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
