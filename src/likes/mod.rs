//! Like storage
//!
//! One `StockRecord` per uppercase symbol holding the set of anonymized
//! callers who liked it. The request pipeline only sees the `LikeStore`
//! trait; `memory` backs tests and single-process runs, `sqlite` persists
//! across restarts.

pub mod memory;
pub mod sqlite;
pub mod types;

use crate::config::{LikeStoreBackend, LikesConfig};
use crate::logger::{self, LogTag};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

pub use memory::InMemoryLikeStore;
pub use sqlite::SqliteLikeStore;
pub use types::{StockRecord, StoreError, StoreResult};

/// Record store contract used by the request pipeline
///
/// Implementations must make `add_like` atomic per symbol: concurrent likes
/// from different callers are never lost, and a repeated identifier is never
/// counted twice.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Point lookup by uppercase symbol
    async fn find(&self, symbol: &str) -> StoreResult<Option<StockRecord>>;

    /// Insert a new record; `StoreError::AlreadyExists` if one is present
    async fn create(&self, symbol: &str, initial_likes: HashSet<String>) -> StoreResult<StockRecord>;

    /// Add `identifier` to the symbol's like set and return the resulting count
    ///
    /// `StoreError::NotFound` if the record does not exist.
    async fn add_like(&self, symbol: &str, identifier: &str) -> StoreResult<usize>;
}

/// Open the backend selected in the configuration
pub fn open_like_store(config: &LikesConfig) -> Result<Arc<dyn LikeStore>> {
    let store: Arc<dyn LikeStore> = match config.backend {
        LikeStoreBackend::Memory => Arc::new(InMemoryLikeStore::new()),
        LikeStoreBackend::Sqlite => Arc::new(
            SqliteLikeStore::open(&config.sqlite_path)
                .with_context(|| format!("Failed to open like store at {}", config.sqlite_path))?,
        ),
    };

    logger::info(
        LogTag::Likes,
        &format!("Like store ready (backend: {})", config.backend.as_str()),
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_configured_backends() {
        let memory = open_like_store(&LikesConfig::default()).unwrap();
        assert!(memory.find("GOOG").await.unwrap().is_none());

        let dir = tempfile::tempdir().unwrap();
        let config = LikesConfig {
            backend: LikeStoreBackend::Sqlite,
            sqlite_path: dir.path().join("nested/likes.db").to_string_lossy().to_string(),
            ..LikesConfig::default()
        };
        let sqlite = open_like_store(&config).unwrap();
        sqlite.create("GOOG", HashSet::new()).await.unwrap();
        assert_eq!(sqlite.add_like("GOOG", "abc").await.unwrap(), 1);
    }
}
