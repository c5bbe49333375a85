/// In-memory like store
///
/// A map behind one lock. Every mutation happens under the write lock, so
/// `add_like` is atomic and concurrent callers never lose an update.
use super::types::{StockRecord, StoreError, StoreResult};
use super::LikeStore;
use crate::arguments::is_debug_likes_enabled;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct InMemoryLikeStore {
    records: RwLock<HashMap<String, StockRecord>>,
}

impl InMemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LikeStore for InMemoryLikeStore {
    async fn find(&self, symbol: &str) -> StoreResult<Option<StockRecord>> {
        Ok(self.records.read().get(symbol).cloned())
    }

    async fn create(&self, symbol: &str, initial_likes: HashSet<String>) -> StoreResult<StockRecord> {
        let mut records = self.records.write();
        if records.contains_key(symbol) {
            return Err(StoreError::AlreadyExists(symbol.to_string()));
        }

        let record = StockRecord::new(symbol, initial_likes);
        records.insert(symbol.to_string(), record.clone());

        if is_debug_likes_enabled() {
            logger::debug(
                LogTag::Likes,
                &format!("Created record {} with {} like(s)", symbol, record.like_count()),
            );
        }
        Ok(record)
    }

    async fn add_like(&self, symbol: &str, identifier: &str) -> StoreResult<usize> {
        let mut records = self.records.write();
        let record = records
            .get_mut(symbol)
            .ok_or_else(|| StoreError::NotFound(symbol.to_string()))?;

        record.likes.insert(identifier.to_string());
        Ok(record.like_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryLikeStore::new();
        assert!(store.find("GOOG").await.unwrap().is_none());

        let likes: HashSet<String> = ["abc".to_string()].into_iter().collect();
        let record = store.create("GOOG", likes).await.unwrap();
        assert_eq!(record.like_count(), 1);

        let found = store.find("GOOG").await.unwrap().unwrap();
        assert_eq!(found, record);
        assert!(found.has_liked("abc"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let store = InMemoryLikeStore::new();
        store.create("GOOG", HashSet::new()).await.unwrap();
        assert!(matches!(
            store.create("GOOG", HashSet::new()).await,
            Err(StoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_add_like_is_idempotent() {
        let store = InMemoryLikeStore::new();
        store.create("MSFT", HashSet::new()).await.unwrap();

        assert_eq!(store.add_like("MSFT", "abc").await.unwrap(), 1);
        assert_eq!(store.add_like("MSFT", "abc").await.unwrap(), 1);
        assert_eq!(store.add_like("MSFT", "def").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_add_like_missing_record() {
        let store = InMemoryLikeStore::new();
        assert!(matches!(
            store.add_like("NOPE", "abc").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_likes_are_not_lost() {
        let store = Arc::new(InMemoryLikeStore::new());
        store.create("GOOG", HashSet::new()).await.unwrap();

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.add_like("GOOG", &format!("caller-{}", i % 32)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.find("GOOG").await.unwrap().unwrap().like_count(), 32);
    }
}
