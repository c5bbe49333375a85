/// SQLite-backed like store
///
/// Records live in `stocks`, likes in `stock_likes` keyed by
/// `(symbol, identifier)`, so the database itself deduplicates. Each
/// operation runs under the connection lock.
use super::types::{StockRecord, StoreError, StoreResult};
use super::LikeStore;
use crate::arguments::is_debug_likes_enabled;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub struct SqliteLikeStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteLikeStore {
    /// Open (or create) the database file and its tables
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Database(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| StoreError::Database(format!("Failed to open database: {}", e)))?;
        conn.busy_timeout(Duration::from_secs(5))?;

        Self::with_connection(conn)
    }

    /// Non-persistent database, mainly for tests
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Database(format!("Failed to open database: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.create_tables()?;
        Ok(store)
    }

    fn create_tables(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS stocks (
                symbol TEXT PRIMARY KEY,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS stock_likes (
                symbol TEXT NOT NULL REFERENCES stocks(symbol),
                identifier TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (symbol, identifier)
            );
            "#,
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(format!("Connection lock poisoned: {}", e)))
    }

    fn record_exists(conn: &Connection, symbol: &str) -> StoreResult<bool> {
        let exists = conn
            .query_row("SELECT 1 FROM stocks WHERE symbol = ?1", [symbol], |_| Ok(()))
            .optional()?
            .is_some();
        Ok(exists)
    }

    fn count_likes(conn: &Connection, symbol: &str) -> StoreResult<usize> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM stock_likes WHERE symbol = ?1",
            [symbol],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation)
}

#[async_trait]
impl LikeStore for SqliteLikeStore {
    async fn find(&self, symbol: &str) -> StoreResult<Option<StockRecord>> {
        let conn = self.lock()?;
        if !Self::record_exists(&conn, symbol)? {
            return Ok(None);
        }

        let mut stmt = conn.prepare("SELECT identifier FROM stock_likes WHERE symbol = ?1")?;
        let likes = stmt
            .query_map([symbol], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<String>, _>>()?;

        Ok(Some(StockRecord::new(symbol, likes)))
    }

    async fn create(&self, symbol: &str, initial_likes: HashSet<String>) -> StoreResult<StockRecord> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if let Err(e) = tx.execute("INSERT INTO stocks (symbol) VALUES (?1)", [symbol]) {
            if is_constraint_violation(&e) {
                return Err(StoreError::AlreadyExists(symbol.to_string()));
            }
            return Err(e.into());
        }

        for identifier in &initial_likes {
            tx.execute(
                "INSERT OR IGNORE INTO stock_likes (symbol, identifier) VALUES (?1, ?2)",
                params![symbol, identifier],
            )?;
        }
        tx.commit()?;

        if is_debug_likes_enabled() {
            logger::debug(
                LogTag::Likes,
                &format!("Created record {} with {} like(s)", symbol, initial_likes.len()),
            );
        }
        Ok(StockRecord::new(symbol, initial_likes))
    }

    async fn add_like(&self, symbol: &str, identifier: &str) -> StoreResult<usize> {
        let conn = self.lock()?;
        if !Self::record_exists(&conn, symbol)? {
            return Err(StoreError::NotFound(symbol.to_string()));
        }

        conn.execute(
            "INSERT OR IGNORE INTO stock_likes (symbol, identifier) VALUES (?1, ?2)",
            params![symbol, identifier],
        )?;

        Self::count_likes(&conn, symbol)
    }
}
