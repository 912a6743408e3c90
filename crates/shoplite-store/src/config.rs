//! # Store Configuration
//!
//! Backend selection for the entity store.
//!
//! ## One Contract, Three Backends
//! ```text
//! StoreConfig::from_env()
//!      │
//!      ├── SHOPLITE_BACKEND=memory  → MemoryStore
//!      ├── SHOPLITE_BACKEND=json    → JsonFileStore(SHOPLITE_DATA_DIR)
//!      └── SHOPLITE_BACKEND=sqlite  → Database(SHOPLITE_DATA_DIR/shoplite.db)
//!                │
//!                ▼
//!      config.open().await → Arc<dyn EntityStore>
//! ```
//!
//! Business logic is configured with the trait object and never learns
//! which backend it got.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::json::JsonFileStore;
use crate::memory::MemoryStore;
use crate::pool::{Database, DbConfig};
use crate::store::EntityStore;

/// Environment variable naming the backend (`memory`, `json`, `sqlite`).
pub const BACKEND_ENV: &str = "SHOPLITE_BACKEND";

/// Environment variable naming the data directory for file-backed
/// stores. Defaults to `./data`.
pub const DATA_DIR_ENV: &str = "SHOPLITE_DATA_DIR";

/// Which persistence backend to use.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Volatile in-memory store.
    Memory,
    /// Flat JSON files under the given directory.
    JsonFile(PathBuf),
    /// SQLite database file under the given directory.
    Sqlite(PathBuf),
}

/// Store configuration, resolved from code or the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: Backend,
}

impl StoreConfig {
    /// In-memory backend.
    pub fn memory() -> Self {
        StoreConfig {
            backend: Backend::Memory,
        }
    }

    /// Flat-file JSON backend rooted at `data_dir`.
    pub fn json_file(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            backend: Backend::JsonFile(data_dir.into()),
        }
    }

    /// SQLite backend with its database file under `data_dir`.
    pub fn sqlite(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            backend: Backend::Sqlite(data_dir.into()),
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// `SHOPLITE_BACKEND` selects the backend (default `json`);
    /// `SHOPLITE_DATA_DIR` locates the data files (default `./data`).
    pub fn from_env() -> StoreResult<Self> {
        let data_dir =
            PathBuf::from(env::var(DATA_DIR_ENV).unwrap_or_else(|_| "./data".to_string()));

        let backend = env::var(BACKEND_ENV).unwrap_or_else(|_| "json".to_string());
        match backend.as_str() {
            "memory" => Ok(StoreConfig::memory()),
            "json" => Ok(StoreConfig::json_file(data_dir)),
            "sqlite" => Ok(StoreConfig::sqlite(data_dir)),
            other => Err(StoreError::Config(format!(
                "unknown backend '{other}' (expected memory, json, or sqlite)"
            ))),
        }
    }

    /// Opens the configured backend as a shared entity store.
    pub async fn open(&self) -> StoreResult<Arc<dyn EntityStore>> {
        match &self.backend {
            Backend::Memory => {
                info!("opening in-memory store");
                Ok(Arc::new(MemoryStore::new()))
            }
            Backend::JsonFile(dir) => {
                info!(dir = %dir.display(), "opening json file store");
                Ok(Arc::new(JsonFileStore::new(dir)))
            }
            Backend::Sqlite(dir) => {
                let path = dir.join("shoplite.db");
                info!(path = %path.display(), "opening sqlite store");
                let db = Database::new(DbConfig::new(path)).await?;
                Ok(Arc::new(db))
            }
        }
    }
}

impl Default for StoreConfig {
    /// Default matches `from_env` with nothing set: JSON files under
    /// `./data`.
    fn default() -> Self {
        StoreConfig::json_file("./data")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_backend() {
        let store = StoreConfig::memory().open().await.unwrap();
        assert!(store.get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_json_backend() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = StoreConfig::json_file(dir.path()).open().await.unwrap();
        assert!(store.get_all_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_sqlite_backend() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = StoreConfig::sqlite(dir.path()).open().await.unwrap();
        assert!(store.get_all_products().await.unwrap().is_empty());
    }
}
