//! # SQLite Backend
//!
//! Connection pool management for the relational store.
//!
//! ## Lifecycle
//! ```text
//! DbConfig::new(path)            configure pool settings
//!      │
//!      ▼
//! Database::new(config).await    create pool + run migrations
//!      │
//!      ▼
//! db.products() / db.categories()   repository access
//!      │
//!      ▼
//! Database also implements ProductStore + CategoryStore,
//! so it plugs straight into Arc<dyn EntityStore>
//! ```
//!
//! ## WAL Mode
//! WAL (Write-Ahead Logging) is enabled so listing reads never block
//! behind an admin write, and vice versa.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use async_trait::async_trait;
use shoplite_core::{Category, CategoryPatch, Product, ProductPatch};

use crate::error::{StoreError, StoreResult};
use crate::migrations;
use crate::repository::category::CategoryRepository;
use crate::repository::product::ProductRepository;
use crate::store::{CategoryStore, ProductStore};

// =============================================================================
// Configuration
// =============================================================================

/// SQLite backend configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./data/shoplite.db").max_connections(5);
/// let db = Database::new(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (plenty for one storefront process)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    pub min_connections: u32,

    /// Connection acquire timeout.
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect. Default: true.
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the given database file. The file
    /// is created on first connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// In-memory database configuration (for tests).
    ///
    /// Isolated per pool; requires a single connection so every
    /// operation sees the same in-memory database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// SQLite-backed entity store.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Creates the connection pool and, by default, runs migrations.
    ///
    /// SQLite is configured with WAL journaling, NORMAL synchronous
    /// mode and foreign keys enabled.
    pub async fn new(config: DbConfig) -> StoreResult<Self> {
        info!(
            path = %config.database_path.display(),
            "initializing sqlite store"
        );

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .create_if_missing(true);

        debug!("connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "sqlite pool created");

        let db = Database { pool };

        if config.run_migrations {
            migrations::run_migrations(&db.pool).await?;
        }

        Ok(db)
    }

    /// Returns a reference to the connection pool for queries not
    /// covered by the repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Closes the pool. Subsequent operations will fail.
    pub async fn close(&self) {
        info!("closing sqlite pool");
        self.pool.close().await;
    }

    /// Checks that the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// EntityStore Contract
// =============================================================================
// The Database plugs into Arc<dyn EntityStore> by delegating to its
// repositories.

#[async_trait]
impl ProductStore for Database {
    async fn get_all_products(&self) -> StoreResult<Vec<Product>> {
        self.products().get_all().await
    }

    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.products().get_by_id(id).await
    }

    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        self.products().get_by_slug(slug).await
    }

    async fn create_product(&self, product: &Product) -> StoreResult<Product> {
        self.products().insert(product).await
    }

    async fn update_product(
        &self,
        id: &str,
        patch: &ProductPatch,
    ) -> StoreResult<Option<Product>> {
        self.products().update(id, patch).await
    }

    async fn delete_product(&self, id: &str) -> StoreResult<bool> {
        self.products().delete(id).await
    }
}

#[async_trait]
impl CategoryStore for Database {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        self.categories().get_all().await
    }

    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        self.categories().get_by_id(id).await
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        self.categories().get_by_slug(slug).await
    }

    async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        self.categories().insert(category).await
    }

    async fn update_category(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> StoreResult<Option<Category>> {
        self.categories().update(id, patch).await
    }

    async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        self.categories().delete(id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
