//! # shoplite-catalog: CRUD Orchestration for Shoplite
//!
//! The layer callers talk to: admin form submissions come in here,
//! storefront listings go out of here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Shoplite Catalog Flow                      │
//! │                                                                 │
//! │  Admin form / storefront page                                   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │              shoplite-catalog (THIS CRATE)                │  │
//! │  │                                                           │  │
//! │  │   RawProductForm ──► parse ──► validate (core rules)      │  │
//! │  │        │                                                  │  │
//! │  │        ▼                                                  │  │
//! │  │   CatalogService  (service.rs)                            │  │
//! │  │     create / update / delete  + slug uniqueness           │  │
//! │  │     list_products = core query pipeline over get_all      │  │
//! │  │        │                                                  │  │
//! │  │        ▼                                                  │  │
//! │  │   ViewVersion bump  (invalidate.rs)                       │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Arc<dyn EntityStore>  (shoplite-store)                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`service`] - The `CatalogService` orchestrator
//! - [`forms`] - Raw form types and the parse boundary
//! - [`invalidate`] - View generation counter
//! - [`error`] - `CatalogError` and result alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplite_catalog::{CatalogService, RawProductForm};
//! use shoplite_store::StoreConfig;
//!
//! let store = StoreConfig::from_env()?.open().await?;
//! let catalog = CatalogService::new(store);
//!
//! let product = catalog.create_product(form).await?;
//! let listing = catalog.list_products(&filter).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod invalidate;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use forms::{RawCategoryForm, RawProductForm};
pub use invalidate::ViewVersion;
pub use service::CatalogService;
