//! # Repository Module
//!
//! SQL repositories for the SQLite backend.
//!
//! ## Repository Pattern
//! ```text
//! Database
//!   ├── products()   → ProductRepository
//!   │                    get_all / get_by_id / get_by_slug
//!   │                    insert / update / delete
//!   └── categories() → CategoryRepository
//!                        same shape, category columns
//! ```
//!
//! SQL lives only here; the rest of the crate deals in domain types.

pub mod category;
pub mod product;
