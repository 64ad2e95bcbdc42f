//! Immutable project catalog and lookup accessors.
//!
//! # Responsibility
//! - Validate and hold the static, ordered project dataset.
//! - Answer id/category/featured/technology lookups without mutation.
//!
//! # Invariants
//! - Project ids are unique; duplicates are rejected at construction.
//! - Accessors preserve declaration order of the underlying records.

pub mod builtin;
pub mod project_catalog;

pub use project_catalog::{Catalog, CatalogError};
