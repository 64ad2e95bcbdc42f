//! Catalog filtering and free-text search.
//!
//! # Responsibility
//! - Compute the visible project subset for the listing page.
//! - Keep the caller-held filter state shape in one place.

pub mod filter;

pub use filter::{filter_projects, CategoryFilter, FilterSelection};
