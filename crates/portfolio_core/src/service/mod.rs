//! Page-level use-case services.
//!
//! # Responsibility
//! - Compose catalog, search and content into the queries each page needs.
//! - Keep the presentation layer decoupled from core internals.

pub mod portfolio_service;

pub use portfolio_service::{BrowseResult, PortfolioService, ProjectPage};
