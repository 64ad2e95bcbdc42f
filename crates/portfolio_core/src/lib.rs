//! Core domain logic for the portfolio site.
//! This crate is the single source of truth for catalog data and filtering
//! behavior; routing, markup and styling live in the presentation layer.

pub mod catalog;
pub mod content;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use catalog::{Catalog, CatalogError};
pub use content::{content_for, ContentBlock, Highlight, ProjectContent};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Project, ProjectStatus, ProjectValidationError};
pub use search::{filter_projects, CategoryFilter, FilterSelection};
pub use service::{BrowseResult, PortfolioService, ProjectPage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
