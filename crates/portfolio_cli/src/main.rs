//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use portfolio_core::{Catalog, CategoryFilter, FilterSelection, PortfolioService};

fn main() {
    let catalog = Catalog::builtin();
    let service = PortfolioService::new(catalog);

    println!("portfolio_core version={}", portfolio_core::core_version());
    println!("catalog projects={}", catalog.len());
    println!("catalog featured={}", service.home_highlights().len());

    let selection = FilterSelection::new("", CategoryFilter::All);
    let listing = service.browse(&selection);
    println!("browse visible={} total={}", listing.visible.len(), listing.total);
}
