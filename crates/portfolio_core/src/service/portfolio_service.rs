//! Portfolio page service.
//!
//! # Responsibility
//! - Answer the listing page (browse + counts), detail page (record, content,
//!   related projects) and home page (featured strip) in one facade.
//!
//! # Invariants
//! - All queries are pure reads over an immutable catalog.
//! - `project_page` absence maps to the presentation layer's not-found page.

use crate::catalog::Catalog;
use crate::content::{content_for, ProjectContent};
use crate::model::Project;
use crate::search::{filter_projects, FilterSelection};

/// Related projects shown under a detail page.
const RELATED_LIMIT: usize = 3;

/// Read-only facade over one catalog instance.
pub struct PortfolioService<'a> {
    catalog: &'a Catalog,
}

/// Listing-page view: visible subset plus the catalog total for the
/// "N of M projects" counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResult<'a> {
    pub visible: Vec<&'a Project>,
    pub total: usize,
}

impl BrowseResult<'_> {
    /// Whether the presentation layer should render the empty-state message.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Detail-page view for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage<'a> {
    pub project: &'a Project,
    pub content: ProjectContent,
    /// Up to three same-category records, excluding the project itself, in
    /// catalog order.
    pub related: Vec<&'a Project>,
}

impl<'a> PortfolioService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Computes the listing-page view for the caller's filter state.
    pub fn browse(&self, selection: &FilterSelection) -> BrowseResult<'a> {
        BrowseResult {
            visible: filter_projects(self.catalog.all(), selection),
            total: self.catalog.len(),
        }
    }

    /// Assembles the detail-page view, or `None` for an unknown id.
    pub fn project_page(&self, id: &str) -> Option<ProjectPage<'a>> {
        let project = self.catalog.by_id(id)?;
        let related = self
            .catalog
            .by_category(&project.category)
            .into_iter()
            .filter(|candidate| candidate.id != project.id)
            .take(RELATED_LIMIT)
            .collect();

        Some(ProjectPage {
            project,
            content: content_for(project),
            related,
        })
    }

    /// Featured records for the homepage highlight strip.
    pub fn home_highlights(&self) -> Vec<&'a Project> {
        self.catalog.featured()
    }
}
