//! Catalog construction and lookup implementation.
//!
//! # Responsibility
//! - Enforce dataset-level invariants once, at construction.
//! - Expose pure, order-preserving views over the record list.
//!
//! # Invariants
//! - A constructed catalog never changes for the life of the process.
//! - `by_id` absence is a value, never a panic; callers map it to a
//!   not-found page.
//! - A record category missing from the published list is tolerated (the
//!   record stays reachable via search and the all-projects view) but is
//!   logged as a configuration warning.

use crate::model::{Project, ProjectValidationError};
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error raised while constructing a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed model-level validation.
    Validation(ProjectValidationError),
    /// Two records share the same id.
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id `{id}` in catalog"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable, ordered collection of project records plus the published
/// category list shown in the filter UI.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    categories: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from records and the published category list.
    ///
    /// # Contract
    /// - Every record must pass [`Project::validate`].
    /// - Ids must be unique across the whole dataset.
    /// - Record order is preserved exactly as given.
    pub fn new(projects: Vec<Project>, categories: Vec<String>) -> Result<Self, CatalogError> {
        let mut seen_ids = BTreeSet::new();
        for project in &projects {
            project.validate()?;
            if !seen_ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if !categories.iter().any(|c| c == &project.category) {
                warn!(
                    "event=catalog_category_unlisted module=catalog status=warn id={} category={}",
                    project.id, project.category
                );
            }
        }

        info!(
            "event=catalog_init module=catalog status=ok projects={} categories={}",
            projects.len(),
            categories.len()
        );

        Ok(Self {
            projects,
            categories,
        })
    }

    /// Full ordered record list, in declaration order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up one record by slug id.
    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Ordered records whose category equals `category` exactly.
    pub fn by_category(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }

    /// Ordered records flagged for promotional placement.
    pub fn featured(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.featured)
            .collect()
    }

    /// Distinct technology strings across all records, sorted ascending.
    pub fn all_technologies(&self) -> Vec<String> {
        self.projects
            .iter()
            .flat_map(|project| project.technologies.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Category labels published in the filter UI.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
