//! Pure filter engine over the project list.
//!
//! # Responsibility
//! - Combine the free-text and category dimensions with logical AND.
//! - Stay total over arbitrary string input; unknown categories produce an
//!   empty result, never an error.
//!
//! # Invariants
//! - Output is always a subsequence of the input, in the same relative order.
//! - The engine performs no I/O and holds no state; calling it on every
//!   keystroke is safe and deterministic.

use crate::model::Project;

/// Category dimension of the filter.
///
/// The UI publishes a literal `"All"` option; [`CategoryFilter::from_label`]
/// keeps that contract while the engine works on a tagged variant instead of
/// a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl CategoryFilter {
    /// UI label for the unrestricted option.
    pub const ALL_LABEL: &'static str = "All";

    /// Parses a UI label into a filter value.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    /// UI label for this filter value.
    pub fn as_label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Category(category) => category,
        }
    }

    fn admits(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &project.category == category,
        }
    }
}

/// The two-slot filter state owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Free-text query; empty means no text restriction.
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterSelection {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Resets to the no-restriction state, the "clear filters" transition.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the selection restricts anything; drives the visibility of the
    /// clear-filters affordance next to the empty-state message.
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }
}

/// Computes the visible subset of `records` for a selection.
///
/// # Contract
/// - Text test: empty query passes every record; otherwise the query must be
///   a case-insensitive substring of `title`, `description`, or at least one
///   `technologies` entry. Plain containment, no tokenization or ranking.
/// - Category test: see [`CategoryFilter`].
/// - A record passes only both tests; order is preserved.
pub fn filter_projects<'a>(records: &'a [Project], selection: &FilterSelection) -> Vec<&'a Project> {
    let needle = selection.query.to_lowercase();
    records
        .iter()
        .filter(|project| matches_text(project, &needle) && selection.category.admits(project))
        .collect()
}

fn matches_text(project: &Project, lowercase_needle: &str) -> bool {
    if lowercase_needle.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(lowercase_needle)
        || project.description.to_lowercase().contains(lowercase_needle)
        || project
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(lowercase_needle))
}
