//! Project record model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by listing, detail and
//!   home surfaces.
//! - Provide record-level validation used at catalog construction.
//!
//! # Invariants
//! - `id` is a lowercase slug and never reused for another project.
//! - `technologies` keeps declaration order; display order matters.
//! - `category` is an open string label, compared by exact equality.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Archived,
}

impl ProjectStatus {
    /// Human-readable label used by detail-page status badges.
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Archived => "Archived",
        }
    }
}

/// One portfolio project record.
///
/// Serialized field names keep the shape the site's data files already use:
/// link fields are camelCase, `status` is kebab-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable slug identity, e.g. `bookworm`.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Open browsing label, e.g. `Web Apps`. Not a closed enum.
    pub category: String,
    /// Ordered for display; duplicates are not rejected.
    pub technologies: Vec<String>,
    /// Display asset path or URL.
    pub image: String,
    #[serde(rename = "demoUrl", default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(rename = "githubUrl", default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Promotional placement flag; absent in data means `false`.
    #[serde(default)]
    pub featured: bool,
    /// Display string, not parsed as a number.
    pub year: String,
    pub status: ProjectStatus,
}

impl Project {
    /// Validates record-level invariants.
    ///
    /// # Contract
    /// - `id` must match `[a-z0-9]+(-[a-z0-9]+)*`.
    /// - `title`, `description`, `category`, `image` and `year` must be
    ///   non-empty after trimming.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyField("id"));
        }
        if !SLUG_RE.is_match(&self.id) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("image", &self.image),
            ("year", &self.year),
        ] {
            if value.trim().is_empty() {
                return Err(ProjectValidationError::EmptyField(field));
            }
        }

        Ok(())
    }
}

/// Record-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `id` is not a lowercase hyphenated slug.
    InvalidId(String),
    /// A required display field is empty.
    EmptyField(&'static str),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "invalid project id `{id}`: expected lowercase slug"),
            Self::EmptyField(field) => write!(f, "project field `{field}` must not be empty"),
        }
    }
}

impl Error for ProjectValidationError {}
