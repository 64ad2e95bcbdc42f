//! Detail-page overview content.
//!
//! # Responsibility
//! - Provide per-project overview content with a generic fallback.
//! - Keep content data out of the presentation layer.

pub mod project_content;

pub use project_content::{content_for, ContentBlock, Highlight, ProjectContent};
