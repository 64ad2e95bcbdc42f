//! Domain model for portfolio project records.
//!
//! # Responsibility
//! - Define the canonical record shape consumed by every page surface.
//! - Validate record-level invariants before catalog admission.
//!
//! # Invariants
//! - Every record is identified by a stable lowercase slug.
//! - Records are immutable after catalog construction.

pub mod project;

pub use project::{Project, ProjectStatus, ProjectValidationError};
