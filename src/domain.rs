//! Domain models for the course catalog.
//!
//! This module contains the core domain types including courses, canonical
//! course identifiers, the in-memory catalog, and configuration.

/// Course domain model and identifier canonicalization.
pub mod course;
pub use course::{Course, CourseId};

/// In-memory catalog of courses keyed by identifier.
pub mod catalog;
pub use catalog::{Catalog, Prerequisite};

mod config;
pub use config::{Config, ConfigError};
