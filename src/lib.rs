//! Plain-text Course Catalog
//!
//! Courses are lines in a delimited text file. The catalog is loaded into
//! memory and queried by course identifier.

pub mod domain;
pub use domain::{Catalog, Config, ConfigError, Course, CourseId, Prerequisite};

/// Reading course catalogs from delimited text files.
pub mod storage;
pub use storage::{Defect, LoadError, LoadReport};
