//! In-memory catalog of courses
//!
//! The [`Catalog`] knows nothing about files or delimiters. It stores courses
//! keyed by their canonical identifier and answers lookup, enumeration, and
//! prerequisite resolution queries. Loading from disk lives in
//! [`crate::storage`].

use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::domain::{Course, CourseId};

/// An in-memory collection of courses keyed by identifier.
///
/// There is at most one course per canonical identifier. Insertion order is
/// not retained; sorted enumeration is computed on demand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: HashMap<CourseId, Course>,
}

impl Catalog {
    /// Inserts a course, replacing any course with the same identifier.
    ///
    /// Returns the course that was replaced, if any.
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.id().clone(), course)
    }

    /// Removes every course.
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// Returns the number of distinct courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` if the catalog holds no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Finds a course by identifier.
    ///
    /// The query is canonicalized first, so `"  csci101 "` and `"CSCI101"`
    /// find the same course.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Course> {
        self.courses.get(&CourseId::new(query))
    }

    /// Returns `true` if a course with this identifier is stored.
    ///
    /// The query is canonicalized first.
    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.find(query).is_some()
    }

    /// Returns every stored identifier in ascending ordinal order.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<&CourseId> {
        let mut ids: Vec<_> = self.courses.keys().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns every stored course, ordered by identifier.
    #[must_use]
    pub fn sorted_courses(&self) -> Vec<&Course> {
        let mut courses: Vec<_> = self.courses.values().collect();
        courses.sort_unstable_by(|a, b| a.id().cmp(b.id()));
        courses
    }

    /// Returns the title of the course stored under exactly this identifier.
    ///
    /// Unlike [`Catalog::find`], the identifier is not canonicalized. Absence
    /// is not an error; it is how prerequisite resolution falls back to the
    /// bare identifier.
    #[must_use]
    pub fn title_for(&self, id: &str) -> Option<&str> {
        self.courses.get(id).map(Course::title)
    }

    /// Resolves the prerequisites of a course against this catalog.
    ///
    /// Prerequisites that are not in the catalog are still returned, with no
    /// title.
    #[must_use]
    pub fn prerequisites<'a>(&'a self, course: &'a Course) -> Vec<Prerequisite<'a>> {
        course
            .prerequisites()
            .iter()
            .map(|id| Prerequisite {
                id,
                title: self.title_for(id).filter(|title| !title.is_empty()),
            })
            .collect()
    }
}

/// A prerequisite identifier together with its title, when known.
///
/// Displays as `ID (Title)` when resolved and as the bare `ID` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prerequisite<'a> {
    /// The prerequisite's identifier as listed on the course.
    pub id: &'a CourseId,
    /// The prerequisite's title, if it is in the catalog.
    pub title: Option<&'a str>,
}

impl Prerequisite<'_> {
    /// Returns `true` if the prerequisite was found in the catalog.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.title.is_some()
    }
}

impl fmt::Display for Prerequisite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title {
            Some(title) => write!(f, "{} ({title})", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}
