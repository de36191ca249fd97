use std::{borrow::Borrow, convert::Infallible, fmt, ops::Deref, str::FromStr};

use serde::Serialize;

/// A canonical course identifier (e.g. `CSCI101`).
///
/// Identifiers are case-insensitive from the outside. Every constructor trims
/// surrounding whitespace and upper-cases the remainder, so two identifiers
/// compare equal exactly when their canonical forms do.
///
/// Ordering is plain ordinal string ordering: `CSCI10` sorts before `CSCI2`.
///
/// ```
/// use planner::CourseId;
///
/// let id = CourseId::new("  csci101 ");
/// assert_eq!(id.as_str(), "CSCI101");
/// assert_eq!(id, CourseId::new("CSCI101"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a canonical identifier from raw text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl FromStr for CourseId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the catalog look up stored identifiers by a bare `&str` without
// canonicalizing it first.
impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single course in the catalog.
///
/// The title is free text and is kept exactly as written. Prerequisites are
/// identifiers of other courses, in the order they were listed. They are not
/// required to exist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    prerequisites: Vec<CourseId>,
}

impl Course {
    /// Creates a new course.
    #[must_use]
    pub const fn new(id: CourseId, title: String, prerequisites: Vec<CourseId>) -> Self {
        Self {
            id,
            title,
            prerequisites,
        }
    }

    /// Returns the course identifier.
    #[must_use]
    pub const fn id(&self) -> &CourseId {
        &self.id
    }

    /// Returns the course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prerequisite identifiers in listed order.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_trimmed_and_uppercased() {
        assert_eq!(CourseId::new(" math201\t").as_str(), "MATH201");
        assert_eq!(CourseId::from("csci101"), CourseId::from("CSCI101"));
    }

    #[test]
    fn id_ordering_is_ordinal() {
        let mut ids = vec![
            CourseId::new("CSCI2"),
            CourseId::new("CSCI10"),
            CourseId::new("CSCI1"),
        ];
        ids.sort();

        let ids: Vec<_> = ids.iter().map(CourseId::as_str).collect();
        assert_eq!(ids, ["CSCI1", "CSCI10", "CSCI2"]);
    }

    #[test]
    fn title_is_not_canonicalized() {
        let course = Course::new(
            CourseId::new("csci101"),
            "Intro to Programming in C++".to_string(),
            vec![CourseId::new("csci100")],
        );

        assert_eq!(course.id().as_str(), "CSCI101");
        assert_eq!(course.title(), "Intro to Programming in C++");
        assert_eq!(course.prerequisites(), &[CourseId::new("CSCI100")]);
        assert_eq!(course.to_string(), "CSCI101, Intro to Programming in C++");
    }

    #[test]
    fn serializes_as_plain_strings() {
        let course = Course::new(
            CourseId::new("CSCI200"),
            "Data Structures".to_string(),
            vec![CourseId::new("CSCI101")],
        );

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "CSCI200",
                "title": "Data Structures",
                "prerequisites": ["CSCI101"],
            })
        );
    }
}
