//! Loading a catalog from delimited text
//!
//! A load has two failure channels. A source that cannot be opened or read is
//! a hard [`LoadError`], and the catalog is left empty. Problems with
//! individual lines are [`Defect`]s: they are collected into the
//! [`LoadReport`] and never stop the remaining lines from loading.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{Catalog, Config, CourseId},
    storage::parser::{LineParser, ParsedLine},
};

/// A non-fatal problem with one line of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// The line has fewer than two fields and was ignored.
    Format {
        /// 1-based line number.
        line: usize,
    },

    /// The line reuses an identifier seen earlier in the file. It replaced
    /// the earlier course.
    Duplicate {
        /// 1-based line number of the replacing line.
        line: usize,
        /// The duplicated identifier.
        id: CourseId,
    },
}

impl Defect {
    /// Returns the 1-based line number the defect was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Format { line } | Self::Duplicate { line, .. } => *line,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { line } => {
                write!(f, "line {line}: format error (need course number and title)")
            }
            Self::Duplicate { line, id } => write!(
                f,
                "line {line}: duplicate course '{id}' (overwriting previous entry)"
            ),
        }
    }
}

/// The outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The number of distinct courses in the catalog after loading.
    pub count: usize,
    /// Every defect found, in line order.
    pub defects: Vec<Defect>,
}

impl LoadReport {
    /// Returns `true` if the load found no defects.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// A hard failure that prevented a catalog from loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("could not open file '{}': {source}", path.display())]
    Open {
        /// Path of the catalog file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Reading failed part way through the source.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl Catalog {
    /// Replaces the contents of the catalog with the courses in a file.
    ///
    /// See [`Catalog::load_from_reader`] for how lines are handled.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Open`] if the file cannot be opened, or
    /// [`LoadError::Read`] if reading fails. The catalog is empty afterwards
    /// in both cases.
    #[instrument(level = "debug", skip(self, path, config), fields(path = %path.display()))]
    pub fn load(&mut self, path: &Path, config: &Config) -> Result<LoadReport, LoadError> {
        self.clear();

        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_from_reader(BufReader::new(file), config)
    }

    /// Replaces the contents of the catalog with the courses read from
    /// `reader`.
    ///
    /// The catalog is cleared first; nothing from a previous load survives.
    /// Blank and comment lines are skipped. Lines with fewer than two fields
    /// are reported as [`Defect::Format`]. A line whose identifier is already
    /// in the catalog replaces the earlier course and is reported as
    /// [`Defect::Duplicate`]. Bytes that are not valid UTF-8 are replaced
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the reader fails. The catalog is left
    /// empty.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        config: &Config,
    ) -> Result<LoadReport, LoadError> {
        self.clear();

        let mut parser = LineParser::new(config);
        let mut defects = Vec::new();
        let mut buf = Vec::new();
        let mut line = 0;

        loop {
            buf.clear();
            line += 1;
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(source) => {
                    self.clear();
                    return Err(LoadError::Read { line, source });
                }
            }

            let text = String::from_utf8_lossy(&buf);
            match parser.parse(&text) {
                ParsedLine::Skip => {
                    tracing::trace!(line, "skipping blank or comment line");
                }
                ParsedLine::TooFewFields => {
                    let defect = Defect::Format { line };
                    tracing::debug!("{defect}");
                    defects.push(defect);
                }
                ParsedLine::Course(course) => {
                    let id = course.id().clone();
                    if self.insert(course).is_some() {
                        let defect = Defect::Duplicate { line, id };
                        tracing::debug!("{defect}");
                        defects.push(defect);
                    }
                }
            }
        }

        tracing::debug!(
            count = self.len(),
            defects = defects.len(),
            "catalog loaded"
        );

        Ok(LoadReport {
            count: self.len(),
            defects,
        })
    }
}
