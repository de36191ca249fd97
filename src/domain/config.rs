use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for reading course catalogs.
///
/// This struct holds settings that control how catalog files are split into
/// fields and which lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The character separating fields on a line.
    ///
    /// Fields cannot contain the delimiter; there is no quoting or escaping.
    delimiter: char,

    /// Lines starting with any of these prefixes (after trimming) are
    /// ignored.
    comment_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            comment_prefixes: default_comment_prefixes(),
        }
    }
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the comment prefixes.
    #[must_use]
    pub fn comment_prefixes(&self) -> &[String] {
        &self.comment_prefixes
    }

    /// Checks whether a trimmed line is a comment.
    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

const fn default_delimiter() -> char {
    ','
}

fn default_comment_prefixes() -> Vec<String> {
    vec!["//".to_string(), "#".to_string()]
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default = "default_comment_prefixes")]
        comment_prefixes: Vec<String>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                comment_prefixes,
            } => Self {
                delimiter,
                comment_prefixes,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            comment_prefixes: config.comment_prefixes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndelimiter = \";\"\ncomment_prefixes = [\"--\"]\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.delimiter(), ';');
        assert_eq!(config.comment_prefixes(), &["--".to_string()]);
        assert!(config.is_comment("-- note"));
        assert!(!config.is_comment("# note"));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndelimiter = \"too long\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn default_comments_are_slashes_and_hash() {
        let config = Config::default();

        assert_eq!(config.delimiter(), ',');
        assert!(config.is_comment("// header"));
        assert!(config.is_comment("# header"));
        assert!(!config.is_comment("CSCI101,Intro"));
    }
}
