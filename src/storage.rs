/// Loading a [`crate::Catalog`] from a file or reader.
pub mod loader;
/// Parsing single lines of delimited course data.
pub mod parser;

pub use loader::{Defect, LoadError, LoadReport};
pub use parser::{LineParser, ParsedLine};
