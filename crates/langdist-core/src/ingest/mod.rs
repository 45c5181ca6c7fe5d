//! Parsing of the boundary text formats.
//!
//! - Per-language record files: `meaning<TAB>v v v ...` lines, one language
//!   per file. See [`RecordSet`].
//! - The global catalog: language header lines (starting with a marker, `#` by
//!   default) followed by that language's records. See [`Catalog`].
//!
//! Values are whitespace separated; a trailing separator before the newline
//! yields an empty token which is dropped, never read as a value. Any other
//! unparseable line aborts the language with
//! [`LangDistError::MalformedRecord`](crate::error::LangDistError::MalformedRecord).

mod catalog;
mod records;

pub use catalog::Catalog;
pub use records::{parse_record_line, Record, RecordSet};

/// Default marker that opens a language entry in the catalog.
pub const DEFAULT_LANGUAGE_MARKER: &str = "#";
