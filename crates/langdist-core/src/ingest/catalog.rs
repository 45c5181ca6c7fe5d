//! The global meaning/language catalog.

use std::path::Path;

use tracing::debug;

use super::records::{parse_record_line, Record, RecordSet};
use crate::error::{LangDistError, LangDistResult};
use crate::vocabulary::VocabularyBuilder;

/// Parsed catalog file.
///
/// A line starting with the marker opens a language entry named by the rest
/// of the line; the records that follow belong to it. Records before the
/// first entry contribute to the vocabulary only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    preamble: Vec<Record>,
    languages: Vec<RecordSet>,
}

impl Catalog {
    /// Parse a catalog body.
    ///
    /// # Errors
    ///
    /// `MalformedRecord` for an unparseable record line or a marker line with
    /// no language name.
    pub fn parse(text: &str, marker: &str, source_name: &str) -> LangDistResult<Self> {
        let mut catalog = Catalog::default();

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;

            if let Some(name) = line.strip_prefix(marker).filter(|_| !marker.is_empty()) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(LangDistError::malformed(
                        source_name,
                        line_number,
                        line,
                        "language entry without a name",
                    ));
                }
                catalog.languages.push(RecordSet::new(name));
                continue;
            }

            if let Some(record) = parse_record_line(line, source_name, line_number)? {
                match catalog.languages.last_mut() {
                    Some(set) => set.push(record),
                    None => catalog.preamble.push(record),
                }
            }
        }

        debug!(
            source = source_name,
            languages = catalog.languages.len(),
            preamble_records = catalog.preamble.len(),
            "Parsed catalog"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn read(path: &Path, marker: &str) -> LangDistResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LangDistError::io(path, e))?;
        Self::parse(&text, marker, &path.display().to_string())
    }

    /// Register every meaning in file order.
    pub fn register_into(&self, vocab: &mut VocabularyBuilder) {
        for record in &self.preamble {
            vocab.register(&record.meaning);
        }
        for set in &self.languages {
            vocab.register_records(set);
        }
    }

    /// Language entries in file order.
    pub fn languages(&self) -> &[RecordSet] {
        &self.languages
    }

    /// Consume the catalog, keeping only the language entries.
    pub fn into_languages(self) -> Vec<RecordSet> {
        self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str =
        "# English\nhand\t0.7 0.3 \nfoot\t0.2 0.8 \n\n# German\nhand\t0.6 0.4 \neye\t0.5 0.5 \n";

    #[test]
    fn test_catalog_sections() {
        let catalog = Catalog::parse(CATALOG, "#", "catalog").unwrap();
        let langs = catalog.languages();
        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].language(), "English");
        assert_eq!(langs[0].len(), 2);
        assert_eq!(langs[1].language(), "German");
        assert_eq!(langs[1].records()[1].meaning, "eye");
    }

    #[test]
    fn test_catalog_vocabulary_in_file_order() {
        let catalog = Catalog::parse(CATALOG, "#", "catalog").unwrap();
        let mut builder = VocabularyBuilder::new();
        catalog.register_into(&mut builder);
        let vocab = builder.freeze();

        assert_eq!(vocab.size(), 3);
        assert_eq!(vocab.index_of("hand"), Some(0));
        assert_eq!(vocab.index_of("foot"), Some(1));
        assert_eq!(vocab.index_of("eye"), Some(2));
    }

    #[test]
    fn test_preamble_records_only_feed_vocabulary() {
        let text = "stone\t1.0 \n# English\nhand\t1.0 \n";
        let catalog = Catalog::parse(text, "#", "catalog").unwrap();
        assert_eq!(catalog.languages().len(), 1);

        let mut builder = VocabularyBuilder::new();
        catalog.register_into(&mut builder);
        assert_eq!(builder.size(), 2);
    }

    #[test]
    fn test_unnamed_language_entry() {
        let err = Catalog::parse("#   \nhand\t1.0\n", "#", "catalog").unwrap_err();
        assert!(matches!(err, LangDistError::MalformedRecord { line_number: 1, .. }));
    }

    #[test]
    fn test_custom_marker() {
        let text = "@@ Dutch\nhand\t1.0 \n";
        let catalog = Catalog::parse(text, "@@", "catalog").unwrap();
        assert_eq!(catalog.languages()[0].language(), "Dutch");
    }
}
