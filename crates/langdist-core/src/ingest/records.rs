//! Per-language record sets.

use std::path::Path;

use crate::error::{LangDistError, LangDistResult};

/// One `meaning<TAB>values` line.
///
/// `values[k]` relates this meaning to the meaning at local position `k` of
/// the same language.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub meaning: String,
    pub values: Vec<f64>,
}

impl Record {
    pub fn new(meaning: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            meaning: meaning.into(),
            values,
        }
    }
}

/// Parse a single record line.
///
/// Returns `Ok(None)` for blank lines. `source_name` and `line_number` are
/// only used to build the error.
///
/// # Errors
///
/// Returns `LangDistError::MalformedRecord` when the tab separator is missing,
/// the meaning is empty, or a value is not a finite non-negative number.
pub fn parse_record_line(
    line: &str,
    source_name: &str,
    line_number: usize,
) -> LangDistResult<Option<Record>> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed =
        |reason: String| LangDistError::malformed(source_name, line_number, line, reason);

    let (meaning, rest) = line
        .split_once('\t')
        .ok_or_else(|| malformed("missing tab between meaning and values".to_string()))?;

    if meaning.trim().is_empty() {
        return Err(malformed("empty meaning".to_string()));
    }

    // split_whitespace drops the empty token left by a trailing separator
    let values = rest
        .split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            Ok(v) => Err(malformed(format!(
                "value {} is not a finite non-negative number",
                v
            ))),
            Err(_) => Err(malformed(format!("value {:?} is not a number", token))),
        })
        .collect::<LangDistResult<Vec<f64>>>()?;

    Ok(Some(Record::new(meaning, values)))
}

/// Ordered records of one language.
///
/// Records keep their file order, duplicates included; local indices are
/// assigned when the set is aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    language: String,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            records: Vec::new(),
        }
    }

    /// Build a record set from already parsed records.
    pub fn from_records(language: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            language: language.into(),
            records,
        }
    }

    /// Parse a whole per-language file body.
    ///
    /// Lines starting with `marker` are treated as headers and skipped.
    pub fn parse(language: impl Into<String>, text: &str, marker: &str) -> LangDistResult<Self> {
        let mut set = Self::new(language);
        for (idx, line) in text.lines().enumerate() {
            if !marker.is_empty() && line.starts_with(marker) {
                continue;
            }
            if let Some(record) = parse_record_line(line, &set.language, idx + 1)? {
                set.records.push(record);
            }
        }
        Ok(set)
    }

    /// Read and parse a per-language file.
    pub fn read(language: impl Into<String>, path: &Path, marker: &str) -> LangDistResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LangDistError::io(path, e))?;
        Self::parse(language, &text, marker)
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
