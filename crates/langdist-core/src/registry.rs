//! Language registry: language identifier → (stable index, matrix).

use std::collections::HashMap;

use crate::error::{LangDistError, LangDistResult};
use crate::matrix::LangMatrix;

/// Width of the label column in language listings and annotated reports.
pub const LABEL_WIDTH: usize = 10;

/// One registered language.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    pub index: usize,
    pub name: String,
    pub matrix: LangMatrix,
}

impl LanguageEntry {
    /// Fixed-width label: underscores removed, padded or truncated to
    /// [`LABEL_WIDTH`] characters.
    pub fn label(&self) -> String {
        format_label(&self.name)
    }
}

/// Format a language name as a fixed-width label.
pub fn format_label(name: &str) -> String {
    let cleaned: String = name.chars().filter(|&c| c != '_').collect();
    format!("{:<width$.width$}", cleaned, width = LABEL_WIDTH)
}

/// Languages in registration order, all sharing one matrix dimension.
///
/// Indices are assigned sequentially and never change. The registry is
/// filled once and then only read by the pairwise computation.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    dim: usize,
    entries: Vec<LanguageEntry>,
    by_name: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Empty registry accepting matrices of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a language and return its index.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the matrix dimension differs from the registry's
    /// - `DuplicateLanguage` if the name is already registered
    pub fn insert(&mut self, name: impl Into<String>, matrix: LangMatrix) -> LangDistResult<usize> {
        let name = name.into();
        if matrix.dim() != self.dim {
            return Err(LangDistError::ShapeMismatch {
                left: self.dim,
                right: matrix.dim(),
            });
        }
        if self.by_name.contains_key(&name) {
            return Err(LangDistError::DuplicateLanguage(name));
        }

        let index = self.entries.len();
        self.by_name.insert(name.clone(), index);
        self.entries.push(LanguageEntry {
            index,
            name,
            matrix,
        });
        Ok(index)
    }

    /// Matrix dimension shared by every entry.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        self.index_of(name).map(|idx| &self.entries[idx])
    }

    pub fn entry(&self, index: usize) -> Option<&LanguageEntry> {
        self.entries.get(index)
    }

    /// Entries in index order.
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Labels in index order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(LanguageEntry::label).collect()
    }
}
