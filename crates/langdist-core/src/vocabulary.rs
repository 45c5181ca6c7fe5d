//! Global meaning vocabulary.
//!
//! Meanings are indexed in order of first appearance across the whole corpus.
//! Registration happens on a [`VocabularyBuilder`]; [`VocabularyBuilder::freeze`]
//! consumes it into an immutable [`Vocabulary`], and only a frozen vocabulary
//! can be used to align matrices. That call is the barrier between "ingest all
//! meanings" and "allocate any matrix".

use std::collections::HashMap;

use crate::ingest::RecordSet;

/// Mutable registration phase of the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    index: HashMap<String, usize>,
    meanings: Vec<String>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a meaning, returning its global index.
    ///
    /// Unseen meanings get the next sequential index; repeated calls with the
    /// same meaning return the index assigned the first time.
    pub fn register(&mut self, meaning: &str) -> usize {
        if let Some(&idx) = self.index.get(meaning) {
            return idx;
        }
        let idx = self.meanings.len();
        self.index.insert(meaning.to_owned(), idx);
        self.meanings.push(meaning.to_owned());
        idx
    }

    /// Register every meaning of a record set in its local order.
    pub fn register_records(&mut self, records: &RecordSet) {
        for record in records.records() {
            self.register(&record.meaning);
        }
    }

    /// Number of distinct meanings registered so far.
    pub fn size(&self) -> usize {
        self.meanings.len()
    }

    /// Finish registration.
    pub fn freeze(self) -> Vocabulary {
        Vocabulary {
            index: self.index,
            meanings: self.meanings,
        }
    }
}

/// Immutable meaning → global index mapping.
///
/// Its size is the dimension `N` of every language matrix.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    meanings: Vec<String>,
}

impl Vocabulary {
    /// Number of distinct meanings, i.e. the matrix dimension.
    pub fn size(&self) -> usize {
        self.meanings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }

    /// Global index of a meaning, if it was registered.
    pub fn index_of(&self, meaning: &str) -> Option<usize> {
        self.index.get(meaning).copied()
    }

    /// Meaning stored at a global index.
    pub fn meaning_at(&self, index: usize) -> Option<&str> {
        self.meanings.get(index).map(String::as_str)
    }

    /// Iterate `(meaning, index)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.meanings
            .iter()
            .enumerate()
            .map(|(idx, meaning)| (meaning.as_str(), idx))
    }
}
