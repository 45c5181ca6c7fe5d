//! Matrix alignment: local record order → global vocabulary coordinates.
//!
//! A language only defines some meanings, in its own order. Each value vector
//! is indexed by that *local* order: `values[k]` relates the record's meaning
//! to the meaning first seen at local position `k`. Alignment translates both
//! coordinates into global vocabulary indices and writes the value into an
//! `N × N` matrix, `N` being the frozen vocabulary size.
//!
//! Positions past the last locally defined meaning have no mapping. They are
//! skipped and counted as gaps; the cell stays `0.0`.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{LangDistError, LangDistResult};
use crate::ingest::RecordSet;
use crate::matrix::LangMatrix;
use crate::vocabulary::Vocabulary;

/// Counters gathered while aligning one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    /// Distinct meanings the language defines.
    pub local_meanings: usize,
    /// Cells written into the global matrix.
    pub populated_cells: usize,
    /// Vector positions without a local meaning.
    pub gap_positions: usize,
    /// Records ignored because their meaning was already defined.
    pub duplicate_records: usize,
}

/// Aligned matrix of one language.
#[derive(Debug, Clone)]
pub struct AlignedMatrix {
    pub language: String,
    pub matrix: LangMatrix,
    pub stats: AlignmentStats,
}

/// Builds global-indexed matrices against a frozen vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct MatrixAligner<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> MatrixAligner<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Dimension of every matrix this aligner produces.
    pub fn dim(&self) -> usize {
        self.vocab.size()
    }

    /// Align one language's records.
    ///
    /// # Errors
    ///
    /// `UnknownMeaning` if the record set was not registered into the
    /// vocabulary before it was frozen.
    pub fn align(&self, records: &RecordSet) -> LangDistResult<AlignedMatrix> {
        let mut stats = AlignmentStats::default();

        // local index -> (global index, record position); first record wins
        let mut seen: HashSet<&str> = HashSet::new();
        let mut local: Vec<(usize, usize)> = Vec::new();

        for (pos, record) in records.records().iter().enumerate() {
            if seen.contains(record.meaning.as_str()) {
                stats.duplicate_records += 1;
                debug!(
                    language = records.language(),
                    meaning = %record.meaning,
                    "Ignoring repeated meaning"
                );
                continue;
            }
            let global =
                self.vocab
                    .index_of(&record.meaning)
                    .ok_or_else(|| LangDistError::UnknownMeaning {
                        language: records.language().to_string(),
                        meaning: record.meaning.clone(),
                    })?;
            seen.insert(record.meaning.as_str());
            local.push((global, pos));
        }
        stats.local_meanings = local.len();

        let mut matrix = LangMatrix::zeros(self.dim());
        for &(row, pos) in &local {
            let values = &records.records()[pos].values;
            for (k, &value) in values.iter().enumerate() {
                match local.get(k) {
                    Some(&(col, _)) => {
                        matrix.set(row, col, value);
                        stats.populated_cells += 1;
                    }
                    None => stats.gap_positions += 1,
                }
            }
        }

        debug!(
            language = records.language(),
            local_meanings = stats.local_meanings,
            populated = stats.populated_cells,
            gaps = stats.gap_positions,
            duplicates = stats.duplicate_records,
            "Aligned language matrix"
        );

        Ok(AlignedMatrix {
            language: records.language().to_string(),
            matrix,
            stats,
        })
    }
}
