//! Pairwise distance computation over every ordered pair of languages.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::{measure, PairDistances};
use crate::error::LangDistError;
use crate::registry::LanguageRegistry;

/// Which distance a value or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Kl,
    Rao,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Kl => write!(f, "KL"),
            Metric::Rao => write!(f, "Rao"),
        }
    }
}

/// `L × L` distance matrix indexed by registry indices.
///
/// A cell is `None` when its pair failed; the reason is in
/// [`PairwiseDistances::failures`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of languages per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from language `from` to language `to`, `None` if it failed.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        assert!(from < self.size && to < self.size, "cell ({from}, {to}) out of bounds");
        self.cells[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, value: Option<f64>) {
        self.cells[from * self.size + to] = value;
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Whether every pair produced a value.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// One pair that could not be measured.
#[derive(Debug)]
pub struct PairFailure {
    pub metric: Metric,
    pub from: usize,
    pub to: usize,
    pub error: LangDistError,
}

impl fmt::Display for PairFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}][{}]: {}",
            self.metric, self.from, self.to, self.error
        )
    }
}

/// Result of a pairwise run.
#[derive(Debug)]
pub struct PairwiseDistances {
    pub kl: DistanceMatrix,
    pub rao: DistanceMatrix,
    pub failures: Vec<PairFailure>,
}

impl PairwiseDistances {
    pub fn matrix(&self, metric: Metric) -> &DistanceMatrix {
        match metric {
            Metric::Kl => &self.kl,
            Metric::Rao => &self.rao,
        }
    }
}

/// Measure every ordered pair `(A, B)` of the registry, `A == B` included.
///
/// Each pair is independent. With `parallel` set, rows are distributed
/// over the rayon thread pool; results are identical either way. A failed
/// pair is logged, left empty in its matrix, and recorded in `failures`.
pub fn compute_pairwise(registry: &LanguageRegistry, parallel: bool) -> PairwiseDistances {
    let entries = registry.entries();
    let size = entries.len();

    let row = |from: usize| -> Vec<PairDistances> {
        entries
            .iter()
            .map(|to| measure(&entries[from].matrix, &to.matrix))
            .collect()
    };

    let rows: Vec<Vec<PairDistances>> = if parallel {
        (0..size).into_par_iter().map(row).collect()
    } else {
        (0..size).map(row).collect()
    };

    let mut result = PairwiseDistances {
        kl: DistanceMatrix::new(size),
        rao: DistanceMatrix::new(size),
        failures: Vec::new(),
    };

    for (from, row) in rows.into_iter().enumerate() {
        for (to, pair) in row.into_iter().enumerate() {
            for (metric, outcome) in [(Metric::Kl, pair.kl), (Metric::Rao, pair.rao)] {
                let value = match outcome {
                    Ok(value) => Some(value),
                    Err(error) => {
                        warn!(
                            metric = %metric,
                            from = %entries[from].name,
                            to = %entries[to].name,
                            error = %error,
                            "Pair distance failed"
                        );
                        result.failures.push(PairFailure {
                            metric,
                            from,
                            to,
                            error,
                        });
                        None
                    }
                };
                match metric {
                    Metric::Kl => result.kl.set(from, to, value),
                    Metric::Rao => result.rao.set(from, to, value),
                }
            }
        }
    }

    info!(
        languages = size,
        pairs = size * size,
        failures = result.failures.len(),
        parallel,
        "Pairwise distances computed"
    );
    result
}
