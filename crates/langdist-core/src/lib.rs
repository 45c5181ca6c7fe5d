//! Information-geometric distances between languages.
//!
//! Each language is a square matrix of non-negative values indexed by a
//! shared meaning vocabulary. Two languages are compared through the
//! Chernoff path between their matrices, giving a KL divergence and a Rao
//! distance for every ordered pair.
//!
//! # Modules
//!
//! - [`ingest`]: Record files and the language catalog
//! - [`vocabulary`]: Global meaning index with an explicit freeze barrier
//! - [`alignment`]: Local record order → global matrix coordinates
//! - [`matrix`]: Dense `N × N` language matrices
//! - [`registry`]: Language identifier → stable index and matrix
//! - [`engine`]: Chernoff normalizer, KL divergence, Fisher information, Rao distance
//! - [`pairwise`]: All ordered pairs over the registry
//! - [`report`]: Text renderings of labels and distance matrices
//! - [`pipeline`]: The end-to-end run
//! - [`config`]: Layered run configuration
//! - [`error`]: Error types and result aliases
//!
//! # Example
//!
//! ```
//! use langdist_core::{compute_pairwise, LanguageRegistry, LangMatrix};
//!
//! let mut registry = LanguageRegistry::new(2);
//! registry
//!     .insert("a", LangMatrix::from_rows(vec![vec![0.4, 0.1], vec![0.1, 0.4]]).unwrap())
//!     .unwrap();
//! registry
//!     .insert("b", LangMatrix::from_rows(vec![vec![0.1, 0.4], vec![0.4, 0.1]]).unwrap())
//!     .unwrap();
//!
//! let distances = compute_pairwise(&registry, false);
//! assert_eq!(distances.kl.get(0, 0), Some(0.0));
//! assert!(distances.rao.get(0, 1).unwrap() > 0.0);
//! ```

pub mod alignment;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod matrix;
pub mod pairwise;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod vocabulary;

pub use alignment::{AlignedMatrix, AlignmentStats, MatrixAligner};
pub use config::LangDistConfig;
pub use engine::{fisher_information, kl_divergence, measure, rao_distance, PairDistances};
pub use error::{LangDistError, LangDistResult};
pub use ingest::{Catalog, Record, RecordSet};
pub use matrix::LangMatrix;
pub use pairwise::{compute_pairwise, DistanceMatrix, Metric, PairFailure, PairwiseDistances};
pub use pipeline::{Corpus, RunOutput, RunSummary};
pub use registry::{LanguageEntry, LanguageRegistry};
pub use vocabulary::{Vocabulary, VocabularyBuilder};
