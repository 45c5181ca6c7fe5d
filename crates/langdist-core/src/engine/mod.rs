//! Distance engine.
//!
//! Stateless functions over two same-shaped probability matrices. Every cell is
//! an independent probability mass term, and cells that are zero in either
//! operand are skipped by all of them.
//!
//! # Mathematical Background
//!
//! The Chernoff coefficient `K(a) = Σ P^(1-a) · Q^a` interpolates between `P`
//! (`a = 0`) and `Q` (`a = 1`). From it and its first two derivatives in `a`:
//!
//! ```text
//! KL(P, Q)  = (K'(1) - K'(0)) / 2
//! I(a)      = (K(a)·K''(a) - K'(a)²) / K(a)²
//! Rao(P, Q) ≈ sqrt(I(0.5))
//! ```
//!
//! Logarithms are base 2.
//!
//! # Example
//!
//! ```
//! use langdist_core::engine::{kl_divergence, rao_distance};
//! use langdist_core::LangMatrix;
//!
//! let p = LangMatrix::from_rows(vec![vec![0.9, 0.1], vec![0.1, 0.9]]).unwrap();
//! let q = LangMatrix::from_rows(vec![vec![0.1, 0.9], vec![0.9, 0.1]]).unwrap();
//!
//! assert!(kl_divergence(&p, &q).unwrap() > 0.0);
//! assert_eq!(rao_distance(&p, &p).unwrap(), 0.0);
//! ```

mod chernoff;
mod distances;

pub use chernoff::{
    chernoff_first_derivative, chernoff_normalizer, chernoff_second_derivative, chernoff_terms,
    ChernoffTerms,
};
pub use distances::{fisher_information, kl_divergence, rao_distance, RAO_MIDPOINT};

use crate::error::LangDistResult;
use crate::matrix::LangMatrix;

/// Both distances for one ordered pair.
///
/// The results are independent: a degenerate Rao value leaves a valid KL
/// value intact.
#[derive(Debug)]
pub struct PairDistances {
    pub kl: LangDistResult<f64>,
    pub rao: LangDistResult<f64>,
}

/// Measure KL divergence and Rao distance from `p` to `q`.
pub fn measure(p: &LangMatrix, q: &LangMatrix) -> PairDistances {
    PairDistances {
        kl: kl_divergence(p, q),
        rao: rao_distance(p, q),
    }
}
