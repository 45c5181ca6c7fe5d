//! KL divergence, Fisher information and Rao distance along the Chernoff path.

use super::chernoff::{chernoff_first_derivative, chernoff_terms, ChernoffTerms};
use crate::error::{LangDistError, LangDistResult};
use crate::matrix::LangMatrix;

/// Path parameter at which the Rao distance samples Fisher information.
pub const RAO_MIDPOINT: f64 = 0.5;

/// Symmetrized KL divergence from the Chernoff path endpoints.
///
/// ```text
/// KL(P, Q) = (K'(1) - K'(0)) / 2
/// ```
///
/// This is the average of the two directed divergences over the cells both
/// matrices cover (Basseville 1989), not the one-directional KL.
///
/// # Errors
///
/// - `ShapeMismatch` if the matrices differ in dimension
/// - `NumericOverflow` if the result is not finite
pub fn kl_divergence(p: &LangMatrix, q: &LangMatrix) -> LangDistResult<f64> {
    let at_q = chernoff_first_derivative(1.0, p, q)?;
    let at_p = chernoff_first_derivative(0.0, p, q)?;
    let kl = (at_q - at_p) / 2.0;

    if !kl.is_finite() {
        return Err(LangDistError::NumericOverflow {
            operation: "kl_divergence".to_string(),
            details: format!("K'(1)={}, K'(0)={}", at_q, at_p),
        });
    }
    Ok(kl)
}

/// Fisher information of the Chernoff path at `alpha`.
///
/// ```text
/// I(a) = (K(a)·K''(a) - K'(a)²) / K(a)²
/// ```
///
/// # Errors
///
/// - `ShapeMismatch` / `InvalidParameter` from the path terms
/// - `DegenerateFisherInformation` if `K(a)` is zero (no cell is covered by
///   both matrices) or the result is not finite
pub fn fisher_information(alpha: f64, p: &LangMatrix, q: &LangMatrix) -> LangDistResult<f64> {
    fisher_from_terms(&chernoff_terms(alpha, p, q)?)
}

/// Approximate Rao geodesic distance.
///
/// Uses the square root of the Fisher information at the path midpoint
/// `a = 0.5`. This is an approximation of the geodesic length, not the
/// integral along the path.
///
/// # Errors
///
/// `DegenerateFisherInformation` when the midpoint information is negative
/// (rounding on near-identical or near-empty matrices) or undefined. The
/// value is never clamped to zero.
pub fn rao_distance(p: &LangMatrix, q: &LangMatrix) -> LangDistResult<f64> {
    let terms = chernoff_terms(RAO_MIDPOINT, p, q)?;
    let fisher = fisher_from_terms(&terms)?;
    if fisher < 0.0 {
        return Err(LangDistError::degenerate(
            RAO_MIDPOINT,
            terms.normalizer,
            fisher,
            "Fisher information is negative",
        ));
    }
    Ok(fisher.sqrt())
}

fn fisher_from_terms(terms: &ChernoffTerms) -> LangDistResult<f64> {
    let k = terms.normalizer;
    if k == 0.0 {
        return Err(LangDistError::degenerate(
            terms.alpha,
            k,
            f64::NAN,
            "Normalizer is zero: the matrices share no non-zero cell",
        ));
    }

    let fisher = (k * terms.second - terms.first * terms.first) / (k * k);
    if !fisher.is_finite() {
        return Err(LangDistError::degenerate(
            terms.alpha,
            k,
            fisher,
            "Fisher information is not finite",
        ));
    }
    Ok(fisher)
}
