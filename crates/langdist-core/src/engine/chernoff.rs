//! Chernoff coefficient (Hellinger path normalizer) and its derivatives.
//!
//! For two matrices `P`, `Q` and path parameter `a ∈ [0, 1]`:
//!
//! ```text
//! K(a)   = Σ P^(1-a) · Q^a
//! K'(a)  = Σ log2(Q/P) · P^(1-a) · Q^a
//! K''(a) = Σ log2(Q/P)² · P^(1-a) · Q^a
//! ```
//!
//! Sums run over cells where both `P` and `Q` are non-zero. A cell that is
//! zero in either operand contributes nothing to any of the three terms; this
//! keeps `0^x` and `log(0)` out of the arithmetic entirely.

use crate::error::{LangDistError, LangDistResult};
use crate::matrix::LangMatrix;

/// `K`, `K'` and `K''` evaluated at one path parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChernoffTerms {
    pub alpha: f64,
    pub normalizer: f64,
    pub first: f64,
    pub second: f64,
}

/// Compute all three terms in a single pass over the cells.
///
/// # Errors
///
/// - `ShapeMismatch` if the matrices differ in dimension
/// - `InvalidParameter` if `alpha` is outside `[0, 1]`
pub fn chernoff_terms(alpha: f64, p: &LangMatrix, q: &LangMatrix) -> LangDistResult<ChernoffTerms> {
    let cells = co_support(alpha, p, q)?;

    let mut terms = ChernoffTerms {
        alpha,
        normalizer: 0.0,
        first: 0.0,
        second: 0.0,
    };
    for (p_val, q_val) in cells {
        let weight = path_weight(alpha, p_val, q_val);
        let log_ratio = (q_val / p_val).log2();
        terms.normalizer += weight;
        terms.first += log_ratio * weight;
        terms.second += log_ratio * log_ratio * weight;
    }
    Ok(terms)
}

/// `K(a) = Σ P^(1-a) · Q^a` over co-nonzero cells.
pub fn chernoff_normalizer(alpha: f64, p: &LangMatrix, q: &LangMatrix) -> LangDistResult<f64> {
    Ok(co_support(alpha, p, q)?
        .map(|(p_val, q_val)| path_weight(alpha, p_val, q_val))
        .sum())
}

/// `K'(a) = Σ log2(Q/P) · P^(1-a) · Q^a` over co-nonzero cells.
pub fn chernoff_first_derivative(
    alpha: f64,
    p: &LangMatrix,
    q: &LangMatrix,
) -> LangDistResult<f64> {
    Ok(co_support(alpha, p, q)?
        .map(|(p_val, q_val)| (q_val / p_val).log2() * path_weight(alpha, p_val, q_val))
        .sum())
}

/// `K''(a) = Σ log2(Q/P)² · P^(1-a) · Q^a` over co-nonzero cells.
pub fn chernoff_second_derivative(
    alpha: f64,
    p: &LangMatrix,
    q: &LangMatrix,
) -> LangDistResult<f64> {
    Ok(co_support(alpha, p, q)?
        .map(|(p_val, q_val)| {
            let log_ratio = (q_val / p_val).log2();
            log_ratio * log_ratio * path_weight(alpha, p_val, q_val)
        })
        .sum())
}

#[inline]
fn path_weight(alpha: f64, p_val: f64, q_val: f64) -> f64 {
    p_val.powf(1.0 - alpha) * q_val.powf(alpha)
}

/// Validate operands and yield `(P, Q)` pairs of cells non-zero in both.
fn co_support<'a>(
    alpha: f64,
    p: &'a LangMatrix,
    q: &'a LangMatrix,
) -> LangDistResult<impl Iterator<Item = (f64, f64)> + 'a> {
    if p.dim() != q.dim() {
        return Err(LangDistError::ShapeMismatch {
            left: p.dim(),
            right: q.dim(),
        });
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(LangDistError::invalid_param(
            "alpha",
            alpha,
            "Path parameter must be in [0, 1]",
        ));
    }
    Ok(p.cells()
        .iter()
        .zip(q.cells())
        .map(|(&p_val, &q_val)| (p_val, q_val))
        .filter(|&(p_val, q_val)| p_val != 0.0 && q_val != 0.0))
}
