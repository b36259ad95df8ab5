//! Dispersion-based bandwidth heuristic.
//!
//! The default smoothing width is tied to sample density: the mean spacing
//! between consecutive abscissas. Estimators rescale it by a caller multiple.

/// Mean forward difference `mean(x[i] - x[i-1])` for `i = 1..n`.
///
/// `x` must be sorted ascending. This is not checked: unsorted input gives a
/// meaningless (possibly negative) value. With fewer than two samples there are
/// no differences and the result is NaN.
pub fn dispersion(x: &[f64]) -> f64 {
    let n = x.len().saturating_sub(1);
    let total: f64 = x.windows(2).map(|w| w[1] - w[0]).sum();
    total / n as f64
}
