//! Reporting utilities: fit summaries and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the estimator code stays free of presentation concerns
//! - output changes are localized

pub mod format;

pub use format::*;

/// Diagnostics for one fitted output (profile or surface).
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    pub n_samples: usize,
    pub n_queries: usize,
    pub bandwidth: f64,
    pub dispersion: f64,
    pub threads: usize,
    /// Number of NaN cells (query points with no weighted sample).
    pub nan_count: usize,
    /// Range of the finite fitted values, if any.
    pub fitted_range: Option<(f64, f64)>,
}

impl FitSummary {
    pub fn new(
        n_samples: usize,
        bandwidth: f64,
        dispersion: f64,
        threads: usize,
        fitted: &[f64],
    ) -> Self {
        let nan_count = fitted.iter().filter(|v| v.is_nan()).count();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in fitted.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        let fitted_range = (min <= max).then_some((min, max));

        Self {
            n_samples,
            n_queries: fitted.len(),
            bandwidth,
            dispersion,
            threads,
            nan_count,
            fitted_range,
        }
    }
}
