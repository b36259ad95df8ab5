//! Nadaraya-Watson smoothing of a scalar function of one variable.
//!
//! Given samples `(x_j, y_j)` and a bandwidth `h`, the fitted value at a query
//! point `q` is the kernel-weighted mean
//!
//! ```text
//! f(q) = Σ_j K(x_j - q) y_j / Σ_j K(x_j - q)
//! ```
//!
//! Query points are independent, so `solve` evaluates them in parallel on the
//! caller's `Evaluator`.
//!
//! Numerical note: when a query sits so far from every sample that all weights
//! underflow, the ratio is `0/0` and the result is NaN. There is no meaningful
//! estimate there, so the NaN is returned as is.

use rayon::prelude::*;

use crate::error::KernelFitError;
use crate::fit::evaluator::Evaluator;
use crate::fit::validate::{check_bandwidth, check_queries, check_samples, rescaled_bandwidth};
use crate::math::{dispersion, gaussian};

/// Kernel regression estimator for `y = f(x)`.
///
/// Samples are owned and never modified. The bandwidth can be rescaled with
/// [`KernelFit1D::set_bandwidth`]; that takes `&mut self`, so it cannot overlap
/// a running `solve`.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelFit1D {
    x: Vec<f64>,
    y: Vec<f64>,
    bandwidth: f64,
}

impl KernelFit1D {
    /// Build an estimator with an explicit bandwidth.
    pub fn new(x: Vec<f64>, y: Vec<f64>, bandwidth: f64) -> Result<Self, KernelFitError> {
        const OP: &str = "KernelFit1D::new";
        check_samples(OP, &[("x", x.as_slice()), ("y", y.as_slice())])?;
        check_bandwidth(OP, bandwidth)?;
        Ok(Self { x, y, bandwidth })
    }

    /// Build an estimator whose bandwidth is the dispersion of `x`.
    ///
    /// `x` must be sorted ascending and hold at least two distinct values,
    /// otherwise the default bandwidth is not positive and this fails.
    pub fn with_dispersion_bandwidth(x: Vec<f64>, y: Vec<f64>) -> Result<Self, KernelFitError> {
        const OP: &str = "KernelFit1D::with_dispersion_bandwidth";
        check_samples(OP, &[("x", x.as_slice()), ("y", y.as_slice())])?;
        let bandwidth = rescaled_bandwidth(OP, 1.0, dispersion(&x))?;
        Ok(Self { x, y, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Mean spacing of the sample abscissas. See [`crate::math::dispersion`].
    pub fn dispersion(&self) -> f64 {
        dispersion(&self.x)
    }

    /// Set the bandwidth to `multiple * self.dispersion()`.
    ///
    /// On error the current bandwidth is kept.
    pub fn set_bandwidth(&mut self, multiple: f64) -> Result<(), KernelFitError> {
        self.bandwidth = rescaled_bandwidth("KernelFit1D::set_bandwidth", multiple, self.dispersion())?;
        Ok(())
    }

    /// Fitted profile at every query point, in query order.
    ///
    /// Entries may be NaN where no sample carries weight.
    pub fn solve(&self, queries: &[f64], evaluator: &Evaluator) -> Result<Vec<f64>, KernelFitError> {
        check_queries("KernelFit1D::solve", &[("queries", queries)])?;
        log::debug!(
            "KernelFit1D::solve: {} samples x {} queries, bandwidth={}, threads={}",
            self.x.len(),
            queries.len(),
            self.bandwidth,
            evaluator.threads()
        );

        Ok(self.map_queries(queries, evaluator, |q| self.estimate_at(q)))
    }

    /// Kernel-weighted standard deviation of `y` about the fitted profile.
    ///
    /// `s(q) = sqrt(Σ K (y_j - f(q))² / Σ K)` with the same weights as `solve`.
    pub fn std_dev(&self, queries: &[f64], evaluator: &Evaluator) -> Result<Vec<f64>, KernelFitError> {
        check_queries("KernelFit1D::std_dev", &[("queries", queries)])?;
        log::debug!(
            "KernelFit1D::std_dev: {} samples x {} queries, bandwidth={}",
            self.x.len(),
            queries.len(),
            self.bandwidth
        );

        Ok(self.map_queries(queries, evaluator, |q| self.std_dev_at(q)))
    }

    fn map_queries<F>(&self, queries: &[f64], evaluator: &Evaluator, point: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let mut out = vec![0.0; queries.len()];
        evaluator.install(|| {
            out.par_iter_mut()
                .zip(queries.par_iter())
                .for_each(|(slot, &q)| *slot = point(q));
        });
        out
    }

    fn estimate_at(&self, q: f64) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;
        for (&xj, &yj) in self.x.iter().zip(&self.y) {
            let k = gaussian(xj - q, self.bandwidth);
            num += k * yj;
            den += k;
        }
        num / den
    }

    fn std_dev_at(&self, q: f64) -> f64 {
        let f = self.estimate_at(q);
        let mut num = 0.0;
        let mut den = 0.0;
        for (&xj, &yj) in self.x.iter().zip(&self.y) {
            let k = gaussian(xj - q, self.bandwidth);
            let r = yj - f;
            num += k * r * r;
            den += k;
        }
        (num / den).sqrt()
    }
}
