//! Nadaraya-Watson smoothing of a scalar field over the plane.
//!
//! Samples are triples `(x_k, y_k, z_k)`. The fit is evaluated on the full
//! Cartesian product of the x- and y-query sequences:
//!
//! ```text
//! f(qx, qy) = Σ_k K(r_k) z_k / Σ_k K(r_k),   r_k = |(x_k, y_k) - (qx, qy)|
//! ```
//!
//! The result is a `DMatrix` with one row per x-query and one column per
//! y-query. Cells with no weighted sample are NaN, as in the 1-D fit.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::error::KernelFitError;
use crate::fit::evaluator::Evaluator;
use crate::fit::validate::{check_bandwidth, check_queries, check_samples, rescaled_bandwidth};
use crate::math::{dispersion, gaussian};

/// Kernel regression estimator for `z = f(x, y)` with one isotropic bandwidth.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelFit2D {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    bandwidth: f64,
}

impl KernelFit2D {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, bandwidth: f64) -> Result<Self, KernelFitError> {
        const OP: &str = "KernelFit2D::new";
        check_samples(OP, &[("x", x.as_slice()), ("y", y.as_slice()), ("z", z.as_slice())])?;
        check_bandwidth(OP, bandwidth)?;
        Ok(Self { x, y, z, bandwidth })
    }

    /// Bandwidth defaults to the dispersion of `x` (which must be sorted).
    pub fn with_dispersion_bandwidth(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, KernelFitError> {
        const OP: &str = "KernelFit2D::with_dispersion_bandwidth";
        check_samples(OP, &[("x", x.as_slice()), ("y", y.as_slice()), ("z", z.as_slice())])?;
        let bandwidth = rescaled_bandwidth(OP, 1.0, dispersion(&x))?;
        Ok(Self { x, y, z, bandwidth })
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

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Mean spacing of the `x` abscissas only; `y` does not take part.
    pub fn dispersion(&self) -> f64 {
        dispersion(&self.x)
    }

    /// Set the bandwidth to `multiple * self.dispersion()`; unchanged on error.
    pub fn set_bandwidth(&mut self, multiple: f64) -> Result<(), KernelFitError> {
        self.bandwidth = rescaled_bandwidth("KernelFit2D::set_bandwidth", multiple, self.dispersion())?;
        Ok(())
    }

    /// Fitted surface; cell `(i, j)` is `f(x_queries[i], y_queries[j])`.
    pub fn solve(
        &self,
        x_queries: &[f64],
        y_queries: &[f64],
        evaluator: &Evaluator,
    ) -> Result<DMatrix<f64>, KernelFitError> {
        check_queries("KernelFit2D::solve", &[("x", x_queries), ("y", y_queries)])?;
        log::debug!(
            "KernelFit2D::solve: {} samples x {}x{} grid, bandwidth={}, threads={}",
            self.x.len(),
            x_queries.len(),
            y_queries.len(),
            self.bandwidth,
            evaluator.threads()
        );

        Ok(self.map_grid(x_queries, y_queries, evaluator, |qx, qy| self.estimate_at(qx, qy)))
    }

    /// Kernel-weighted standard deviation of `z` about the fitted surface.
    pub fn std_dev(
        &self,
        x_queries: &[f64],
        y_queries: &[f64],
        evaluator: &Evaluator,
    ) -> Result<DMatrix<f64>, KernelFitError> {
        check_queries("KernelFit2D::std_dev", &[("x", x_queries), ("y", y_queries)])?;
        log::debug!(
            "KernelFit2D::std_dev: {} samples x {}x{} grid, bandwidth={}",
            self.x.len(),
            x_queries.len(),
            y_queries.len(),
            self.bandwidth
        );

        Ok(self.map_grid(x_queries, y_queries, evaluator, |qx, qy| self.std_dev_at(qx, qy)))
    }

    fn map_grid<F>(&self, x_queries: &[f64], y_queries: &[f64], evaluator: &Evaluator, cell: F) -> DMatrix<f64>
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let nrows = x_queries.len();
        let ncols = y_queries.len();

        // Column-major storage: each chunk of `nrows` cells is one y-query column.
        let mut cells = vec![0.0; nrows * ncols];
        evaluator.install(|| {
            cells
                .par_chunks_mut(nrows)
                .zip(y_queries.par_iter())
                .for_each(|(column, &qy)| {
                    for (slot, &qx) in column.iter_mut().zip(x_queries) {
                        *slot = cell(qx, qy);
                    }
                });
        });

        DMatrix::from_vec(nrows, ncols, cells)
    }

    fn weights(&self, qx: f64, qy: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(move |((&xk, &yk), &zk)| (gaussian((xk - qx).hypot(yk - qy), self.bandwidth), zk))
    }

    fn estimate_at(&self, qx: f64, qy: f64) -> f64 {
        let (num, den) = self
            .weights(qx, qy)
            .fold((0.0, 0.0), |(num, den), (w, zk)| (num + w * zk, den + w));
        num / den
    }

    fn std_dev_at(&self, qx: f64, qy: f64) -> f64 {
        let f = self.estimate_at(qx, qy);
        let (num, den) = self.weights(qx, qy).fold((0.0, 0.0), |(num, den), (w, zk)| {
            let r = zk - f;
            (num + w * r * r, den + w)
        });
        (num / den).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn ev() -> Evaluator {
        Evaluator::new(3).unwrap()
    }

    #[test]
    fn grid_shape_follows_queries() {
        let fit = KernelFit2D::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 2.0], 0.5).unwrap();
        let f = fit.solve(&[0.0, 0.5, 1.0], &[0.0, 1.0], &ev()).unwrap();
        assert_eq!(f.shape(), (3, 2));
    }

    #[test]
    fn cell_index_matches_query_pair() {
        // Two well-separated samples; each cell should pick up the closer one.
        let fit = KernelFit2D::new(vec![0.0, 10.0], vec![0.0, 0.0], vec![-1.0, 1.0], 0.5).unwrap();
        let f = fit.solve(&[0.0, 10.0], &[0.0, 0.25], &ev()).unwrap();
        assert_abs_diff_eq!(f[(0, 0)], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f[(0, 1)], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f[(1, 0)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f[(1, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn weight_depends_on_distance_only() {
        // (3, 4) and (-5, 0) are both 5 away from the origin.
        let fit = KernelFit2D::new(vec![3.0, -5.0], vec![4.0, 0.0], vec![2.0, 6.0], 4.0).unwrap();
        let f = fit.solve(&[0.0], &[0.0], &ev()).unwrap();
        assert_relative_eq!(f[(0, 0)], 4.0, max_relative = 1e-12);
    }

    #[test]
    fn far_cell_is_nan() {
        let fit = KernelFit2D::new(vec![0.0], vec![0.0], vec![1.0], 0.1).unwrap();
        let f = fit.solve(&[0.0, 500.0], &[0.0], &ev()).unwrap();
        assert_relative_eq!(f[(0, 0)], 1.0);
        assert!(f[(1, 0)].is_nan());
    }

    #[test]
    fn rejects_bad_construction_and_queries() {
        assert!(KernelFit2D::new(vec![], vec![], vec![], 1.0).is_err());
        assert!(KernelFit2D::new(vec![0.0], vec![0.0, 1.0], vec![0.0], 1.0).is_err());
        assert!(KernelFit2D::new(vec![0.0], vec![0.0], vec![0.0], -1.0).is_err());

        let fit = KernelFit2D::new(vec![0.0], vec![0.0], vec![1.0], 1.0).unwrap();
        let err = fit.solve(&[1.0], &[], &ev()).unwrap_err();
        assert_eq!(err.to_string(), "KernelFit2D::solve: query vector(s) `y` was empty");
    }

    #[test]
    fn dispersion_ignores_y() {
        let mut fit = KernelFit2D::new(
            vec![0.0, 2.0, 4.0],
            vec![100.0, -3.0, 7.5],
            vec![1.0, 1.0, 1.0],
            1.0,
        )
        .unwrap();
        assert_relative_eq!(fit.dispersion(), 2.0);
        fit.set_bandwidth(0.25).unwrap();
        assert_relative_eq!(fit.bandwidth(), 0.5);
    }

    #[test]
    fn std_dev_of_two_equidistant_samples() {
        let fit = KernelFit2D::new(vec![-1.0, 1.0], vec![0.0, 0.0], vec![1.0, 3.0], 1.0).unwrap();
        let s = fit.std_dev(&[0.0], &[0.0, 7.0], &ev()).unwrap();
        assert_relative_eq!(s[(0, 0)], 1.0, max_relative = 1e-12);
        assert_relative_eq!(s[(0, 1)], 1.0, max_relative = 1e-12);
    }
}
