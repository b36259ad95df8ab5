//! Shared "fit pipeline" logic used by the `fit1d` and `fit2d` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sample generation -> estimator construction -> solve (+ std dev) -> summary
//!
//! The front-end (`app`) then only deals with printing and file output.

use nalgebra::DMatrix;

use crate::data::{
    default_bandwidth_1d, default_bandwidth_2d, domain_bounds, generate_sinc_1d, generate_sinc_2d,
    linspace,
};
use crate::domain::{BandwidthChoice, RunConfig, Samples1D, Samples2D};
use crate::error::AppError;
use crate::fit::{Evaluator, KernelFit1D, KernelFit2D};
use crate::report::FitSummary;

/// All computed outputs of a `kfit fit1d` run.
#[derive(Debug, Clone)]
pub struct Run1D {
    pub fit: KernelFit1D,
    pub queries: Vec<f64>,
    pub fitted: Vec<f64>,
    pub std_dev: Option<Vec<f64>>,
    pub summary: FitSummary,
}

/// All computed outputs of a `kfit fit2d` run.
#[derive(Debug, Clone)]
pub struct Run2D {
    pub fit: KernelFit2D,
    pub x_queries: Vec<f64>,
    pub y_queries: Vec<f64>,
    pub fitted: DMatrix<f64>,
    pub std_dev: Option<DMatrix<f64>>,
    pub summary: FitSummary,
}

pub fn run_fit_1d(config: &RunConfig) -> Result<Run1D, AppError> {
    let samples = generate_sinc_1d(config.sample_count, config.seed)?;
    log::info!("generated {} noisy sinc samples (seed {})", samples.x.len(), config.seed);
    run_fit_1d_with_samples(config, samples)
}

/// Execute the 1-D pipeline on caller-provided samples.
pub fn run_fit_1d_with_samples(config: &RunConfig, samples: Samples1D) -> Result<Run1D, AppError> {
    let evaluator = Evaluator::new(config.threads)?;
    let fit = build_fit_1d(samples, config.bandwidth)?;

    let (lo, hi) = domain_bounds();
    let queries = linspace(lo, hi, config.grid_points)?;

    log::info!(
        "solving 1-D profile on {} points (bandwidth {:.6}, {} thread(s))",
        queries.len(),
        fit.bandwidth(),
        evaluator.threads()
    );
    let fitted = fit.solve(&queries, &evaluator)?;
    let std_dev = if config.std_dev {
        Some(fit.std_dev(&queries, &evaluator)?)
    } else {
        None
    };

    let summary = FitSummary::new(
        fit.n_samples(),
        fit.bandwidth(),
        fit.dispersion(),
        evaluator.threads(),
        &fitted,
    );
    warn_on_nan(&summary);

    Ok(Run1D {
        fit,
        queries,
        fitted,
        std_dev,
        summary,
    })
}

pub fn run_fit_2d(config: &RunConfig) -> Result<Run2D, AppError> {
    let samples = generate_sinc_2d(config.sample_count, config.seed)?;
    log::info!("generated {} noisy radial sinc samples (seed {})", samples.x.len(), config.seed);
    run_fit_2d_with_samples(config, samples)
}

/// Execute the 2-D pipeline on caller-provided samples.
pub fn run_fit_2d_with_samples(config: &RunConfig, samples: Samples2D) -> Result<Run2D, AppError> {
    let evaluator = Evaluator::new(config.threads)?;
    let fit = build_fit_2d(samples, config.bandwidth)?;

    let (lo, hi) = domain_bounds();
    let x_queries = linspace(lo, hi, config.grid_points)?;
    let y_queries = x_queries.clone();

    log::info!(
        "solving 2-D surface on a {}x{} lattice (bandwidth {:.6}, {} thread(s))",
        x_queries.len(),
        y_queries.len(),
        fit.bandwidth(),
        evaluator.threads()
    );
    let fitted = fit.solve(&x_queries, &y_queries, &evaluator)?;
    let std_dev = if config.std_dev {
        Some(fit.std_dev(&x_queries, &y_queries, &evaluator)?)
    } else {
        None
    };

    let summary = FitSummary::new(
        fit.n_samples(),
        fit.bandwidth(),
        fit.dispersion(),
        evaluator.threads(),
        fitted.as_slice(),
    );
    warn_on_nan(&summary);

    Ok(Run2D {
        fit,
        x_queries,
        y_queries,
        fitted,
        std_dev,
        summary,
    })
}

fn build_fit_1d(samples: Samples1D, choice: BandwidthChoice) -> Result<KernelFit1D, AppError> {
    let Samples1D { x, y } = samples;
    let fit = match choice {
        BandwidthChoice::Default => {
            let h = default_bandwidth_1d(x.len());
            KernelFit1D::new(x, y, h)?
        }
        BandwidthChoice::Fixed(h) => KernelFit1D::new(x, y, h)?,
        BandwidthChoice::Multiple(m) => {
            let mut fit = KernelFit1D::with_dispersion_bandwidth(x, y)?;
            fit.set_bandwidth(m)?;
            fit
        }
    };
    Ok(fit)
}

fn build_fit_2d(samples: Samples2D, choice: BandwidthChoice) -> Result<KernelFit2D, AppError> {
    let Samples2D { x, y, z } = samples;
    let fit = match choice {
        BandwidthChoice::Default => {
            let h = default_bandwidth_2d(x.len());
            KernelFit2D::new(x, y, z, h)?
        }
        BandwidthChoice::Fixed(h) => KernelFit2D::new(x, y, z, h)?,
        BandwidthChoice::Multiple(m) => {
            let mut fit = KernelFit2D::with_dispersion_bandwidth(x, y, z)?;
            fit.set_bandwidth(m)?;
            fit
        }
    };
    Ok(fit)
}

fn warn_on_nan(summary: &FitSummary) {
    if summary.nan_count > 0 {
        log::warn!(
            "{} of {} estimates are NaN: no sample lies within reach of those query points at bandwidth {:.6}",
            summary.nan_count,
            summary.n_queries,
            summary.bandwidth
        );
    }
}
