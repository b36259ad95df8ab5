//! Synthetic noisy sinc samples for the demo drivers.
//!
//! 1-D: `y = sinc(x)` with `sinc(x) = sin(πx) / (πx)`.
//! 2-D: `z = sinc(r)` with `r = sqrt(x² + y²)`.
//!
//! Two noise terms are added to every observation, both uniform on `[-1, 1]`:
//! - "red" noise scaled by `NOISE_SCALE * x` (1-D) or `NOISE_SCALE * r` (2-D)
//! - white noise scaled by `WHITE_NOISE_FACTOR * NOISE_SCALE`
//!
//! Abscissas are drawn uniformly over `[-RANGE·π/2, RANGE·π/2]` and the samples
//! are returned sorted by `x`, so the dispersion heuristic applies directly.

use std::cmp::Ordering;
use std::f64::consts::PI;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Uniform;

use crate::domain::{Samples1D, Samples2D};
use crate::error::AppError;

/// Width of the sampled domain in units of π.
pub const RANGE: f64 = 3.0;

/// Base noise amplitude.
pub const NOISE_SCALE: f64 = 0.025;

/// White noise amplitude relative to `NOISE_SCALE`.
const WHITE_NOISE_FACTOR: f64 = 2.5;

/// Lower/upper edge of the sampled domain.
pub fn domain_bounds() -> (f64, f64) {
    let half = RANGE * PI / 2.0;
    (-half, half)
}

/// Normalized sinc, with the removable singularity at 0 filled in.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Bandwidth the 1-D demo uses when none is given: `3π²·RANGE / n`.
pub fn default_bandwidth_1d(n: usize) -> f64 {
    3.0 * PI * PI * RANGE / n as f64
}

/// Bandwidth the 2-D demo uses when none is given: `10π²·RANGE / n`.
pub fn default_bandwidth_2d(n: usize) -> f64 {
    10.0 * PI * PI * RANGE / n as f64
}

pub fn generate_sinc_1d(sample_count: usize, seed: u64) -> Result<Samples1D, AppError> {
    if sample_count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let (lo, hi) = domain_bounds();
    let mut rng = StdRng::seed_from_u64(seed);
    let domain = Uniform::new_inclusive(lo, hi);
    let unit = Uniform::new_inclusive(-1.0, 1.0);

    let mut pairs: Vec<(f64, f64)> = (0..sample_count)
        .map(|_| {
            let x = domain.sample(&mut rng);
            let red = unit.sample(&mut rng) * NOISE_SCALE * x;
            let white = unit.sample(&mut rng) * WHITE_NOISE_FACTOR * NOISE_SCALE;
            (x, sinc(x) + red + white)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let (x, y) = pairs.into_iter().unzip();
    Ok(Samples1D { x, y })
}

pub fn generate_sinc_2d(sample_count: usize, seed: u64) -> Result<Samples2D, AppError> {
    if sample_count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let (lo, hi) = domain_bounds();
    let mut rng = StdRng::seed_from_u64(seed);
    let domain = Uniform::new_inclusive(lo, hi);
    let unit = Uniform::new_inclusive(-1.0, 1.0);

    let mut triples: Vec<(f64, f64, f64)> = (0..sample_count)
        .map(|_| {
            let x = domain.sample(&mut rng);
            let y = domain.sample(&mut rng);
            let r = x.hypot(y);
            let red = unit.sample(&mut rng) * NOISE_SCALE * r;
            let white = unit.sample(&mut rng) * WHITE_NOISE_FACTOR * NOISE_SCALE;
            (x, y, sinc(r) + red + white)
        })
        .collect();
    triples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut out = Samples2D {
        x: Vec::with_capacity(sample_count),
        y: Vec::with_capacity(sample_count),
        z: Vec::with_capacity(sample_count),
    };
    for (x, y, z) in triples {
        out.x.push(x);
        out.y.push(y);
        out.z.push(z);
    }
    Ok(out)
}

/// `n` evenly spaced points from `lo` to `hi` inclusive (`[lo]` when `n == 1`).
pub fn linspace(lo: f64, hi: f64, n: usize) -> Result<Vec<f64>, AppError> {
    if n == 0 {
        return Err(AppError::new(2, "Grid size must be > 0."));
    }
    if !(lo.is_finite() && hi.is_finite() && hi >= lo) {
        return Err(AppError::new(2, format!("Invalid grid range: [{lo}, {hi}].")));
    }
    if n == 1 {
        return Ok(vec![lo]);
    }

    let step = (hi - lo) / (n as f64 - 1.0);
    Ok((0..n).map(|i| lo + step * i as f64).collect())
}
