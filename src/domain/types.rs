//! Shared domain types.
//!
//! Sample sets and run configuration are plain in-memory values. The profile
//! file types are serializable so a fitted 1-D profile can be exported and
//! reloaded for plotting.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paired 1-D samples, sorted by `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples1D {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// 2-D samples `z` observed at `(x, y)`, sorted by `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples2D {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// How the demo picks its bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandwidthChoice {
    /// Scale-based default for the synthetic data set (see `data::default_bandwidth_*`).
    Default,
    /// Explicit bandwidth.
    Fixed(f64),
    /// `multiple * dispersion` of the sample abscissas.
    Multiple(f64),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of synthetic samples.
    pub sample_count: usize,
    /// Query points per axis.
    pub grid_points: usize,
    pub seed: u64,
    pub bandwidth: BandwidthChoice,
    /// Worker threads for evaluation.
    pub threads: usize,
    /// Directory receiving the `.dat` files.
    pub out_dir: PathBuf,
    /// Also compute and write the kernel-weighted standard deviation.
    pub std_dev: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_profile: Option<PathBuf>,
}

/// A saved 1-D profile (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub bandwidth: f64,
    /// Dispersion of the sample abscissas at fit time; `null` when undefined
    /// (a single sample).
    pub dispersion: Option<f64>,
    pub threads: usize,
    pub samples: ProfileSamples,
    pub grid: ProfileGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ProfileSamples {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Fitted values on the query grid. NaN cells are stored as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileGrid {
    pub x: Vec<f64>,
    pub f: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<Vec<Option<f64>>>,
}

impl ProfileGrid {
    /// `(x, f)` pairs in grid order; `null` cells come back as NaN.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.f)
            .map(|(&x, f)| (x, f.unwrap_or(f64::NAN)))
            .collect()
    }
}

/// Map NaN (and infinities) to `None` for JSON output.
pub fn nullable(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

pub fn to_nullable(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| nullable(v)).collect()
}
