//! Command-line parsing for the `kfit` demo drivers.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! estimator code. Values can also come from the environment (or a `.env` file):
//! `KFIT_THREADS`, `KFIT_OUT_DIR`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kfit", version, about = "Nadaraya-Watson kernel smoothing of scattered 1-D/2-D data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Smooth a noisy 1-D sinc and write raw/fit (and optional std-dev) files.
    Fit1d(Fit1dArgs),
    /// Smooth a noisy 2-D radial sinc onto a square lattice.
    Fit2d(Fit2dArgs),
    /// Plot a previously exported 1-D profile JSON.
    Plot(PlotArgs),
}

/// Options shared by both fit commands.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Number of synthetic samples.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub samples: usize,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Explicit kernel bandwidth (> 0).
    #[arg(long, conflicts_with = "multiple")]
    pub bandwidth: Option<f64>,

    /// Bandwidth as a multiple of the mean sample spacing (dispersion).
    #[arg(long)]
    pub multiple: Option<f64>,

    /// Worker threads used for evaluation (defaults to the available parallelism).
    #[arg(short = 'j', long, env = "KFIT_THREADS")]
    pub threads: Option<usize>,

    /// Directory for the `.dat` output files.
    #[arg(long, env = "KFIT_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Also compute the kernel-weighted standard deviation.
    #[arg(long)]
    pub std_dev: bool,
}

#[derive(Debug, Args, Clone)]
pub struct Fit1dArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Query points on the uniform evaluation grid (defaults to the sample count).
    #[arg(long)]
    pub grid: Option<usize>,

    /// Render an ASCII plot of samples and profile.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the profile (settings + samples + fitted grid) to JSON.
    #[arg(long = "export-profile", value_name = "JSON")]
    pub export_profile: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct Fit2dArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Lattice points per axis.
    #[arg(long, default_value_t = 100)]
    pub grid: usize,
}

/// Options for plotting a saved profile.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Profile JSON file produced by `kfit fit1d --export-profile`.
    #[arg(long, value_name = "JSON")]
    pub profile: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
