//! `kernel-fit` library crate.
//!
//! Nadaraya-Watson kernel regression over scattered 1-D and 2-D samples:
//!
//! - [`fit::KernelFit1D`] / [`fit::KernelFit2D`]: the estimators
//! - [`fit::Evaluator`]: caller-sized worker pool for parallel evaluation
//! - [`math`]: Gaussian kernel and dispersion bandwidth heuristic
//!
//! The binary (`kfit`) is a thin demo driver around this library (synthetic
//! data, `.dat`/JSON output, ASCII plots).

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;

pub use error::KernelFitError;
pub use fit::{Evaluator, KernelFit1D, KernelFit2D};
