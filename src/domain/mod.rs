//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sample sets handed to the estimators (`Samples1D`, `Samples2D`)
//! - run configuration (`RunConfig`, `BandwidthChoice`)
//! - the exported profile file (`ProfileFile`)

pub mod types;

pub use types::*;
