//! Synthetic data for the demo drivers.

pub mod sample;

pub use sample::*;
