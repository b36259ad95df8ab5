//! Kernel regression estimators.
//!
//! - `fit1d`: `y = f(x)` from paired samples
//! - `fit2d`: `z = f(x, y)` from triples, evaluated on a query grid
//! - `evaluator`: the caller-sized worker pool both estimators run on

pub mod evaluator;
pub mod fit1d;
pub mod fit2d;
mod validate;

pub use evaluator::*;
pub use fit1d::*;
pub use fit2d::*;
