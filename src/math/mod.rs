//! Mathematical building blocks: the kernel and the bandwidth heuristic.

pub mod bandwidth;
pub mod kernel;

pub use bandwidth::*;
pub use kernel::*;
