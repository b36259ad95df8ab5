//! Input/output helpers.
//!
//! - whitespace-delimited `.dat` exports (`export`)
//! - profile JSON read/write (`profile`)

pub mod export;
pub mod profile;

pub use export::*;
pub use profile::*;
