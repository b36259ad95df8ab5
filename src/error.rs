//! Error types.
//!
//! - `KernelFitError` is what the regression core returns. Every validation
//!   failure at the API boundary is an `InvalidInput` naming the operation.
//! - `AppError` is what the `kfit` binary reports; it carries a process exit code.

use thiserror::Error;

/// Errors returned by the estimators and the evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelFitError {
    /// Empty or mismatched inputs, or a non-positive bandwidth/multiplier/thread count.
    #[error("{operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl KernelFitError {
    pub fn invalid_input(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<KernelFitError> for AppError {
    fn from(err: KernelFitError) -> Self {
        let exit_code = if err.is_invalid_input() { 2 } else { 4 };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
