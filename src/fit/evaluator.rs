//! Parallel evaluation of independent query points.
//!
//! The worker count is a caller decision. An `Evaluator` owns a dedicated rayon
//! pool of exactly that many threads; estimators run their per-query loop inside
//! it. Nothing here touches rayon's global pool.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::KernelFitError;

/// A fixed-size worker pool for `solve` / `std_dev` calls.
///
/// One evaluator can be shared by any number of estimators and calls.
pub struct Evaluator {
    pool: ThreadPool,
    threads: usize,
}

impl Evaluator {
    /// Build a pool with `threads` workers.
    pub fn new(threads: usize) -> Result<Self, KernelFitError> {
        if threads == 0 {
            return Err(KernelFitError::invalid_input(
                "Evaluator::new",
                "the thread count must be greater than zero",
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("kfit-worker-{i}"))
            .build()
            .map_err(|e| KernelFitError::ThreadPool(e.to_string()))?;
        log::trace!("built evaluator pool with {threads} worker(s)");

        Ok(Self { pool, threads })
    }

    /// Single worker; evaluation order is still unspecified.
    pub fn sequential() -> Result<Self, KernelFitError> {
        Self::new(1)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `op` inside the pool so its parallel iterators use these workers.
    pub(crate) fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("threads", &self.threads)
            .finish()
    }
}
