//! Boundary checks shared by both estimators.

use crate::error::KernelFitError;

/// Every named sequence must be non-empty and all must share one length.
pub(crate) fn check_samples(
    operation: &'static str,
    columns: &[(&str, &[f64])],
) -> Result<usize, KernelFitError> {
    let empty: Vec<&str> = columns
        .iter()
        .filter(|(_, c)| c.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !empty.is_empty() {
        return Err(KernelFitError::invalid_input(
            operation,
            format!("input vector(s) {} empty", quote_names(&empty)),
        ));
    }

    let n = columns[0].1.len();
    if columns.iter().any(|(_, c)| c.len() != n) {
        let lens: Vec<String> = columns
            .iter()
            .map(|(name, c)| format!("{name}={}", c.len()))
            .collect();
        return Err(KernelFitError::invalid_input(
            operation,
            format!("input vectors must be equal in length ({})", lens.join(", ")),
        ));
    }

    Ok(n)
}

/// Bandwidth must be strictly positive; NaN fails.
pub(crate) fn check_bandwidth(operation: &'static str, bandwidth: f64) -> Result<(), KernelFitError> {
    if !(bandwidth > 0.0) {
        return Err(KernelFitError::invalid_input(
            operation,
            format!("the bandwidth must be greater than zero (got {bandwidth})"),
        ));
    }
    Ok(())
}

pub(crate) fn check_queries(
    operation: &'static str,
    queries: &[(&str, &[f64])],
) -> Result<(), KernelFitError> {
    let empty: Vec<&str> = queries
        .iter()
        .filter(|(_, q)| q.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if empty.is_empty() {
        Ok(())
    } else {
        Err(KernelFitError::invalid_input(
            operation,
            format!("query vector(s) {} empty", quote_names(&empty)),
        ))
    }
}

/// New bandwidth from `multiple * dispersion`, both factors validated.
pub(crate) fn rescaled_bandwidth(
    operation: &'static str,
    multiple: f64,
    dispersion: f64,
) -> Result<f64, KernelFitError> {
    if !(multiple > 0.0) {
        return Err(KernelFitError::invalid_input(
            operation,
            format!("the bandwidth multiple must be greater than zero (got {multiple})"),
        ));
    }
    let bandwidth = multiple * dispersion;
    if !(bandwidth > 0.0) {
        return Err(KernelFitError::invalid_input(
            operation,
            format!(
                "dispersion {dispersion} does not yield a positive bandwidth; \
                 sample abscissas must be sorted with at least two distinct values"
            ),
        ));
    }
    Ok(bandwidth)
}

fn quote_names(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
        + if names.len() == 1 { " was" } else { " were" }
}
