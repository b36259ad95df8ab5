//! Formatted terminal output for `kfit` runs.

use std::path::Path;

use crate::report::FitSummary;

/// Format the summary of a 1-D or 2-D run.
///
/// `shape` is printed verbatim, e.g. `"1000"` or `"100x100"`.
pub fn format_run_summary(title: &str, summary: &FitSummary, shape: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== kfit - {title} ===\n"));
    out.push_str(&format!("Samples: n={}\n", summary.n_samples));
    out.push_str(&format!(
        "Bandwidth: {:.6} | dispersion(x)={:.6}\n",
        summary.bandwidth, summary.dispersion
    ));
    out.push_str(&format!(
        "Queries: {shape} ({} points) | threads={}\n",
        summary.n_queries, summary.threads
    ));
    match summary.fitted_range {
        Some((lo, hi)) => out.push_str(&format!("Fitted range: [{lo:.6}, {hi:.6}]\n")),
        None => out.push_str("Fitted range: none (no finite estimates)\n"),
    }
    if summary.nan_count > 0 {
        out.push_str(&format!(
            "NaN estimates: {} (query points beyond the reach of every sample)\n",
            summary.nan_count
        ));
    }

    out
}

/// One line per written output file.
pub fn format_written_files(paths: &[&Path]) -> String {
    let mut out = String::from("Wrote:\n");
    for p in paths {
        out.push_str(&format!("  {}\n", p.display()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_nan_only_when_present() {
        let clean = FitSummary::new(5, 0.5, 1.0, 2, &[0.0, 1.0]);
        let txt = format_run_summary("1-D profile", &clean, "2");
        assert!(txt.starts_with("=== kfit - 1-D profile ===\n"));
        assert!(txt.contains("Bandwidth: 0.500000 | dispersion(x)=1.000000"));
        assert!(!txt.contains("NaN"));

        let holes = FitSummary::new(5, 0.5, 1.0, 2, &[0.0, f64::NAN]);
        assert!(format_run_summary("1-D profile", &holes, "2").contains("NaN estimates: 1"));
    }

    #[test]
    fn lists_written_files() {
        let txt = format_written_files(&[Path::new("out/fit-1D.dat")]);
        assert_eq!(txt, "Wrote:\n  out/fit-1D.dat\n");
    }
}
