//! Read/write 1-D profile JSON files.
//!
//! A profile file carries the fit settings, the raw samples and the fitted grid,
//! which is everything `kfit plot` needs. The schema is `domain::ProfileFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{ProfileFile, ProfileGrid, ProfileSamples, nullable, to_nullable};
use crate::error::AppError;
use crate::fit::KernelFit1D;

/// Assemble the profile for a finished fit.
pub fn build_profile(
    fit: &KernelFit1D,
    threads: usize,
    queries: &[f64],
    fitted: &[f64],
    std_dev: Option<&[f64]>,
) -> ProfileFile {
    ProfileFile {
        tool: "kfit".to_string(),
        generated: Utc::now(),
        bandwidth: fit.bandwidth(),
        dispersion: nullable(fit.dispersion()),
        threads,
        samples: ProfileSamples {
            x: fit.x().to_vec(),
            y: fit.y().to_vec(),
        },
        grid: ProfileGrid {
            x: queries.to_vec(),
            f: to_nullable(fitted),
            std_dev: std_dev.map(to_nullable),
        },
    }
}

pub fn write_profile_json(path: &Path, profile: &ProfileFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create profile JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, profile)
        .map_err(|e| AppError::new(2, format!("Failed to write profile JSON: {e}")))?;

    Ok(())
}

pub fn read_profile_json(path: &Path) -> Result<ProfileFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open profile JSON '{}': {e}", path.display())))?;
    let profile: ProfileFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid profile JSON: {e}")))?;
    Ok(profile)
}
