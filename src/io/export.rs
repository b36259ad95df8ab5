//! Whitespace-delimited `.dat` exports.
//!
//! Every file starts with `#` comment lines (tool, timestamp, column names) so it
//! loads directly in gnuplot or `numpy.loadtxt`. Records follow, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use nalgebra::DMatrix;

use crate::error::AppError;

/// Write equal-length columns as `c0 c1 ...` rows.
pub fn write_columns(path: &Path, names: &[&str], columns: &[&[f64]]) -> Result<(), AppError> {
    let rows = columns.first().map(|c| c.len()).unwrap_or(0);
    if names.len() != columns.len() || columns.iter().any(|c| c.len() != rows) {
        return Err(AppError::new(
            4,
            format!("Column layout mismatch while writing '{}'.", path.display()),
        ));
    }

    let mut out = create(path)?;
    write_header(&mut out, path, &names.join(" "))?;

    for i in 0..rows {
        let line: Vec<String> = columns.iter().map(|c| c[i].to_string()).collect();
        writeln!(out, "{}", line.join(" ")).map_err(|e| write_error(path, e))?;
    }

    out.flush().map_err(|e| write_error(path, e))
}

/// Write a matrix as rows of space-separated cells (row `i` = x-query `i`).
pub fn write_grid(path: &Path, grid: &DMatrix<f64>) -> Result<(), AppError> {
    let mut out = create(path)?;
    write_header(
        &mut out,
        path,
        &format!("{} rows (x) by {} columns (y)", grid.nrows(), grid.ncols()),
    )?;

    for row in grid.row_iter() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(" ")).map_err(|e| write_error(path, e))?;
    }

    out.flush().map_err(|e| write_error(path, e))
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to open output file '{}': {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

fn write_header(out: &mut impl Write, path: &Path, columns: &str) -> Result<(), AppError> {
    writeln!(out, "# kfit {} generated {}", env!("CARGO_PKG_VERSION"), Utc::now().to_rfc3339())
        .and_then(|_| writeln!(out, "# {columns}"))
        .map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write '{}': {e}", path.display()))
}
