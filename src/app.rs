//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments into a `RunConfig`
//! - runs the 1-D / 2-D fit pipeline
//! - prints the summary (and plot) and writes the output files

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{Command, CommonArgs, Fit1dArgs, Fit2dArgs, PlotArgs};
use crate::domain::{BandwidthChoice, RunConfig};
use crate::error::AppError;
use crate::io::{build_profile, read_profile_json, write_columns, write_grid, write_profile_json};

pub mod pipeline;

/// Entry point for the `kfit` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit1d(args) => handle_fit_1d(args),
        Command::Fit2d(args) => handle_fit_2d(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
}

fn handle_fit_1d(args: Fit1dArgs) -> Result<(), AppError> {
    let config = run_config_1d(&args)?;
    let run = pipeline::run_fit_1d(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary("1-D profile", &run.summary, &run.queries.len().to_string())
    );

    if config.plot {
        let samples: Vec<(f64, f64)> = run.fit.x().iter().copied().zip(run.fit.y().iter().copied()).collect();
        let profile: Vec<(f64, f64)> = run.queries.iter().copied().zip(run.fitted.iter().copied()).collect();
        println!(
            "{}",
            crate::plot::render_ascii_plot(&samples, &profile, config.plot_width, config.plot_height)
        );
    }

    let mut written = Vec::new();

    let raw = out_path(&config, "raw-1D.dat")?;
    write_columns(&raw, &["x", "y"], &[run.fit.x(), run.fit.y()])?;
    written.push(raw);

    let fit = out_path(&config, "fit-1D.dat")?;
    write_columns(&fit, &["x", "f"], &[run.queries.as_slice(), run.fitted.as_slice()])?;
    written.push(fit);

    if let Some(std_dev) = &run.std_dev {
        let path = out_path(&config, "stdev-1D.dat")?;
        write_columns(&path, &["x", "s"], &[run.queries.as_slice(), std_dev.as_slice()])?;
        written.push(path);
    }

    if let Some(path) = &config.export_profile {
        let profile = build_profile(
            &run.fit,
            run.summary.threads,
            &run.queries,
            &run.fitted,
            run.std_dev.as_deref(),
        );
        write_profile_json(path, &profile)?;
        written.push(path.clone());
    }

    print_written(&written);
    Ok(())
}

fn handle_fit_2d(args: Fit2dArgs) -> Result<(), AppError> {
    let config = run_config_2d(&args)?;
    let run = pipeline::run_fit_2d(&config)?;

    let shape = format!("{}x{}", run.x_queries.len(), run.y_queries.len());
    println!("{}", crate::report::format_run_summary("2-D surface", &run.summary, &shape));

    let mut written = Vec::new();

    let raw = out_path(&config, "raw-2D.dat")?;
    write_columns(&raw, &["x", "y", "z"], &[run.fit.x(), run.fit.y(), run.fit.z()])?;
    written.push(raw);

    let lattice = out_path(&config, "2D-lattice.dat")?;
    write_columns(
        &lattice,
        &["xx", "yy"],
        &[run.x_queries.as_slice(), run.y_queries.as_slice()],
    )?;
    written.push(lattice);

    let fit = out_path(&config, "fit-2D.dat")?;
    write_grid(&fit, &run.fitted)?;
    written.push(fit);

    if let Some(std_dev) = &run.std_dev {
        let path = out_path(&config, "stdev-2D.dat")?;
        write_grid(&path, std_dev)?;
        written.push(path);
    }

    print_written(&written);
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let profile = read_profile_json(&args.profile)?;
    let plot = crate::plot::render_profile_file(&profile, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn run_config_1d(args: &Fit1dArgs) -> Result<RunConfig, AppError> {
    let common = &args.common;
    Ok(RunConfig {
        grid_points: args.grid.unwrap_or(common.samples),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_profile: args.export_profile.clone(),
        ..base_config(common)?
    })
}

pub fn run_config_2d(args: &Fit2dArgs) -> Result<RunConfig, AppError> {
    Ok(RunConfig {
        grid_points: args.grid,
        ..base_config(&args.common)?
    })
}

fn base_config(common: &CommonArgs) -> Result<RunConfig, AppError> {
    let bandwidth = match (common.bandwidth, common.multiple) {
        (Some(h), None) => BandwidthChoice::Fixed(h),
        (None, Some(m)) => BandwidthChoice::Multiple(m),
        (None, None) => BandwidthChoice::Default,
        (Some(_), Some(_)) => {
            return Err(AppError::new(2, "Use either --bandwidth or --multiple, not both."));
        }
    };

    let threads = common.threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });

    Ok(RunConfig {
        sample_count: common.samples,
        grid_points: common.samples,
        seed: common.seed,
        bandwidth,
        threads,
        out_dir: common.out_dir.clone(),
        std_dev: common.std_dev,
        plot: false,
        plot_width: 100,
        plot_height: 25,
        export_profile: None,
    })
}

fn out_path(config: &RunConfig, name: &str) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(&config.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output directory '{}': {e}", config.out_dir.display()),
        )
    })?;
    Ok(config.out_dir.join(name))
}

fn print_written(paths: &[PathBuf]) {
    let refs: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
    print!("{}", crate::report::format_written_files(&refs));
}
