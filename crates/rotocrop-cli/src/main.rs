//! `rotocrop` - batch rotate and shrink images for dataset preparation.
//!
//! ```text
//! rotocrop batch --root dataset --angle 90 --output-dir rotated
//! rotocrop rotate in.png out.png --angle 15
//! rotocrop shrink in.png out.png --factor 0.2
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rotocrop_core::{
    rotate_image, run_batch, shrink_image, BatchConfig, ErrorPolicy, InterpolationFilter,
    RotationOptions,
};

#[derive(Debug, Parser)]
#[command(name = "rotocrop", version, about = "Rotate and shrink images for dataset preparation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rotate every matching image under a dataset root
    Batch(BatchArgs),
    /// Rotate a single image
    Rotate(RotateArgs),
    /// Shrink a single image horizontally
    Shrink(ShrinkArgs),
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// TOML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory tree to scan
    #[arg(long)]
    root: Option<PathBuf>,
    /// Rotation angle in degrees, positive = counter-clockwise
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
    /// Marker inserted before the extension of output names
    #[arg(long, allow_hyphen_values = true)]
    suffix: Option<String>,
    /// Directory receiving output files
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// File-name suffix selecting input images
    #[arg(long)]
    extension: Option<String>,
    /// Fraction of width to remove before rotating
    #[arg(long)]
    shrink: Option<f64>,
    #[arg(long, value_enum)]
    filter: Option<FilterArg>,
    /// Fill value for uncovered canvas pixels
    #[arg(long)]
    fill: Option<u8>,
    /// Log and skip files that fail instead of aborting
    #[arg(long)]
    keep_going: bool,
}

#[derive(Debug, Args)]
struct RotateArgs {
    input: PathBuf,
    output: PathBuf,
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    angle: f64,
    #[arg(long, value_enum, default_value_t = FilterArg::Bilinear)]
    filter: FilterArg,
    #[arg(long, default_value_t = 0)]
    fill: u8,
}

#[derive(Debug, Args)]
struct ShrinkArgs {
    input: PathBuf,
    output: PathBuf,
    /// Total fraction of the width to remove, in [0, 1)
    #[arg(long)]
    factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<FilterArg> for InterpolationFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => InterpolationFilter::Nearest,
            FilterArg::Bilinear => InterpolationFilter::Bilinear,
            FilterArg::Lanczos3 => InterpolationFilter::Lanczos3,
        }
    }
}

/// Merge the optional config file with command-line overrides.
fn batch_config(args: &BatchArgs) -> anyhow::Result<BatchConfig> {
    let mut config = match &args.config {
        Some(path) => BatchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BatchConfig::default(),
    };

    if let Some(root) = &args.root {
        config.dataset_root = root.clone();
    }
    if let Some(angle) = args.angle {
        config.angle_degrees = angle;
    }
    if let Some(suffix) = &args.suffix {
        config.output_suffix = suffix.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(extension) = &args.extension {
        config.extension = extension.clone();
    }
    if let Some(factor) = args.shrink {
        config.shrink_factor = Some(factor);
    }
    if let Some(filter) = args.filter {
        config.filter = filter.into();
    }
    if let Some(fill) = args.fill {
        config.fill = fill;
    }
    if args.keep_going {
        config.on_error = ErrorPolicy::Continue;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Batch(args) => {
            let config = batch_config(&args)?;
            let report = run_batch(&config).with_context(|| {
                format!("processing dataset {}", config.dataset_root.display())
            })?;

            for failure in &report.failures {
                tracing::error!(
                    source = %failure.source.display(),
                    error = %failure.error,
                    "File failed"
                );
            }
            tracing::info!(
                written = report.written.len(),
                failed = report.failures.len(),
                "Done"
            );
            Ok(report.is_success())
        }
        Command::Rotate(args) => {
            let options = RotationOptions {
                filter: args.filter.into(),
                fill: args.fill,
            };
            rotate_image(&args.input, &args.output, args.angle, &options)
                .with_context(|| format!("rotating {}", args.input.display()))?;
            Ok(true)
        }
        Command::Shrink(args) => {
            shrink_image(&args.input, &args.output, args.factor)
                .with_context(|| format!("shrinking {}", args.input.display()))?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
