//! Batch driver: transform every matching image under a dataset root.
//!
//! Files are processed strictly one at a time. Each output is written to
//! `output_dir` under a name derived from the source's base name, so the
//! output location does not mirror the dataset tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{BatchConfig, ErrorPolicy};
use crate::decode::decode_file;
use crate::encode::encode_file;
use crate::error::{Error, Result};
use crate::transform::{apply_rotation, shrink};
use crate::walk::list_files;

/// A file the batch could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Files skipped under [`ErrorPolicy::Continue`].
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Derive the output file name for `source`.
///
/// Takes the base name and inserts `suffix` before the trailing
/// `extension`: `dataset/cats/cat.png` becomes `cat-r.png`. Returns `None`
/// when the base name does not end with `extension` or is not valid UTF-8.
pub fn output_file_name(source: &Path, extension: &str, suffix: &str) -> Option<String> {
    let name = source.file_name()?.to_str()?;
    let stem = name.strip_suffix(extension)?;
    Some(format!("{stem}{suffix}{extension}"))
}

/// Run a batch over `config.dataset_root`.
///
/// # Errors
///
/// Configuration, directory walking and output-directory failures always
/// abort. Per-file failures abort under [`ErrorPolicy::FailFast`] and are
/// collected in the report under [`ErrorPolicy::Continue`].
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    config.validate()?;

    let sources = list_files(&config.dataset_root, &config.extension)?;
    info!(
        root = %config.dataset_root.display(),
        count = sources.len(),
        angle_degrees = config.angle_degrees,
        "Starting batch"
    );

    if !config.output_dir.exists() {
        debug!(path = %config.output_dir.display(), "Creating output directory");
        fs::create_dir_all(&config.output_dir).map_err(|source| Error::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;
    }

    let mut report = BatchReport::default();
    let mut seen = HashSet::new();

    for source in &sources {
        match process_file(source, config) {
            Ok(output) => {
                if !seen.insert(output.clone()) {
                    warn!(
                        source = %source.display(),
                        output = %output.display(),
                        "Output overwrote an earlier file with the same name"
                    );
                }
                report.written.push(output);
            }
            Err(err) => match config.on_error {
                ErrorPolicy::FailFast => return Err(err),
                ErrorPolicy::Continue => {
                    warn!(source = %source.display(), error = %err, "Skipping file");
                    report.failures.push(BatchFailure {
                        source: source.clone(),
                        error: err.to_string(),
                    });
                }
            },
        }
    }

    info!(
        written = report.written.len(),
        failed = report.failures.len(),
        "Batch finished"
    );
    Ok(report)
}

/// Transform one file and return the path written.
fn process_file(source: &Path, config: &BatchConfig) -> Result<PathBuf> {
    let name = output_file_name(source, &config.extension, &config.output_suffix)
        .ok_or_else(|| Error::OutputName(source.to_path_buf()))?;
    let output = config.output_dir.join(name);

    let mut image = decode_file(source)?;
    if let Some(factor) = config.shrink_factor {
        image = shrink(&image, factor)?;
    }
    let rotated = apply_rotation(&image, config.angle_degrees, &config.rotation_options())?;
    encode_file(&rotated, &output)?;

    info!(
        source = %source.display(),
        output = %output.display(),
        width = rotated.width,
        height = rotated.height,
        "Wrote image"
    );
    Ok(output)
}
