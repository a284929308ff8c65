//! Batch orchestration.
//!
//! `convert_all` drives one whole run: scan the source directory, drop the
//! files already in the target format, create the output directory, and
//! convert the rest in parallel. Failures are per-file; one broken image
//! never aborts the batch.

use crate::constants::TargetFormat;
use crate::convert::{convert_file, ConversionOptions};
use crate::error::{ConvertError, Result};
use crate::scan::{list_images, ImageRecord};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// The result of converting one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source file name the outcome belongs to.
    pub name: String,
    /// Path of the written output, or why the conversion failed.
    pub result: Result<PathBuf>,
}

/// Everything a finished batch reports back, in input order.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Picks the directory converted images are written to.
///
/// A blank answer means "next to the sources", i.e. the input directory
/// itself.
pub fn resolve_output_dir(input_dir: &Path, raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        input_dir.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

/// Builds the output file name for `name` converted to `format`.
///
/// The stem is everything before the first dot, so `my.photo.v2.png`
/// converted to jpg becomes `my.jpg`.
pub fn derive_output_name(name: &str, format: TargetFormat) -> String {
    let stem = name.split('.').next().unwrap_or_default();
    format!("{}.{}", stem, format.extension())
}

/// True when the file's canonical extension already names the target
/// format. `jpg` and `jpeg` are distinct formats here, so a `.jpeg` file
/// is still converted when the target is `jpg`.
pub fn already_in_format(record: &ImageRecord, format: TargetFormat) -> bool {
    record
        .ext
        .strip_prefix('.')
        .and_then(TargetFormat::from_extension)
        == Some(format)
}

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|_| ConvertError::DirectoryCreationFailed(dir.to_path_buf()))
}

/// Converts every eligible image in `input_dir` into `output_dir`.
///
/// # Arguments
/// * `input_dir` - Directory scanned for source images (non-recursive)
/// * `output_dir` - Directory converted images are written to
/// * `options` - Target format plus resize and quality settings
///
/// # Returns
/// * `Ok(BatchReport)` with one outcome per converted file, in input order
/// * `Err(ConvertError)` only for batch-level failures: an unreadable input
///   directory or an output directory that cannot be created
///
/// Files already in the target format are skipped up front. When nothing is
/// left to do the report is empty and the output directory is not created.
pub fn convert_all(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConversionOptions,
) -> Result<BatchReport> {
    let start_time = Instant::now();

    let records = list_images(input_dir)?;
    let pending: Vec<ImageRecord> = records
        .into_iter()
        .filter(|record| !already_in_format(record, options.format))
        .collect();

    if pending.is_empty() {
        println!(
            "⚠️  No images found to convert in {}",
            input_dir.display()
        );
        return Ok(BatchReport {
            outcomes: Vec::new(),
            elapsed: start_time.elapsed(),
        });
    }

    println!("📊 Found {} images to convert", pending.len());
    ensure_output_dir(output_dir)?;

    let main_progress = ProgressBar::new(pending.len() as u64);
    main_progress.set_style(ProgressStyle::default_bar());

    let outcomes: Vec<FileOutcome> = pending
        .into_par_iter()
        .map(|record| {
            let progress = main_progress.clone();
            let output_path = output_dir.join(derive_output_name(&record.name, options.format));

            let result = match convert_file(&record.path, &output_path, options) {
                Ok(()) => Ok(output_path),
                Err(e) => {
                    eprintln!("❌ Failed to convert {}: {}", record.name, e);
                    Err(e)
                }
            };
            progress.inc(1);

            FileOutcome {
                name: record.name,
                result,
            }
        })
        .collect();

    main_progress.finish_with_message("✅ Batch conversion complete");

    Ok(BatchReport {
        outcomes,
        elapsed: start_time.elapsed(),
    })
}
