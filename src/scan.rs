//! Directory scanning and image classification.
//!
//! The scanner lists the direct children of one directory and keeps the
//! regular files the classifier accepts, producing one [`ImageRecord`] per
//! image for the batch pipeline.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One convertible file found in the source directory.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// Absolute path to the source file.
    pub path: PathBuf,
    /// File name including its extension.
    pub name: String,
    /// Canonical extension including the leading dot; empty when absent.
    pub ext: String,
}

/// Decides whether `name` belongs to the supported image set.
///
/// Two candidate tokens are checked: the element at index 1 of the name
/// split on `.`, and the canonical extension. Either one matching
/// (case-sensitively) qualifies the file, so `photo.png.bak` counts as an
/// image while `photo.PNG` does not.
pub fn is_supported_image(name: &str) -> bool {
    let split_token = name
        .split('.')
        .nth(1)
        .is_some_and(|token| SUPPORTED_IMAGE_EXTENSIONS.contains(&token));
    let canonical = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext));
    split_token || canonical
}

fn canonical_ext(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Lists the images directly inside `dir` (non-recursive).
///
/// Only regular files are considered; symlinks and subdirectories are
/// skipped. Entries appear in directory order, which is not sorted. A
/// missing or unreadable directory is an error for the caller.
pub fn list_images(dir: &Path) -> Result<Vec<ImageRecord>> {
    if !dir.is_dir() {
        return Err(ConvertError::InputDirNotFound(dir.to_path_buf()));
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_supported_image(&name) {
            continue;
        }
        // Files that vanish between listing and resolution are skipped.
        if let Ok(path) = entry.path().canonicalize() {
            let ext = canonical_ext(&name);
            records.push(ImageRecord { path, name, ext });
        }
    }

    Ok(records)
}
