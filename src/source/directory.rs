//! Directory scanning.

use super::GalleryEntry;
use crate::model::error::SourceError;
use std::path::Path;

/// File extensions recognised as images (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "svg", "avif",
];

/// Whether `path` has an image extension, case-insensitively.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Turn `latte_art-02` into `latte art 02`.
pub fn description_from_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

/// List the images directly inside `dir`, sorted by file name.
///
/// A flat scan has no grouping, so entries carry no category.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the directory cannot be read.
pub fn scan_directory(dir: &Path) -> Result<Vec<GalleryEntry>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths
        .into_iter()
        .map(|path| GalleryEntry {
            alt: description_from_stem(&path),
            src: path.to_string_lossy().into_owned(),
            category: None,
        })
        .collect())
}
