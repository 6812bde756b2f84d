//! Gallery input sources.
//!
//! This module turns what the user pointed us at into an [`ImageSequence`]:
//! - a manifest file (`.toml` or `.json`) listing images in order
//! - a directory whose image files become the gallery
//!
//! The sequence is built once; nothing is re-read while the gallery runs.

use crate::model::error::SourceError;
use crate::model::ImageSequence;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod directory;
pub mod manifest;

pub use directory::scan_directory;
pub use manifest::{load_manifest, parse_manifest, ManifestFormat};

/// One gallery item before it becomes an `ImageRef`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GalleryEntry {
    /// Image location.
    pub src: String,
    /// Alternative text and caption.
    #[serde(default)]
    pub alt: String,
    /// Optional filter category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Where the gallery comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySource {
    /// Ordered manifest file.
    Manifest(PathBuf),
    /// Directory of image files.
    Directory(PathBuf),
}

impl GallerySource {
    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        match self {
            GallerySource::Manifest(path) | GallerySource::Directory(path) => path,
        }
    }

    /// Read the source and build the image sequence.
    ///
    /// # Errors
    ///
    /// Propagates manifest and directory read failures.
    pub fn load(&self) -> Result<ImageSequence, SourceError> {
        let entries = match self {
            GallerySource::Manifest(path) => load_manifest(path)?,
            GallerySource::Directory(path) => scan_directory(path)?,
        };
        let sequence = build_sequence(entries);
        info!(
            source = %self.path().display(),
            images = sequence.len(),
            "Gallery loaded"
        );
        Ok(sequence)
    }
}

/// Decide how to read `path`. `None` means the current directory.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if the path does not exist.
pub fn detect_gallery_source(path: Option<PathBuf>) -> Result<GallerySource, SourceError> {
    let path = path.unwrap_or_else(|| PathBuf::from("."));

    if !path.exists() {
        return Err(SourceError::NotFound { path });
    }

    if path.is_dir() {
        Ok(GallerySource::Directory(path))
    } else {
        Ok(GallerySource::Manifest(path))
    }
}

/// Build the sequence, skipping entries without a source.
///
/// Positions are assigned after skipping, so they stay contiguous.
pub fn build_sequence(entries: Vec<GalleryEntry>) -> ImageSequence {
    let kept = entries.into_iter().enumerate().filter_map(|(i, entry)| {
        if entry.src.trim().is_empty() {
            warn!(entry = i + 1, "Skipping gallery entry without a source");
            None
        } else {
            Some((entry.src, entry.alt, entry.category))
        }
    });
    ImageSequence::from_entries(kept)
}
