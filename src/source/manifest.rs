//! Gallery manifests.
//!
//! TOML:
//!
//! ```toml
//! [[image]]
//! src = "img/terrace.jpg"
//! alt = "Sunny terrace"
//! category = "interior"
//! ```
//!
//! JSON: an array of objects with the same fields.

use super::GalleryEntry;
use crate::model::error::SourceError;
use crate::model::is_remote_source;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    #[serde(default, rename = "image")]
    images: Vec<GalleryEntry>,
}

/// Manifest syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `[[image]]` tables.
    Toml,
    /// Array of image objects.
    Json,
}

impl ManifestFormat {
    /// Detect the format from `path`'s extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ManifestFormat::Toml),
            "json" => Some(ManifestFormat::Json),
            _ => None,
        }
    }
}

/// Read and parse a manifest, resolving relative sources against its directory.
///
/// # Errors
///
/// Returns [`SourceError::UnsupportedFormat`] for unknown extensions,
/// [`SourceError::Io`] when the file cannot be read, and
/// [`SourceError::InvalidManifest`] for syntax errors.
pub fn load_manifest(path: &Path) -> Result<Vec<GalleryEntry>, SourceError> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_manifest(&contents, format).map_err(|reason| SourceError::InvalidManifest {
        path: path.to_path_buf(),
        reason,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(entries
        .into_iter()
        .map(|entry| GalleryEntry {
            src: resolve_source(base, &entry.src),
            ..entry
        })
        .collect())
}

/// Parse manifest text without touching the filesystem.
pub fn parse_manifest(contents: &str, format: ManifestFormat) -> Result<Vec<GalleryEntry>, String> {
    match format {
        ManifestFormat::Toml => toml::from_str::<TomlManifest>(contents)
            .map(|manifest| manifest.images)
            .map_err(|e| e.to_string()),
        ManifestFormat::Json => {
            serde_json::from_str::<Vec<GalleryEntry>>(contents).map_err(|e| e.to_string())
        }
    }
}

/// URLs, `data:` URIs and absolute paths pass through; relative paths join `base`.
fn resolve_source(base: &Path, src: &str) -> String {
    if src.is_empty() || is_remote_source(src) || Path::new(src).is_absolute() {
        return src.to_string();
    }
    let joined: PathBuf = base.join(src);
    joined.to_string_lossy().into_owned()
}
