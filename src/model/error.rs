//! Error types for the lightbox application.
//!
//! The gallery controller itself has no runtime errors: misuse of its
//! preconditions is a programming error and panics. Everything recoverable
//! lives in the shell around it and is modelled here with `thiserror`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error wrapping all shell failures
//!   - [`SourceError`] - gallery manifest or directory loading failures
//!   - [`ConfigError`](crate::config::ConfigError) - configuration file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - `std::io::Error` - terminal failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain errors convert via `From`, so shell code composes with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the gallery.
    #[error("Failed to load gallery: {0}")]
    Source(#[from] SourceError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialise logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when building the image sequence from disk.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The gallery path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use lightbox::model::error::SourceError;
    ///
    /// let err = SourceError::NotFound { path: PathBuf::from("/tmp/missing.toml") };
    /// assert!(err.to_string().contains("/tmp/missing.toml"));
    /// ```
    #[error("Gallery not found: {path}")]
    NotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The manifest has an extension we cannot parse.
    #[error("Unsupported manifest format {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Offending manifest path.
        path: PathBuf,
    },

    /// The manifest could not be parsed.
    #[error("Invalid manifest {path}: {reason}")]
    InvalidManifest {
        /// Manifest path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Generic I/O failure while reading the gallery.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_into_app_error() {
        let err: AppError = SourceError::NotFound {
            path: PathBuf::from("gallery.toml"),
        }
        .into();

        assert!(matches!(err, AppError::Source(SourceError::NotFound { .. })));
        assert_eq!(
            err.to_string(),
            "Failed to load gallery: Gallery not found: gallery.toml"
        );
    }

    #[test]
    fn io_error_converts_into_terminal_variant() {
        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }

    #[test]
    fn invalid_manifest_reports_path_and_reason() {
        let err = SourceError::InvalidManifest {
            path: PathBuf::from("g.json"),
            reason: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("g.json"));
        assert!(msg.contains("expected value"));
    }
}
