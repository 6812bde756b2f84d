//! Displayable image references.
//!
//! An `ImageRef` is immutable once collected. Its identity is its position
//! in the owning [`ImageSequence`](super::ImageSequence).

use std::fmt;

/// Whether `source` names something other than a local file: a URL with a
/// scheme (`https://...`) or an inline `data:` URI.
///
/// Such sources are used verbatim and never touched on disk.
pub fn is_remote_source(source: &str) -> bool {
    source.contains("://") || source.starts_with("data:")
}

/// One displayable image: where it lives, what it shows, and where it sits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    source: String,
    description: String,
    position: usize,
    category: Option<String>,
}

impl ImageRef {
    /// Create an image reference at `position`.
    ///
    /// Only [`ImageSequence`](super::ImageSequence) assigns positions, so this
    /// stays crate-private.
    pub(crate) fn new(
        source: impl Into<String>,
        description: impl Into<String>,
        position: usize,
        category: Option<String>,
    ) -> Self {
        Self {
            source: source.into(),
            description: description.into(),
            position,
            category,
        }
    }

    /// Source location (file path or URL).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Alternative text, also used as the caption.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Index of this image in its sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the source is a URL or `data:` URI rather than a file.
    pub fn is_remote(&self) -> bool {
        is_remote_source(&self.source)
    }

    /// Category label used by the thumbnail filter, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Accessibility label for the thumbnail that opens this image.
    ///
    /// Positions are shown 1-indexed.
    pub fn thumbnail_label(&self) -> String {
        format!("Open image {} in lightbox", self.position + 1)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.position + 1, self.description, self.source)
    }
}
