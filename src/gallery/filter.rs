//! Category filter for the thumbnail grid.
//!
//! Filtering hides thumbnails only. The lightbox keeps walking the full
//! sequence collected at startup.

use crate::model::{ImageRef, ImageSequence};
use std::fmt;

/// Which thumbnails the grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    /// Every image.
    #[default]
    All,
    /// Only images tagged with this category.
    Category(String),
}

impl GalleryFilter {
    /// Build from a user-supplied name. `"all"` (any case) means no filter.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("all") {
            GalleryFilter::All
        } else {
            GalleryFilter::Category(name.to_string())
        }
    }

    /// Whether `image` passes the filter.
    pub fn matches(&self, image: &ImageRef) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(wanted) => image.category() == Some(wanted.as_str()),
        }
    }

    /// Next filter in the cycle All -> each category (first-seen order) -> All.
    pub fn cycle(&self, sequence: &ImageSequence) -> Self {
        let categories = sequence.categories();
        match self {
            GalleryFilter::All => categories
                .first()
                .map_or(GalleryFilter::All, |c| GalleryFilter::Category((*c).to_string())),
            GalleryFilter::Category(current) => categories
                .iter()
                .position(|c| *c == current)
                .and_then(|i| categories.get(i + 1))
                .map_or(GalleryFilter::All, |c| GalleryFilter::Category((*c).to_string())),
        }
    }

    /// Positions of the images this filter lets through.
    pub fn visible_positions(&self, sequence: &ImageSequence) -> Vec<usize> {
        sequence
            .iter()
            .filter(|image| self.matches(image))
            .map(ImageRef::position)
            .collect()
    }

    /// Short name for headers and logs.
    pub fn label(&self) -> &str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Category(name) => name,
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
