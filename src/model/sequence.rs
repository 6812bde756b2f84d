//! Ordered, immutable image sequence.

use super::image_ref::ImageRef;

/// Ordered sequence of images, built once at startup.
///
/// Insertion order is preserved and each image's position is its index.
/// There is no way to add or remove images after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<ImageRef>,
}

impl ImageSequence {
    /// Build a sequence from `(source, description)` pairs.
    pub fn from_pairs<I, S, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self::from_entries(
            pairs
                .into_iter()
                .map(|(source, description)| (source, description, None)),
        )
    }

    /// Build a sequence from `(source, description, category)` triples.
    pub fn from_entries<I, S, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, D, Option<String>)>,
        S: Into<String>,
        D: Into<String>,
    {
        let images = entries
            .into_iter()
            .enumerate()
            .map(|(position, (source, description, category))| {
                ImageRef::new(source, description, position, category)
            })
            .collect();
        Self { images }
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the gallery has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Images in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.images.iter()
    }

    /// Images as a slice.
    pub fn as_slice(&self) -> &[ImageRef] {
        &self.images
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.images.iter().filter_map(ImageRef::category) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a ImageSequence {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
