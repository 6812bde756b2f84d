//! Terminal-backed presentation surface.
//!
//! Stores what the controller asked to display and interpolates slide frames
//! over time so the renderer can draw the image card mid-animation.

use crate::gallery::{PresentationSurface, SlideFrame};
use crate::model::{is_remote_source, ImageRef};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// What the surface knows about an image file without decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDetails {
    /// File size, when the source is a readable local file.
    pub size_bytes: Option<u64>,
}

impl ImageDetails {
    fn read(source: &str) -> Self {
        if is_remote_source(source) {
            return Self { size_bytes: None };
        }
        let size_bytes = std::fs::metadata(Path::new(source)).ok().map(|m| m.len());
        Self { size_bytes }
    }
}

/// Slide animation in progress, from `from_offset` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlideMotion {
    from_offset: f64,
    target: SlideFrame,
    started: Instant,
}

/// Surface that the terminal renderer reads back each frame.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    image: Option<(String, String)>,
    caption: String,
    aria_label: String,
    visible: bool,
    scroll_locked: bool,
    motion: SlideMotion,
    slide_duration: Duration,
    details: HashMap<String, ImageDetails>,
}

impl TerminalSurface {
    /// Surface whose animated phases last `slide_duration`.
    pub fn new(slide_duration: Duration) -> Self {
        Self {
            image: None,
            caption: String::new(),
            aria_label: String::new(),
            visible: false,
            scroll_locked: false,
            motion: SlideMotion {
                from_offset: 0.0,
                target: SlideFrame::REST,
                started: Instant::now(),
            },
            slide_duration,
            details: HashMap::new(),
        }
    }

    /// `(source, description)` of the displayed image.
    pub fn image(&self) -> Option<(&str, &str)> {
        self.image.as_ref().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    /// Caption text last set.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Accessibility label last set.
    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the grid behind is scroll-locked.
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Last frame applied.
    pub fn target_frame(&self) -> SlideFrame {
        self.motion.target
    }

    /// Cached details for `source`, if it was displayed, preloaded or
    /// revealed in the grid.
    pub fn details(&self, source: &str) -> Option<ImageDetails> {
        self.details.get(source).copied()
    }

    /// Number of sources with cached details.
    pub fn cached_count(&self) -> usize {
        self.details.len()
    }

    /// Read details for a thumbnail that just scrolled into view.
    ///
    /// Each source is read at most once. Returns `false` if its details were
    /// already cached.
    pub fn reveal(&mut self, source: &str) -> bool {
        if self.details.contains_key(source) {
            return false;
        }
        let details = self.cache_details(source);
        trace!(source, size = ?details.size_bytes, "Thumbnail came into view");
        true
    }

    /// Fraction of the current animated phase completed at `now`, in `0..=1`.
    fn progress(&self, now: Instant) -> f64 {
        if !self.motion.target.animated || self.slide_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.motion.started);
        (elapsed.as_secs_f64() / self.slide_duration.as_secs_f64()).min(1.0)
    }

    /// Horizontal offset (percent of width) the image is drawn at.
    pub fn offset_at(&self, now: Instant) -> f64 {
        let to = f64::from(self.motion.target.offset_percent);
        let from = self.motion.from_offset;
        from + (to - from) * self.progress(now)
    }

    /// Whether the image should be drawn at full opacity at `now`.
    ///
    /// Fading frames count as transparent from the moment they are applied;
    /// settling frames become opaque once halfway in.
    pub fn is_opaque_at(&self, now: Instant) -> bool {
        let target = self.motion.target;
        if !target.opaque {
            return false;
        }
        !target.animated || self.progress(now) >= 0.5
    }

    /// Whether an animated phase is still moving at `now`.
    pub fn is_moving(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn cache_details(&mut self, source: &str) -> ImageDetails {
        if let Some(details) = self.details.get(source) {
            return *details;
        }
        let details = ImageDetails::read(source);
        self.details.insert(source.to_string(), details);
        details
    }
}

impl PresentationSurface for TerminalSurface {
    fn set_image(&mut self, source: &str, description: &str) {
        self.cache_details(source);
        self.image = Some((source.to_string(), description.to_string()));
    }

    fn set_caption_text(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn set_aria_label(&mut self, text: &str) {
        self.aria_label = text.to_string();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn apply_slide(&mut self, frame: SlideFrame) {
        let now = Instant::now();
        trace!(offset = frame.offset_percent, animated = frame.animated, "Slide frame");
        self.motion = SlideMotion {
            from_offset: self.offset_at(now),
            target: frame,
            started: now,
        };
    }

    fn preload(&mut self, image: &ImageRef) {
        if !self.details.contains_key(image.source()) {
            let details = self.cache_details(image.source());
            debug!(source = image.source(), size = ?details.size_bytes, "Preloaded neighbour");
        }
    }
}
