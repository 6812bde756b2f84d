//! Presentation surface abstraction.
//!
//! The controller never touches a real view. It pushes every visible effect
//! through [`PresentationSurface`], which lets the same controller drive a
//! terminal overlay, a browser DOM binding, or a recording stub in tests.

use super::transition::SlideFrame;
use crate::model::ImageRef;

/// External view the gallery controller renders to.
///
/// Implementations only display what they are told; they never mutate the
/// controller's view state.
pub trait PresentationSurface {
    /// Display the image at `source` with `description` as alternative text.
    fn set_image(&mut self, source: &str, description: &str);

    /// Set the caption shown under the image.
    fn set_caption_text(&mut self, text: &str);

    /// Set the accessibility label of the overlay.
    fn set_aria_label(&mut self, text: &str);

    /// Make the overlay visible.
    fn show(&mut self);

    /// Hide the overlay.
    fn hide(&mut self);

    /// Stop the content behind the overlay from scrolling.
    fn lock_scroll(&mut self);

    /// Let the content behind the overlay scroll again.
    fn unlock_scroll(&mut self);

    /// Apply one phase of the slide transition to the displayed image.
    fn apply_slide(&mut self, frame: SlideFrame);

    /// Hint that `image` is adjacent to the current one and will likely be
    /// shown next. Surfaces without a cache can ignore it.
    fn preload(&mut self, _image: &ImageRef) {}
}

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// `set_image(source, description)`.
    SetImage {
        /// Image location.
        source: String,
        /// Alternative text.
        description: String,
    },
    /// `set_caption_text`.
    SetCaption(String),
    /// `set_aria_label`.
    SetAriaLabel(String),
    /// `show`.
    Show,
    /// `hide`.
    Hide,
    /// `lock_scroll`.
    LockScroll,
    /// `unlock_scroll`.
    UnlockScroll,
    /// `apply_slide`.
    Slide(SlideFrame),
    /// `preload`, by image position.
    Preload(usize),
}

/// Headless surface that records every call in order.
///
/// Useful for hosts without a display and for asserting render effects.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Surface with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Most recent accessibility label, if any was set.
    pub fn last_aria_label(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetAriaLabel(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// Most recent image source, if any was set.
    pub fn last_image_source(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetImage { source, .. } => Some(source.as_str()),
            _ => None,
        })
    }

    /// Slide frames applied so far, oldest first.
    pub fn slides(&self) -> Vec<SlideFrame> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Slide(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_image(&mut self, source: &str, description: &str) {
        self.calls.push(SurfaceCall::SetImage {
            source: source.to_string(),
            description: description.to_string(),
        });
    }

    fn set_caption_text(&mut self, text: &str) {
        self.calls.push(SurfaceCall::SetCaption(text.to_string()));
    }

    fn set_aria_label(&mut self, text: &str) {
        self.calls.push(SurfaceCall::SetAriaLabel(text.to_string()));
    }

    fn show(&mut self) {
        self.calls.push(SurfaceCall::Show);
    }

    fn hide(&mut self) {
        self.calls.push(SurfaceCall::Hide);
    }

    fn lock_scroll(&mut self) {
        self.calls.push(SurfaceCall::LockScroll);
    }

    fn unlock_scroll(&mut self) {
        self.calls.push(SurfaceCall::UnlockScroll);
    }

    fn apply_slide(&mut self, frame: SlideFrame) {
        self.calls.push(SurfaceCall::Slide(frame));
    }

    fn preload(&mut self, image: &ImageRef) {
        self.calls.push(SurfaceCall::Preload(image.position()));
    }
}
