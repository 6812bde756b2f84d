//! Lightbox controller.
//!
//! Owns the image sequence and the view state, reacts to navigation intents,
//! and drives a [`PresentationSurface`]. All state changes are applied
//! synchronously; the slide transition only touches the surface and runs
//! from deferred steps drained by [`GalleryController::tick`].
//!
//! Preconditions (`open` with an out-of-range index, navigating a closed or
//! empty gallery) are programming errors and panic.

use super::key::LightboxKey;
use super::surface::PresentationSurface;
use super::swipe::{classify_swipe, SwipeDirection, SwipeThreshold};
use super::transition::{Direction, SlideFrame, TransitionQueue, TransitionTiming};
use crate::model::{ImageRef, ImageSequence};
use std::time::Instant;
use tracing::{debug, trace};

/// Which image is selected and whether the overlay is open.
///
/// When `is_open` is true, `current_index` is a valid index into the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewState {
    current_index: usize,
    is_open: bool,
}

impl ViewState {
    /// Position of the displayed image.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the overlay is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Tunables for a controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GalleryOptions {
    /// Travel a gesture must exceed to navigate.
    pub swipe_threshold: SwipeThreshold,
    /// Delays and duration of the slide phases.
    pub timing: TransitionTiming,
}

/// Lightbox state machine over an immutable image sequence.
#[derive(Debug)]
pub struct GalleryController<S> {
    images: ImageSequence,
    state: ViewState,
    surface: S,
    options: GalleryOptions,
    transitions: TransitionQueue,
    /// Bumped on every state change; deferred steps from older epochs are stale.
    epoch: u64,
}

impl<S: PresentationSurface> GalleryController<S> {
    /// Closed controller with default options.
    pub fn new(images: ImageSequence, surface: S) -> Self {
        Self::with_options(images, surface, GalleryOptions::default())
    }

    /// Closed controller with explicit `options`.
    pub fn with_options(images: ImageSequence, surface: S, options: GalleryOptions) -> Self {
        Self {
            images,
            state: ViewState::default(),
            surface,
            options,
            transitions: TransitionQueue::new(),
            epoch: 0,
        }
    }

    // ===== Accessors =====

    /// Snapshot of the view state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Whether the lightbox is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Position of the current image. Kept after closing.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The images, in display order.
    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    /// Options the controller was built with.
    pub fn options(&self) -> GalleryOptions {
        self.options
    }

    /// The image currently shown, if the lightbox is open.
    pub fn current_image(&self) -> Option<&ImageRef> {
        if self.state.is_open {
            self.images.get(self.state.current_index)
        } else {
            None
        }
    }

    /// The surface being driven.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for host-side caches.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, dropping the controller.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Accessibility label for the current image.
    ///
    /// Form: `"Image {n} of {len}: {description}"`, 1-indexed.
    pub fn aria_label(&self) -> Option<String> {
        self.images.get(self.state.current_index).map(|image| {
            format!(
                "Image {} of {}: {}",
                self.state.current_index + 1,
                self.images.len(),
                image.description()
            )
        })
    }

    /// Neighbours of the current image as `(previous, next)` positions.
    pub fn adjacent_indices(&self) -> Option<(usize, usize)> {
        adjacent_indices(self.state.current_index, self.images.len())
    }

    /// Earliest deferred transition step, for the host's timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.transitions.next_due()
    }

    /// Whether transition steps are still queued.
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    // ===== Transitions =====

    /// Open the lightbox at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position in the sequence.
    pub fn open(&mut self, index: usize) {
        assert!(
            index < self.images.len(),
            "open({index}) out of range for gallery of {} images",
            self.images.len()
        );

        self.state.current_index = index;
        self.state.is_open = true;
        self.epoch += 1;
        debug!(index, epoch = self.epoch, "Opening lightbox");

        self.render();
        self.surface.apply_slide(SlideFrame::REST);
        self.surface.show();
        self.surface.lock_scroll();
    }

    /// Close the lightbox. No-op when already closed.
    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }

        self.state.is_open = false;
        self.epoch += 1;
        debug!(index = self.state.current_index, "Closing lightbox");

        self.surface.hide();
        self.surface.unlock_scroll();
    }

    /// Advance to the next image, wrapping after the last.
    ///
    /// # Panics
    ///
    /// Panics if the lightbox is closed or the gallery is empty.
    pub fn next(&mut self) {
        self.assert_navigable("next");
        self.state.current_index = (self.state.current_index + 1) % self.images.len();
        self.after_navigation(Direction::Forward);
    }

    /// Go back to the previous image, wrapping before the first.
    ///
    /// # Panics
    ///
    /// Panics if the lightbox is closed or the gallery is empty.
    pub fn previous(&mut self) {
        self.assert_navigable("previous");
        let len = self.images.len();
        self.state.current_index = (self.state.current_index + len - 1) % len;
        self.after_navigation(Direction::Backward);
    }

    /// Classify a horizontal gesture and navigate accordingly.
    ///
    /// Travel beyond the threshold toward the left shows the next image,
    /// toward the right the previous one. Gestures only arrive from the open
    /// overlay, so this is a no-op while closed.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> Option<SwipeDirection> {
        if !self.state.is_open {
            return None;
        }

        let direction = classify_swipe(start_x, end_x, self.options.swipe_threshold)?;
        trace!(start_x, end_x, ?direction, "Swipe recognised");
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
        Some(direction)
    }

    /// Dispatch a key press. No-op while closed.
    ///
    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, key: &LightboxKey) -> bool {
        if !self.state.is_open {
            return false;
        }

        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::Other(_) => return false,
        }
        true
    }

    /// Apply every deferred transition step due at `now`.
    ///
    /// Steps scheduled before the latest open, close or navigation are
    /// dropped. Returns the number of steps applied.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        for step in self.transitions.drain_due(now) {
            if step.epoch != self.epoch {
                trace!(step_epoch = step.epoch, epoch = self.epoch, "Dropping stale transition step");
                continue;
            }
            self.surface.apply_slide(step.frame);
            applied += 1;
        }
        applied
    }

    // ===== Internals =====

    fn assert_navigable(&self, operation: &str) {
        assert!(self.state.is_open, "{operation}() called while lightbox is closed");
        assert!(!self.images.is_empty(), "{operation}() called on an empty gallery");
    }

    fn after_navigation(&mut self, direction: Direction) {
        self.epoch += 1;
        debug!(
            index = self.state.current_index,
            ?direction,
            epoch = self.epoch,
            "Navigated"
        );
        self.render();
        self.start_transition(direction, Instant::now());
    }

    fn render(&mut self) {
        let Some(image) = self.images.get(self.state.current_index) else {
            return;
        };
        self.surface.set_image(image.source(), image.description());
        self.surface.set_caption_text(image.description());
        if let Some(label) = self.aria_label() {
            self.surface.set_aria_label(&label);
        }
        self.preload_adjacent();
    }

    fn preload_adjacent(&mut self) {
        let Some((previous, next)) = self.adjacent_indices() else {
            return;
        };
        // Galleries of one or two images have overlapping neighbours.
        let mut targets = vec![next];
        if previous != next {
            targets.push(previous);
        }
        for position in targets {
            if position == self.state.current_index {
                continue;
            }
            if let Some(image) = self.images.get(position) {
                self.surface.preload(image);
            }
        }
    }

    fn start_transition(&mut self, direction: Direction, now: Instant) {
        let frame = self
            .transitions
            .schedule(direction, self.epoch, now, self.options.timing);
        self.surface.apply_slide(frame);
    }
}

/// `(previous, next)` neighbours of `current` in a circular sequence of `len`.
///
/// `None` for an empty sequence.
pub fn adjacent_indices(current: usize, len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    Some(((current + len - 1) % len, (current + 1) % len))
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
