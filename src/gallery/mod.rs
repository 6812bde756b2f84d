//! Lightbox core (pure).
//!
//! The controller and its collaborators have no knowledge of terminals,
//! files or clocks beyond `Instant`. All transitions are testable headless
//! with a [`RecordingSurface`].

pub mod controller;
pub mod filter;
pub mod key;
pub mod surface;
pub mod swipe;
pub mod transition;

pub use controller::{adjacent_indices, GalleryController, GalleryOptions, ViewState};
pub use filter::GalleryFilter;
pub use key::LightboxKey;
pub use surface::{PresentationSurface, RecordingSurface, SurfaceCall};
pub use swipe::{classify_swipe, SwipeDirection, SwipeThreshold, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use transition::{Direction, SlideFrame, TransitionQueue, TransitionTiming};
