//! Terminal image lightbox (lightbox)
//!
//! Browse an ordered gallery of images: a thumbnail grid with a modal
//! lightbox overlay that navigates circularly by keyboard, buttons, or
//! horizontal drag gestures, with a two-phase slide transition.
//!
//! The core is the [`gallery::GalleryController`], a state machine over an
//! immutable [`model::ImageSequence`] that renders through the
//! [`gallery::PresentationSurface`] trait. The terminal UI in [`view`] is one
//! such surface.

pub mod config;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
