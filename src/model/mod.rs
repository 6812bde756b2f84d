//! Domain model (pure data, no I/O).

pub mod error;
pub mod image_ref;
pub mod key_action;
pub mod sequence;

pub use error::{AppError, SourceError};
pub use image_ref::{is_remote_source, ImageRef};
pub use key_action::{KeyAction, UnknownAction};
pub use sequence::ImageSequence;
