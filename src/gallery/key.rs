//! Keys the open lightbox reacts to.

use crate::model::KeyAction;
use std::convert::Infallible;
use std::str::FromStr;

/// A key press as seen by the lightbox.
///
/// Parses the DOM `KeyboardEvent.key` names, so hosts that receive those
/// strings can forward them directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LightboxKey {
    /// Close the lightbox.
    Escape,
    /// Show the next image.
    ArrowRight,
    /// Show the previous image.
    ArrowLeft,
    /// Anything else; ignored by the controller.
    Other(String),
}

impl FromStr for LightboxKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Escape" | "Esc" => LightboxKey::Escape,
            "ArrowRight" => LightboxKey::ArrowRight,
            "ArrowLeft" => LightboxKey::ArrowLeft,
            other => LightboxKey::Other(other.to_string()),
        })
    }
}

impl LightboxKey {
    /// Lightbox key equivalent of a bound action, if it has one.
    pub fn from_action(action: KeyAction) -> Option<Self> {
        match action {
            KeyAction::Close => Some(LightboxKey::Escape),
            KeyAction::NextImage => Some(LightboxKey::ArrowRight),
            KeyAction::PreviousImage => Some(LightboxKey::ArrowLeft),
            _ => None,
        }
    }
}
