//! Domain-level keyboard actions independent of key bindings.

use std::fmt;
use std::str::FromStr;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Lightbox
    /// Show the next image. Default: →/l
    NextImage,
    /// Show the previous image. Default: ←/h
    PreviousImage,
    /// Close the lightbox, or dismiss help. Default: Esc
    Close,

    // Thumbnail grid
    /// Move focus to the next visible thumbnail. Default: ↓/j/Tab
    FocusNext,
    /// Move focus to the previous visible thumbnail. Default: ↑/k/Shift+Tab
    FocusPrevious,
    /// Open the focused thumbnail in the lightbox. Default: Enter/Space
    Activate,
    /// Cycle the category filter. Default: f
    CycleFilter,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Every action, in help-overlay order.
    pub const ALL: [KeyAction; 9] = [
        KeyAction::NextImage,
        KeyAction::PreviousImage,
        KeyAction::Close,
        KeyAction::FocusNext,
        KeyAction::FocusPrevious,
        KeyAction::Activate,
        KeyAction::CycleFilter,
        KeyAction::Help,
        KeyAction::Quit,
    ];

    /// Name used in the `[keybindings]` config table.
    pub fn name(self) -> &'static str {
        match self {
            KeyAction::NextImage => "next",
            KeyAction::PreviousImage => "previous",
            KeyAction::Close => "close",
            KeyAction::FocusNext => "focus_next",
            KeyAction::FocusPrevious => "focus_previous",
            KeyAction::Activate => "activate",
            KeyAction::CycleFilter => "cycle_filter",
            KeyAction::Help => "help",
            KeyAction::Quit => "quit",
        }
    }

    /// Short human description for the help overlay.
    pub fn description(self) -> &'static str {
        match self {
            KeyAction::NextImage => "Next image",
            KeyAction::PreviousImage => "Previous image",
            KeyAction::Close => "Close lightbox",
            KeyAction::FocusNext => "Focus next thumbnail",
            KeyAction::FocusPrevious => "Focus previous thumbnail",
            KeyAction::Activate => "Open focused thumbnail",
            KeyAction::CycleFilter => "Cycle category filter",
            KeyAction::Help => "Toggle this help",
            KeyAction::Quit => "Quit",
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown action name in configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for KeyAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_parses_from_its_name() {
        for action in KeyAction::ALL {
            assert_eq!(action.name().parse::<KeyAction>(), Ok(action));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "zoom".parse::<KeyAction>().unwrap_err();
        assert_eq!(err, UnknownAction("zoom".to_string()));
        assert_eq!(err.to_string(), "unknown key action: zoom");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = KeyAction::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), KeyAction::ALL.len());
    }
}
