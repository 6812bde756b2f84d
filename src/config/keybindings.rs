//! Keyboard bindings configuration.

use super::loader::ConfigError;
use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap};

/// Maps keyboard events to domain actions.
///
/// Provides arrow and vim-style defaults with per-action overrides from the
/// `[keybindings]` config table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted symbols such as `?` carry the
    /// SHIFT modifier, so a character miss is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        }
    }

    /// Replace the keys of each named action.
    ///
    /// An overridden action loses all of its default keys. A key already
    /// bound to another action is taken over.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unknown action names or
    /// unparseable key specs.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        for (name, specs) in overrides {
            let action: KeyAction = name.parse().map_err(|e: crate::model::UnknownAction| {
                ConfigError::InvalidValue {
                    key: format!("keybindings.{name}"),
                    reason: e.to_string(),
                }
            })?;

            let keys = specs
                .iter()
                .map(|spec| {
                    parse_key_spec(spec).ok_or_else(|| ConfigError::InvalidValue {
                        key: format!("keybindings.{name}"),
                        reason: format!("unrecognised key {spec:?}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            self.bindings.retain(|_, bound| *bound != action);
            for key in keys {
                self.bindings.insert(key, action);
            }
        }
        Ok(self)
    }

    /// Human-readable keys bound to `action`, sorted for stable display.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| format_key(key))
            .collect();
        keys.sort();
        keys
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };

        // Lightbox navigation
        kb.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextImage);
        kb.bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextImage);
        kb.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PreviousImage);
        kb.bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PreviousImage);
        kb.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Close);

        // Thumbnail focus
        kb.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::FocusNext);
        kb.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::FocusNext);
        kb.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::FocusNext);
        kb.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::FocusPrevious);
        kb.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::FocusPrevious);
        kb.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::FocusPrevious);
        kb.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate);
        kb.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::Activate);
        kb.bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::CycleFilter);

        // Application
        kb.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        kb.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        kb
    }
}

/// Parse a key spec such as `"n"`, `"Esc"`, `"Ctrl+d"` or `"Shift+Tab"`.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').collect();
    // A literal "+" key splits into two empty parts.
    let key_part = if spec.ends_with("++") || spec == "+" {
        parts.truncate(parts.len().saturating_sub(2));
        "+"
    } else {
        parts.pop()?
    };

    for modifier in parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,
        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = key_part.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if ch.is_ascii_uppercase() {
                    modifiers |= KeyModifiers::SHIFT;
                }
                KeyCode::Char(ch)
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Render a key event the way the help overlay shows it.
pub fn format_key(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => return "Shift+Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else if key.modifiers.contains(KeyModifiers::ALT) {
        format!("Alt+{base}")
    } else {
        base
    }
}
