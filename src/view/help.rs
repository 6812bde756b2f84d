//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all bindings grouped by category.
//! Keys are read from the active [`KeyBindings`], so overrides from the
//! config file show up here too.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::empty_line;
use super::layout::centered_rect;
use super::styles::GalleryStyles;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 16;

const GROUPS: [(&str, &[KeyAction]); 3] = [
    (
        "Lightbox",
        &[KeyAction::NextImage, KeyAction::PreviousImage, KeyAction::Close],
    ),
    (
        "Gallery",
        &[
            KeyAction::FocusNext,
            KeyAction::FocusPrevious,
            KeyAction::Activate,
            KeyAction::CycleFilter,
        ],
    ),
    ("Application", &[KeyAction::Help, KeyAction::Quit]),
];

const MOUSE_HINTS: [(&str, &str); 3] = [
    ("Drag ← / →", "Swipe to next / previous image"),
    ("Click ‹ ›", "Previous / next image"),
    ("Click outside", "Close the lightbox"),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, styles: &GalleryStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.panel_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
pub(crate) fn build_help_content(bindings: &KeyBindings, styles: &GalleryStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (title, actions) in GROUPS {
        lines.push(Line::from(Span::styled(title, styles.header)));
        for action in actions {
            let keys = bindings.keys_for(*action);
            let keys = if keys.is_empty() {
                "(unbound)".to_string()
            } else {
                keys.join("/")
            };
            lines.push(entry_line(&keys, action.description(), styles));
        }
        lines.push(empty_line());
    }

    lines.push(Line::from(Span::styled("Mouse", styles.header)));
    for (gesture, description) in MOUSE_HINTS {
        lines.push(entry_line(gesture, description, styles));
    }

    lines
}

fn entry_line(keys: &str, description: &str, styles: &GalleryStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), styles.help_key),
        Span::styled(description.to_string(), styles.thumbnail),
    ])
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
