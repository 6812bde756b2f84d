//! Tests for help overlay widget

use super::*;
use crate::test_harness::buffer_to_string;
use crate::view::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::BTreeMap;

fn render(bindings: &KeyBindings, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let styles = GalleryStyles::with_color_config(ColorConfig::from_env_and_args(true));
    terminal
        .draw(|frame| render_help_overlay(frame, bindings, &styles))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn render_help_overlay_shows_bordered_modal() {
    let output = render(&KeyBindings::default(), 80, 30);

    assert!(output.contains("Keyboard Shortcuts"));
    assert!(output.contains('┌') && output.contains('┘'));
    assert!(output.contains("Press Esc or ? to close"));
}

#[test]
fn render_help_overlay_lists_groups() {
    let output = render(&KeyBindings::default(), 100, 40);

    for group in ["Lightbox", "Gallery", "Application", "Mouse"] {
        assert!(output.contains(group), "missing group {group}");
    }
}

#[test]
fn help_content_shows_default_keys() {
    let styles = GalleryStyles::with_color_config(ColorConfig::from_env_and_args(true));
    let text: Vec<String> = build_help_content(&KeyBindings::default(), &styles)
        .iter()
        .map(|line| line.to_string())
        .collect();

    assert!(text.iter().any(|l| l.contains("l/→") && l.contains("Next image")));
    assert!(text.iter().any(|l| l.contains("Esc") && l.contains("Close lightbox")));
    assert!(text.iter().any(|l| l.contains("Ctrl+c/q") && l.contains("Quit")));
}

#[test]
fn help_content_reflects_overrides() {
    let mut overrides = BTreeMap::new();
    overrides.insert("next".to_string(), vec!["n".to_string()]);
    let bindings = KeyBindings::default().with_overrides(&overrides).unwrap();
    let styles = GalleryStyles::with_color_config(ColorConfig::from_env_and_args(true));

    let text: Vec<String> = build_help_content(&bindings, &styles)
        .iter()
        .map(|line| line.to_string())
        .collect();

    let next_line = text.iter().find(|l| l.contains("Next image")).unwrap();
    assert!(next_line.contains("  n "));
    assert!(!next_line.contains('→'));
}

#[test]
fn small_terminal_does_not_panic() {
    let _ = render(&KeyBindings::default(), 10, 4);
}
