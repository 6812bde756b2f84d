//! Thumbnail grid widget.
//!
//! One row per visible image: number, description, category, file size, and
//! the accessible label announcing what activating the row does.
//!
//! File details are only read once a row has been on screen, so rows that
//! have just scrolled in show a dimmed placeholder until then.

use super::helpers::{format_size, truncate_to_width};
use super::layout::GridLayout;
use super::styles::GalleryStyles;
use super::surface::TerminalSurface;
use crate::model::ImageSequence;
use crate::state::AppState;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown in place of the file size until the row's details are read.
pub const DETAILS_PLACEHOLDER: &str = "░░░";

/// Render header, thumbnail rows, and status hints.
pub fn render_grid(
    frame: &mut Frame,
    layout: &GridLayout,
    sequence: &ImageSequence,
    state: &AppState,
    surface: &TerminalSurface,
    styles: &GalleryStyles,
    status_hint: &str,
) {
    let header = format!(
        " Gallery · {} images · filter: {} ",
        sequence.len(),
        state.filter()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(header, styles.header))),
        layout.header,
    );

    let lines = thumbnail_lines(sequence, state, surface, styles, layout);
    frame.render_widget(Paragraph::new(lines), layout.list);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status_hint.to_string(), styles.muted))),
        layout.status,
    );
}

fn thumbnail_lines(
    sequence: &ImageSequence,
    state: &AppState,
    surface: &TerminalSurface,
    styles: &GalleryStyles,
    layout: &GridLayout,
) -> Vec<Line<'static>> {
    let visible = state.visible_positions();
    if visible.is_empty() {
        return vec![Line::from(Span::styled(
            "No images match this filter",
            styles.muted,
        ))
        .alignment(Alignment::Center)];
    }

    let width = usize::from(layout.list.width);
    let focused = state.focused_position();

    state
        .positions_in_view(layout.visible_rows())
        .iter()
        .filter_map(|position| sequence.get(*position))
        .map(|image| {
            let is_focused = focused == Some(image.position());
            let marker = if is_focused { "▶" } else { " " };
            let number = format!("{marker}{:>4}. ", image.position() + 1);
            let category = image
                .category()
                .map(|c| format!(" [{c}]"))
                .unwrap_or_default();
            let (size, size_style) = match surface.details(image.source()) {
                Some(details) => (
                    details.size_bytes.map(|b| format!("  {}", format_size(b))).unwrap_or_default(),
                    styles.muted,
                ),
                None => (format!("  {DETAILS_PLACEHOLDER}"), styles.placeholder),
            };
            let label = format!("  {}", image.thumbnail_label());

            let fixed = number.width() + category.width() + size.width() + label.width();
            let description = truncate_to_width(image.description(), width.saturating_sub(fixed).max(8));

            let base = if is_focused {
                styles.focused_thumbnail
            } else {
                styles.thumbnail
            };
            Line::from(vec![
                Span::styled(number, base),
                Span::styled(description, base),
                Span::styled(category, styles.category),
                Span::styled(size, size_style),
                Span::styled(label, styles.muted),
            ])
        })
        .collect()
}
