//! Lightbox overlay widget.
//!
//! Terminals cannot show the image itself, so the panel draws a card with
//! the image's description and source. The card slides horizontally by the
//! surface's current offset and dims while faded.

use super::helpers::{format_size, truncate_to_width};
use super::layout::LightboxLayout;
use super::styles::GalleryStyles;
use super::surface::TerminalSurface;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use std::time::Instant;

/// Render the overlay if the surface is visible.
pub fn render_lightbox(
    frame: &mut Frame,
    layout: &LightboxLayout,
    surface: &TerminalSurface,
    styles: &GalleryStyles,
    now: Instant,
) {
    if !surface.is_visible() {
        return;
    }

    frame.render_widget(Clear, layout.panel);
    let title = format!(" {} ", truncate_to_width(surface.aria_label(), usize::from(layout.panel.width.saturating_sub(8))));
    frame.render_widget(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles.panel_border),
        layout.panel,
    );

    render_image_card(frame, layout.image, surface, styles, now);
    render_buttons(frame, layout, styles);

    let caption_width = usize::from(layout.caption.width);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_to_width(surface.caption(), caption_width),
            styles.caption,
        )))
        .alignment(Alignment::Center),
        layout.caption,
    );

    if let Some(details) = details_line(surface) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_to_width(&details, usize::from(layout.details.width)),
                styles.muted,
            )))
            .alignment(Alignment::Center),
            layout.details,
        );
    }
}

fn details_line(surface: &TerminalSurface) -> Option<String> {
    let (source, _) = surface.image()?;
    let size = surface
        .details(source)
        .and_then(|d| d.size_bytes)
        .map(|bytes| format!(" · {}", format_size(bytes)))
        .unwrap_or_default();
    Some(format!("{source}{size}"))
}

/// Columns the card is shifted right by for `offset_percent` of `width`.
pub(crate) fn offset_columns(offset_percent: f64, width: u16) -> i32 {
    (offset_percent * f64::from(width) / 100.0).round() as i32
}

/// Part of `area` shifted by `shift` columns that is still inside `area`,
/// plus how many columns were cut from its left edge.
pub(crate) fn shifted_clip(area: Rect, shift: i32) -> Option<(Rect, u16)> {
    let width = i32::from(area.width);
    if shift.abs() >= width {
        return None;
    }
    let (x, clipped_left) = if shift >= 0 {
        (i32::from(area.x) + shift, 0)
    } else {
        (i32::from(area.x), -shift)
    };
    let visible = width - shift.abs();
    Some((
        Rect::new(
            u16::try_from(x).ok()?,
            area.y,
            u16::try_from(visible).ok()?,
            area.height,
        ),
        u16::try_from(clipped_left).ok()?,
    ))
}

fn render_image_card(
    frame: &mut Frame,
    area: Rect,
    surface: &TerminalSurface,
    styles: &GalleryStyles,
    now: Instant,
) {
    let Some((source, description)) = surface.image() else {
        return;
    };
    let shift = offset_columns(surface.offset_at(now), area.width);
    let Some((clip, clipped_left)) = shifted_clip(area, shift) else {
        return;
    };

    let style = if surface.is_opaque_at(now) {
        styles.image_card
    } else {
        styles.image_card_faded
    };
    let inner_width = usize::from(area.width.saturating_sub(2));
    let mut lines = vec![Line::from(""); usize::from(area.height.saturating_sub(4) / 2)];
    lines.push(Line::from("▣").alignment(Alignment::Center));
    lines.push(Line::from(truncate_to_width(description, inner_width)).alignment(Alignment::Center));
    lines.push(Line::from(truncate_to_width(source, inner_width)).alignment(Alignment::Center));

    let card = Paragraph::new(lines)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    // Draw the full card off-screen, then copy the part still inside `area`.
    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
    card.render(scratch.area, &mut scratch);
    let buf = frame.buffer_mut();
    for dy in 0..clip.height {
        for dx in 0..clip.width {
            buf[(clip.x + dx, clip.y + dy)] = scratch[(dx + clipped_left, dy)].clone();
        }
    }
}

fn render_buttons(frame: &mut Frame, layout: &LightboxLayout, styles: &GalleryStyles) {
    for (label, area) in [(" ‹ ", layout.previous), (" › ", layout.next), ("✕", layout.close)] {
        if area.width == 0 || area.height == 0 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(Span::styled(label, styles.button)).alignment(Alignment::Center),
            area,
        );
    }
}
