//! Screen layout and hit testing.
//!
//! Pure geometry: computes where the grid and lightbox pieces go for a frame
//! area, and maps mouse positions back to what was clicked.

use super::constants::{
    CLOSE_BUTTON_WIDTH, HEADER_HEIGHT, LIGHTBOX_HEIGHT_PERCENT, LIGHTBOX_WIDTH_PERCENT,
    NAV_BUTTON_WIDTH, STATUS_BAR_HEIGHT,
};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Areas of the thumbnail grid screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Title line.
    pub header: Rect,
    /// Thumbnail rows.
    pub list: Rect,
    /// Key hint line.
    pub status: Rect,
}

impl GridLayout {
    /// Split `area` into header, list and status bar.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);
        Self {
            header: chunks[0],
            list: chunks[1],
            status: chunks[2],
        }
    }

    /// Rows available for thumbnails.
    pub fn visible_rows(&self) -> usize {
        usize::from(self.list.height)
    }

    /// Row of the visible list under the pointer, accounting for scrolling.
    pub fn row_at(&self, scroll_offset: usize, column: u16, row: u16) -> Option<usize> {
        if !contains(self.list, column, row) {
            return None;
        }
        Some(scroll_offset + usize::from(row - self.list.y))
    }
}

/// Areas of the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxLayout {
    /// Whole frame; everything outside `panel` is backdrop.
    pub backdrop: Rect,
    /// Bordered panel holding the image.
    pub panel: Rect,
    /// Region the image card slides within.
    pub image: Rect,
    /// Caption line under the image.
    pub caption: Rect,
    /// Source and file size line.
    pub details: Rect,
    /// `‹` button.
    pub previous: Rect,
    /// `›` button.
    pub next: Rect,
    /// `✕` button.
    pub close: Rect,
}

/// What a click on the lightbox landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxHit {
    /// The `‹` button.
    Previous,
    /// The `›` button.
    Next,
    /// The `✕` button.
    Close,
    /// Inside the panel but not on a button.
    Panel,
    /// Outside the panel.
    Backdrop,
}

impl LightboxLayout {
    /// Center the panel in `area` and place its buttons.
    pub fn new(area: Rect) -> Self {
        let panel = centered_rect(LIGHTBOX_WIDTH_PERCENT, LIGHTBOX_HEIGHT_PERCENT, area);
        let inner = panel.inner(Margin::new(1, 1));
        let nav_band = NAV_BUTTON_WIDTH + 1;
        let middle_y = inner.y + inner.height.saturating_sub(2) / 2;

        let previous = Rect::new(inner.x, middle_y, NAV_BUTTON_WIDTH.min(inner.width), 1);
        let next = Rect::new(
            inner.right().saturating_sub(NAV_BUTTON_WIDTH),
            middle_y,
            NAV_BUTTON_WIDTH.min(inner.width),
            1,
        );
        let close = Rect::new(
            panel.right().saturating_sub(CLOSE_BUTTON_WIDTH + 1),
            panel.y,
            CLOSE_BUTTON_WIDTH.min(panel.width),
            1,
        );
        let image = Rect::new(
            inner.x + nav_band.min(inner.width),
            inner.y,
            inner.width.saturating_sub(nav_band * 2),
            inner.height.saturating_sub(2),
        );
        let caption = Rect::new(inner.x, inner.bottom().saturating_sub(2), inner.width, 1.min(inner.height));
        let details = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1.min(inner.height));

        Self {
            backdrop: area,
            panel,
            image,
            caption,
            details,
            previous,
            next,
            close,
        }
    }

    /// Classify a click at `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> LightboxHit {
        if contains(self.close, column, row) {
            LightboxHit::Close
        } else if contains(self.previous, column, row) {
            LightboxHit::Previous
        } else if contains(self.next, column, row) {
            LightboxHit::Next
        } else if contains(self.panel, column, row) {
            LightboxHit::Panel
        } else {
            LightboxHit::Backdrop
        }
    }
}

/// Calculate a rect centered in `area` covering the given percentages.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
