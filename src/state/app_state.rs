//! Application state for the thumbnail grid (pure).
//!
//! The lightbox's own state lives in the gallery controller. This struct
//! only tracks what sits behind it: which thumbnails the filter shows, which
//! one has keyboard focus, how far the grid is scrolled, and whether help is
//! up.

use crate::gallery::GalleryFilter;
use crate::model::ImageSequence;

/// Grid-side UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filter: GalleryFilter,
    /// Positions passing the filter, in sequence order.
    visible: Vec<usize>,
    /// Index into `visible` of the focused thumbnail.
    focus: Option<usize>,
    /// First visible grid row.
    scroll_offset: usize,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// State showing every image with the first one focused.
    pub fn new(sequence: &ImageSequence) -> Self {
        let mut state = Self {
            filter: GalleryFilter::All,
            visible: Vec::new(),
            focus: None,
            scroll_offset: 0,
            help_visible: false,
        };
        state.apply_filter(GalleryFilter::All, sequence);
        state
    }

    /// Active grid filter.
    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    /// Positions of the thumbnails currently shown.
    pub fn visible_positions(&self) -> &[usize] {
        &self.visible
    }

    /// Whether the image at `position` passes the filter.
    pub fn is_visible(&self, position: usize) -> bool {
        self.visible.contains(&position)
    }

    /// Sequence position of the focused thumbnail.
    pub fn focused_position(&self) -> Option<usize> {
        self.focus.and_then(|i| self.visible.get(i).copied())
    }

    /// Row index (within the visible list) of the focused thumbnail.
    pub fn focused_row(&self) -> Option<usize> {
        self.focus
    }

    /// First visible row of the grid.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Positions on screen in a viewport of `rows` lines at the current scroll.
    pub fn positions_in_view(&self, rows: usize) -> &[usize] {
        let start = self.scroll_offset.min(self.visible.len());
        let end = start.saturating_add(rows).min(self.visible.len());
        &self.visible[start..end]
    }

    /// Move focus to the next visible thumbnail, wrapping at the end.
    pub fn focus_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.focus = Some(self.focus.map_or(0, |i| (i + 1) % self.visible.len()));
    }

    /// Move focus to the previous visible thumbnail, wrapping at the start.
    pub fn focus_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let len = self.visible.len();
        self.focus = Some(self.focus.map_or(len - 1, |i| (i + len - 1) % len));
    }

    /// Focus the thumbnail at `position`. Hidden positions are refused.
    pub fn focus_position(&mut self, position: usize) -> bool {
        match self.visible.iter().position(|p| *p == position) {
            Some(row) => {
                self.focus = Some(row);
                true
            }
            None => false,
        }
    }

    /// Focus the thumbnail shown on visible row `row`.
    pub fn focus_row(&mut self, row: usize) -> Option<usize> {
        let position = *self.visible.get(row)?;
        self.focus = Some(row);
        Some(position)
    }

    /// Switch filter, keeping focus on the same image when it stays visible.
    pub fn apply_filter(&mut self, filter: GalleryFilter, sequence: &ImageSequence) {
        let previously_focused = self.focused_position();
        self.visible = filter.visible_positions(sequence);
        self.filter = filter;
        self.scroll_offset = 0;
        self.focus = previously_focused
            .and_then(|p| self.visible.iter().position(|v| *v == p))
            .or(if self.visible.is_empty() { None } else { Some(0) });
    }

    /// Advance to the next filter in the cycle.
    pub fn cycle_filter(&mut self, sequence: &ImageSequence) {
        let next = self.filter.cycle(sequence);
        self.apply_filter(next, sequence);
    }

    /// Scroll so the focused row fits in a viewport of `rows` lines.
    pub fn ensure_focus_visible(&mut self, rows: usize) {
        let Some(focus) = self.focus else {
            self.scroll_offset = 0;
            return;
        };
        if rows == 0 {
            return;
        }
        if focus < self.scroll_offset {
            self.scroll_offset = focus;
        } else if focus >= self.scroll_offset + rows {
            self.scroll_offset = focus + 1 - rows;
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
