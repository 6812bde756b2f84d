//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Approximate width of one terminal cell in pointer units.
///
/// Mouse drags arrive in columns; multiplying by this puts them on the same
/// scale as the swipe threshold, so a threshold of 50 needs a drag of more
/// than six columns.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Height of the grid header in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the lightbox panel.
pub const LIGHTBOX_WIDTH_PERCENT: u16 = 80;

/// Height percentage of the lightbox panel.
pub const LIGHTBOX_HEIGHT_PERCENT: u16 = 70;

/// Width of the previous/next buttons in columns.
pub const NAV_BUTTON_WIDTH: u16 = 5;

/// Width of the close button in columns.
pub const CLOSE_BUTTON_WIDTH: u16 = 3;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Redraw interval while a slide is animating (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll timeout when nothing is moving.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
