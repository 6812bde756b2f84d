//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::model::ImageSequence;
use crate::state::AppState;
use crate::view::constants::CELL_WIDTH_PX;
use crate::view::{CliArgs, TerminalSurface, TuiApp};
use crate::gallery::GalleryController;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)]
impl AcceptanceTestHarness {
    /// Gallery of `count` images named `photo-{n}.jpg` on an 80x24 screen.
    pub fn with_images(count: usize) -> Self {
        let sequence = ImageSequence::from_pairs(
            (1..=count).map(|n| (format!("photo-{n}.jpg"), format!("Photo {n}"))),
        );
        Self::from_sequence(sequence, CliArgs::default(), 80, 24)
    }

    /// Harness over an explicit sequence, args, and terminal size.
    pub fn from_sequence(sequence: ImageSequence, args: CliArgs, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let mut app = TuiApp::new_for_test(terminal, sequence, args);
        // Render once so hit-testing sees the real layout.
        let _ = app.render_test();
        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns true if app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Press and release the left button at the same cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press at `from_column`, drag, release at `to_column` on `row`.
    pub fn drag(&mut self, from_column: u16, to_column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), from_column, row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to_column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to_column, row);
    }

    /// Send a scroll-wheel event.
    pub fn scroll(&mut self, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.mouse(kind, 10, 5);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Columns a drag must exceed to count as a swipe.
    pub fn swipe_columns(&self) -> u16 {
        let threshold = self.controller().options().swipe_threshold.value();
        (threshold / CELL_WIDTH_PX).floor() as u16 + 1
    }

    /// Run every transition step due within `elapsed` from now.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.app.tick_test(Instant::now() + elapsed)
    }

    /// Run all pending transition steps.
    pub fn settle(&mut self) -> usize {
        self.advance(Duration::from_secs(5))
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn controller(&self) -> &GalleryController<TerminalSurface> {
        self.app.controller()
    }

    pub fn surface(&self) -> &TerminalSurface {
        self.app.controller().surface()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Render like the event loop does: rows in view get their details read
    /// and are drawn again.
    pub fn refresh_to_string(&mut self) -> String {
        self.app
            .refresh_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
