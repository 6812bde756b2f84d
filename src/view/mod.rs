//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod grid;
mod help;
mod helpers;
mod layout;
mod lightbox;
mod styles;
pub mod surface;

pub use grid::{render_grid, DETAILS_PLACEHOLDER};
pub use help::render_help_overlay;
pub use helpers::truncate_to_width;
pub use layout::{centered_rect, GridLayout, LightboxHit, LightboxLayout};
pub use lightbox::render_lightbox;
pub use styles::{ColorConfig, GalleryStyles};
pub use surface::{ImageDetails, TerminalSurface};

use crate::config::keybindings::{format_key, KeyBindings};
use crate::gallery::{GalleryController, GalleryFilter, GalleryOptions, LightboxKey, SwipeTracker};
use crate::model::error::SourceError;
use crate::model::{AppError, ImageSequence, KeyAction};
use crate::source::GallerySource;
use crate::state::AppState;
use constants::{CELL_WIDTH_PX, FRAME_INTERVAL, IDLE_POLL_INTERVAL};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Gallery source error
    #[error("Gallery error: {0}")]
    Source(#[from] SourceError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    controller: GalleryController<TerminalSurface>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: GalleryStyles,
    swipe: SwipeTracker,
    /// Cell where the current left-button press started.
    press: Option<(u16, u16)>,
    /// Last rendered frame area (for mouse hit testing)
    last_area: Rect,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(sequence: ImageSequence, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::from_parts(terminal, sequence, args))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Polls with a short timeout only while a slide is moving or a
    /// transition step is pending; otherwise the loop idles.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.refresh()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let mut dirty = false;

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            let fired = self.controller.tick(now);
            if dirty || fired > 0 || self.controller.surface().is_moving(now) {
                self.refresh()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn from_parts(terminal: Terminal<B>, sequence: ImageSequence, args: CliArgs) -> Self {
        let surface = TerminalSurface::new(args.gallery.timing.slide_duration);
        let controller = GalleryController::with_options(sequence, surface, args.gallery);

        let mut app_state = AppState::new(controller.images());
        app_state.apply_filter(args.filter, controller.images());
        app_state.help_visible = args.show_help;

        let last_area = match terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width.max(1), size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        };

        let mut app = Self {
            terminal,
            controller,
            app_state,
            key_bindings: args.key_bindings,
            styles: GalleryStyles::with_color_config(args.color),
            swipe: SwipeTracker::new(),
            press: None,
            last_area,
        };

        if let Some(index) = args.open_at {
            if index < app.controller.images().len() {
                app.app_state.focus_position(index);
                app.controller.open(index);
            } else {
                warn!(
                    index = index + 1,
                    images = app.controller.images().len(),
                    "Requested start image does not exist"
                );
            }
        }

        app
    }

    /// How long to wait for input before the next tick.
    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.controller.surface().is_moving(now) {
            return FRAME_INTERVAL;
        }
        match self.controller.next_deadline() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL_INTERVAL),
            None => IDLE_POLL_INTERVAL,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            if self.controller.is_open() {
                // Unbound keys still reach the lightbox, which ignores them.
                self.controller.handle_key(&LightboxKey::Other(format_key(&key)));
            }
            trace!(?key, "Unbound key");
            return false;
        };

        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help | KeyAction::Close => self.app_state.help_visible = false,
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            _ => {
                if let Some(lightbox_key) = LightboxKey::from_action(action) {
                    let was_open = self.controller.is_open();
                    self.controller.handle_key(&lightbox_key);
                    self.follow_closed_lightbox(was_open);
                } else if self.controller.surface().is_scroll_locked() {
                    trace!(%action, "Grid is locked behind the lightbox");
                } else {
                    self.handle_grid_action(action);
                }
            }
        }

        false
    }

    fn handle_grid_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::FocusNext => self.app_state.focus_next(),
            KeyAction::FocusPrevious => self.app_state.focus_previous(),
            KeyAction::Activate => {
                if let Some(position) = self.app_state.focused_position() {
                    self.controller.open(position);
                }
            }
            KeyAction::CycleFilter => {
                self.app_state.cycle_filter(self.controller.images());
                info!(filter = %self.app_state.filter(), "Filter changed");
            }
            _ => {}
        }
        let rows = GridLayout::new(self.last_area).visible_rows();
        self.app_state.ensure_focus_visible(rows);
    }

    /// After the lightbox closes, move grid focus to the image last shown
    /// and drop any drag still in progress.
    fn follow_closed_lightbox(&mut self, was_open: bool) {
        if was_open && !self.controller.is_open() {
            self.swipe.cancel();
            self.press = None;
            self.app_state.focus_position(self.controller.current_index());
        }
    }

    /// Handle a single mouse event
    ///
    /// While the lightbox is open, a horizontal drag is a swipe and a click
    /// hits the buttons or the backdrop. Otherwise clicks open thumbnails and
    /// the wheel moves grid focus.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.app_state.help_visible = false;
            }
            return;
        }

        if self.controller.is_open() {
            self.handle_lightbox_mouse(mouse);
        } else {
            self.handle_grid_mouse(mouse);
        }
    }

    fn handle_lightbox_mouse(&mut self, mouse: MouseEvent) {
        let x = f64::from(mouse.column) * CELL_WIDTH_PX;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(x);
                self.press = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.press.take();
                if let Some((start_x, end_x)) = self.swipe.finish(x) {
                    if self.controller.handle_swipe(start_x, end_x).is_some() {
                        return;
                    }
                }
                if press == Some((mouse.column, mouse.row)) {
                    self.handle_lightbox_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    fn handle_lightbox_click(&mut self, column: u16, row: u16) {
        let hit = LightboxLayout::new(self.last_area).hit(column, row);
        debug!(?hit, column, row, "Lightbox click");
        match hit {
            LightboxHit::Previous => self.controller.previous(),
            LightboxHit::Next => self.controller.next(),
            LightboxHit::Close | LightboxHit::Backdrop => {
                self.controller.close();
                self.follow_closed_lightbox(true);
            }
            LightboxHit::Panel => {}
        }
    }

    fn handle_grid_mouse(&mut self, mouse: MouseEvent) {
        if self.controller.surface().is_scroll_locked() {
            return;
        }
        let layout = GridLayout::new(self.last_area);
        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.focus_previous(),
            MouseEventKind::ScrollDown => self.app_state.focus_next(),
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked = layout
                    .row_at(self.app_state.scroll_offset(), mouse.column, mouse.row)
                    .and_then(|row| self.app_state.focus_row(row));
                if let Some(position) = clicked {
                    self.controller.open(position);
                }
            }
            _ => return,
        }
        self.app_state.ensure_focus_visible(layout.visible_rows());
    }

    /// Shortest key bound to `action`, for the status bar.
    fn hint_key(&self, action: KeyAction) -> String {
        self.key_bindings
            .keys_for(action)
            .into_iter()
            .min_by_key(|k| k.chars().count())
            .unwrap_or_else(|| "-".to_string())
    }

    fn status_hint(&self) -> String {
        if self.controller.is_open() {
            format!(
                " {}/{}: previous/next · drag: swipe · {}: close",
                self.hint_key(KeyAction::PreviousImage),
                self.hint_key(KeyAction::NextImage),
                self.hint_key(KeyAction::Close),
            )
        } else {
            format!(
                " {}: open · {}: filter · {}: help · {}: quit",
                self.hint_key(KeyAction::Activate),
                self.hint_key(KeyAction::CycleFilter),
                self.hint_key(KeyAction::Help),
                self.hint_key(KeyAction::Quit),
            )
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width.max(1), size.height);
        self.last_area = area;

        let grid_layout = GridLayout::new(area);
        let lightbox_layout = LightboxLayout::new(area);
        self.app_state.ensure_focus_visible(grid_layout.visible_rows());

        let hint = self.status_hint();
        let now = Instant::now();
        let controller = &self.controller;
        let app_state = &self.app_state;
        let styles = &self.styles;
        let key_bindings = &self.key_bindings;

        self.terminal.draw(|frame| {
            render_grid(
                frame,
                &grid_layout,
                controller.images(),
                app_state,
                controller.surface(),
                styles,
                &hint,
            );
            render_lightbox(frame, &lightbox_layout, controller.surface(), styles, now);
            if app_state.help_visible {
                render_help_overlay(frame, key_bindings, styles);
            }
        })?;

        Ok(())
    }

    /// Draw, then read details for thumbnails that came into view and draw
    /// again so their placeholders are replaced.
    fn refresh(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        if self.reveal_visible_thumbnails() > 0 {
            self.draw()?;
        }
        Ok(())
    }

    /// Read details for grid rows on screen that have none cached.
    ///
    /// Rows scrolled out of view or hidden by the filter are left alone.
    /// Returns how many sources were read.
    fn reveal_visible_thumbnails(&mut self) -> usize {
        let rows = GridLayout::new(self.last_area).visible_rows();
        let images = self.controller.images();
        let sources: Vec<String> = self
            .app_state
            .positions_in_view(rows)
            .iter()
            .filter_map(|position| images.get(*position))
            .map(|image| image.source().to_string())
            .collect();

        let surface = self.controller.surface_mut();
        let revealed = sources.iter().filter(|source| surface.reveal(source)).count();
        if revealed > 0 {
            debug!(revealed, cached = surface.cached_count(), "Read details for thumbnails in view");
        }
        revealed
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips raw mode and the alternate screen.
    pub(crate) fn new_for_test(terminal: Terminal<B>, sequence: ImageSequence, args: CliArgs) -> Self {
        Self::from_parts(terminal, sequence, args)
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn controller(&self) -> &GalleryController<TerminalSurface> {
        &self.controller
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Run deferred transition steps as if `now` had been reached.
    pub(crate) fn tick_test(&mut self, now: Instant) -> usize {
        self.controller.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Draw the way the event loop does, reading details for rows in view.
    pub(crate) fn refresh_test(&mut self) -> Result<(), TuiError> {
        self.refresh()
    }

    pub(crate) fn status_hint_test(&self) -> String {
        self.status_hint()
    }

    pub(crate) fn poll_timeout_test(&self, now: Instant) -> Duration {
        self.poll_timeout(now)
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of resolved configuration that shapes the viewer's initial
/// state. Built in main.rs after config precedence has been applied.
pub struct CliArgs {
    /// Swipe threshold and transition timing.
    pub gallery: GalleryOptions,
    /// Active key bindings, defaults plus overrides.
    pub key_bindings: KeyBindings,
    /// Color output setting.
    pub color: ColorConfig,
    /// Show the help overlay on startup.
    pub show_help: bool,
    /// Open the lightbox at this position on startup.
    pub open_at: Option<usize>,
    /// Initial grid filter.
    pub filter: GalleryFilter,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            gallery: GalleryOptions::default(),
            key_bindings: KeyBindings::default(),
            color: ColorConfig::from_env_and_args(false),
            show_help: false,
            open_at: None,
            filter: GalleryFilter::All,
        }
    }
}

/// Load the gallery and run the TUI until the user quits
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: &GallerySource, args: CliArgs) -> Result<(), TuiError> {
    let sequence = source.load()?;
    let mut app = TuiApp::new(sequence, args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn create_test_app(count: usize) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let sequence = ImageSequence::from_pairs(
            (1..=count).map(|i| (format!("img{i}.jpg"), format!("Image {i}"))),
        );
        TuiApp::new_for_test(terminal, sequence, CliArgs::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn tui_error_from_source_error() {
        let err: TuiError = SourceError::NotFound {
            path: "x".into(),
        }
        .into();
        assert!(err.to_string().contains("Gallery not found"));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app(3);
        assert!(app.handle_key_test(key(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app(3);
        assert!(app.handle_key_test(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app(3);
        assert!(!app.handle_key_test(key(KeyCode::Char('z'))));
    }

    #[test]
    fn enter_opens_focused_thumbnail() {
        let mut app = create_test_app(3);
        app.handle_key_test(key(KeyCode::Down));
        app.handle_key_test(key(KeyCode::Enter));

        assert!(app.controller().is_open());
        assert_eq!(app.controller().current_index(), 1);
        assert!(app.controller().surface().is_scroll_locked());
    }

    #[test]
    fn grid_keys_are_ignored_while_lightbox_open() {
        let mut app = create_test_app(3);
        app.handle_key_test(key(KeyCode::Enter));
        app.handle_key_test(key(KeyCode::Down));

        assert_eq!(app.app_state().focused_position(), Some(0));
    }

    #[test]
    fn closing_moves_focus_to_last_viewed_image() {
        let mut app = create_test_app(4);
        app.handle_key_test(key(KeyCode::Enter));
        app.handle_key_test(key(KeyCode::Left));
        app.handle_key_test(key(KeyCode::Esc));

        assert!(!app.controller().is_open());
        assert_eq!(app.app_state().focused_position(), Some(3));
    }

    #[test]
    fn arrows_do_nothing_while_closed() {
        let mut app = create_test_app(3);
        app.handle_key_test(key(KeyCode::Right));

        assert!(!app.controller().is_open());
        assert_eq!(app.controller().current_index(), 0);
    }

    #[test]
    fn help_swallows_navigation_until_dismissed() {
        let mut app = create_test_app(3);
        app.handle_key_test(key(KeyCode::Char('?')));
        assert!(app.app_state().help_visible);

        app.handle_key_test(key(KeyCode::Enter));
        assert!(!app.controller().is_open());

        app.handle_key_test(key(KeyCode::Esc));
        assert!(!app.app_state().help_visible);
    }

    #[test]
    fn open_at_starts_in_lightbox() {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let sequence = ImageSequence::from_pairs([("a.jpg", "A"), ("b.jpg", "B")]);
        let args = CliArgs {
            open_at: Some(1),
            ..CliArgs::default()
        };
        let app = TuiApp::new_for_test(terminal, sequence, args);

        assert!(app.controller().is_open());
        assert_eq!(app.controller().current_index(), 1);
        assert_eq!(app.app_state().focused_position(), Some(1));
    }

    #[test]
    fn open_at_out_of_range_stays_closed() {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let sequence = ImageSequence::from_pairs([("a.jpg", "A")]);
        let args = CliArgs {
            open_at: Some(5),
            ..CliArgs::default()
        };
        let app = TuiApp::new_for_test(terminal, sequence, args);

        assert!(!app.controller().is_open());
    }

    #[test]
    fn status_hint_depends_on_lightbox() {
        let mut app = create_test_app(2);
        assert_eq!(app.status_hint_test(), " Enter: open · f: filter · ?: help · q: quit");

        app.handle_key_test(key(KeyCode::Enter));
        assert_eq!(app.status_hint_test(), " h/l: previous/next · drag: swipe · Esc: close");
    }

    #[test]
    fn poll_timeout_tracks_pending_transition() {
        let mut app = create_test_app(3);
        let now = Instant::now();
        assert_eq!(app.poll_timeout_test(now), IDLE_POLL_INTERVAL);

        app.handle_key_test(key(KeyCode::Enter));
        app.handle_key_test(key(KeyCode::Right));
        assert!(app.poll_timeout_test(Instant::now()) <= FRAME_INTERVAL);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app(3);
        app.render_test().unwrap();
        app.handle_key_test(key(KeyCode::Enter));
        app.render_test().unwrap();
    }

    #[test]
    fn only_thumbnails_in_view_get_details() {
        let mut app = create_test_app(40);
        app.refresh_test().unwrap();

        let surface = app.controller().surface();
        assert_eq!(surface.cached_count(), 22);
        assert!(surface.details("img22.jpg").is_some());
        assert!(surface.details("img23.jpg").is_none());
        assert!(surface.details("img40.jpg").is_none());
    }

    #[test]
    fn scrolling_reads_new_rows_once() {
        let mut app = create_test_app(40);
        app.refresh_test().unwrap();

        for _ in 0..24 {
            app.handle_key_test(key(KeyCode::Down));
        }
        app.refresh_test().unwrap();
        assert_eq!(app.app_state().scroll_offset(), 3);
        assert_eq!(app.controller().surface().cached_count(), 25);
        assert!(app.controller().surface().details("img26.jpg").is_none());

        assert_eq!(app.reveal_visible_thumbnails(), 0);
        assert_eq!(app.controller().surface().cached_count(), 25);
    }
}
