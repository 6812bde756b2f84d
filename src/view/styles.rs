//! Gallery styling configuration.
//!
//! Provides the colors for thumbnails, the lightbox overlay and its buttons.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GalleryStyles =====

/// Styles used across the grid and the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryStyles {
    /// Title line.
    pub header: Style,
    /// Unfocused thumbnail row.
    pub thumbnail: Style,
    /// Focused thumbnail row.
    pub focused_thumbnail: Style,
    /// Category tag.
    pub category: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Lightbox panel border.
    pub panel_border: Style,
    /// Image card at full opacity.
    pub image_card: Style,
    /// Image card while faded out mid-transition.
    pub image_card_faded: Style,
    /// Caption under the image.
    pub caption: Style,
    /// Stand-in for thumbnail details not read yet.
    pub placeholder: Style,
    /// Previous, next and close buttons.
    pub button: Style,
    /// Key names in the help overlay.
    pub help_key: Style,
}

impl GalleryStyles {
    /// Styles with colors, unless disabled by `config`.
    ///
    /// Without colors, emphasis falls back to modifiers so focus and fading
    /// stay visible on monochrome terminals.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                thumbnail: Style::default().fg(Color::White),
                focused_thumbnail: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                category: Style::default().fg(Color::Magenta),
                muted: Style::default().fg(Color::Gray),
                panel_border: Style::default().fg(Color::Cyan),
                image_card: Style::default().fg(Color::White).bg(Color::DarkGray),
                image_card_faded: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                caption: Style::default().fg(Color::Yellow),
                placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                button: Style::default().fg(Color::Black).bg(Color::Gray),
                help_key: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                thumbnail: Style::default(),
                focused_thumbnail: Style::default().add_modifier(Modifier::REVERSED),
                category: Style::default(),
                muted: Style::default(),
                panel_border: Style::default(),
                image_card: Style::default(),
                image_card_faded: Style::default().add_modifier(Modifier::DIM),
                caption: Style::default(),
                placeholder: Style::default().add_modifier(Modifier::DIM),
                button: Style::default().add_modifier(Modifier::REVERSED),
                help_key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for GalleryStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
