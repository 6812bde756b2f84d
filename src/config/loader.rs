//! Configuration file loading with precedence handling.

use crate::gallery::{GalleryOptions, SwipeThreshold, TransitionTiming, DEFAULT_SWIPE_THRESHOLD};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LIGHTBOX_CONFIG";

/// Environment variable overriding the swipe threshold.
pub const SWIPE_THRESHOLD_ENV_VAR: &str = "LIGHTBOX_SWIPE_THRESHOLD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is not acceptable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Dotted key of the offending setting.
        key: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// One key or several keys for an action in `[keybindings]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeySpecs {
    /// A single key spec.
    One(String),
    /// Several key specs bound to the same action.
    Many(Vec<String>),
}

impl KeySpecs {
    fn into_vec(self) -> Vec<String> {
        match self {
            KeySpecs::One(spec) => vec![spec],
            KeySpecs::Many(specs) => specs,
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/lightbox/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Minimum horizontal drag, in pointer units, that counts as a swipe.
    #[serde(default)]
    pub swipe_threshold: Option<f64>,

    /// Milliseconds the image takes to slide out before it is reset.
    #[serde(default)]
    pub slide_out_ms: Option<u64>,

    /// Milliseconds between the reset jump and the slide back in.
    #[serde(default)]
    pub slide_reset_ms: Option<u64>,

    /// Length of each animated slide phase in milliseconds.
    #[serde(default)]
    pub slide_in_ms: Option<u64>,

    /// Show the help overlay on startup.
    #[serde(default)]
    pub show_help: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-action key overrides, e.g. `next = ["n", "Right"]`.
    #[serde(default)]
    pub keybindings: Option<BTreeMap<String, KeySpecs>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Swipe threshold in pointer units.
    pub swipe_threshold: f64,
    /// Slide-out phase length in milliseconds.
    pub slide_out_ms: u64,
    /// Delay between reset and slide-in in milliseconds.
    pub slide_reset_ms: u64,
    /// Animated phase length in milliseconds.
    pub slide_in_ms: u64,
    /// Show help on startup.
    pub show_help: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key overrides by action name.
    pub keybindings: BTreeMap<String, Vec<String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let timing = TransitionTiming::default();
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            slide_out_ms: millis(timing.reset_after),
            slide_reset_ms: millis(timing.settle_after),
            slide_in_ms: millis(timing.slide_duration),
            show_help: false,
            log_file_path: default_log_path(),
            keybindings: BTreeMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Controller tunables derived from this config.
    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            swipe_threshold: SwipeThreshold::new(self.swipe_threshold),
            timing: TransitionTiming {
                reset_after: Duration::from_millis(self.slide_out_ms),
                settle_after: Duration::from_millis(self.slide_reset_ms),
                slide_duration: Duration::from_millis(self.slide_in_ms),
            },
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/lightbox/lightbox.log` on Unix-like systems,
/// or the platform equivalent elsewhere. Falls back to the current directory
/// if no state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("lightbox").join("lightbox.log")
    } else {
        PathBuf::from("lightbox.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    validate(&config)?;

    Ok(Some(config))
}

fn validate(config: &ConfigFile) -> Result<(), ConfigError> {
    if let Some(threshold) = config.swipe_threshold {
        check_threshold("swipe_threshold", threshold)?;
    }
    Ok(())
}

fn check_threshold(key: &str, threshold: f64) -> Result<f64, ConfigError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("must be a non-negative number, got {threshold}"),
        })
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/lightbox/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lightbox").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LIGHTBOX_CONFIG` environment variable
/// 3. Default path `~/.config/lightbox/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        swipe_threshold: config.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        slide_out_ms: config.slide_out_ms.unwrap_or(defaults.slide_out_ms),
        slide_reset_ms: config.slide_reset_ms.unwrap_or(defaults.slide_reset_ms),
        slide_in_ms: config.slide_in_ms.unwrap_or(defaults.slide_in_ms),
        show_help: config.show_help.unwrap_or(defaults.show_help),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config
            .keybindings
            .map(|table| {
                table
                    .into_iter()
                    .map(|(action, specs)| (action, specs.into_vec()))
                    .collect()
            })
            .unwrap_or(defaults.keybindings),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LIGHTBOX_SWIPE_THRESHOLD`: override the swipe threshold
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a variable is set to something
/// the config file would also reject.
pub fn apply_env_overrides(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    apply_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Same as [`apply_env_overrides`] with an injectable variable lookup.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for unparseable or negative values.
pub fn apply_env_overrides_from(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(raw) = lookup(SWIPE_THRESHOLD_ENV_VAR) {
        let value = raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
            key: SWIPE_THRESHOLD_ENV_VAR.to_string(),
            reason: format!("`{raw}` is not a number"),
        })?;
        config.swipe_threshold = check_threshold(SWIPE_THRESHOLD_ENV_VAR, value)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    swipe_threshold_override: Option<f64>,
    show_help_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(threshold) = swipe_threshold_override {
        config.swipe_threshold = threshold;
    }

    if let Some(show_help) = show_help_override {
        config.show_help = show_help;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
