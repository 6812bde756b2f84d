//! Terminal image lightbox - Entry Point

use clap::Parser;
use lightbox::config::KeyBindings;
use lightbox::gallery::GalleryFilter;
use lightbox::view::{CliArgs, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// Terminal image lightbox - browse a gallery with a modal viewer
#[derive(Parser, Debug)]
#[command(name = "lightbox")]
#[command(version)]
#[command(about = "Browse an image gallery with a keyboard and mouse driven lightbox")]
pub struct Args {
    /// Gallery manifest (.toml or .json) or directory of images (defaults to the current directory)
    pub gallery: Option<PathBuf>,

    /// Open the lightbox at this image on startup (1-based)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub open: Option<u32>,

    /// Only show thumbnails in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum horizontal drag, in pointer units, that counts as a swipe
    #[arg(long, value_parser = parse_threshold)]
    pub swipe_threshold: Option<f64>,

    /// Show the help overlay on startup
    #[arg(long)]
    pub show_help: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("threshold must be a non-negative number".to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = lightbox::config::load_config_with_precedence(args.config.clone())?;
        let merged = lightbox::config::merge_config(config_file);
        let with_env = lightbox::config::apply_env_overrides(merged)?;

        // Only override show_help if the flag was explicitly set
        let show_help_override = if args.show_help { Some(true) } else { None };
        lightbox::config::apply_cli_overrides(with_env, args.swipe_threshold, show_help_override)
    };

    lightbox::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let key_bindings = KeyBindings::default().with_overrides(&config.keybindings)?;
    let source = lightbox::source::detect_gallery_source(args.gallery.clone())?;

    let cli_args = CliArgs {
        gallery: config.gallery_options(),
        key_bindings,
        color: ColorConfig::from_env_and_args(args.no_color),
        show_help: config.show_help,
        open_at: args.open.map(|n| n as usize - 1),
        filter: args
            .category
            .as_deref()
            .map(GalleryFilter::from_name)
            .unwrap_or_default(),
    };

    lightbox::view::run_with_source(&source, cli_args)?;

    Ok(())
}
