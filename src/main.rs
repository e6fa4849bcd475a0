#![allow(non_snake_case)]

mod app;
mod samples;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use avatarkit_core::{AvatarConfig, AvatarRequest};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// What the gallery window shows, set from command line
#[derive(Debug, Clone)]
pub struct GallerySetup {
    pub config: AvatarConfig,
    pub requests: Vec<AvatarRequest>,
    /// Where the requests came from, for the subtitle
    pub source: String,
}

static GALLERY: OnceLock<GallerySetup> = OnceLock::new();

/// Get the gallery setup (set from command line or built-in samples)
pub fn get_gallery() -> GallerySetup {
    GALLERY.get().cloned().unwrap_or_else(|| GallerySetup {
        config: AvatarConfig::default(),
        requests: samples::sample_requests(),
        source: "built-in samples".to_string(),
    })
}

/// Avatarkit Gallery - preview avatar requests
#[derive(Parser, Debug)]
#[command(name = "avatarkit-gallery")]
#[command(about = "Avatarkit Gallery - render avatar requests in a desktop window")]
struct Args {
    /// JSON file holding an array of avatar requests
    #[arg(short, long)]
    requests: Option<PathBuf>,

    /// Avatar config file (default: <config dir>/avatarkit/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("avatarkit").join("config.json"))
        .filter(|path| path.exists())
}

fn load_config(path: Option<&Path>) -> Result<AvatarConfig> {
    match path {
        Some(path) => {
            tracing::info!("Using avatar config {:?}", path);
            AvatarConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Ok(AvatarConfig::default()),
    }
}

fn load_requests(path: &Path) -> Result<Vec<AvatarRequest>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    AvatarRequest::list_from_json(&json)
        .with_context(|| format!("Invalid avatar requests in {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config_path = args.config.or_else(default_config_path);
    let config = load_config(config_path.as_deref())?;

    let (requests, source) = match args.requests {
        Some(path) => (load_requests(&path)?, path.display().to_string()),
        None => (samples::sample_requests(), "built-in samples".to_string()),
    };

    tracing::info!("Showing {} avatars from {}", requests.len(), source);

    let _ = GALLERY.set(GallerySetup {
        config,
        requests,
        source,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Avatarkit Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 700.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
