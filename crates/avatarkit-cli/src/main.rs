//! Avatarkit CLI
//!
//! Thin wrapper around avatarkit-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Print the render plan for a request
//! avatarkit resolve request.json
//! echo '{"type":"letter","letterId":"u-1","title":"Jane"}' | avatarkit resolve -
//!
//! # Export a letter avatar as SVG
//! avatarkit letter --id u-1 --name "Jane Doe" > jane.svg
//!
//! # Print a gravatar URL
//! avatarkit gravatar-url jane@example.com --size 64
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use avatarkit_core::gravatar::{gravatar_url, DEFAULT_REMOTE_SIZE, MAX_REMOTE_SIZE};
use avatarkit_core::{AvatarConfig, AvatarRequest, AvatarResolver, LetterProps};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Avatarkit - avatar request tooling
#[derive(Parser)]
#[command(name = "avatarkit")]
#[command(version = "0.1.0")]
#[command(about = "Avatarkit - resolve avatar requests and export letter avatars")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Avatar config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request (JSON file, or - for stdin) and print the render plan
    Resolve {
        /// Path to the request JSON
        input: PathBuf,
    },

    /// Print a letter avatar as SVG
    Letter {
        /// Identifier the colour is derived from
        #[arg(long)]
        id: String,

        /// Display name the initials are derived from
        #[arg(long)]
        name: Option<String>,

        /// Use a circular avatar
        #[arg(long)]
        round: bool,
    },

    /// Print the gravatar URL for an e-mail or hash
    GravatarUrl {
        /// E-mail address or hex digest
        id: String,

        /// Remote resolution in pixels (default 120)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_REMOTE_SIZE as i64))]
        size: Option<u32>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AvatarConfig> {
    match path {
        Some(path) => AvatarConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AvatarConfig::default()),
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve { input } => {
            let json = read_input(&input)?;
            let request = AvatarRequest::from_json(&json).context("Invalid avatar request")?;
            let plan = AvatarResolver::new(config).resolve(&request);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Letter { id, name, round } => {
            let letter = LetterProps {
                identifier: id,
                round,
                suggested: false,
                display_name: name,
            };
            println!("{}", letter.to_svg());
        }
        Commands::GravatarUrl { id, size } => {
            let size = size.unwrap_or(DEFAULT_REMOTE_SIZE);
            tracing::info!("Building gravatar URL at {}px", size);
            println!("{}", gravatar_url(&config, &id, size));
        }
    }

    Ok(())
}
