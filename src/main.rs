// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Track listing tool.
//!
//! Opens each media location given on the command line with libmpv, builds
//! its track list and prints one line per track.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use tracklist_bridge::{
    TrackList,
    config::{self, BridgeConfig},
    media::Media,
    util::format::format_track,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to wait for each media item to be parsed
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Media files or URLs to inspect
    #[arg(required = true)]
    media: Vec<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config(),
    };
    if let Some(timeout_ms) = args.timeout_ms {
        config.parse_timeout_ms = timeout_ms;
    }

    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    config
                        .log_filter
                        .parse()
                        .context("Invalid log filter in config")?,
                )
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init();

    debug!(?config, "loaded configuration");

    for location in &args.media {
        print_tracks(location, &config)?;
    }

    Ok(())
}

/// Opens `location`, then prints its tracks under a heading.
///
/// # Errors
///
/// Returns an error if the media cannot be opened or parsed, or if its tracks
/// cannot be enumerated.
fn print_tracks(location: &str, config: &BridgeConfig) -> Result<()> {
    let mut media = Media::open(location, config.parse_timeout())
        .with_context(|| format!("Failed to open media: {}", location))?;

    let list = TrackList::build(&mut media)
        .with_context(|| format!("Failed to list tracks of {}", media.location()))?;

    println!("{}", media.location());
    if list.is_empty() {
        println!("    no tracks");
    }
    for (index, track) in list.iter().enumerate() {
        println!("    {}", format_track(index, track));
    }

    list.release();
    Ok(())
}
