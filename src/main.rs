//! m3ucopy - copy the audio files of an M3U playlist into a destination
//! folder, numbering each file in playlist order
//!
//! Handles playlists in unknown text encodings and entries with
//! URL-encoded characters. Per-file failures are reported at the end;
//! only an unreadable playlist or an uncreatable destination aborts.

mod copy;
mod error;
mod playlist;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use error::Error;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Copy the audio files of an M3U playlist into a folder, numbered in playlist order"
)]
struct Args {
    /// Path to the playlist file
    playlist: PathBuf,
    /// Destination directory, created if missing
    destination: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let bytes = fs::read(&args.playlist).map_err(|e| Error::UnreadablePlaylist {
        path: args.playlist.clone(),
        reason: e.to_string(),
    })?;
    let (text, encoding) =
        playlist::encoding::resolve(&bytes).map_err(|e| Error::UnreadablePlaylist {
            path: args.playlist.clone(),
            reason: e.to_string(),
        })?;
    debug!("playlist decoded as {encoding}");

    // Relative references resolve against the playlist's own directory.
    let playlist_dir = args
        .playlist
        .canonicalize()
        .map_err(|e| Error::UnreadablePlaylist {
            path: args.playlist.clone(),
            reason: e.to_string(),
        })?
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"));

    let entries: Vec<_> = playlist::parser::parse(&text).collect();
    let summary = copy::run(
        entries,
        &playlist_dir,
        &args.destination,
        report::print_progress,
    )?;
    report::print_summary(&summary);

    // Per-file failures are reported, not fatal.
    Ok(())
}
