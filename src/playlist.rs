//! Playlist handling - the path from raw M3U bytes to copyable file paths
//!
//! Split into three stages:
//! - encoding: detect a text encoding that decodes the playlist bytes
//! - parser: turn decoded text into ordered entries
//! - resolver: turn a raw entry reference into an existing filesystem path

pub mod encoding;
pub mod parser;
pub mod resolver;

use std::path::PathBuf;

/// One parsed playlist line that references a file.
///
/// `title` comes from a preceding `#EXTINF:` line, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// The line as it appeared in the playlist, untrimmed of escapes
    pub raw: String,
    /// Display title from track metadata, if any
    pub title: Option<String>,
    /// The raw path reference, possibly URL-encoded
    pub reference: String,
}

/// An entry's reference resolved to a concrete filesystem path.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub entry: PlaylistEntry,
}
