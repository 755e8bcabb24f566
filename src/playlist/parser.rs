//! Line-oriented M3U parsing
//!
//! Extended M3U interleaves `#EXTINF:<duration>,<title>` metadata lines
//! with path lines. Anything else starting with `#` (including the
//! `#EXTM3U` header) is a comment. Entries come out in playlist order,
//! never reordered or deduplicated.

use super::PlaylistEntry;

const EXTINF_PREFIX: &str = "#EXTINF:";

/// Parse playlist text into entries, lazily and in order.
///
/// Calling `parse` again on the same text restarts from the beginning.
pub fn parse(text: &str) -> Entries<'_> {
    Entries {
        lines: text.lines(),
        pending_title: None,
    }
}

/// Iterator over the path entries of a playlist.
pub struct Entries<'a> {
    lines: std::str::Lines<'a>,
    pending_title: Option<String>,
}

impl Iterator for Entries<'_> {
    type Item = PlaylistEntry;

    fn next(&mut self) -> Option<PlaylistEntry> {
        for line in self.lines.by_ref() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(info) = trimmed.strip_prefix(EXTINF_PREFIX) {
                // Title follows the first comma; a later EXTINF before the
                // next path line wins.
                self.pending_title = extinf_title(info);
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }
            return Some(PlaylistEntry {
                raw: line.to_string(),
                title: self.pending_title.take(),
                reference: trimmed.to_string(),
            });
        }
        None
    }
}

fn extinf_title(info: &str) -> Option<String> {
    let (_duration, title) = info.split_once(',')?;
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}
