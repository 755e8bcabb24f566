//! The copy loop - resolve each entry, copy it under a numbered name,
//! collect per-entry outcomes
//!
//! Numbering policy: the prefix is the entry's 1-based position among all
//! path entries in playlist order. A failed entry still consumes its
//! number, so a run with a missing second track produces `001_…` and
//! `003_…`. Indices are never reused or compacted.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tracing::{debug, warn};

use crate::error::{EntryFailure, Error};
use crate::playlist::{PlaylistEntry, resolver};

/// Progress event emitted once per processed entry, plus run start/end.
#[derive(Debug, Clone)]
pub enum CopyProgress {
    Started {
        total: usize,
    },
    Copied {
        index: usize,
        total: usize,
        dest_name: String,
    },
    Failed {
        index: usize,
        total: usize,
        reference: String,
        reason: String,
    },
    Completed {
        attempted: usize,
        succeeded: usize,
    },
}

/// Outcome of one playlist entry.
#[derive(Debug)]
pub struct CopyResult {
    /// The reference as written in the playlist
    pub reference: String,
    /// 1-based playlist position, also the numeric prefix
    pub index: usize,
    /// Destination path on success, failure reason otherwise
    pub outcome: Result<PathBuf, EntryFailure>,
}

impl CopyResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregated outcomes of a whole run, in playlist order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CopyResult>,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Copy every entry into `dest_dir`, streaming progress through
/// `on_progress`.
///
/// Only an uncreatable destination aborts the run; per-entry failures are
/// recorded in the summary and the loop continues.
pub fn run(
    entries: Vec<PlaylistEntry>,
    playlist_dir: &Path,
    dest_dir: &Path,
    mut on_progress: impl FnMut(&CopyProgress),
) -> Result<RunSummary, Error> {
    fs::create_dir_all(dest_dir).map_err(|source| Error::DestinationUnwritable {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let total = entries.len();
    on_progress(&CopyProgress::Started { total });

    let mut summary = RunSummary::default();
    for (position, entry) in entries.into_iter().enumerate() {
        let index = position + 1;
        let outcome = copy_entry(&entry, index, playlist_dir, dest_dir);

        let event = match &outcome {
            Ok(dest) => CopyProgress::Copied {
                index,
                total,
                dest_name: file_name_lossy(dest),
            },
            Err(failure) => CopyProgress::Failed {
                index,
                total,
                reference: entry.reference.clone(),
                reason: failure.to_string(),
            },
        };
        on_progress(&event);

        summary.results.push(CopyResult {
            reference: entry.reference,
            index,
            outcome,
        });
    }

    on_progress(&CopyProgress::Completed {
        attempted: summary.attempted(),
        succeeded: summary.succeeded(),
    });
    Ok(summary)
}

fn copy_entry(
    entry: &PlaylistEntry,
    index: usize,
    playlist_dir: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, EntryFailure> {
    let resolved = resolver::resolve(entry, playlist_dir)?;
    if let Some(title) = &resolved.entry.title {
        debug!("track {index}: {title}");
    }
    let dest = dest_dir.join(numbered_name(index, &resolved.path));
    copy_with_metadata(&resolved.path, &dest)?;
    debug!("copied {:?} -> {:?}", resolved.path, dest);
    Ok(dest)
}

/// `001_<base name>`, zero-padded to at least three digits.
fn numbered_name(index: usize, source: &Path) -> String {
    format!("{:03}_{}", index, file_name_lossy(source))
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Copy the file, then replicate its timestamps. `fs::copy` already
/// carries permission bits; timestamp replication is best-effort and never
/// fails the entry.
fn copy_with_metadata(source: &Path, dest: &Path) -> Result<(), EntryFailure> {
    fs::copy(source, dest).map_err(|source| EntryFailure::CopyFailed { source })?;

    match fs::metadata(source) {
        Ok(meta) => {
            let atime = FileTime::from_last_access_time(&meta);
            let mtime = FileTime::from_last_modification_time(&meta);
            if let Err(e) = filetime::set_file_times(dest, atime, mtime) {
                warn!("could not replicate timestamps onto {:?}: {}", dest, e);
            }
        }
        Err(e) => warn!("could not read metadata of {:?}: {}", source, e),
    }
    Ok(())
}
