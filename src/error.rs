//! Error taxonomy for a copy run
//!
//! Two fatal kinds abort the whole run; everything that can go wrong with a
//! single playlist entry is recorded as a value inside the run summary and
//! never crosses component boundaries as an `Err`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Either one aborts the run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// The playlist file is missing, unopenable, or no candidate encoding
    /// could decode its bytes.
    #[error("cannot read playlist {}: {reason}", path.display())]
    UnreadablePlaylist { path: PathBuf, reason: String },

    /// The destination directory could not be created.
    #[error("cannot create destination directory {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-entry failures. Recorded in the entry's `CopyResult`; processing
/// continues with the next entry.
#[derive(Debug, Error)]
pub enum EntryFailure {
    /// The referenced file does not exist at the resolved path (or is not a
    /// regular file).
    #[error("file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The copy itself failed (permissions, disk space, I/O error).
    #[error("copy failed: {source}")]
    CopyFailed {
        #[source]
        source: io::Error,
    },
}
