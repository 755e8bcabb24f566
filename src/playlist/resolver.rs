//! Resolving raw playlist references to filesystem paths
//!
//! This is where the edge cases live: URL-encoded names, `file://` URIs
//! exported by desktop players, and playlists written with the other
//! platform's path separator. References that escape the playlist
//! directory (`../…`) are deliberately not guarded against.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::trace;

use super::{PlaylistEntry, ResolvedPath};
use crate::error::EntryFailure;

/// Resolve an entry's reference against the playlist's directory.
///
/// Fails with `SourceNotFound` when the resolved path is not an existing
/// regular file; the caller records this and moves on.
pub fn resolve(entry: &PlaylistEntry, playlist_dir: &Path) -> Result<ResolvedPath, EntryFailure> {
    trace!("resolving line {:?}", entry.raw);
    let reference = entry.reference.strip_prefix("file://").unwrap_or(&entry.reference);
    let decoded = percent_decode(reference);
    let candidate = PathBuf::from(normalize_separators(&decoded));

    let path = if candidate.is_absolute() {
        candidate
    } else {
        playlist_dir.join(candidate)
    };
    trace!("resolved {:?} -> {:?}", entry.reference, path);

    if path.is_file() {
        Ok(ResolvedPath {
            path,
            entry: entry.clone(),
        })
    } else {
        Err(EntryFailure::SourceNotFound { path })
    }
}

/// Decode percent-escapes. Malformed escapes are kept literally by the
/// decoder; if the decoded bytes are not valid UTF-8 the reference is used
/// unchanged rather than failing the entry.
fn percent_decode(reference: &str) -> String {
    match urlencoding::decode(reference) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => reference.to_string(),
    }
}

/// Rewrite the foreign platform's separator to the host convention.
fn normalize_separators(reference: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        reference.replace('\\', "/")
    } else {
        reference.replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(reference: &str) -> PlaylistEntry {
        PlaylistEntry {
            raw: reference.to_string(),
            title: None,
            reference: reference.to_string(),
        }
    }

    #[test]
    fn percent_decoding_handles_escapes() {
        assert_eq!(percent_decode("my%20song.mp3"), "my song.mp3");
    }

    #[test]
    fn percent_decoding_is_idempotent_on_plain_text() {
        assert_eq!(percent_decode("track.mp3"), "track.mp3");
        assert_eq!(percent_decode("my song.mp3"), "my song.mp3");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(percent_decode("50%_off.mp3"), "50%_off.mp3");
        assert_eq!(percent_decode("odd%2.mp3"), "odd%2.mp3");
    }

    #[test]
    fn relative_reference_joins_playlist_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Album")).unwrap();
        fs::write(dir.path().join("Album/Song.mp3"), b"x").unwrap();

        let resolved = resolve(&entry("Album/Song.mp3"), dir.path()).unwrap();
        assert_eq!(resolved.path, dir.path().join("Album/Song.mp3"));
    }

    #[test]
    fn absolute_reference_ignores_playlist_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        fs::write(&file, b"x").unwrap();

        let resolved = resolve(&entry(file.to_str().unwrap()), Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved.path, file);
    }

    #[cfg(unix)]
    #[test]
    fn backslash_separators_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Album")).unwrap();
        fs::write(dir.path().join("Album/Song.mp3"), b"x").unwrap();

        let resolved = resolve(&entry("Album\\Song.mp3"), dir.path()).unwrap();
        assert_eq!(resolved.path, dir.path().join("Album/Song.mp3"));
    }

    #[test]
    fn file_uri_prefix_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        fs::write(&file, b"x").unwrap();

        let uri = format!("file://{}", file.display());
        let resolved = resolve(&entry(&uri), Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved.path, file);
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(&entry("nope.mp3"), dir.path()).unwrap_err();
        match err {
            EntryFailure::SourceNotFound { path } => {
                assert_eq!(path, dir.path().join("nope.mp3"));
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_a_source_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Album")).unwrap();
        assert!(resolve(&entry("Album"), dir.path()).is_err());
    }
}
