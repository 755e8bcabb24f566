//! Encoding detection for playlist files
//!
//! M3U files written by older players (or exported on Windows) are often
//! not UTF-8. Candidates are tried strictest-first: UTF-8 rejects invalid
//! sequences, while Windows-1252 maps every byte and would mask a real
//! mismatch if tried earlier. Windows-1252 also covers the Latin-1 /
//! cp1252 / ISO-8859-1 family, so it serves as the terminal fallback.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use thiserror::Error;
use tracing::debug;

/// Candidate encodings in priority order.
const CANDIDATES: &[&Encoding] = &[UTF_8, WINDOWS_1252];

/// No candidate encoding decoded the playlist bytes.
///
/// With Windows-1252 as the last candidate this is unreachable in practice
/// (it accepts any byte sequence); the variant exists so the contract stays
/// honest if the candidate list ever changes.
#[derive(Debug, Error)]
#[error("no candidate encoding could decode the playlist bytes")]
pub struct DecodeError;

/// Decode playlist bytes with the first candidate encoding that accepts
/// the entire input, returning the text and the encoding's name.
///
/// A leading BOM is honored and stripped by the decoder.
pub fn resolve(bytes: &[u8]) -> Result<(String, &'static str), DecodeError> {
    for encoding in CANDIDATES {
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            debug!("encoding {} rejected the playlist bytes", encoding.name());
            continue;
        }
        debug!("decoded playlist as {}", used.name());
        return Ok((text.into_owned(), used.name()));
    }
    Err(DecodeError)
}
