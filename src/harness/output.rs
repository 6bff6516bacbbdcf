//! Output resolution
//!
//! Two concerns live here: choosing the authoritative stream when
//! generating baselines, and loading stored baselines for verification.
//! Baselines may predate the harness and arrive in legacy encodings, so
//! reads walk a fixed decoder ladder and surface an explicit unreadable
//! result instead of ever decoding into wrong data.

use std::path::Path;

use crate::common::{Error, Result};

/// UTF-8 byte-order mark
const BOM: &[u8] = b"\xef\xbb\xbf";

/// A decoding strategy for stored baselines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    Utf8,
    Utf8Sig,
    Latin1,
    Windows1252,
}

/// Fallback order for baseline reads; first success wins
pub const FALLBACK_ORDER: [Decoding; 4] = [
    Decoding::Utf8,
    Decoding::Utf8Sig,
    Decoding::Latin1,
    Decoding::Windows1252,
];

impl Decoding {
    /// Decode strictly, returning None on any invalid sequence
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Decoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Decoding::Utf8Sig => {
                let stripped = bytes.strip_prefix(BOM).unwrap_or(bytes);
                std::str::from_utf8(stripped).ok().map(str::to_owned)
            }
            // Total mapping: every byte is a valid ISO-8859-1 code point
            Decoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Decoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

/// Result of loading a stored baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedOutput {
    /// Decoded text, line endings normalized
    Text(String),
    /// Every decoding strategy failed
    Unreadable,
}

/// Load an expected-output file, walking the decoder ladder.
///
/// IO failure is a harness error; an undecodable file is the explicit
/// `Unreadable` value, which the comparator maps to its own outcome.
pub fn load_expected(path: &Path) -> Result<ExpectedOutput> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, &e))?;

    for strategy in FALLBACK_ORDER {
        if let Some(text) = strategy.decode(&bytes) {
            tracing::debug!(path = %path.display(), ?strategy, "decoded baseline");
            return Ok(ExpectedOutput::Text(normalize_newlines(&text)));
        }
    }
    Ok(ExpectedOutput::Unreadable)
}

/// Generation mode: stdout is authoritative when non-empty, else stderr.
///
/// Lets one code path capture both normal results and the diagnostics a
/// deliberately-invalid configuration sends to stderr.
pub fn authoritative_text<'a>(stdout: &'a str, stderr: &'a str) -> &'a str {
    if !stdout.is_empty() {
        stdout
    } else {
        stderr
    }
}

/// Normalize `\r\n` and lone `\r` to `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
