//! Masked byte-pattern matching.
//!
//! The primitive every catalog is built on: AND each input byte with the
//! mask byte and compare against the pattern byte.

use crate::error::{Result, SniffError};

/// Bytes treated as whitespace by the markup signatures (HT, LF, FF, CR, SP).
pub const WHITESPACE_BYTES: &[u8] = b"\t\n\x0c\r ";

/// Check whether `input` starts with `pattern` under `mask`.
///
/// When `lead_skip` is given, leading input bytes contained in it are
/// skipped before the comparison starts. A pattern and mask of different
/// lengths is a broken signature and is reported as a configuration error.
pub fn matches(
    input: &[u8],
    pattern: &[u8],
    mask: &[u8],
    lead_skip: Option<&[u8]>,
) -> Result<bool> {
    if pattern.len() != mask.len() {
        return Err(SniffError::Configuration {
            pattern_len: pattern.len(),
            mask_len: mask.len(),
        });
    }

    let start = match lead_skip {
        Some(skip) => input
            .iter()
            .position(|b| !skip.contains(b))
            .unwrap_or(input.len()),
        None => 0,
    };

    let Some(window) = input.get(start..start + pattern.len()) else {
        return Ok(false);
    };

    Ok(window
        .iter()
        .zip(mask)
        .zip(pattern)
        .all(|((&byte, &m), &p)| byte & m == p))
}
