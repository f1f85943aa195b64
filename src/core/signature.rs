//! Signature entries for byte-pattern sniffing.
//!
//! A signature is plain data: a byte pattern, a mask of the same length, an
//! optional set of bytes that may be skipped before the pattern starts, and
//! the MIME type reported on a match.

use bytes::Bytes;

use crate::core::mime_type::MimeType;
use crate::error::{Result, SniffError};
use crate::sniff::pattern;

/// One row of a signature catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub pattern: Bytes,
    pub mask: Bytes,
    /// Bytes skipped at the start of the input before comparing.
    pub lead_skip: Option<Bytes>,
    pub mime: MimeType,
}

impl Signature {
    /// Const constructor used by the built-in catalogs.
    pub const fn new(
        pattern: &'static [u8],
        mask: &'static [u8],
        lead_skip: Option<&'static [u8]>,
        mime: &'static str,
    ) -> Self {
        let lead_skip = match lead_skip {
            Some(skip) => Some(Bytes::from_static(skip)),
            None => None,
        };
        Self {
            pattern: Bytes::from_static(pattern),
            mask: Bytes::from_static(mask),
            lead_skip,
            mime: MimeType::from_static(mime),
        }
    }

    /// Build a caller-supplied signature, rejecting a pattern/mask length mismatch.
    pub fn from_parts(
        pattern: impl Into<Bytes>,
        mask: impl Into<Bytes>,
        lead_skip: Option<Bytes>,
        mime: MimeType,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let mask = mask.into();
        if pattern.len() != mask.len() {
            return Err(SniffError::Configuration {
                pattern_len: pattern.len(),
                mask_len: mask.len(),
            });
        }
        Ok(Self {
            pattern,
            mask,
            lead_skip,
            mime: mime.without_parameters(),
        })
    }

    /// Test this signature against the start of `input`.
    pub fn matches(&self, input: &[u8]) -> Result<bool> {
        pattern::matches(input, &self.pattern, &self.mask, self.lead_skip.as_deref())
    }
}
