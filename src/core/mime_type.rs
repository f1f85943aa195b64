//! Normalized MIME type value.
//!
//! A `MimeType` is a byte-backed `type/subtype` essence, always lower-cased,
//! plus optional raw parameter text. Equality and hashing look at the
//! essence only, so `text/html;charset=utf-8` and `TEXT/HTML` compare equal.

use bytes::Bytes;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::SniffError;

/// Values that carry no usable type information.
const UNKNOWN_ESSENCES: [&[u8]; 3] = [b"unknown/unknown", b"application/unknown", b"*/*"];

/// A MIME type normalized for comparison.
#[derive(Clone)]
pub struct MimeType {
    essence: Bytes,
    slash: usize,
    parameters: Option<Bytes>,
}

impl MimeType {
    /// Build a MIME type from a lower-case `type/subtype` literal.
    ///
    /// Evaluated at compile time for the built-in catalogs; a literal without
    /// a slash or with upper-case letters is rejected there.
    pub const fn from_static(essence: &'static str) -> Self {
        let bytes = essence.as_bytes();
        let mut slash = 0;
        let mut found = false;
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                !bytes[i].is_ascii_uppercase(),
                "static MIME types must be lower-case"
            );
            if bytes[i] == b'/' && !found {
                slash = i;
                found = true;
            }
            i += 1;
        }
        assert!(
            found && slash > 0 && slash + 1 < bytes.len(),
            "static MIME types must have the form type/subtype"
        );
        Self {
            essence: Bytes::from_static(bytes),
            slash,
            parameters: None,
        }
    }

    /// Parse and normalize a raw `type/subtype[;params]` value.
    ///
    /// Returns `None` when either side of the slash is not an RFC 2045 token.
    pub fn parse(raw: impl AsRef<[u8]>) -> Option<Self> {
        let raw = trim_http_whitespace(raw.as_ref());
        let (essence, params) = match memchr::memchr(b';', raw) {
            Some(i) => (&raw[..i], Some(&raw[i + 1..])),
            None => (raw, None),
        };
        let essence = trim_http_whitespace(essence);
        let slash = memchr::memchr(b'/', essence)?;
        if !is_token(&essence[..slash]) || !is_token(&essence[slash + 1..]) {
            return None;
        }

        let parameters = params
            .map(trim_http_whitespace)
            .filter(|p| !p.is_empty())
            .map(Bytes::copy_from_slice);

        Some(Self {
            essence: Bytes::from(essence.to_ascii_lowercase()),
            slash,
            parameters,
        })
    }

    /// The normalized `type/subtype` bytes.
    pub fn essence(&self) -> &[u8] {
        &self.essence
    }

    /// The top-level type, e.g. `text` for `text/html`.
    pub fn type_(&self) -> &[u8] {
        &self.essence[..self.slash]
    }

    pub fn subtype(&self) -> &[u8] {
        &self.essence[self.slash + 1..]
    }

    /// Raw parameter text after the first `;`, if any was supplied.
    pub fn parameters(&self) -> Option<&[u8]> {
        self.parameters.as_deref()
    }

    /// The same type with parameters dropped.
    pub fn without_parameters(&self) -> Self {
        Self {
            essence: self.essence.clone(),
            slash: self.slash,
            parameters: None,
        }
    }

    /// True for the placeholder values that mean "no type declared".
    pub fn is_unknown(&self) -> bool {
        UNKNOWN_ESSENCES.iter().any(|u| *u == self.essence())
    }
}

/// Strip leading and trailing HTTP whitespace (tab, LF, CR, space).
pub(crate) fn trim_http_whitespace(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if matches!(first, b'\t' | b'\n' | b'\r' | b' ') {
            bytes = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = bytes {
        if matches!(last, b'\t' | b'\n' | b'\r' | b' ') {
            bytes = rest;
        } else {
            break;
        }
    }
    bytes
}

/// RFC 2045 token: one or more printable ASCII bytes, no tspecials.
fn is_token(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && bytes.iter().all(|&b| {
            (0x21..=0x7E).contains(&b) && !b"()<>@,;:\\\"/[]?=".contains(&b)
        })
}

impl PartialEq for MimeType {
    fn eq(&self, other: &Self) -> bool {
        self.essence == other.essence
    }
}

impl Eq for MimeType {}

impl Hash for MimeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.essence.hash(state);
    }
}

impl PartialEq<str> for MimeType {
    fn eq(&self, other: &str) -> bool {
        self.essence() == other.as_bytes()
    }
}

impl PartialEq<&str> for MimeType {
    fn eq(&self, other: &&str) -> bool {
        self.essence() == other.as_bytes()
    }
}

impl AsRef<[u8]> for MimeType {
    fn as_ref(&self) -> &[u8] {
        self.essence()
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.essence))?;
        if let Some(params) = &self.parameters {
            write!(f, "; {}", String::from_utf8_lossy(params))?;
        }
        Ok(())
    }
}

impl fmt::Debug for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MimeType({:?})", self.to_string())
    }
}

impl FromStr for MimeType {
    type Err = SniffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MimeType::parse(s).ok_or_else(|| SniffError::InvalidMimeType(s.to_string()))
    }
}

impl Serialize for MimeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MimeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
