//! Configuration for a sniffing call.
//!
//! `SniffOptions` is what the engine consumes. `SniffConfig` is its
//! declarative, serde-friendly twin: byte fields are hex strings and types
//! are plain strings, so a signature table can live in a JSON file.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::{MimeType, Signature};
use crate::error::{Result, SniffError};

/// Runtime knobs for [`crate::sniff`] and [`crate::extract_mime`].
#[derive(Debug, Clone)]
pub struct SniffOptions {
    /// The resource arrived over HTTP; enables the Apache-bug compensation.
    pub http_origin: bool,
    /// Trust any declared type and skip content inspection.
    pub no_sniff: bool,
    /// Caller signatures tried after the built-in PostScript/BOM table.
    pub extra_types: Option<Vec<Signature>>,
    /// Types the caller accepts as a re-classification of a declared
    /// image or audio/video type. `None` disables that step.
    pub supported_types: Option<HashSet<MimeType>>,
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            http_origin: true,
            no_sniff: false,
            extra_types: None,
            supported_types: None,
        }
    }
}

impl SniffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_origin(mut self, http_origin: bool) -> Self {
        self.http_origin = http_origin;
        self
    }

    pub fn with_no_sniff(mut self, no_sniff: bool) -> Self {
        self.no_sniff = no_sniff;
        self
    }

    /// Append one caller signature.
    pub fn with_extra_type(mut self, signature: Signature) -> Self {
        self.extra_types.get_or_insert_with(Vec::new).push(signature);
        self
    }

    pub fn with_supported_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = MimeType>,
    {
        self.supported_types = Some(
            types
                .into_iter()
                .map(|mime| mime.without_parameters())
                .collect(),
        );
        self
    }
}

/// A caller signature with hex-encoded byte fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConfig {
    pub pattern: String,
    pub mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_skip: Option<String>,
    pub mime: String,
}

impl SignatureConfig {
    /// Decode into a [`Signature`], checking hex, MIME syntax and lengths.
    pub fn to_signature(&self) -> Result<Signature> {
        let pattern = decode_hex("pattern", &self.pattern)?;
        let mask = decode_hex("mask", &self.mask)?;
        let lead_skip = self
            .lead_skip
            .as_deref()
            .map(|skip| decode_hex("lead_skip", skip).map(Bytes::from))
            .transpose()?;
        let mime = MimeType::parse(&self.mime).ok_or_else(|| {
            SniffError::InvalidSignature(format!("bad result type {:?}", self.mime))
        })?;
        Signature::from_parts(pattern, mask, lead_skip, mime)
    }
}

impl From<&Signature> for SignatureConfig {
    fn from(sig: &Signature) -> Self {
        Self {
            pattern: hex::encode(&sig.pattern),
            mask: hex::encode(&sig.mask),
            lead_skip: sig.lead_skip.as_ref().map(hex::encode),
            mime: sig.mime.to_string(),
        }
    }
}

fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim())
        .map_err(|e| SniffError::InvalidSignature(format!("{field} {value:?}: {e}")))
}

/// Declarative form of [`SniffOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    pub http_origin: bool,
    pub no_sniff: bool,
    pub extra_types: Option<Vec<SignatureConfig>>,
    pub supported_types: Option<Vec<String>>,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            http_origin: true,
            no_sniff: false,
            extra_types: None,
            supported_types: None,
        }
    }
}

impl SniffConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every field and build runtime options.
    pub fn into_options(self) -> Result<SniffOptions> {
        let extra_types = self
            .extra_types
            .map(|sigs| {
                sigs.iter()
                    .map(SignatureConfig::to_signature)
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let supported_types = self
            .supported_types
            .map(|types| {
                types
                    .iter()
                    .map(|t| t.parse::<MimeType>().map(|m| m.without_parameters()))
                    .collect::<Result<HashSet<_>>>()
            })
            .transpose()?;

        Ok(SniffOptions {
            http_origin: self.http_origin,
            no_sniff: self.no_sniff,
            extra_types,
            supported_types,
        })
    }
}

impl From<&SniffOptions> for SniffConfig {
    fn from(options: &SniffOptions) -> Self {
        Self {
            http_origin: options.http_origin,
            no_sniff: options.no_sniff,
            extra_types: options
                .extra_types
                .as_ref()
                .map(|sigs| sigs.iter().map(SignatureConfig::from).collect()),
            supported_types: options.supported_types.as_ref().map(|types| {
                let mut names: Vec<String> = types.iter().map(|t| t.to_string()).collect();
                names.sort();
                names
            }),
        }
    }
}
