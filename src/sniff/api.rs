//! Top-level sniffing entry points.
//!
//! `sniff` walks the fixed decision order of the MIME sniffing algorithm:
//! the first applicable rule decides the type and the rest are never
//! consulted. `extract_mime` is the same call without the rule report.

use serde::Serialize;
use tracing::debug;

use crate::core::mime_type::trim_http_whitespace;
use crate::core::MimeType;
use crate::error::Result;
use crate::sniff::config::SniffOptions;
use crate::sniff::feed::sniff_mislabeled_feed;
use crate::sniff::groups::{is_audio_or_video, is_html, is_image, is_xml};
use crate::sniff::lookup::{
    contains_binary, find_archive_mime, find_audio_video_mime, find_extra_mime, find_image_mime,
    find_text_mime,
};
use crate::span_trace;

/// Bytes of the body examined by any rule.
pub const RESOURCE_HEADER_LEN: usize = 1445;

/// Declared values that misconfigured servers attach to arbitrary files.
/// Compared against the raw declared value, parameters included.
pub const APACHE_BUG_TYPES: [&str; 4] = [
    "text/plain",
    "text/plain; charset=ISO-8859-1",
    "text/plain; charset=iso-8859-1",
    "text/plain; charset=UTF-8",
];

static TEXT_PLAIN: MimeType = MimeType::from_static("text/plain");
static OCTET_STREAM: MimeType = MimeType::from_static("application/octet-stream");

/// The decision rule that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SniffRule {
    /// No usable declared type; content decided.
    UnknownType,
    /// Sniffing disabled; declared type returned.
    NoSniff,
    /// Declared generic text re-checked for binary content.
    ApacheBug,
    /// Declared XML types are never re-sniffed.
    TrustedXml,
    /// Declared HTML checked for an RSS or Atom root.
    MislabeledFeed,
    SupportedImage,
    SupportedAudioVideo,
    /// Declared type returned as-is.
    Supplied,
}

/// Sniffed type plus the rule that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SniffVerdict {
    pub mime: MimeType,
    pub rule: SniffRule,
}

impl SniffVerdict {
    fn new(mime: MimeType, rule: SniffRule) -> Self {
        Self { mime, rule }
    }
}

/// The prefix of `body` every signature check looks at.
pub fn resource_header(body: &[u8]) -> &[u8] {
    &body[..body.len().min(RESOURCE_HEADER_LEN)]
}

/// Determine the computed MIME type of `body`.
///
/// `content_types` holds the declared values in header order; the last one
/// is authoritative. A missing, empty or syntactically invalid value counts
/// as no declared type. The only failure is a caller signature whose
/// pattern and mask lengths differ.
pub fn extract_mime<T: AsRef<[u8]>>(
    body: &[u8],
    content_types: &[T],
    options: &SniffOptions,
) -> Result<MimeType> {
    sniff(body, content_types, options).map(|verdict| verdict.mime)
}

/// Like [`extract_mime`], also reporting which rule decided.
pub fn sniff<T: AsRef<[u8]>>(
    body: &[u8],
    content_types: &[T],
    options: &SniffOptions,
) -> Result<SniffVerdict> {
    let span = span_trace!("sniff", body_len = body.len());
    let _guard = span.enter();

    let header = resource_header(body);
    let raw = content_types
        .last()
        .map(|value| trim_http_whitespace(value.as_ref()));
    let supplied = raw
        .and_then(MimeType::parse)
        .map(|mime| mime.without_parameters());

    let supplied = match supplied {
        Some(mime) if !mime.is_unknown() => mime,
        _ => {
            let mime = sniff_unknown(header, !options.no_sniff, options)?;
            debug!(%mime, "no usable declared type");
            return Ok(SniffVerdict::new(mime, SniffRule::UnknownType));
        }
    };

    if options.no_sniff {
        debug!(%supplied, "sniffing disabled");
        return Ok(SniffVerdict::new(supplied, SniffRule::NoSniff));
    }

    if options.http_origin && raw.is_some_and(is_apache_bug_type) {
        let mime = sniff_mislabeled_binary(header);
        debug!(%supplied, %mime, "apache bug compensation");
        return Ok(SniffVerdict::new(mime, SniffRule::ApacheBug));
    }

    if is_xml(&supplied) {
        debug!(%supplied, "declared xml is trusted");
        return Ok(SniffVerdict::new(supplied, SniffRule::TrustedXml));
    }

    if is_html(&supplied) {
        let mime = sniff_mislabeled_feed(header, &supplied);
        debug!(%mime, "checked html for feed markup");
        return Ok(SniffVerdict::new(mime, SniffRule::MislabeledFeed));
    }

    if let Some(supported) = &options.supported_types {
        if is_image(&supplied) {
            if let Some(mime) = find_image_mime(header)?.filter(|m| supported.contains(m)) {
                debug!(%supplied, %mime, "image re-classified");
                return Ok(SniffVerdict::new(mime, SniffRule::SupportedImage));
            }
        }

        if is_audio_or_video(&supplied) {
            if let Some(mime) = find_audio_video_mime(header)?.filter(|m| supported.contains(m)) {
                debug!(%supplied, %mime, "audio/video re-classified");
                return Ok(SniffVerdict::new(mime, SniffRule::SupportedAudioVideo));
            }
        }
    }

    debug!(%supplied, "declared type kept");
    Ok(SniffVerdict::new(supplied, SniffRule::Supplied))
}

fn is_apache_bug_type(raw: &[u8]) -> bool {
    APACHE_BUG_TYPES.iter().any(|t| t.as_bytes() == raw)
}

/// Resolve a resource that declared nothing useful.
fn sniff_unknown(header: &[u8], sniff_scriptable: bool, options: &SniffOptions) -> Result<MimeType> {
    if sniff_scriptable {
        if let Some(mime) = find_text_mime(header)? {
            return Ok(mime);
        }
    }

    if let Some(mime) = find_extra_mime(header, options.extra_types.as_deref())? {
        return Ok(mime);
    }

    if let Some(mime) = find_image_mime(header)? {
        return Ok(mime);
    }

    if let Some(mime) = find_audio_video_mime(header)? {
        return Ok(mime);
    }

    if let Some(mime) = find_archive_mime(header)? {
        return Ok(mime);
    }

    Ok(text_or_binary(header))
}

/// Resolve a resource that may have been served as text by mistake.
fn sniff_mislabeled_binary(header: &[u8]) -> MimeType {
    if let Some((encoding, _)) = encoding_rs::Encoding::for_bom(header) {
        debug!(encoding = encoding.name(), "byte order mark");
        return TEXT_PLAIN.clone();
    }
    text_or_binary(header)
}

fn text_or_binary(header: &[u8]) -> MimeType {
    if contains_binary(header) {
        OCTET_STREAM.clone()
    } else {
        TEXT_PLAIN.clone()
    }
}
