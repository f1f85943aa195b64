//! Catalog lookups per signature family.
//!
//! Each helper walks its catalog in order and reports the first hit. The
//! audio/video lookup falls back to the structural container checks.

use tracing::trace;

use crate::core::{MimeType, Signature};
use crate::error::Result;
use crate::sniff::containers::{is_mp4_signature, is_webm_signature};
use crate::sniff::mp3::is_mp3_without_id3;
use crate::sniff::signatures::{
    ARCHIVE_SIGNATURES, AUDIO_VIDEO_SIGNATURES, EXTRA_SIGNATURES, FONT_SIGNATURES,
    IMAGE_SIGNATURES, TEXT_SIGNATURES,
};

static VIDEO_MP4: MimeType = MimeType::from_static("video/mp4");
static VIDEO_WEBM: MimeType = MimeType::from_static("video/webm");
static AUDIO_MPEG: MimeType = MimeType::from_static("audio/mpeg");

/// Return the type of the first signature in `catalog` matching `input`.
pub fn find_in_catalog(input: &[u8], catalog: &[Signature]) -> Result<Option<MimeType>> {
    for sig in catalog {
        if sig.matches(input)? {
            trace!(mime = %sig.mime, "signature matched");
            return Ok(Some(sig.mime.clone()));
        }
    }
    Ok(None)
}

pub fn find_image_mime(input: &[u8]) -> Result<Option<MimeType>> {
    find_in_catalog(input, &IMAGE_SIGNATURES)
}

/// Fixed audio/video signatures first, then MP4, WebM and bare MP3 frames.
pub fn find_audio_video_mime(input: &[u8]) -> Result<Option<MimeType>> {
    if let Some(mime) = find_in_catalog(input, &AUDIO_VIDEO_SIGNATURES)? {
        return Ok(Some(mime));
    }

    if is_mp4_signature(input) {
        return Ok(Some(VIDEO_MP4.clone()));
    }

    if is_webm_signature(input) {
        return Ok(Some(VIDEO_WEBM.clone()));
    }

    if is_mp3_without_id3(input) {
        return Ok(Some(AUDIO_MPEG.clone()));
    }

    Ok(None)
}

pub fn find_font_mime(input: &[u8]) -> Result<Option<MimeType>> {
    find_in_catalog(input, &FONT_SIGNATURES)
}

pub fn find_archive_mime(input: &[u8]) -> Result<Option<MimeType>> {
    find_in_catalog(input, &ARCHIVE_SIGNATURES)
}

/// Scriptable types: HTML, XML and PDF.
pub fn find_text_mime(input: &[u8]) -> Result<Option<MimeType>> {
    find_in_catalog(input, &TEXT_SIGNATURES)
}

/// Built-in PostScript/BOM signatures, then the caller's own table.
pub fn find_extra_mime(input: &[u8], extra_types: Option<&[Signature]>) -> Result<Option<MimeType>> {
    if let Some(mime) = find_in_catalog(input, &EXTRA_SIGNATURES)? {
        return Ok(Some(mime));
    }

    match extra_types {
        Some(extra) => find_in_catalog(input, extra),
        None => Ok(None),
    }
}

/// Control bytes that never occur in text (ESC is allowed for ISO-2022).
pub fn is_binary_data_byte(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

pub fn contains_binary(input: &[u8]) -> bool {
    input.iter().any(|&b| is_binary_data_byte(b))
}
