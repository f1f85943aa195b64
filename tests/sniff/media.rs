//! Audio and video detection, including the structural container checks.

use mimesniff::sniff::containers::{is_mp4_signature, is_webm_signature};
use mimesniff::sniff::find_audio_video_mime;
use mimesniff::SniffOptions;

use crate::common::fixtures::*;
use crate::common::{mime, sniffed, sniffed_with, NO_TYPES};

#[test]
fn fixed_signatures() {
    assert_eq!(sniffed(b".snd\x00\x00\x00\x18", NO_TYPES), "audio/basic");
    assert_eq!(sniffed(b"FORM\x00\x00\x10\x00AIFFCOMM", NO_TYPES), "audio/aiff");
    assert_eq!(sniffed(b"ID3\x03\x00\x00\x00\x00", NO_TYPES), "audio/mpeg");
    assert_eq!(sniffed(b"MThd\x00\x00\x00\x06\x00\x01", NO_TYPES), "audio/midi");
    assert_eq!(sniffed(b"RIFF\x00\x10\x00\x00AVI LIST", NO_TYPES), "video/avi");
}

#[test]
fn mp4_major_and_compatible_brands() {
    let major = mp4_ftyp(b"mp42", &[b"isom"]);
    assert!(is_mp4_signature(&major));
    assert_eq!(sniffed(&major, NO_TYPES), "video/mp4");

    let compatible = mp4_ftyp(b"M4V ", &[b"M4A ", b"mp42", b"isom"]);
    assert_eq!(sniffed(&compatible, NO_TYPES), "video/mp4");

    let quicktime = mp4_ftyp(b"qt  ", &[b"qt  "]);
    assert_eq!(find_audio_video_mime(&quicktime).unwrap(), None);
}

#[test]
fn truncated_mp4_is_not_detected() {
    let data = mp4_ftyp(b"mp42", &[b"isom", b"avc1"]);
    let box_len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    assert!(!is_mp4_signature(&data[..box_len - 1]));
    assert_eq!(find_audio_video_mime(&data[..box_len - 1]).unwrap(), None);
}

#[test]
fn webm_doctype() {
    let webm = ebml_header(b"webm");
    assert!(is_webm_signature(&webm));
    assert_eq!(sniffed(&webm, NO_TYPES), "video/webm");

    let matroska = ebml_header(b"matroska");
    assert!(!is_webm_signature(&matroska));
    assert_eq!(sniffed(&matroska, NO_TYPES), "application/octet-stream");
}

#[test]
fn mp3_needs_two_frames() {
    assert_eq!(sniffed(&mp3_stream(3), NO_TYPES), "audio/mpeg");
    assert_eq!(sniffed(&mp3_stream(2), NO_TYPES), "audio/mpeg");
    assert_eq!(sniffed(&mp3_stream(1), NO_TYPES), "application/octet-stream");
}

#[test]
fn media_label_reclassified_only_when_supported() {
    let webm = ebml_header(b"webm");
    let options = SniffOptions::new().with_supported_types([mime("video/webm")]);
    assert_eq!(sniffed_with(&webm, &["video/mp4"], &options), "video/webm");
    assert_eq!(sniffed(&webm, &["video/mp4"]), "video/mp4");

    let mp3 = mp3_stream(2);
    assert_eq!(sniffed_with(&mp3, &["audio/ogg"], &options), "audio/ogg");
}
