//! Built-in signature catalogs.
//!
//! Consolidates the byte patterns of the sniffing algorithm, one ordered
//! table per family. Order matters: the first matching row wins.

use crate::core::Signature;
use crate::sniff::pattern::WHITESPACE_BYTES;

const WS: Option<&[u8]> = Some(WHITESPACE_BYTES);

/// Image signatures.
pub static IMAGE_SIGNATURES: [Signature; 8] = [
    // Windows icon and cursor
    Signature::new(b"\x00\x00\x01\x00", b"\xff\xff\xff\xff", None, "image/x-icon"),
    Signature::new(b"\x00\x00\x02\x00", b"\xff\xff\xff\xff", None, "image/x-icon"),
    Signature::new(b"BM", b"\xff\xff", None, "image/bmp"),
    Signature::new(b"GIF87a", b"\xff\xff\xff\xff\xff\xff", None, "image/gif"),
    Signature::new(b"GIF89a", b"\xff\xff\xff\xff\xff\xff", None, "image/gif"),
    // "RIFF", four length bytes, "WEBPVP"
    Signature::new(
        b"RIFF\x00\x00\x00\x00WEBPVP",
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff\xff\xff",
        None,
        "image/webp",
    ),
    Signature::new(
        b"\x89PNG\r\n\x1a\n",
        b"\xff\xff\xff\xff\xff\xff\xff\xff",
        None,
        "image/png",
    ),
    // SOI marker followed by the first byte of another marker
    Signature::new(b"\xff\xd8\xff", b"\xff\xff\xff", None, "image/jpeg"),
];

/// Fixed-offset audio and video signatures. The MP4, WebM and bare MP3
/// structural checks run after this table.
pub static AUDIO_VIDEO_SIGNATURES: [Signature; 7] = [
    Signature::new(b".snd", b"\xff\xff\xff\xff", None, "audio/basic"),
    Signature::new(
        b"FORM\x00\x00\x00\x00AIFF",
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        None,
        "audio/aiff",
    ),
    // ID3v2-tagged MP3
    Signature::new(b"ID3", b"\xff\xff\xff", None, "audio/mpeg"),
    Signature::new(b"OggS\x00", b"\xff\xff\xff\xff\xff", None, "application/ogg"),
    // "MThd" followed by a big-endian header length of 6
    Signature::new(
        b"MThd\x00\x00\x00\x06",
        b"\xff\xff\xff\xff\xff\xff\xff\xff",
        None,
        "audio/midi",
    ),
    Signature::new(
        b"RIFF\x00\x00\x00\x00AVI ",
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        None,
        "video/avi",
    ),
    Signature::new(
        b"RIFF\x00\x00\x00\x00WAVE",
        b"\xff\xff\xff\xff\x00\x00\x00\x00\xff\xff\xff\xff",
        None,
        "audio/wave",
    ),
];

/// Font signatures.
pub static FONT_SIGNATURES: [Signature; 6] = [
    // Embedded OpenType: 34 arbitrary bytes then "LP"
    Signature::new(
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
          \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00LP",
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
          \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xff\xff",
        None,
        "application/vnd.ms-fontobject",
    ),
    // TrueType version 1.0
    Signature::new(b"\x00\x01\x00\x00", b"\xff\xff\xff\xff", None, "font/ttf"),
    Signature::new(b"OTTO", b"\xff\xff\xff\xff", None, "font/otf"),
    Signature::new(b"ttcf", b"\xff\xff\xff\xff", None, "font/collection"),
    Signature::new(b"wOFF", b"\xff\xff\xff\xff", None, "font/woff"),
    Signature::new(b"wOF2", b"\xff\xff\xff\xff", None, "font/woff2"),
];

/// Archive signatures.
pub static ARCHIVE_SIGNATURES: [Signature; 3] = [
    Signature::new(b"\x1f\x8b\x08", b"\xff\xff\xff", None, "application/x-gzip"),
    Signature::new(b"PK\x03\x04", b"\xff\xff\xff\xff", None, "application/zip"),
    Signature::new(
        b"Rar \x1a\x07\x00",
        b"\xff\xff\xff\xff\xff\xff\xff",
        None,
        "application/x-rar-compressed",
    ),
];

/// Scriptable markup and text signatures.
///
/// HTML tags are matched case-insensitively (0xDF folds ASCII case) after
/// leading whitespace, and each tag appears twice, once per tag-terminating
/// byte (space and `>`).
pub static TEXT_SIGNATURES: [Signature; 36] = [
    Signature::new(
        b"<!DOCTYPE HTML ",
        b"\xff\xff\xdf\xdf\xdf\xdf\xdf\xdf\xdf\xff\xdf\xdf\xdf\xdf\xff",
        WS,
        "text/html",
    ),
    Signature::new(
        b"<!DOCTYPE HTML>",
        b"\xff\xff\xdf\xdf\xdf\xdf\xdf\xdf\xdf\xff\xdf\xdf\xdf\xdf\xff",
        WS,
        "text/html",
    ),
    Signature::new(b"<HTML ", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<HTML>", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<HEAD ", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<HEAD>", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<SCRIPT ", b"\xff\xdf\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<SCRIPT>", b"\xff\xdf\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<IFRAME ", b"\xff\xdf\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<IFRAME>", b"\xff\xdf\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<H1 ", b"\xff\xdf\xff\xff", WS, "text/html"),
    Signature::new(b"<H1>", b"\xff\xdf\xff\xff", WS, "text/html"),
    Signature::new(b"<DIV ", b"\xff\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<DIV>", b"\xff\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<FONT ", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<FONT>", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<TABLE ", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<TABLE>", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<A ", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<A>", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<STYLE ", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<STYLE>", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<TITLE ", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<TITLE>", b"\xff\xdf\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<B ", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<B>", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<BODY ", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<BODY>", b"\xff\xdf\xdf\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<BR ", b"\xff\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<BR>", b"\xff\xdf\xdf\xff", WS, "text/html"),
    Signature::new(b"<P ", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<P>", b"\xff\xdf\xff", WS, "text/html"),
    Signature::new(b"<!-- ", b"\xff\xff\xff\xff\xff", WS, "text/html"),
    Signature::new(b"<!-->", b"\xff\xff\xff\xff\xff", WS, "text/html"),
    Signature::new(b"<?xml", b"\xff\xff\xff\xff\xff", WS, "text/xml"),
    Signature::new(b"%PDF-", b"\xff\xff\xff\xff\xff", None, "application/pdf"),
];

/// PostScript and byte-order-mark signatures, tried before every binary
/// family in the unknown-type path.
pub static EXTRA_SIGNATURES: [Signature; 4] = [
    Signature::new(
        b"%!PS-Adobe-",
        b"\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff",
        None,
        "application/postscript",
    ),
    // UTF-16BE, UTF-16LE and UTF-8 byte order marks
    Signature::new(b"\xfe\xff\x00\x00", b"\xff\xff\x00\x00", None, "text/plain"),
    Signature::new(b"\xff\xfe\x00\x00", b"\xff\xff\x00\x00", None, "text/plain"),
    Signature::new(b"\xef\xbb\xbf\x00", b"\xff\xff\xff\x00", None, "text/plain"),
];

/// Every built-in catalog, for table-wide checks.
pub fn all_catalogs() -> [(&'static str, &'static [Signature]); 6] {
    [
        ("image", &IMAGE_SIGNATURES),
        ("audio/video", &AUDIO_VIDEO_SIGNATURES),
        ("font", &FONT_SIGNATURES),
        ("archive", &ARCHIVE_SIGNATURES),
        ("text", &TEXT_SIGNATURES),
        ("extra", &EXTRA_SIGNATURES),
    ]
}
