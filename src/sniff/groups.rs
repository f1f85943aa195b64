//! MIME type group predicates.
//!
//! Pure checks on a normalized type value, independent of any content.
//! Each predicate accepts anything byte-like, so both `"image/png"` and a
//! `&MimeType` work.

use bitflags::bitflags;

/// Legacy font types outside the `font/` tree.
pub const FONT_TYPES: &[&[u8]] = &[
    b"application/font-cff",
    b"application/font-off",
    b"application/font-sfnt",
    b"application/font-ttf",
    b"application/font-woff",
    b"application/vnd.ms-fontobject",
    b"application/vnd.ms-opentype",
];

pub const ARCHIVE_TYPES: &[&[u8]] = &[
    b"application/x-rar-compressed",
    b"application/zip",
    b"application/x-gzip",
];

/// Every essence a browser treats as JavaScript.
pub const JAVASCRIPT_TYPES: &[&[u8]] = &[
    b"application/ecmascript",
    b"application/javascript",
    b"application/x-ecmascript",
    b"application/x-javascript",
    b"text/ecmascript",
    b"text/javascript",
    b"text/javascript1.0",
    b"text/javascript1.1",
    b"text/javascript1.2",
    b"text/javascript1.3",
    b"text/javascript1.4",
    b"text/javascript1.5",
    b"text/jscript",
    b"text/livescript",
    b"text/x-ecmascript",
    b"text/x-javascript",
];

fn one_of(mime: &[u8], table: &[&[u8]]) -> bool {
    table.iter().any(|t| *t == mime)
}

pub fn is_image(mime: impl AsRef<[u8]>) -> bool {
    mime.as_ref().starts_with(b"image/")
}

pub fn is_audio_or_video(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    mime.starts_with(b"audio/") || mime.starts_with(b"video/") || mime == b"application/ogg"
}

pub fn is_font(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    mime.starts_with(b"font/") || one_of(mime, FONT_TYPES)
}

pub fn is_zip_based(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    mime.ends_with(b"+zip") || mime == b"application/zip"
}

pub fn is_archive(mime: impl AsRef<[u8]>) -> bool {
    one_of(mime.as_ref(), ARCHIVE_TYPES)
}

pub fn is_xml(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    mime.ends_with(b"+xml") || mime == b"text/xml" || mime == b"application/xml"
}

pub fn is_html(mime: impl AsRef<[u8]>) -> bool {
    mime.as_ref() == b"text/html"
}

/// XML, HTML or PDF: types whose content can run script.
pub fn is_scriptable(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    is_xml(mime) || is_html(mime) || mime == b"application/pdf"
}

/// Case-insensitive, unlike the other predicates.
pub fn is_javascript(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    JAVASCRIPT_TYPES.iter().any(|t| t.eq_ignore_ascii_case(mime))
}

pub fn is_json(mime: impl AsRef<[u8]>) -> bool {
    let mime = mime.as_ref();
    mime.ends_with(b"+json") || mime == b"application/json" || mime == b"text/json"
}

bitflags! {
    /// Set of groups a MIME type belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MimeGroups: u16 {
        const IMAGE = 1 << 0;
        const AUDIO_VIDEO = 1 << 1;
        const FONT = 1 << 2;
        const ZIP_BASED = 1 << 3;
        const ARCHIVE = 1 << 4;
        const XML = 1 << 5;
        const HTML = 1 << 6;
        const SCRIPTABLE = 1 << 7;
        const JAVASCRIPT = 1 << 8;
        const JSON = 1 << 9;
    }
}

/// Every group `mime` belongs to.
pub fn classify(mime: impl AsRef<[u8]>) -> MimeGroups {
    let mime = mime.as_ref();
    let checks: [(MimeGroups, fn(&[u8]) -> bool); 10] = [
        (MimeGroups::IMAGE, |m| is_image(m)),
        (MimeGroups::AUDIO_VIDEO, |m| is_audio_or_video(m)),
        (MimeGroups::FONT, |m| is_font(m)),
        (MimeGroups::ZIP_BASED, |m| is_zip_based(m)),
        (MimeGroups::ARCHIVE, |m| is_archive(m)),
        (MimeGroups::XML, |m| is_xml(m)),
        (MimeGroups::HTML, |m| is_html(m)),
        (MimeGroups::SCRIPTABLE, |m| is_scriptable(m)),
        (MimeGroups::JAVASCRIPT, |m| is_javascript(m)),
        (MimeGroups::JSON, |m| is_json(m)),
    ];

    checks
        .iter()
        .filter(|(_, check)| check(mime))
        .fold(MimeGroups::empty(), |acc, (group, _)| acc | *group)
}
