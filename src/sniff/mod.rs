//! MIME sniffing engine.
//!
//! Computes the effective type of a resource from its leading bytes and the
//! type it was declared with, following the WHATWG MIME Sniffing rules for
//! resources loaded in a browsing context.

pub mod api;
pub mod config;
pub mod containers;
pub mod feed;
pub mod groups;
pub mod lookup;
pub mod mp3;
pub mod pattern;
pub mod signatures;

pub use api::{
    extract_mime, resource_header, sniff, SniffRule, SniffVerdict, APACHE_BUG_TYPES,
    RESOURCE_HEADER_LEN,
};
pub use config::{SignatureConfig, SniffConfig, SniffOptions};
pub use groups::{classify, MimeGroups};
pub use lookup::{
    find_archive_mime, find_audio_video_mime, find_extra_mime, find_font_mime, find_image_mime,
    find_in_catalog, find_text_mime,
};
