//! Content-type sniffing for byte streams.
//!
//! ```
//! use mimesniff::{extract_mime, SniffOptions};
//!
//! let mime = extract_mime(b"GIF89a\x01\x00", &["image/png"], &SniffOptions::default()).unwrap();
//! assert_eq!(mime, "image/png");
//!
//! let mime = extract_mime(b"GIF89a\x01\x00", &[] as &[&str], &SniffOptions::default()).unwrap();
//! assert_eq!(mime, "image/gif");
//! ```

/// Core data types module
pub mod core;
pub mod error;
pub mod logging;
pub mod sniff;

pub use crate::core::{MimeType, Signature};
pub use crate::error::{Result, SniffError};
pub use crate::sniff::{
    classify, extract_mime, sniff, MimeGroups, SignatureConfig, SniffConfig, SniffOptions,
    SniffRule, SniffVerdict,
};
