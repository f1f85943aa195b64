//! Core data types for mimesniff.
//!
//! The engine works on two plain values: the normalized `MimeType` and the
//! `Signature` rows that make up the sniffing catalogs.

pub mod mime_type;
pub mod signature;

pub use mime_type::MimeType;
pub use signature::Signature;
