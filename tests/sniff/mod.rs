//! Integration tests for the sniffing pipeline.

mod declared;
mod determinism;
mod feeds;
mod media;
