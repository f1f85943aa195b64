//! Resources with a declared type: no-sniff, Apache-bug compensation,
//! trusted XML and supported-type re-classification.

use mimesniff::sniff::APACHE_BUG_TYPES;
use mimesniff::{SniffOptions, SniffRule};

use crate::common::{mime, rule_for, sniffed, sniffed_with};

const BINARY: &[u8] = b"\x00\x00\x00\x0c\x01binary payload";
const GIF: &[u8] = b"GIF89a\x10\x00\x10\x00\x80\x00\x00";

#[test]
fn declared_type_is_normalized() {
    assert_eq!(sniffed(b"{}", &["Application/JSON; charset=utf-8"]), "application/json");
    assert_eq!(sniffed(b"{}", &["  text/css  "]), "text/css");
}

#[test]
fn no_sniff_trusts_the_label() {
    let options = SniffOptions::new().with_no_sniff(true);
    assert_eq!(sniffed_with(GIF, &["text/plain"], &options), "text/plain");
    assert_eq!(sniffed_with(b"<rss>", &["text/html"], &options), "text/html");
}

#[test]
fn every_apache_type_is_resniffed() {
    for declared in APACHE_BUG_TYPES {
        assert_eq!(sniffed(BINARY, &[declared]), "application/octet-stream", "{declared}");
        assert_eq!(sniffed(b"just text", &[declared]), "text/plain", "{declared}");
        assert_eq!(rule_for(BINARY, &[declared]), SniffRule::ApacheBug);
    }
}

#[test]
fn apache_check_respects_boms() {
    let utf16 = b"\xfe\xff\x00A\x00\x00";
    assert_eq!(sniffed(utf16, &["text/plain"]), "text/plain");
    let utf8 = b"\xef\xbb\xbf\x00\x01";
    assert_eq!(sniffed(utf8, &["text/plain"]), "text/plain");
}

#[test]
fn apache_check_does_not_sniff_signatures() {
    // a GIF labeled text/plain is still only text or binary
    assert_eq!(sniffed(GIF, &["text/plain"]), "application/octet-stream");
    assert_eq!(sniffed(b"<html>", &["text/plain"]), "text/plain");
}

#[test]
fn other_labels_are_not_apache_types() {
    assert_eq!(sniffed(BINARY, &["application/pdf"]), "application/pdf");
    assert_eq!(sniffed(BINARY, &["text/plain;charset=UTF-8"]), "text/plain");
    assert_eq!(sniffed(BINARY, &["TEXT/PLAIN"]), "text/plain");
    assert_eq!(rule_for(BINARY, &["TEXT/PLAIN"]), SniffRule::Supplied);
}

#[test]
fn apache_check_requires_http_origin() {
    let options = SniffOptions::new().with_http_origin(false);
    assert_eq!(sniffed_with(BINARY, &["text/plain"], &options), "text/plain");
}

#[test]
fn xml_labels_win_over_content() {
    assert_eq!(sniffed(GIF, &["text/xml"]), "text/xml");
    assert_eq!(sniffed(GIF, &["application/xml"]), "application/xml");
    assert_eq!(sniffed(b"<rss>", &["application/atom+xml"]), "application/atom+xml");
    assert_eq!(rule_for(GIF, &["text/xml"]), SniffRule::TrustedXml);
}

#[test]
fn supported_image_types() {
    let options = SniffOptions::new()
        .with_supported_types([mime("image/gif"), mime("image/webp"), mime("video/webm")]);

    assert_eq!(sniffed_with(GIF, &["image/png"], &options), "image/gif");
    assert_eq!(
        sniffed_with(b"RIFF\x20\x00\x00\x00WEBPVP8L", &["image/jpeg"], &options),
        "image/webp"
    );
    // sniffed type outside the accepted set keeps the label
    assert_eq!(
        sniffed_with(b"\x89PNG\r\n\x1a\n\x00", &["image/jpeg"], &options),
        "image/jpeg"
    );
    // nothing recognizable keeps the label
    assert_eq!(sniffed_with(b"????", &["image/jpeg"], &options), "image/jpeg");
    // non-media labels are never re-classified
    assert_eq!(sniffed_with(GIF, &["application/octet-stream"], &options), "application/octet-stream");
}

#[test]
fn empty_supported_set_never_matches() {
    let options = SniffOptions::new().with_supported_types([]);
    assert_eq!(sniffed_with(GIF, &["image/png"], &options), "image/png");
}
