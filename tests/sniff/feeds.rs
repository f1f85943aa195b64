//! HTML-labeled resources that are really RSS or Atom feeds.

use mimesniff::SniffRule;

use crate::common::fixtures::{rdf_feed, RDF_NS, RSS_NS};
use crate::common::{rule_for, sniffed};

#[test]
fn rss_feed_labeled_as_rss_is_unchanged() {
    let body = b"<rss version=\"2.0\"><channel><title>news</title></channel></rss>";
    assert_eq!(sniffed(body, &["application/rss+xml"]), "application/rss+xml");
    assert_eq!(rule_for(body, &["application/rss+xml"]), SniffRule::TrustedXml);
}

#[test]
fn rss_and_atom_labeled_as_html() {
    let rss = b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rss version=\"2.0\">";
    assert_eq!(sniffed(rss, &["text/html"]), "application/rss+xml");
    assert_eq!(rule_for(rss, &["text/html"]), SniffRule::MislabeledFeed);

    let atom = b"\xef\xbb\xbf<?xml version=\"1.0\"?>\r\n<feed xmlns=\"http://www.w3.org/2005/Atom\">";
    assert_eq!(sniffed(atom, &["text/html; charset=utf-8"]), "application/atom+xml");
}

#[test]
fn rdf_needs_both_namespaces_in_any_order() {
    assert_eq!(sniffed(&rdf_feed(&[RSS_NS, RDF_NS]), &["text/html"]), "application/rss+xml");
    assert_eq!(sniffed(&rdf_feed(&[RDF_NS, RSS_NS]), &["text/html"]), "application/rss+xml");
    assert_eq!(sniffed(&rdf_feed(&[RDF_NS]), &["text/html"]), "text/html");
    assert_eq!(sniffed(&rdf_feed(&[RSS_NS]), &["text/html"]), "text/html");
    assert_eq!(sniffed(&rdf_feed(&[]), &["text/html"]), "text/html");
}

#[test]
fn leading_comments_and_doctype_are_skipped() {
    let body = b"<!-- generator: x -->\n<!DOCTYPE feed>\n<feed>";
    assert_eq!(sniffed(body, &["text/html"]), "application/atom+xml");
}

#[test]
fn ordinary_html_stays_html() {
    let body = b"<!DOCTYPE html><html><head><title>rss</title></head></html>";
    assert_eq!(sniffed(body, &["text/html"]), "text/html");
    assert_eq!(sniffed(b"text before <rss>", &["text/html"]), "text/html");
    assert_eq!(sniffed(b"<!-- never closed <rss>", &["text/html"]), "text/html");
}

#[test]
fn feed_markup_without_html_label_is_not_a_feed() {
    // only a declared text/html triggers the feed check
    assert_eq!(sniffed(b"<rss version=\"2.0\">", &[]), "text/plain");
    assert_eq!(sniffed(b"<rss version=\"2.0\">", &["text/plain"]), "text/plain");
}
