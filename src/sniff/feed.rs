//! Mislabeled feed detection for resources served as `text/html`.
//!
//! A small lexer over the leading markup: it skips comments, declarations
//! and processing instructions at the top level and looks at the first real
//! element name. It is not an XML parser and never recurses into content.

use memchr::memmem;
use tracing::trace;

use crate::core::MimeType;
use crate::sniff::pattern::WHITESPACE_BYTES;

static RSS: MimeType = MimeType::from_static("application/rss+xml");
static ATOM: MimeType = MimeType::from_static("application/atom+xml");

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";
const RSS_NAMESPACE: &[u8] = b"http://purl.org/rss/1.0/";
const RDF_NAMESPACE: &[u8] = b"http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Decide whether an HTML-labeled body is really an RSS or Atom feed.
///
/// Returns `supplied` whenever no feed root element is found.
pub fn sniff_mislabeled_feed(input: &[u8], supplied: &MimeType) -> MimeType {
    let mut pos = if input.starts_with(UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    };

    loop {
        while input.get(pos).is_some_and(|b| WHITESPACE_BYTES.contains(b)) {
            pos += 1;
        }
        if input.get(pos) != Some(&b'<') {
            return supplied.clone();
        }
        pos += 1;

        let rest = &input[pos..];
        if rest.is_empty() {
            return supplied.clone();
        }

        let skipped = if rest.starts_with(b"!--") {
            memmem::find(&rest[3..], b"-->").map(|i| 3 + i + 3)
        } else if rest[0] == b'!' {
            memchr::memchr(b'>', &rest[1..]).map(|i| 1 + i + 1)
        } else if rest[0] == b'?' {
            memmem::find(&rest[1..], b"?>").map(|i| 1 + i + 2)
        } else {
            return root_element_type(rest, supplied);
        };

        match skipped {
            Some(len) => pos += len,
            None => return supplied.clone(),
        }
    }
}

/// Classify the element name at the start of `rest`.
fn root_element_type(rest: &[u8], supplied: &MimeType) -> MimeType {
    if rest.starts_with(b"rss") {
        trace!("rss root element");
        return RSS.clone();
    }

    if rest.starts_with(b"feed") {
        trace!("atom root element");
        return ATOM.clone();
    }

    if let Some(body) = rest.strip_prefix(b"rdf:RDF".as_slice()) {
        let rss_ns = memmem::find(body, RSS_NAMESPACE).is_some();
        let rdf_ns = memmem::find(body, RDF_NAMESPACE).is_some();
        trace!(rss_ns, rdf_ns, "rdf root element");
        if rss_ns && rdf_ns {
            return RSS.clone();
        }
    }

    supplied.clone()
}
