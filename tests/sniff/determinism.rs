//! Sniffing is a pure function of its inputs, also under concurrency.

use rayon::prelude::*;

use mimesniff::{extract_mime, sniff, MimeType, SniffOptions};

use crate::common::fixtures::{ebml_header, mp3_stream, mp4_ftyp, rdf_feed, RDF_NS, RSS_NS};

fn corpus() -> Vec<(Vec<u8>, Vec<&'static str>)> {
    vec![
        (b"GIF89a\x01\x00".to_vec(), vec![]),
        (b"\x00\x01\x02".to_vec(), vec!["text/plain"]),
        (b"<html><body>".to_vec(), vec!["*/*"]),
        (rdf_feed(&[RDF_NS, RSS_NS]), vec!["text/html"]),
        (mp4_ftyp(b"mp42", &[b"isom"]), vec![]),
        (ebml_header(b"webm"), vec!["video/webm"]),
        (mp3_stream(2), vec!["a/["]),
        (b"%PDF-1.5".to_vec(), vec!["image/png", "text/xml"]),
    ]
}

#[test]
fn repeated_calls_agree() {
    let options = SniffOptions::default();
    for (body, declared) in corpus() {
        let first = sniff(&body, declared.as_slice(), &options).unwrap();
        let second = sniff(&body, declared.as_slice(), &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn parallel_calls_match_sequential() {
    let options = SniffOptions::default();
    let inputs = corpus();
    let sequential: Vec<MimeType> = inputs
        .iter()
        .map(|(body, declared)| extract_mime(body, declared.as_slice(), &options).unwrap())
        .collect();

    let parallel: Vec<Vec<MimeType>> = (0..64)
        .into_par_iter()
        .map(|_| {
            inputs
                .iter()
                .map(|(body, declared)| extract_mime(body, declared.as_slice(), &options).unwrap())
                .collect()
        })
        .collect();

    for run in parallel {
        assert_eq!(run, sequential);
    }
}
