//! Integration tests for pdf-encoder
//!
//! These tests build complete files and check them byte-wise and with an
//! independent reader.

use pdf_encoder::{dictionary, Document, Encoding, Object, PdfError, Reference, Stream, Text};
use pretty_assertions::assert_eq;

/// Build a one-page document showing two lines of Helvetica
fn hello_world() -> Vec<u8> {
    let mut doc = Document::new();
    let helvetica = doc.add_font("Helvetica", Encoding::WinAnsi).unwrap();

    let mut text = Text::new();
    text.set_font(&helvetica, 12.0).unwrap();
    text.next_line_offset(72.0, 720.0).unwrap();
    text.show("Hello, World!").unwrap();
    text.next_line();
    text.show("Don\u{2019}t panic \u{20ac}").unwrap();

    let fonts = doc.font_resources(&text).unwrap();
    let contents = doc.add(text.into_stream());

    let pages = doc.add(dictionary! { "Type" => "Pages", "Count" => 1 });
    let page = doc.add(dictionary! {
        "Type" => "Page",
        "Parent" => pages,
        "MediaBox" => vec![0.into(), 0.into(), Object::from(595.28), Object::from(841.89)],
        "Resources" => dictionary! { "Font" => fonts },
        "Contents" => contents,
    });
    doc.get_mut(pages)
        .and_then(Object::as_dict_mut)
        .unwrap()
        .set("Kids", vec![page]);

    let catalog = doc.add(dictionary! { "Type" => "Catalog", "Pages" => pages });
    doc.set_root(catalog);
    doc.to_bytes().unwrap()
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Offsets listed in the cross-reference table, object 0 excluded
fn xref_offsets(pdf: &[u8]) -> Vec<u64> {
    let marker = b"startxref\r\n";
    let start = pdf
        .windows(marker.len())
        .rposition(|w| w == marker)
        .unwrap()
        + marker.len();
    let tail = std::str::from_utf8(&pdf[start..]).unwrap();
    let xref: usize = tail.lines().next().unwrap().trim().parse().unwrap();

    let table = std::str::from_utf8(&pdf[xref..]).unwrap();
    let mut lines = table.split("\r\n");
    assert_eq!(lines.next(), Some("xref"));
    let header = lines.next().unwrap();
    let count: usize = header.split(' ').nth(1).unwrap().parse().unwrap();
    assert_eq!(lines.next(), Some("0000000000 65535 f"));

    (1..count)
        .map(|_| {
            let entry = lines.next().unwrap();
            assert!(entry.ends_with(" 00000 n"), "bad entry {entry:?}");
            entry[..10].parse().unwrap()
        })
        .collect()
}

/// Start of every `N 0 obj` line, found by scanning the output
fn scanned_offsets(pdf: &[u8]) -> Vec<(u32, u64)> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(at) = find(pdf, b" 0 obj\r\n", pos) {
        let line_start = pdf[..at]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        let number = std::str::from_utf8(&pdf[line_start..at])
            .unwrap()
            .parse()
            .unwrap();
        found.push((number, line_start as u64));
        pos = at + 1;
    }
    found
}

#[test]
fn test_xref_matches_object_positions() {
    let pdf = hello_world();
    let xref = xref_offsets(&pdf);
    let scanned = scanned_offsets(&pdf);

    assert_eq!(xref.len(), scanned.len());
    for (i, (number, offset)) in scanned.iter().enumerate() {
        assert_eq!(*number as usize, i + 1);
        assert_eq!(xref[i], *offset);
    }
}

#[test]
fn test_object_numbers_are_sequential() {
    let mut doc = Document::new();
    let mut last = None;
    for i in 0..20 {
        let reference = match i % 4 {
            0 => doc.add(Object::Null),
            1 => doc.add(Object::string(format!("item {i}"))),
            2 => doc.add(Stream::new(dictionary! {}, vec![b'x'; i])),
            _ => doc.add(vec![i as i64]),
        };
        assert_eq!(reference, Reference::new(i as u32 + 1, 0));
        last = Some(reference);
    }
    doc.set_root(last.unwrap());
    let pdf = doc.to_bytes().unwrap();

    let numbers: Vec<u32> = scanned_offsets(&pdf).into_iter().map(|(n, _)| n).collect();
    assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
    assert!(find(&pdf, b"/Size 21 ", 0).is_some());
}

#[test]
fn test_stream_length_matches_payload() {
    let payloads: Vec<Vec<u8>> = vec![
        vec![],
        b"BT ET".to_vec(),
        b"endstream inside the data\r\n".to_vec(),
        (0..=255u8).collect(),
    ];

    let mut doc = Document::new();
    let catalog = doc.add(dictionary! { "Type" => "Catalog" });
    for payload in &payloads {
        doc.add(Stream::new(dictionary! { "Length" => 0 }, payload.clone()));
    }
    doc.set_root(catalog);
    let pdf = doc.to_bytes().unwrap();

    let mut pos = 0;
    for payload in &payloads {
        let length_at = find(&pdf, b"/Length ", pos).unwrap() + b"/Length ".len();
        let length_end = find(&pdf, b" >>", length_at).unwrap();
        let length: usize = std::str::from_utf8(&pdf[length_at..length_end])
            .unwrap()
            .parse()
            .unwrap();

        let data_start = find(&pdf, b"stream\r\n", length_end).unwrap() + b"stream\r\n".len();
        assert_eq!(length, payload.len());
        assert_eq!(&pdf[data_start..data_start + length], payload.as_slice());
        assert_eq!(
            &pdf[data_start + length..data_start + length + 11],
            b"\r\nendstream"
        );
        pos = data_start + length;
    }
}

#[test]
fn test_dangling_reference_is_rejected() {
    let mut doc = Document::new();
    let catalog = doc.add(dictionary! {
        "Type" => "Catalog",
        "Pages" => Reference::new(42, 0),
    });
    doc.set_root(catalog);

    let mut out = Vec::new();
    let err = doc.encode(&mut out).unwrap_err();
    assert!(matches!(
        err,
        PdfError::DanglingReference {
            referrer: Some((1, 0)),
            ..
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn test_independent_reader_loads_output() {
    let pdf = hello_world();
    let doc = lopdf::Document::load_mem(&pdf).unwrap();

    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let content = String::from_utf8_lossy(&content);
    assert!(content.starts_with("BT\n/Helvetica 12 Tf\n72 720 Td\n(Hello, World!) Tj\n"));
    assert!(content.contains("14.4 TL\nT*\n"));
}

#[test]
fn test_text_bytes_use_font_encoding() {
    let pdf = hello_world();
    // Right quote is 0x92 in WinAnsi; the euro has no Helvetica metrics and is dropped
    assert!(find(&pdf, b"(Don\x92t panic ) Tj", 0).is_some());
    assert!(find(&pdf, b"/Encoding /WinAnsiEncoding", 0).is_some());
}

#[test]
fn test_latin1_text_reaches_content_stream() {
    let mut doc = Document::new();
    let helvetica = doc.add_font("Helvetica", Encoding::WinAnsi).unwrap();

    let mut text = Text::new();
    text.set_font(&helvetica, 12.0).unwrap();
    text.show("Caf\u{00e9} M\u{00fc}ller \u{00bd}").unwrap();
    let contents = doc.add(text.into_stream());
    doc.set_root(contents);

    let pdf = doc.to_bytes().unwrap();
    assert!(find(&pdf, b"(Caf\xe9 M\xfcller \xbd) Tj", 0).is_some());
}

#[test]
fn test_save_to_file() {
    let path = std::env::temp_dir().join(format!("pdf-encoder-save-{}.pdf", std::process::id()));

    let mut doc = Document::new();
    let catalog = doc.add(dictionary! { "Type" => "Catalog" });
    doc.set_root(catalog);
    doc.save(&path).unwrap();

    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(written.starts_with(b"%PDF-1.7\r\n"));
    assert_eq!(xref_offsets(&written), vec![17]);
}
