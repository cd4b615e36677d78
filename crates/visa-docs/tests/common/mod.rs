#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::PathBuf;
use visa_docs::config::FontConfig;
use visa_docs::documents::FontSet;

/// Loads the configured document faces, or `None` with a note when they are absent.
pub fn fonts() -> Option<FontSet> {
    let mut config = FontConfig::default();
    if let Ok(dir) = std::env::var("DOCGEN_FONT_DIR") {
        config.dir = PathBuf::from(dir);
    }
    match FontSet::load(&config) {
        Ok(fonts) => Some(fonts),
        Err(err) => {
            eprintln!("skipping font-dependent test: {err}");
            None
        }
    }
}

pub fn page_count(pdf: &[u8]) -> usize {
    Document::load_mem(pdf)
        .expect("output parses as PDF")
        .get_pages()
        .len()
}

/// Decoded content of every page, in page order.
pub fn page_contents(pdf: &[u8]) -> Vec<Vec<u8>> {
    let doc = Document::load_mem(pdf).expect("output parses as PDF");
    doc.get_pages()
        .into_values()
        .map(|page_id| doc.get_page_content(page_id).expect("page content decodes"))
        .collect()
}

pub fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}

/// Where the page tree keeps what the pages inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inherit {
    /// Resources and MediaBox on every page.
    OnPage,
    /// Resources and MediaBox only on the root `Pages` node.
    OnParent,
}

/// Builds a plain Helvetica PDF with `pages` pages of `width` x 792 points.
pub fn synthetic_pdf(pages: usize, width: i64, inherit: Inherit) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter([(
        "Font",
        Object::Dictionary(Dictionary::from_iter([("F1", Object::Reference(font_id))])),
    )]));
    let media_box = Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(792),
    ]);

    let mut kids = Vec::with_capacity(pages);
    for index in 0..pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(24)]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(700)]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Body of page {}", index + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.encode().expect("content encodes"),
        ));

        let mut page = Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        if inherit == Inherit::OnPage {
            page.set("Resources", Object::Reference(resources_id));
            page.set("MediaBox", media_box.clone());
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let mut root = Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(pages as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    if inherit == Inherit::OnParent {
        root.set("Resources", Object::Reference(resources_id));
        root.set("MediaBox", media_box);
    }
    doc.objects.insert(pages_id, Object::Dictionary(root));

    let catalog_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("synthetic PDF saves");
    bytes
}

pub fn page_ids(pdf: &[u8]) -> (Document, Vec<ObjectId>) {
    let doc = Document::load_mem(pdf).expect("output parses as PDF");
    let ids = doc.get_pages().into_values().collect();
    (doc, ids)
}
