//! Bilingual page numbering applied to already rendered PDF bytes.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::debug;

const FONT_KEY: &str = "FDocStamp";
const FONT_SIZE: f64 = 7.5;
const GRAY: f64 = 0.5;
/// Baseline distance from the bottom edge of the media box, in points.
const BASELINE: f64 = 18.0;
/// A4 portrait, used when no page in the tree declares a media box.
const DEFAULT_MEDIA_BOX: [f64; 4] = [0.0, 0.0, 595.28, 841.89];
const MAX_TREE_DEPTH: usize = 16;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];
const FALLBACK_WIDTH: u16 = 556;

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("could not parse PDF: {0}")]
    Parse(#[source] lopdf::Error),
    #[error("PDF has no pages")]
    NoPages,
    #[error("page object {0:?} is not a dictionary")]
    MalformedPage(ObjectId),
    #[error("failed to encode footer content: {0}")]
    Encode(#[source] lopdf::Error),
    #[error("failed to write stamped PDF: {0}")]
    Write(String),
}

/// Footer text for page `index` (1-based) of `total`.
pub fn footer_text(index: usize, total: usize) -> String {
    format!("Strana {index} od {total} / Page {index} of {total}")
}

/// Width of `text` set in Helvetica at `size` points.
pub fn helvetica_width(text: &str, size: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|ch| {
            let code = ch as u32;
            if (32..=126).contains(&code) {
                u32::from(HELVETICA_WIDTHS[(code - 32) as usize])
            } else {
                u32::from(FALLBACK_WIDTH)
            }
        })
        .sum();
    f64::from(units) * size / 1000.0
}

/// Overlays "Strana i od N / Page i of N" centered at the foot of every page.
///
/// Existing page content is wrapped in `q`/`Q` so the footer is drawn in the
/// default graphics state whatever the page left behind.
pub fn stamp_page_numbers(pdf: &[u8]) -> Result<Vec<u8>, StampError> {
    let mut doc = Document::load_mem(pdf).map_err(StampError::Parse)?;
    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
    if pages.is_empty() {
        return Err(StampError::NoPages);
    }

    let font_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ]));

    let total = pages.len();
    for (offset, page_id) in pages.into_iter().enumerate() {
        stamp_page(&mut doc, page_id, font_id, &footer_text(offset + 1, total))?;
    }
    debug!(pages = total, "stamped page numbers");

    let mut output = Vec::with_capacity(pdf.len() + total * 256);
    doc.save_to(&mut output)
        .map_err(|err| StampError::Write(err.to_string()))?;
    Ok(output)
}

fn stamp_page(
    doc: &mut Document,
    page_id: ObjectId,
    font_id: ObjectId,
    text: &str,
) -> Result<(), StampError> {
    let [left, bottom, right, _] = media_box(doc, page_id);
    let x = left + (right - left - helvetica_width(text, FONT_SIZE)) / 2.0;
    let y = bottom + BASELINE;

    let footer = Content {
        operations: vec![
            Operation::new("Q", vec![]),
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(FONT_KEY.as_bytes().to_vec()), Object::Real(FONT_SIZE as _)],
            ),
            Operation::new("g", vec![Object::Real(GRAY as _)]),
            Operation::new("Td", vec![Object::Real(x as _), Object::Real(y as _)]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    // Streams are concatenated as-is; the leading newline keeps `Q` from
    // fusing with the last operator of the page.
    let mut footer_bytes = b"\n".to_vec();
    footer_bytes.extend(footer.encode().map_err(StampError::Encode)?);

    let mut resources = inherited_resources(doc, page_id);
    let mut fonts = match resources.get(b"Font") {
        Ok(object) => resolve_dictionary(doc, object).cloned().unwrap_or_else(Dictionary::new),
        Err(_) => Dictionary::new(),
    };
    fonts.set(FONT_KEY, Object::Reference(font_id));
    resources.set("Font", Object::Dictionary(fonts));

    let mut contents = existing_contents(doc, page_id);
    let save_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
    let footer_id = doc.add_object(Stream::new(Dictionary::new(), footer_bytes));
    contents.insert(0, Object::Reference(save_id));
    contents.push(Object::Reference(footer_id));

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|_| StampError::MalformedPage(page_id))?;
    page.set("Resources", Object::Dictionary(resources));
    page.set("Contents", Object::Array(contents));
    Ok(())
}

fn resolve_dictionary<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        _ => None,
    }
}

/// Walks from the page up the page tree until `key` is found.
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn inherited_resources(doc: &Document, page_id: ObjectId) -> Dictionary {
    inherited(doc, page_id, b"Resources")
        .and_then(|object| resolve_dictionary(doc, object))
        .cloned()
        .unwrap_or_else(Dictionary::new)
}

fn media_box(doc: &Document, page_id: ObjectId) -> [f64; 4] {
    let array = match inherited(doc, page_id, b"MediaBox") {
        Some(Object::Array(items)) => Some(items),
        Some(Object::Reference(id)) => doc.get_object(*id).ok().and_then(|object| match object {
            Object::Array(items) => Some(items),
            _ => None,
        }),
        _ => None,
    };

    let values: Vec<f64> = array
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Object::Integer(value) => Some(*value as f64),
                    Object::Real(value) => Some(*value as f64),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    match values.as_slice() {
        [a, b, c, d] => [a.min(*c), b.min(*d), a.max(*c), b.max(*d)],
        _ => DEFAULT_MEDIA_BOX,
    }
}

fn existing_contents(doc: &Document, page_id: ObjectId) -> Vec<Object> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };
    match page.get(b"Contents") {
        Ok(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(items)) => items.clone(),
            _ => vec![Object::Reference(*id)],
        },
        Ok(Object::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}
