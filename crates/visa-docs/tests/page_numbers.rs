mod common;

use common::{contains, page_contents, page_count, page_ids, synthetic_pdf, Inherit};
use lopdf::content::Content;
use lopdf::Object;
use visa_docs::documents::stamp::{footer_text, helvetica_width};
use visa_docs::documents::{stamp_page_numbers, StampError};

#[test]
fn every_page_gets_its_own_footer() {
    let source = synthetic_pdf(3, 612, Inherit::OnPage);
    let stamped = stamp_page_numbers(&source).expect("stamping succeeds");

    let contents = page_contents(&stamped);
    assert_eq!(contents.len(), 3);
    for (index, content) in contents.iter().enumerate() {
        let page = index + 1;
        assert!(contains(content, &footer_text(page, 3)), "page {page}");
        assert!(contains(content, &format!("Body of page {page}")), "page {page}");
    }
}

#[test]
fn stamping_twice_keeps_the_page_count() {
    let source = synthetic_pdf(4, 612, Inherit::OnPage);
    let once = stamp_page_numbers(&source).expect("first stamp");
    let twice = stamp_page_numbers(&once).expect("second stamp");

    assert_eq!(page_count(&once), 4);
    assert_eq!(page_count(&twice), 4);
}

#[test]
fn inherited_resources_and_media_box_are_respected() {
    let source = synthetic_pdf(2, 612, Inherit::OnParent);
    let stamped = stamp_page_numbers(&source).expect("stamping succeeds");
    let (doc, pages) = page_ids(&stamped);

    for page_id in pages {
        let page = doc.get_dictionary(page_id).expect("page dictionary");
        let resources = match page.get(b"Resources").expect("page resources") {
            Object::Dictionary(dict) => dict,
            other => panic!("resources should be inline, got {other:?}"),
        };
        let fonts = match resources.get(b"Font").expect("font resources") {
            Object::Dictionary(dict) => dict,
            other => panic!("fonts should be inline, got {other:?}"),
        };
        assert!(fonts.has(b"F1"), "original font survives");
        assert!(fonts.has(b"FDocStamp"), "footer font added");

        let content = Content::decode(&doc.get_page_content(page_id).expect("content"))
            .expect("content parses");
        let footer_move = content
            .operations
            .iter()
            .rev()
            .find(|operation| operation.operator == "Td")
            .expect("footer positioning");
        let x = footer_move.operands[0].as_float().expect("x operand");
        let expected = (612.0 - helvetica_width(&footer_text(1, 2), 7.5)) / 2.0;
        assert!((f64::from(x) - expected).abs() < 0.01, "x = {x}, expected {expected}");
    }
}

#[test]
fn footer_state_is_isolated_from_page_content() {
    let source = synthetic_pdf(1, 595, Inherit::OnPage);
    let stamped = stamp_page_numbers(&source).expect("stamping succeeds");
    let (doc, pages) = page_ids(&stamped);

    let content = Content::decode(&doc.get_page_content(pages[0]).expect("content"))
        .expect("content parses");
    let operators: Vec<&str> = content
        .operations
        .iter()
        .map(|operation| operation.operator.as_str())
        .collect();
    assert_eq!(operators.first(), Some(&"q"));
    assert!(
        operators.iter().all(|op| ["q", "Q", "BT", "ET", "Tf", "Td", "Tj", "g"].contains(op)),
        "operators fused across stream boundaries: {operators:?}"
    );
    let restore = operators.iter().rposition(|op| *op == "Q").expect("restore");
    let footer = operators.iter().rposition(|op| *op == "BT").expect("footer text");
    assert_eq!(operators[restore - 1], "ET", "restore follows the page content");
    assert!(restore < footer);
}

#[test]
fn empty_page_tree_is_rejected() {
    let source = synthetic_pdf(0, 612, Inherit::OnPage);
    let err = stamp_page_numbers(&source).expect_err("nothing to stamp");
    assert!(matches!(err, StampError::NoPages));
}
