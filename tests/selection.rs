//! Selection requests: exact ranges, clamping, spans, idempotence

mod common;

use common::{sample_documents, NON_LF_BREAKS, TWO_ASSIGNMENTS};
use sourceview::{SrcSpan, Viewer};

// ========================================================================
// In-range selections
// ========================================================================

#[test]
fn test_in_range_selection_is_exact() {
    for doc in sample_documents() {
        let len = doc.chars().count();
        let mut viewer = Viewer::new(doc);
        for from in 0..=len {
            for to in from..=len {
                viewer.set_selection(from, to);
                assert_eq!(viewer.selection(), Some((from, to)), "doc {:?}", doc);
            }
        }
    }
}

#[test]
fn test_select_first_assignment() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection(0, 5);
    assert_eq!(viewer.selection(), Some((0, 5)));
    assert_eq!(viewer.selected_text().as_deref(), Some("x = 1"));
}

#[test]
fn test_selection_replaces_previous() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection(0, 5);
    viewer.set_selection(6, 11);
    assert_eq!(viewer.selection(), Some((6, 11)));
    assert_eq!(viewer.selected_text().as_deref(), Some("y = 2"));
}

#[test]
fn test_selection_is_idempotent() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection(2, 9);
    let viewport = *viewer.viewport();
    let rows = viewer.root_node().surface().rows().to_vec();

    viewer.set_selection(2, 9);
    assert_eq!(viewer.selection(), Some((2, 9)));
    assert_eq!(*viewer.viewport(), viewport);
    assert_eq!(viewer.root_node().surface().rows(), rows.as_slice());
}

#[test]
fn test_offsets_are_characters_not_bytes() {
    let mut viewer = Viewer::new("é = 'ü'\n");
    viewer.set_selection(4, 7);
    assert_eq!(viewer.selected_text().as_deref(), Some("'ü'"));
}

// ========================================================================
// Clamping
// ========================================================================

#[test]
fn test_past_end_clamps_to_document_length() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection(100, 100);
    // "x = 1\ny = 2\n" is 12 characters long
    assert_eq!(viewer.selection(), Some((12, 12)));
}

#[test]
fn test_reversed_range_is_swapped() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection(5, 0);
    assert_eq!(viewer.selection(), Some((0, 5)));
}

#[test]
fn test_out_of_range_selections_are_well_formed() {
    for doc in sample_documents() {
        let len = doc.chars().count();
        let mut viewer = Viewer::new(doc);
        for (from, to) in [
            (len + 1, len + 5),
            (len + 5, 0),
            (0, usize::MAX),
            (usize::MAX, usize::MAX),
            (usize::MAX, 0),
        ] {
            viewer.set_selection(from, to);
            let (f, t) = viewer.selection().unwrap();
            assert!(f <= t && t <= len, "({}, {}) on {:?} gave ({}, {})", from, to, doc, f, t);
        }
    }
}

// ========================================================================
// Source spans
// ========================================================================

#[test]
fn test_span_selects_line_and_column() {
    let mut viewer = Viewer::new("def f():\n    return value\n");
    viewer.set_selection_span(SrcSpan::new(2, 12, 5));
    assert_eq!(viewer.selected_text().as_deref(), Some("value"));
}

#[test]
fn test_span_past_end_clamps() {
    let mut viewer = Viewer::new(TWO_ASSIGNMENTS);
    viewer.set_selection_span(SrcSpan::new(40, 1, 3));
    assert_eq!(viewer.selection(), Some((12, 12)));

    viewer.set_selection_span(SrcSpan::new(2, 1, 500));
    assert_eq!(viewer.selection(), Some((6, 12)));
}

#[test]
fn test_span_lines_count_only_lf() {
    for doc in NON_LF_BREAKS {
        let mut viewer = Viewer::new(doc);
        viewer.set_selection_span(SrcSpan::new(2, 5, 4));
        assert_eq!(viewer.selected_text().as_deref(), Some("'hi'"), "doc {:?}", doc);
    }
}
