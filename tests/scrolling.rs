//! Scroll-into-view on selection, manual scrolling and resizing

mod common;

use common::{numbered_lines, test_viewer};
use sourceview::model::ScrollRevealMode;
use sourceview::{Viewer, ViewerConfig, ViewerMsg};

#[test]
fn test_no_scroll_when_content_fits() {
    let mut viewer = test_viewer("a = 1\nb = 2\nc = 3\n", 25, 80);
    viewer.set_selection(12, 17);
    assert_eq!(viewer.viewport().top_line, 0);
}

#[test]
fn test_selection_below_viewport_scrolls_down() {
    let text = numbered_lines(100);
    let mut viewer = test_viewer(&text, 10, 80);
    let start = viewer.document().line_start(50);
    viewer.set_selection(start, start + 4);

    // Minimal reveal with padding 1: 50 + 1 + 1 - 10
    assert_eq!(viewer.viewport().top_line, 42);
    let surface = viewer.root_node().surface();
    assert_eq!(surface.rows().first().map(|r| r.line), Some(42));
    assert!(surface.rows().iter().any(|r| r.line == 50 && r.in_selection));
}

#[test]
fn test_selection_above_viewport_scrolls_up() {
    let text = numbered_lines(100);
    let mut viewer = test_viewer(&text, 10, 80);
    let late = viewer.document().line_start(90);
    viewer.set_selection(late, late);
    let early = viewer.document().line_start(20);
    viewer.set_selection(early, early + 1);

    assert_eq!(viewer.viewport().top_line, 19);
    assert!(viewer.viewport().is_line_visible(20));
}

#[test]
fn test_selection_inside_viewport_does_not_scroll() {
    let text = numbered_lines(100);
    let mut viewer = test_viewer(&text, 10, 80);
    let start = viewer.document().line_start(4);
    viewer.set_selection(start, start + 3);
    assert_eq!(viewer.viewport().top_line, 0);
}

#[test]
fn test_tall_selection_reveals_its_start() {
    let text = numbered_lines(100);
    let mut viewer = test_viewer(&text, 10, 80);
    let from = viewer.document().line_start(30);
    let to = viewer.document().line_start(70);
    viewer.set_selection(from, to);

    assert!(viewer.viewport().is_line_visible(30));
}

#[test]
fn test_centered_reveal_mode() {
    let text = numbered_lines(100);
    let config = ViewerConfig {
        reveal_mode: ScrollRevealMode::Centered,
        ..ViewerConfig::default().with_viewport(10, 80)
    };
    let mut viewer = Viewer::with_config(&text, config);
    let start = viewer.document().line_start(50);
    viewer.set_selection(start, start);
    assert_eq!(viewer.viewport().top_line, 45);
}

#[test]
fn test_long_line_scrolls_horizontally() {
    let text = format!("x = '{}'\n", "a".repeat(200));
    let mut viewer = test_viewer(&text, 10, 40);
    viewer.set_selection(150, 155);

    let viewport = *viewer.viewport();
    assert!(viewport.is_column_visible(155));
    let surface = viewer.root_node().surface();
    assert_eq!(surface.rows()[0].segments[0].start_col, viewport.left_column);
}

#[test]
fn test_manual_scroll_clamps() {
    let text = numbered_lines(30);
    let mut viewer = test_viewer(&text, 10, 80);

    viewer.dispatch(ViewerMsg::Scroll(-3));
    assert_eq!(viewer.viewport().top_line, 0);

    viewer.dispatch(ViewerMsg::Scroll(500));
    // 31 lines (30 + trailing empty line) minus 10 visible
    assert_eq!(viewer.viewport().top_line, 21);
    let surface = viewer.root_node().surface();
    assert_eq!(surface.rows().first().map(|r| r.line), Some(21));
}

#[test]
fn test_manual_scroll_keeps_selection() {
    let text = numbered_lines(30);
    let mut viewer = test_viewer(&text, 10, 80);
    viewer.set_selection(0, 3);
    viewer.dispatch(ViewerMsg::Scroll(10));
    assert_eq!(viewer.selection(), Some((0, 3)));
    assert_eq!(viewer.viewport().top_line, 10);
}

#[test]
fn test_resize_reveals_selection() {
    let text = numbered_lines(100);
    let mut viewer = test_viewer(&text, 40, 80);
    let start = viewer.document().line_start(35);
    viewer.set_selection(start, start + 2);
    assert_eq!(viewer.viewport().top_line, 0);

    viewer.dispatch(ViewerMsg::Resize {
        visible_lines: 10,
        visible_columns: 80,
    });
    assert!(viewer.viewport().is_line_visible(35));
    assert_eq!(viewer.root_node().surface().rows().len(), 10);
}
