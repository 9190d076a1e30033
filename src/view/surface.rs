//! Display surfaces: the capability a viewer renders into
//!
//! A surface knows how to paint a document with highlighting and how to
//! show a selection range. [`TextSurface`] is the retained text-grid
//! implementation used by the library and the terminal front end.

use ropey::Rope;

use crate::model::{Document, Selection, Viewport};
use crate::syntax::HighlightId;

/// A run of characters sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Column of the first character (document columns, not screen columns)
    pub start_col: usize,
    pub highlight: Option<HighlightId>,
    pub selected: bool,
}

/// One visible document line, clipped to the viewport's columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// 0-indexed document line
    pub line: usize,
    pub segments: Vec<Segment>,
    /// Whether any part of the line (including its newline) is selected
    pub in_selection: bool,
}

impl RenderedRow {
    /// The row's visible text
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render target for a viewer
pub trait DisplaySurface {
    /// Paint the visible part of the document with syntax highlighting
    fn render(&mut self, document: &Document, viewport: &Viewport);

    /// Show `selection` (or clear it) and move to `viewport`
    fn show_selection(
        &mut self,
        document: &Document,
        selection: Option<Selection>,
        viewport: &Viewport,
    );

    /// Full text the surface is displaying
    fn displayed_text(&self) -> String;

    /// Selection currently shown
    fn selection(&self) -> Option<Selection>;

    /// Visible rows as last painted
    fn rows(&self) -> &[RenderedRow];
}

/// Retained text-grid surface
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    text: Rope,
    viewport: Option<Viewport>,
    selection: Option<Selection>,
    rows: Vec<RenderedRow>,
    paint_count: u64,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the rows were rebuilt
    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    /// Viewport the rows were last built for
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn rebuild(&mut self, document: &Document, viewport: &Viewport) {
        self.viewport = Some(*viewport);
        self.rows = build_rows(document, viewport, self.selection);
        self.paint_count += 1;
    }
}

impl DisplaySurface for TextSurface {
    fn render(&mut self, document: &Document, viewport: &Viewport) {
        self.text = document.rope().clone();
        self.rebuild(document, viewport);
    }

    fn show_selection(
        &mut self,
        document: &Document,
        selection: Option<Selection>,
        viewport: &Viewport,
    ) {
        if self.selection == selection && self.viewport.as_ref() == Some(viewport) {
            return;
        }
        self.selection = selection;
        self.rebuild(document, viewport);
    }

    fn displayed_text(&self) -> String {
        self.text.to_string()
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }
}

/// Build the visible rows, splitting each line at highlight and selection
/// boundaries
fn build_rows(
    document: &Document,
    viewport: &Viewport,
    selection: Option<Selection>,
) -> Vec<RenderedRow> {
    let last_line = viewport.bottom_line().min(document.line_count());
    let first_col = viewport.left_column;
    let end_col = viewport.left_column + viewport.visible_columns;

    (viewport.top_line..last_line)
        .filter_map(|line| {
            let content = document.get_line_cow(line)?;
            let line_start = document.line_start(line);
            let line_len = content.chars().count();

            // The newline counts as column `line_len`
            let line_selected = selection.is_some_and(|sel| {
                sel.from().max(line_start) < sel.to().min(line_start + line_len + 1)
            });

            let tokens = document.get_line_highlights(line);
            let mut segments: Vec<Segment> = Vec::new();
            let mut token_idx = 0;

            for (col, ch) in content.chars().enumerate().take(end_col).skip(first_col) {
                while token_idx < tokens.len() && tokens[token_idx].end_col <= col {
                    token_idx += 1;
                }
                let highlight = tokens
                    .get(token_idx)
                    .filter(|t| col >= t.start_col && col < t.end_col)
                    .map(|t| t.highlight);
                let selected = selection.is_some_and(|sel| sel.contains(line_start + col));

                match segments.last_mut() {
                    Some(seg) if seg.highlight == highlight && seg.selected == selected => {
                        seg.text.push(ch);
                    }
                    _ => segments.push(Segment {
                        text: ch.to_string(),
                        start_col: col,
                        highlight,
                        selected,
                    }),
                }
            }

            // A collapsed selection still marks its line
            let caret_here = selection.is_some_and(|sel| {
                sel.is_empty() && document.offset_to_cursor(sel.from()).0 == line
            });

            Some(RenderedRow {
                line,
                segments,
                in_selection: line_selected || caret_here,
            })
        })
        .collect()
}
