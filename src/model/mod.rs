//! Viewer model - the complete state behind one viewer
//!
//! Follows the Elm Architecture pattern: state lives here, changes go
//! through [`crate::update`].

pub mod document;
pub mod selection;
pub mod viewport;

pub use document::{Document, SrcSpan};
pub use selection::Selection;
pub use viewport::{ScrollRevealMode, Viewport};

use crate::config::ViewerConfig;
use crate::theme::Theme;

/// State of one read-only viewer
#[derive(Debug, Clone)]
pub struct ViewerModel {
    /// The bound document (never mutated)
    pub document: Document,
    /// Current highlighted range; `None` until the first request
    pub selection: Option<Selection>,
    /// Visible portion of the document
    pub viewport: Viewport,
    /// Lines kept between a revealed selection and the viewport edge
    pub scroll_padding: usize,
    /// How selections are scrolled into view
    pub reveal_mode: ScrollRevealMode,
    /// Colors used by surfaces that paint
    pub theme: Theme,
}

impl ViewerModel {
    pub fn new(document: Document, config: &ViewerConfig, theme: Theme) -> Self {
        Self {
            document,
            selection: None,
            viewport: Viewport::new(config.visible_lines, config.visible_columns),
            scroll_padding: config.scroll_padding,
            reveal_mode: config.reveal_mode,
            theme,
        }
    }

    /// Replace the selection with the clamped range and scroll it into view.
    /// Returns the range actually applied.
    pub fn select_range(&mut self, from: usize, to: usize) -> Selection {
        let len = self.document.len_chars();
        let selection = Selection::clamped(from, to, len);
        if (from, to) != selection.range() {
            tracing::debug!(
                requested_from = from,
                requested_to = to,
                applied_from = selection.from(),
                applied_to = selection.to(),
                len,
                "Clamped selection request"
            );
        }
        self.selection = Some(selection);
        self.reveal_selection();
        selection
    }

    /// Character range of a 1-based line/column span.
    ///
    /// Columns past the end of the line are kept (and clamped later) so a
    /// span can cover the line's trailing newline.
    pub fn span_to_range(&self, span: SrcSpan) -> (usize, usize) {
        let line = span.line().saturating_sub(1);
        let from = self.document.line_start(line) + span.column().saturating_sub(1);
        (from, from.saturating_add(span.len()))
    }

    /// Scroll so the selection is visible: reveal its end first, then its
    /// start, so the start wins when the range is taller than the viewport
    pub fn reveal_selection(&mut self) {
        let Some(selection) = self.selection else {
            return;
        };
        let total_lines = self.document.line_count();
        for offset in [selection.to(), selection.from()] {
            let (line, column) = self.document.offset_to_cursor(offset);
            self.viewport.reveal(
                line,
                column,
                total_lines,
                self.scroll_padding,
                self.reveal_mode,
            );
        }
    }

    /// Width of the longest line in characters
    pub fn max_line_length(&self) -> usize {
        (0..self.document.line_count())
            .map(|line| self.document.line_length(line))
            .max()
            .unwrap_or(0)
    }

    /// Selected text, if any selection is set
    pub fn selected_text(&self) -> Option<String> {
        self.selection
            .map(|sel| self.document.slice_text(sel.from(), sel.to()))
    }
}
