//! Document model - the immutable text bound to a viewer

use std::borrow::Cow;

use ropey::{Rope, RopeSlice};

use crate::syntax::{HighlightToken, LanguageId, SyntaxHighlights};

/// A span in 1-based line/column coordinates, as reported by parsers and
/// tracebacks. `len` is measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcSpan {
    line: usize,
    column: usize,
    len: usize,
}

impl SrcSpan {
    pub fn new(line: usize, column: usize, len: usize) -> Self {
        Self { line, column, len }
    }

    /// 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Read-only document state: the text buffer and its highlights.
///
/// There is no mutating method on this type; the rope is built once in
/// [`Document::new`] and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Rope,
    /// Grammar used for syntax highlighting
    pub language: LanguageId,
    highlights: SyntaxHighlights,
}

impl Document {
    /// Create a document with its highlights already computed
    pub fn new(text: &str, language: LanguageId, highlights: SyntaxHighlights) -> Self {
        Self {
            buffer: Rope::from_str(text),
            language,
            highlights,
        }
    }

    /// Create an unhighlighted plain-text document
    pub fn plain(text: &str) -> Self {
        Self::new(
            text,
            LanguageId::PlainText,
            SyntaxHighlights::new(LanguageId::PlainText),
        )
    }

    /// The underlying rope (cloning a rope is cheap)
    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Get the number of lines in the document
    ///
    /// Only LF ends a line (CRLF counts once); lone CR, form feed and the
    /// Unicode separators stay inside their line. An empty document and a
    /// document ending in a newline both count the trailing empty line.
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line as a RopeSlice for zero-allocation iteration
    #[inline]
    pub fn get_line_slice(&self, line_idx: usize) -> Option<RopeSlice<'_>> {
        if line_idx < self.buffer.len_lines() {
            Some(self.buffer.line(line_idx))
        } else {
            None
        }
    }

    /// Get line content without its trailing newline, avoiding allocation
    /// when the line is stored contiguously
    pub fn get_line_cow(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        let line = self.get_line_slice(line_idx)?;
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2
            } else {
                1
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);
        match trimmed.as_str() {
            Some(s) => Some(Cow::Borrowed(s)),
            None => Some(Cow::Owned(trimmed.to_string())),
        }
    }

    /// Get the length of a line (excluding newline characters)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.get_line_cow(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Convert a character offset to a (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Character offset of the first character of a 0-indexed line
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        self.buffer.line_to_char(line)
    }

    /// Text between two character offsets (clamped, order-insensitive)
    pub fn slice_text(&self, from: usize, to: usize) -> String {
        let len = self.buffer.len_chars();
        let (from, to) = (from.min(len), to.min(len));
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        self.buffer.slice(from..to).to_string()
    }

    /// Highlights computed at construction
    pub fn highlights(&self) -> &SyntaxHighlights {
        &self.highlights
    }

    /// Get highlight tokens for a specific line
    pub fn get_line_highlights(&self, line: usize) -> &[HighlightToken] {
        self.highlights.get_line_tokens(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_queries() {
        let doc = Document::plain("x = 1\ny = 2\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.get_line_cow(0).as_deref(), Some("x = 1"));
        assert_eq!(doc.get_line_cow(2).as_deref(), Some(""));
        assert_eq!(doc.get_line_cow(3), None);
        assert_eq!(doc.line_length(1), 5);
    }

    #[test]
    fn test_crlf_trimmed() {
        let doc = Document::plain("a\r\nbc\r\n");
        assert_eq!(doc.get_line_cow(0).as_deref(), Some("a"));
        assert_eq!(doc.line_length(1), 2);
    }

    #[test]
    fn test_offset_conversions() {
        let doc = Document::plain("x = 1\ny = 2\n");
        assert_eq!(doc.offset_to_cursor(7), (1, 1));
        assert_eq!(doc.offset_to_cursor(500), (2, 0));
        assert_eq!(doc.line_start(1), 6);
        assert_eq!(doc.line_start(9), 12);
    }

    #[test]
    fn test_slice_text_clamps() {
        let doc = Document::plain("héllo");
        assert_eq!(doc.slice_text(1, 3), "él");
        assert_eq!(doc.slice_text(3, 1), "él");
        assert_eq!(doc.slice_text(2, 100), "llo");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::plain("");
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.get_line_cow(0).as_deref(), Some(""));
    }

    #[test]
    fn test_only_lf_breaks_lines() {
        for text in [
            "x = 1\x0c\ny = 2\n",
            "x = 1\ry = 2\nz\n",
            "s = 'a\u{2028}b'\nt = 2\n",
            "s = 'a\u{2029}\u{85}\x0bb'\nt = 2\n",
        ] {
            let doc = Document::plain(text);
            assert_eq!(doc.line_count(), 3, "{:?}", text);
            let second = text.find('\n').map(|i| text[..=i].chars().count());
            assert_eq!(Some(doc.line_start(1)), second, "{:?}", text);
        }

        let doc = Document::plain("x = 1\x0c\ny = 2\n");
        assert_eq!(doc.get_line_cow(0).as_deref(), Some("x = 1\x0c"));
        assert_eq!(doc.offset_to_cursor(8), (1, 1));
    }
}
