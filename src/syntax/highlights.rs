//! Syntax highlighting data structures
//!
//! Defines tokens, line highlights, and document-level syntax state.

use std::collections::HashMap;

use super::languages::LanguageId;

/// Standard tree-sitter capture names mapped to theme colors.
/// Index into this array is the HighlightId.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",             // @attribute
    "boolean",               // @boolean (True, False)
    "comment",               // @comment
    "constant",              // @constant
    "constant.builtin",      // @constant.builtin (None)
    "constructor",           // @constructor
    "escape",                // @escape (string escapes)
    "function",              // @function
    "function.builtin",      // @function.builtin (print, len)
    "function.method",       // @function.method
    "keyword",               // @keyword
    "label",                 // @label
    "number",                // @number
    "operator",              // @operator
    "property",              // @property
    "punctuation",           // @punctuation (general)
    "punctuation.bracket",   // @punctuation.bracket
    "punctuation.delimiter", // @punctuation.delimiter
    "punctuation.special",   // @punctuation.special
    "string",                // @string
    "string.special",        // @string.special
    "type",                  // @type
    "type.builtin",          // @type.builtin (int, str, bool)
    "variable",              // @variable
    "variable.builtin",      // @variable.builtin (self)
    "variable.parameter",    // @variable.parameter
];

/// Index into HIGHLIGHT_NAMES
pub type HighlightId = u16;

/// A single highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start column (0-indexed, inclusive)
    pub start_col: usize,
    /// End column (exclusive)
    pub end_col: usize,
    /// Index into HIGHLIGHT_NAMES
    pub highlight: HighlightId,
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default)]
pub struct LineHighlights {
    /// Tokens sorted by start_col
    pub tokens: Vec<HighlightToken>,
}

/// Complete highlight state for a document
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlights {
    /// Map of line number (0-indexed) to tokens
    pub lines: HashMap<usize, LineHighlights>,
    /// Grammar the document was highlighted with
    pub language: LanguageId,
}

impl SyntaxHighlights {
    /// Create new empty highlights for a language
    pub fn new(language: LanguageId) -> Self {
        Self {
            lines: HashMap::new(),
            language,
        }
    }

    /// Get highlight tokens for a line, or empty slice if none
    pub fn get_line_tokens(&self, line: usize) -> &[HighlightToken] {
        self.lines
            .get(&line)
            .map(|lh| lh.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of tokens across all lines
    pub fn token_count(&self) -> usize {
        self.lines.values().map(|lh| lh.tokens.len()).sum()
    }
}

/// Look up highlight ID by capture name
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    // Exact match first, then progressively shorter parents
    // ("keyword.control.import" -> "keyword.control" -> "keyword").
    let mut current = name;
    loop {
        if let Some(pos) = HIGHLIGHT_NAMES.iter().position(|&n| n == current) {
            return Some(pos as HighlightId);
        }

        let Some(dot_pos) = current.rfind('.') else {
            break;
        };
        current = &current[..dot_pos];
    }

    None
}
