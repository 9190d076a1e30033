//! Tree-sitter parser state and highlighting extraction
//!
//! Manages parsers and compiled highlight queries per grammar.

use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor, Tree};

use super::highlights::{highlight_id_for_name, HighlightToken, SyntaxHighlights};
use super::languages::LanguageId;

const PYTHON_HIGHLIGHTS: &str = tree_sitter_python::HIGHLIGHTS_QUERY;
const RUST_HIGHLIGHTS: &str = tree_sitter_rust::HIGHLIGHTS_QUERY;

/// Parser state (tree-sitter parsers are !Sync)
pub struct ParserState {
    /// Parser instances per language
    parsers: HashMap<LanguageId, Parser>,
    /// Compiled queries per language
    queries: HashMap<LanguageId, Query>,
}

impl ParserState {
    /// Create a parser state for a single grammar
    pub fn for_language(lang: LanguageId) -> Self {
        let mut state = Self {
            parsers: HashMap::new(),
            queries: HashMap::new(),
        };
        state.init_language(lang);
        state
    }

    /// Initialize a language's parser and query
    fn init_language(&mut self, lang: LanguageId) {
        let (ts_lang, highlights_scm): (tree_sitter::Language, &str) = match lang {
            LanguageId::Python => (tree_sitter_python::LANGUAGE.into(), PYTHON_HIGHLIGHTS),
            LanguageId::Rust => (tree_sitter_rust::LANGUAGE.into(), RUST_HIGHLIGHTS),
            LanguageId::PlainText => return,
        };

        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&ts_lang) {
            tracing::error!("Failed to set language for {:?}: {}", lang, e);
            return;
        }
        self.parsers.insert(lang, parser);

        match Query::new(&ts_lang, highlights_scm) {
            Ok(query) => {
                self.queries.insert(lang, query);
            }
            Err(e) => {
                tracing::error!("Failed to compile query for {:?}: {:?}", lang, e);
            }
        }
    }

    /// Whether a compiled highlight query exists for the grammar
    pub fn has_query(&self, lang: LanguageId) -> bool {
        self.queries.contains_key(&lang)
    }

    /// Parse the source and extract highlights.
    ///
    /// Never fails: a grammar without a parser, or a parse that returns no
    /// tree, yields empty highlights.
    #[cfg_attr(
        feature = "profile-tracing",
        tracing::instrument(skip(self, source), fields(len = source.len()))
    )]
    pub fn highlight(&mut self, source: &str, language: LanguageId) -> SyntaxHighlights {
        if !language.has_highlighting() {
            return SyntaxHighlights::new(language);
        }

        if !self.has_query(language) {
            tracing::warn!("No highlight query for {:?}", language);
            return SyntaxHighlights::new(language);
        }

        let Some(parser) = self.parsers.get_mut(&language) else {
            tracing::warn!("No parser for language {:?}", language);
            return SyntaxHighlights::new(language);
        };

        let Some(tree) = parser.parse(source, None) else {
            tracing::error!("Parse failed for {:?}", language);
            return SyntaxHighlights::new(language);
        };

        if tree.root_node().has_error() {
            tracing::debug!("Source has syntax errors for {:?}, highlighting anyway", language);
        }

        self.extract_highlights(source, &tree, language)
    }

    /// Extract highlight tokens from a parsed tree
    fn extract_highlights(
        &self,
        source: &str,
        tree: &Tree,
        language: LanguageId,
    ) -> SyntaxHighlights {
        let Some(query) = self.queries.get(&language) else {
            return SyntaxHighlights::new(language);
        };

        let mut highlights = SyntaxHighlights::new(language);
        let mut cursor = QueryCursor::new();
        let source_bytes = source.as_bytes();

        // Tree-sitter rows break on LF only, like the document rope; columns
        // are bytes, tokens use character columns
        let lines: Vec<&str> = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        fn byte_to_char_col(line: &str, byte_col: usize) -> usize {
            let byte_col = byte_col.min(line.len());
            let mut valid_byte = byte_col;
            while valid_byte > 0 && !line.is_char_boundary(valid_byte) {
                valid_byte -= 1;
            }
            line[..valid_byte].chars().count()
        }

        let mut captures = cursor.captures(query, tree.root_node(), source_bytes);
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let capture_name = &query.capture_names()[capture.index as usize];

            let Some(highlight_id) = highlight_id_for_name(capture_name) else {
                continue;
            };

            let start = capture.node.start_position();
            let end = capture.node.end_position();

            for row in start.row..=end.row {
                let line = lines.get(row).copied().unwrap_or("");
                let line_char_len = line.chars().count();

                let start_char = if row == start.row {
                    byte_to_char_col(line, start.column)
                } else {
                    0
                };
                let end_char = if row == end.row {
                    byte_to_char_col(line, end.column)
                } else {
                    line_char_len
                };

                if start_char < end_char {
                    highlights
                        .lines
                        .entry(row)
                        .or_default()
                        .tokens
                        .push(HighlightToken {
                            start_col: start_char,
                            end_col: end_char,
                            highlight: highlight_id,
                        });
                }
            }
        }

        for line_highlights in highlights.lines.values_mut() {
            line_highlights
                .tokens
                .sort_by_key(|t| (t.start_col, t.end_col));
            // Queries may capture the same node twice (e.g. `@variable` then `@function`);
            // keep the first capture for each exact span.
            line_highlights
                .tokens
                .dedup_by(|b, a| a.start_col == b.start_col && a.end_col == b.end_col);
        }

        highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_id_for_name, HighlightId};

    fn highlight_at(highlights: &SyntaxHighlights, line: usize, col: usize) -> Option<HighlightId> {
        highlights
            .get_line_tokens(line)
            .iter()
            .find(|t| col >= t.start_col && col < t.end_col)
            .map(|t| t.highlight)
    }

    #[test]
    fn test_python_parsing() {
        let mut state = ParserState::for_language(LanguageId::Python);
        let source = "# Comment\ndef main():\n    return 42\n";
        let highlights = state.highlight(source, LanguageId::Python);

        assert_eq!(highlights.language, LanguageId::Python);
        assert!(!highlights.lines.is_empty());

        let comment = highlight_id_for_name("comment").unwrap();
        assert_eq!(highlight_at(&highlights, 0, 0), Some(comment));
    }

    #[test]
    fn test_rust_parsing() {
        let mut state = ParserState::for_language(LanguageId::Rust);
        let source = "fn main() {\n    let x = 42;\n}\n";
        let highlights = state.highlight(source, LanguageId::Rust);

        assert_eq!(highlights.language, LanguageId::Rust);
        assert!(!highlights.lines.is_empty());
    }

    #[test]
    fn test_plain_text_no_parsing() {
        let mut state = ParserState::for_language(LanguageId::PlainText);
        let highlights = state.highlight("Hello, world!", LanguageId::PlainText);

        assert_eq!(highlights.language, LanguageId::PlainText);
        assert!(highlights.lines.is_empty());
    }

    #[test]
    fn test_missing_grammar_yields_empty_highlights() {
        let mut state = ParserState::for_language(LanguageId::Rust);
        let highlights = state.highlight("x = 1\n", LanguageId::Python);
        assert_eq!(highlights.token_count(), 0);
    }

    #[test]
    fn test_invalid_source_does_not_fail() {
        let mut state = ParserState::for_language(LanguageId::Python);
        let highlights = state.highlight("def (((:\n  ]]]\n", LanguageId::Python);
        assert_eq!(highlights.language, LanguageId::Python);
    }

    #[test]
    fn test_multiline_string_split_per_line() {
        let mut state = ParserState::for_language(LanguageId::Python);
        let source = "x = \"\"\"first\nsecond\"\"\"\n";
        let highlights = state.highlight(source, LanguageId::Python);

        let string = highlight_id_for_name("string").unwrap();
        assert_eq!(highlight_at(&highlights, 1, 0), Some(string));
    }

    #[test]
    fn test_unicode_columns_are_chars() {
        let mut state = ParserState::for_language(LanguageId::Python);
        let source = "s = \"héllo\"  # ünïcode\n";
        let highlights = state.highlight(source, LanguageId::Python);

        let comment = highlight_id_for_name("comment").unwrap();
        let comment_col = source.chars().position(|c| c == '#').unwrap();
        assert_eq!(highlight_at(&highlights, 0, comment_col), Some(comment));
        for token in highlights.get_line_tokens(0) {
            assert!(token.end_col <= source.trim_end().chars().count());
        }
    }

    #[test]
    fn test_rows_break_on_lf_only() {
        let mut state = ParserState::for_language(LanguageId::Python);
        let string = highlight_id_for_name("string").unwrap();

        for source in [
            "x = 1\x0c\ns = 'hi'\n",
            "s = 'a\u{2028}b'\nt = 'hi'\n",
            "s = 'a\rb'\nt = 'hi'\n",
            "x = 1\r\nt = 'hi'\r\n",
        ] {
            let highlights = state.highlight(source, LanguageId::Python);
            assert_eq!(highlight_at(&highlights, 1, 4), Some(string), "{:?}", source);
            assert_eq!(highlight_at(&highlights, 1, 7), Some(string), "{:?}", source);
            assert!(highlights.get_line_tokens(2).is_empty(), "{:?}", source);
        }
    }

    #[test]
    fn test_all_queries_compile() {
        assert!(ParserState::for_language(LanguageId::Python).has_query(LanguageId::Python));
        assert!(ParserState::for_language(LanguageId::Rust).has_query(LanguageId::Rust));
        assert!(!ParserState::for_language(LanguageId::PlainText).has_query(LanguageId::PlainText));
    }

    #[test]
    fn test_for_language_only_loads_one_grammar() {
        let state = ParserState::for_language(LanguageId::Rust);
        assert!(state.has_query(LanguageId::Rust));
        assert!(!state.has_query(LanguageId::Python));
    }
}
