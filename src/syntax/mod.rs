//! Syntax highlighting module
//!
//! Provides tree-sitter based syntax highlighting with:
//! - Grammar detection from file extensions and grammar tags
//! - One-shot parsing at viewer construction (documents never change)
//! - Highlight extraction for rendering
//!
//! ## Supported Grammars
//!
//! - Python (default)
//! - Rust

mod highlights;
mod languages;
mod parser;

pub use highlights::{
    highlight_id_for_name, HighlightId, HighlightToken, LineHighlights,
    SyntaxHighlights, HIGHLIGHT_NAMES,
};
pub use languages::LanguageId;
pub use parser::ParserState;
