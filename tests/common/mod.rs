//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sourceview::config::ViewerConfig;
use sourceview::syntax::LanguageId;
use sourceview::Viewer;

/// Document from the concrete selection scenario
pub const TWO_ASSIGNMENTS: &str = "x = 1\ny = 2\n";

/// Create a viewer with a small viewport for scroll tests
pub fn test_viewer(text: &str, visible_lines: usize, visible_columns: usize) -> Viewer {
    Viewer::with_config(
        text,
        ViewerConfig::default().with_viewport(visible_lines, visible_columns),
    )
}

/// Create a plain-text viewer (no highlighting work)
pub fn plain_viewer(text: &str) -> Viewer {
    Viewer::with_config(
        text,
        ViewerConfig::default().with_grammar(LanguageId::PlainText),
    )
}

/// `count` numbered Python assignment lines
pub fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("line_{} = {}\n", i, i)).collect()
}

/// Documents whose second line is `t = 'hi'` after a first line holding a
/// character that is not a line break: form feed, lone CR, U+2028
pub const NON_LF_BREAKS: [&str; 3] = [
    "x = 1\x0c\nt = 'hi'\n",
    "s = 'a\rb'\nt = 'hi'\n",
    "s = 'a\u{2028}b'\nt = 'hi'\n",
];

/// Documents covering edge cases: empty, no trailing newline, CRLF, unicode,
/// and characters other than LF that some tools treat as line breaks
pub fn sample_documents() -> Vec<&'static str> {
    vec![
        "",
        "x",
        TWO_ASSIGNMENTS,
        "no trailing newline",
        "a\r\nb\r\n",
        "s = \"héllo wörld\"  # ünïcode\n",
        "def f(:\n    ]]]\n",
        "\n\n\n",
        NON_LF_BREAKS[0],
        NON_LF_BREAKS[1],
        NON_LF_BREAKS[2],
        "a\u{85}b\u{2029}c\x0bd\n",
    ]
}
