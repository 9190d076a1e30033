//! Message types for the Elm-style architecture
//!
//! All viewer state changes flow through these message types.

use crate::model::SrcSpan;

/// Viewer messages: selection requests and read-only navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerMsg {
    /// Highlight `[from, to)` (character offsets) and scroll it into view
    SetSelection { from: usize, to: usize },
    /// Highlight a 1-based line/column span and scroll it into view
    SetSelectionSpan(SrcSpan),
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
    /// Scroll viewport horizontally (positive = right, negative = left)
    ScrollHorizontal(i32),
    /// The host resized the display area
    Resize {
        visible_lines: usize,
        visible_columns: usize,
    },
    /// Keyboard/clipboard input forwarded by the host
    Input(InputMsg),
}

/// Input the host may forward from key presses and clipboard events.
///
/// The viewer is display-only: every variant is accepted and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    InsertText(String),
    Paste(String),
    DeleteBackward,
    DeleteForward,
    Cut,
    Undo,
    Redo,
}

impl InputMsg {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            InputMsg::InsertText(_) => "insert-text",
            InputMsg::Paste(_) => "paste",
            InputMsg::DeleteBackward => "delete-backward",
            InputMsg::DeleteForward => "delete-forward",
            InputMsg::Cut => "cut",
            InputMsg::Undo => "undo",
            InputMsg::Redo => "redo",
        }
    }
}
