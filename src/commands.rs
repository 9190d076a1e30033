//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! For the viewer the only side effects are repaints of its display surface;
//! an update that changes nothing returns no command at all.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint the whole surface (text, highlights, selection)
    Redraw,
    /// Only the selection overlay or scroll offset changed
    RedrawSelection,
}

impl Cmd {
    /// Check if this command requires repainting the text layer
    pub fn needs_full_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
