//! Update function for the Elm-style architecture
//!
//! All viewer state transformations flow through [`update`].

use crate::commands::Cmd;
use crate::messages::{InputMsg, ViewerMsg};
use crate::model::ViewerModel;

/// Apply a message to the model and return the repaint it requires
pub fn update(model: &mut ViewerModel, msg: ViewerMsg) -> Option<Cmd> {
    match msg {
        ViewerMsg::SetSelection { from, to } => {
            model.select_range(from, to);
            Some(Cmd::RedrawSelection)
        }

        ViewerMsg::SetSelectionSpan(span) => {
            let (from, to) = model.span_to_range(span);
            tracing::trace!(?span, from, to, "Selecting source span");
            model.select_range(from, to);
            Some(Cmd::RedrawSelection)
        }

        ViewerMsg::Scroll(delta) => {
            let before = model.viewport.top_line;
            model
                .viewport
                .scroll_by(delta, model.document.line_count());
            (model.viewport.top_line != before).then_some(Cmd::Redraw)
        }

        ViewerMsg::ScrollHorizontal(delta) => {
            let before = model.viewport.left_column;
            let max_len = model.max_line_length();
            model.viewport.scroll_horizontal_by(delta, max_len);
            (model.viewport.left_column != before).then_some(Cmd::Redraw)
        }

        ViewerMsg::Resize {
            visible_lines,
            visible_columns,
        } => {
            let total_lines = model.document.line_count();
            model
                .viewport
                .resize(visible_lines, visible_columns, total_lines);
            model.reveal_selection();
            Some(Cmd::Redraw)
        }

        ViewerMsg::Input(input) => reject_input(input),
    }
}

/// Edit input never reaches the document
fn reject_input(input: InputMsg) -> Option<Cmd> {
    tracing::debug!(input = input.name(), "Ignoring edit input on read-only viewer");
    None
}
