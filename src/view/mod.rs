//! View module - display nodes, surfaces and painters
//!
//! A viewer owns one [`DisplayNode`]; the node owns a [`DisplaySurface`]
//! that receives repaints when commands require them.

pub mod ansi;
pub mod node;
pub mod surface;

pub use ansi::{paint, PaintOptions};
pub use node::{DisplayNode, NodeId};
pub use surface::{DisplaySurface, RenderedRow, Segment, TextSurface};

use crate::commands::Cmd;
use crate::model::ViewerModel;

/// Apply a command's repaint to a node's surface
pub fn execute(node: &DisplayNode, model: &ViewerModel, cmd: &Cmd) {
    let mut surface = node.surface_mut();
    if cmd.needs_full_redraw() {
        surface.render(&model.document, &model.viewport);
    }
    surface.show_selection(&model.document, model.selection, &model.viewport);
}
