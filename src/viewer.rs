//! Read-only document viewer
//!
//! A [`Viewer`] binds one immutable document to one display node. The
//! document is highlighted once at construction; afterwards the only state
//! that changes is the selection and the scroll position.
//!
//! ```
//! use sourceview::Viewer;
//!
//! let mut viewer = Viewer::new("x = 1\ny = 2\n");
//! viewer.set_selection(0, 5);
//! assert_eq!(viewer.selected_text().as_deref(), Some("x = 1"));
//! ```

use crate::assets::AssetLayout;
use crate::commands::Cmd;
use crate::config::ViewerConfig;
use crate::messages::ViewerMsg;
use crate::model::{Document, Selection, SrcSpan, ViewerModel, Viewport};
use crate::syntax::{LanguageId, ParserState};
use crate::theme::{load_theme_or_default, Theme};
use crate::update::update;
use crate::view::{self, DisplayNode, TextSurface};

/// Style class carried by every viewer root node
pub const VIEWER_CLASS: &str = "sourceview";

/// A display-only text viewer bound to a single document
#[derive(Debug)]
pub struct Viewer {
    model: ViewerModel,
    root: DisplayNode,
}

impl Viewer {
    /// Build a viewer with default configuration (Python grammar).
    ///
    /// Never fails: syntax errors in the document only degrade highlighting.
    pub fn new(document: &str) -> Self {
        Self::with_config(document, ViewerConfig::default())
    }

    /// Build a viewer with an explicit configuration
    pub fn with_config(document: &str, config: ViewerConfig) -> Self {
        let assets = AssetLayout::resolve(config.base_path.as_deref());
        let theme = load_theme_or_default(&config.theme, assets.as_ref());
        Self::with_theme(document, config, theme)
    }

    /// Build a viewer with an already-resolved theme
    pub fn with_theme(document: &str, config: ViewerConfig, theme: Theme) -> Self {
        let document = highlight_document(document, config.grammar);
        let model = ViewerModel::new(document, &config, theme);
        let root = DisplayNode::new(VIEWER_CLASS, Box::new(TextSurface::new()));
        view::execute(&root, &model, &Cmd::Redraw);

        tracing::debug!(
            node = %root.id(),
            grammar = config.grammar.display_name(),
            chars = model.document.len_chars(),
            lines = model.document.line_count(),
            tokens = model.document.highlights().token_count(),
            "Created viewer"
        );

        Self { model, root }
    }

    /// The root display node. Every call returns the same node.
    pub fn root_node(&self) -> &DisplayNode {
        &self.root
    }

    /// Highlight `[from, to)` and scroll it into view.
    ///
    /// Offsets are character offsets. Out-of-range offsets are clamped into
    /// `[0, len]` and a reversed pair is swapped.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        self.dispatch(ViewerMsg::SetSelection { from, to });
    }

    /// Highlight a 1-based line/column span and scroll it into view
    pub fn set_selection_span(&mut self, span: SrcSpan) {
        self.dispatch(ViewerMsg::SetSelectionSpan(span));
    }

    /// Route a message through update and repaint the surface synchronously
    pub fn dispatch(&mut self, msg: ViewerMsg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            view::execute(&self.root, &self.model, &cmd);
        }
    }

    /// Current selection as `(from, to)`, or `None` before the first request
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.model.selection.map(|s| s.range())
    }

    /// Current selection as a [`Selection`]
    pub fn selection_range(&self) -> Option<Selection> {
        self.model.selection
    }

    /// Text inside the current selection
    pub fn selected_text(&self) -> Option<String> {
        self.model.selected_text()
    }

    /// The bound document's full text
    pub fn text(&self) -> String {
        self.model.document.text()
    }

    /// Read-only access to the bound document
    pub fn document(&self) -> &Document {
        &self.model.document
    }

    /// Document length in characters
    pub fn len_chars(&self) -> usize {
        self.model.document.len_chars()
    }

    pub fn language(&self) -> LanguageId {
        self.model.document.language
    }

    pub fn viewport(&self) -> &Viewport {
        &self.model.viewport
    }

    pub fn theme(&self) -> &Theme {
        &self.model.theme
    }

    /// Always true; there is no editable mode
    pub fn is_read_only(&self) -> bool {
        true
    }
}

/// Parse and highlight the text with the configured grammar
fn highlight_document(text: &str, grammar: LanguageId) -> Document {
    if !grammar.has_highlighting() {
        return Document::plain(text);
    }
    let highlights = ParserState::for_language(grammar).highlight(text, grammar);
    Document::new(text, grammar, highlights)
}

/// Free-function form of [`Viewer::new`]
pub fn create_viewer(document: &str) -> Viewer {
    Viewer::new(document)
}

/// Free-function form of [`Viewer::set_selection`]
pub fn set_selection(viewer: &mut Viewer, from: usize, to: usize) {
    viewer.set_selection(from, to);
}

/// Free-function form of [`Viewer::root_node`]
pub fn root_node(viewer: &Viewer) -> &DisplayNode {
    viewer.root_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_scrolls_into_view() {
        let text: String = (0..200).map(|i| format!("value_{} = {}\n", i, i)).collect();
        let mut viewer =
            Viewer::with_config(&text, ViewerConfig::default().with_viewport(10, 80));

        let line_150 = viewer.document().line_start(150);
        viewer.set_selection(line_150, line_150 + 5);

        assert!(viewer.viewport().is_line_visible(150));
        let surface = viewer.root_node().surface();
        assert!(surface.rows().iter().any(|row| row.line == 150));
    }

    #[test]
    fn test_default_grammar_is_python() {
        let viewer = Viewer::new("print('hi')\n");
        assert_eq!(viewer.language(), LanguageId::Python);
        assert!(viewer.document().highlights().token_count() > 0);
    }

    #[test]
    fn test_free_function_api() {
        let mut viewer = create_viewer("x = 1\ny = 2\n");
        set_selection(&mut viewer, 6, 11);
        assert_eq!(viewer.selected_text().as_deref(), Some("y = 2"));
        assert!(root_node(&viewer).ptr_eq(viewer.root_node()));
    }
}
