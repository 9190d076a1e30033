//! sourceview - a read-only source viewer
//!
//! This crate provides a display-only text viewer bound to one immutable
//! document, with tree-sitter syntax highlighting and a programmatic
//! selection that scrolls into view. State changes follow the Elm
//! Architecture: messages in, commands (repaints) out.

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod host;
pub mod messages;
pub mod model;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;
pub mod viewer;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use host::HostPage;
pub use messages::{InputMsg, ViewerMsg};
pub use model::{Selection, SrcSpan};
pub use theme::Theme;
pub use view::{DisplayNode, DisplaySurface};
pub use viewer::{create_viewer, root_node, set_selection, Viewer};
