//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Viewing a file or stdin
//! - Selecting by character offsets or by line/column span
//! - Installing builtin themes under an asset base path
//! - Saving the effective options as user defaults

use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::model::SrcSpan;
use crate::syntax::LanguageId;

/// A read-only source viewer
#[derive(Parser, Debug)]
#[command(name = "sourceview", version, about = "A read-only source viewer")]
pub struct CliArgs {
    /// File to view (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Highlighting grammar (python, rust, text); detected from the file
    /// extension when omitted
    #[arg(short, long, value_name = "GRAMMAR")]
    pub grammar: Option<String>,

    /// Theme id
    #[arg(short, long, value_name = "ID")]
    pub theme: Option<String>,

    /// Select a character range, e.g. `0..5`
    #[arg(short, long, value_name = "FROM..TO", conflicts_with = "line")]
    pub select: Option<String>,

    /// Select starting at line N (1-indexed)
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Start column for --line (1-indexed)
    #[arg(long, value_name = "N", requires = "line")]
    pub column: Option<usize>,

    /// Span length in characters for --line
    #[arg(long, value_name = "N", requires = "line")]
    pub len: Option<usize>,

    /// Viewport height in lines
    #[arg(long, value_name = "LINES")]
    pub height: Option<usize>,

    /// Viewport width in columns
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Directory holding `themes/` and `assets/`
    #[arg(long, value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Write the builtin themes into <base-path>/themes and exit
    #[arg(long, requires = "base_path")]
    pub install_themes: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Save the effective options as user defaults and exit
    #[arg(long)]
    pub save_config: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Hide the line number gutter
    #[arg(long)]
    pub no_line_numbers: bool,
}

/// A selection request from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRequest {
    Offsets { from: usize, to: usize },
    Span(SrcSpan),
}

/// Parse `FROM..TO` (either side may be omitted: `..5`, `3..`)
pub fn parse_range(s: &str, len: usize) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once("..")
        .ok_or_else(|| format!("Invalid range '{}': expected FROM..TO", s))?;
    let parse = |part: &str, default: usize| -> Result<usize, String> {
        let part = part.trim();
        if part.is_empty() {
            Ok(default)
        } else {
            part.parse()
                .map_err(|e| format!("Invalid offset '{}': {}", part, e))
        }
    };
    Ok((parse(from, 0)?, parse(to, len)?))
}

impl CliArgs {
    /// Merge CLI overrides over the persisted configuration
    pub fn viewer_config(&self, base: ViewerConfig) -> crate::error::Result<ViewerConfig> {
        let mut config = base;

        let grammar = match &self.grammar {
            Some(tag) => {
                LanguageId::from_tag(tag).ok_or_else(|| ViewerError::UnknownGrammar(tag.clone()))?
            }
            None => match &self.file {
                Some(path) if path.as_os_str() != "-" => match LanguageId::from_path(path) {
                    // Unknown extensions keep the configured grammar
                    LanguageId::PlainText => config.grammar,
                    detected => detected,
                },
                _ => config.grammar,
            },
        };
        config.grammar = grammar;

        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(height) = self.height {
            config.visible_lines = height;
        }
        if let Some(width) = self.width {
            config.visible_columns = width;
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = Some(base_path.clone());
        }
        Ok(config)
    }

    /// The selection to apply, if any. `len` is the document length used
    /// for open-ended ranges.
    pub fn selection_request(&self, len: usize) -> Result<Option<SelectionRequest>, String> {
        if let Some(range) = &self.select {
            let (from, to) = parse_range(range, len)?;
            return Ok(Some(SelectionRequest::Offsets { from, to }));
        }
        Ok(self.line.map(|line| {
            SelectionRequest::Span(SrcSpan::new(
                line,
                self.column.unwrap_or(1),
                self.len.unwrap_or(0),
            ))
        }))
    }

    /// Whether input comes from stdin
    pub fn reads_stdin(&self) -> bool {
        self.file
            .as_ref()
            .map_or(true, |path| path.as_os_str() == "-")
    }
}
