//! Terminal painter for rendered rows
//!
//! Turns [`RenderedRow`]s into text with 24-bit ANSI colors from the theme.
//! Without color, selected lines are marked with `>` in the gutter.

use std::fmt::Write as _;

use super::surface::RenderedRow;
use crate::theme::Theme;

const RESET: &str = "\x1b[0m";

/// Painter options
#[derive(Debug, Clone, Copy)]
pub struct PaintOptions {
    /// Emit ANSI escape sequences
    pub color: bool,
    /// Show a line number gutter
    pub line_numbers: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            color: true,
            line_numbers: true,
        }
    }
}

/// Width of the line-number gutter for a document with `line_count` lines
pub fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len()
}

/// Paint rows into a printable string, one row per output line
pub fn paint(rows: &[RenderedRow], line_count: usize, theme: &Theme, options: PaintOptions) -> String {
    let width = gutter_width(line_count);
    let mut out = String::new();

    for row in rows {
        if options.line_numbers {
            paint_gutter(&mut out, row, width, theme, options.color);
        }

        // Lines touched by the selection get the current-line background
        let line_bg = if row.in_selection {
            theme.editor.current_line_background
        } else {
            theme.editor.background
        };

        for segment in &row.segments {
            if !options.color {
                out.push_str(&segment.text);
                continue;
            }

            let syntax_fg = segment
                .highlight
                .and_then(|id| theme.syntax.color_for_highlight(id))
                .unwrap_or(theme.editor.foreground);

            if segment.selected {
                let fg = theme.editor.selection_foreground.unwrap_or(syntax_fg);
                let _ = write!(
                    out,
                    "{}{}{}{}",
                    theme.editor.selection_background.ansi_bg(),
                    fg.ansi_fg(),
                    segment.text,
                    RESET
                );
            } else {
                let _ = write!(
                    out,
                    "{}{}{}{}",
                    line_bg.ansi_bg(),
                    syntax_fg.ansi_fg(),
                    segment.text,
                    RESET
                );
            }
        }

        out.push('\n');
    }

    out
}

fn paint_gutter(out: &mut String, row: &RenderedRow, width: usize, theme: &Theme, color: bool) {
    let number = row.line + 1;
    if !color {
        let marker = if row.in_selection { '>' } else { ' ' };
        let _ = write!(out, "{}{:>width$} | ", marker, number, width = width);
        return;
    }

    let fg = if row.in_selection {
        theme.gutter.foreground_active
    } else {
        theme.gutter.foreground
    };
    let _ = write!(
        out,
        "{}{} {:>width$} {}",
        theme.gutter.background.ansi_bg(),
        fg.ansi_fg(),
        number,
        RESET,
        width = width
    );
    out.push(' ');
}
