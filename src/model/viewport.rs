//! Viewport state and scroll-into-view logic

use serde::{Deserialize, Serialize};

/// Strategy for revealing a position that is outside the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollRevealMode {
    /// Move the viewport just enough to bring the position into the safe zone
    #[default]
    Minimal,
    /// Place the position in the middle of the viewport
    Centered,
}

/// Columns kept between a revealed position and the horizontal viewport edge
const HORIZONTAL_MARGIN: usize = 4;

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    /// Last visible line (exclusive)
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.visible_lines
    }

    /// Whether a line is inside the visible range
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.bottom_line()
    }

    /// Whether a column is inside the visible range
    pub fn is_column_visible(&self, column: usize) -> bool {
        column >= self.left_column && column < self.left_column + self.visible_columns
    }

    /// Scroll so that `(line, column)` lies inside the safe zone.
    ///
    /// `padding` lines are kept above and below the revealed line when the
    /// document is taller than the viewport.
    pub fn reveal(
        &mut self,
        line: usize,
        column: usize,
        total_lines: usize,
        padding: usize,
        mode: ScrollRevealMode,
    ) {
        // Vertical
        if total_lines > self.visible_lines && self.visible_lines > 0 {
            let max_top = total_lines.saturating_sub(self.visible_lines);
            // Padding can't exceed half the viewport or the safe zone disappears
            let padding = padding.min(self.visible_lines.saturating_sub(1) / 2);

            let safe_top = self.top_line + padding;
            let safe_bottom = self.top_line
                + self
                    .visible_lines
                    .saturating_sub(padding)
                    .saturating_sub(1);

            let off_above = line < safe_top;
            let off_below = line > safe_bottom;

            if off_above || off_below {
                self.top_line = match mode {
                    ScrollRevealMode::Minimal => {
                        if off_above {
                            line.saturating_sub(padding)
                        } else {
                            (line + padding + 1).saturating_sub(self.visible_lines)
                        }
                    }
                    ScrollRevealMode::Centered => line.saturating_sub(self.visible_lines / 2),
                }
                .min(max_top);
            }
        } else {
            self.top_line = 0;
        }

        // Horizontal
        if self.visible_columns == 0 {
            return;
        }
        // Same cap as the vertical padding: narrow viewports shrink the margin
        let margin = HORIZONTAL_MARGIN.min((self.visible_columns - 1) / 2);
        let left_safe = self.left_column.saturating_add(margin);
        let right_safe = self
            .left_column
            .saturating_add(self.visible_columns)
            .saturating_sub(margin);

        if column < left_safe {
            self.left_column = column.saturating_sub(margin);
        } else if column >= right_safe {
            self.left_column = column
                .saturating_add(margin)
                .saturating_add(1)
                .saturating_sub(self.visible_columns);
        }
    }

    /// Scroll vertically by `delta` lines, clamped to the document
    pub fn scroll_by(&mut self, delta: i32, total_lines: usize) {
        let max_top = total_lines.saturating_sub(self.visible_lines);
        let target = if delta < 0 {
            self.top_line.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.top_line.saturating_add(delta as usize)
        };
        self.top_line = target.min(max_top);
    }

    /// Scroll horizontally by `delta` columns, clamped to the widest line
    pub fn scroll_horizontal_by(&mut self, delta: i32, max_line_length: usize) {
        let max_left = max_line_length.saturating_sub(self.visible_columns);
        let target = if delta < 0 {
            self.left_column
                .saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.left_column.saturating_add(delta as usize)
        };
        self.left_column = target.min(max_left);
    }

    /// Change the viewport dimensions, keeping the top line in range
    pub fn resize(&mut self, visible_lines: usize, visible_columns: usize, total_lines: usize) {
        self.visible_lines = visible_lines;
        self.visible_columns = visible_columns;
        self.top_line = self
            .top_line
            .min(total_lines.saturating_sub(visible_lines));
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25, 80)
    }
}
