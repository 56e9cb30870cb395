//! Source text with user-facing position conversion.

use super::{LineIndex, Position, TextRange, TextSize};

/// Default width of a tab stop when expanding columns
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// The text of one file, its line index and the tab width used for columns
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    line_index: LineIndex,
    tab_width: usize,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_tab_width(text, DEFAULT_TAB_WIDTH)
    }

    /// A tab width of zero is treated as one.
    pub fn with_tab_width(text: impl Into<String>, tab_width: usize) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            text,
            line_index,
            tab_width: tab_width.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Convert a byte offset to a 1-based line and a 1-based column in which
    /// each tab advances to the next tab stop.
    pub fn position(&self, offset: TextSize) -> Position {
        let line_col = self.line_index.line_col(offset);
        let line_start = self
            .line_index
            .line_range(line_col.line)
            .map(TextRange::start)
            .unwrap_or_default();
        let start = usize::from(line_start);
        let end = start + line_col.col as usize;
        let prefix = self.text.get(start..end).unwrap_or_default();
        Position::new(line_col.line as usize + 1, self.expanded_width(prefix) + 1)
    }

    fn expanded_width(&self, prefix: &str) -> usize {
        prefix.chars().fold(0, |col, ch| {
            if ch == '\t' {
                (col / self.tab_width + 1) * self.tab_width
            } else {
                col + 1
            }
        })
    }
}
