//! Segment types for parsed documents
//!
//! A document string is tokenized into an ordered sequence of segments:
//! plain-text runs, table blocks, and at most one trailing footer row.
//! Segment order preserves the source's reading order, except the footer
//! row which is always the last segment regardless of where its marker
//! appeared in the source.

use serde::{Deserialize, Serialize};

/// One parsed unit of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Consecutive non-table, non-footer lines in original order
    Text(TextRun),
    /// A pipe-delimited table block
    Table(Table),
    /// The three-column closing block; at most one, always last
    Footer(FooterRow),
}

/// A run of plain-text lines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// Logical lines, in source order, untrimmed except for outer blanks
    pub lines: Vec<String>,
}

impl TextRun {
    /// Build a run from a raw text span, dropping outer blank lines but
    /// preserving interior blanks (they become half-line spacing in the
    /// paginated target).
    pub fn from_span(span: &str) -> Self {
        let lines: Vec<String> = span
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect();
        Self { lines }
    }

    /// Whether the run contains any non-blank line
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// A table block parsed from `[TABLE]...[/TABLE]`
///
/// The cell grid may be ragged: rows are stored exactly as parsed and may
/// be shorter or longer than the header. Renderers must go through
/// [`Table::cell`] / [`Table::column_count`] rather than indexing rows
/// directly, so a ragged grid can never cause an out-of-bounds access.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, trimmed
    pub header: Vec<String>,
    /// Data rows, each a list of trimmed cells; may be ragged
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Effective column count: the maximum width across the header and
    /// every data row. Short rows render their missing cells blank; with
    /// the max rule no data cell is ever dropped.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Header cell text at `col`, or `""` past the header's width
    pub fn header_cell(&self, col: usize) -> &str {
        self.header.get(col).map(String::as_str).unwrap_or("")
    }

    /// Data cell text at (`row`, `col`), or `""` out of bounds
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True for a table with zero columns; renderers emit nothing for it
    pub fn is_empty(&self) -> bool {
        self.column_count() == 0
    }
}

/// The three-column footer block parsed from `[FOOTER_ROW]...[/FOOTER_ROW]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FooterRow {
    /// Left-aligned part, normal weight
    pub left: String,
    /// Center-aligned part, normal weight
    pub center: String,
    /// Right-aligned part, rendered bold by every target
    pub right: String,
}
