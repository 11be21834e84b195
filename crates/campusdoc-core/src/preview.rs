//! Preview renderer
//!
//! Converts a segment sequence into a reflowable visual tree for on-screen
//! display. The tree is plain serializable data; a UI layer walks it and
//! maps each node to its widgets. No pagination happens here, the preview
//! is bounded only by a scrollable viewport.
//!
//! Heading detection uses [`HeadingPolicy::AllCaps`]: the preview styles
//! every all-caps line as a heading, unlike the export targets.

use campusdoc_ast::{Letterhead, Segment};
use serde::{Deserialize, Serialize};

use crate::heading::HeadingPolicy;

/// The complete preview visual tree for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDoc {
    /// Nodes in display order; letterhead first, footer (if any) last
    pub nodes: Vec<PreviewNode>,
}

/// One visual node of the preview tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PreviewNode {
    /// Institution branding block, always the first node
    Letterhead {
        name: String,
        affiliation: String,
        accreditation: String,
        certifications: String,
        /// Whether a logo image accompanies the text block
        has_logo: bool,
    },
    /// Monospaced text block preserving line breaks and whitespace
    TextBlock { lines: Vec<PreviewLine> },
    /// Bordered grid with a styled header row and zebra-striped data rows
    TableGrid {
        header: Vec<String>,
        rows: Vec<PreviewRow>,
    },
    /// Three-part closing row: left, center, right (right rendered bold);
    /// no separator line above it
    Footer {
        left: String,
        center: String,
        right: String,
    },
}

/// A single preview text line with its heading flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewLine {
    pub text: String,
    /// Styled as a heading (AllCaps policy)
    pub heading: bool,
}

/// A padded table row with its zebra shading flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// Cells padded to the table's column count; never ragged
    pub cells: Vec<String>,
    /// Odd rows (zero-based) carry the alternate background tint
    pub shaded: bool,
}

/// Render a segment sequence into the preview visual tree.
///
/// Pure function: identical input yields an identical tree. Blank
/// letterhead fields are replaced by their fixed defaults, so the branding
/// block is always shown.
pub fn render_preview(segments: &[Segment], letterhead: &Letterhead) -> PreviewDoc {
    let policy = HeadingPolicy::AllCaps;
    let resolved = letterhead.resolved();

    let mut nodes = vec![PreviewNode::Letterhead {
        name: resolved.name,
        affiliation: resolved.affiliation,
        accreditation: resolved.accreditation,
        certifications: resolved.certifications,
        has_logo: resolved.logo.is_some(),
    }];

    for segment in segments {
        match segment {
            Segment::Text(run) => {
                let lines = run
                    .lines
                    .iter()
                    .map(|line| PreviewLine {
                        text: line.clone(),
                        heading: policy.is_heading(line),
                    })
                    .collect();
                nodes.push(PreviewNode::TextBlock { lines });
            }
            Segment::Table(table) => {
                if table.is_empty() {
                    continue;
                }
                let columns = table.column_count();
                let header = (0..columns)
                    .map(|col| table.header_cell(col).to_string())
                    .collect();
                let rows = (0..table.rows.len())
                    .map(|row| PreviewRow {
                        cells: (0..columns).map(|col| table.cell(row, col).to_string()).collect(),
                        shaded: row % 2 == 1,
                    })
                    .collect();
                nodes.push(PreviewNode::TableGrid { header, rows });
            }
            Segment::Footer(footer) => {
                nodes.push(PreviewNode::Footer {
                    left: footer.left.clone(),
                    center: footer.center.clone(),
                    right: footer.right.clone(),
                });
            }
        }
    }

    PreviewDoc { nodes }
}
