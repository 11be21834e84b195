//! Layout planner
//!
//! Pure first stage of the PDF pipeline: converts a segment sequence plus
//! letterhead into an ordered list of [`Page`]s of positioned draw
//! operations. No PDF types appear here, so every pagination rule (the
//! shared running cursor, row-level page breaks, column-fit math, cell
//! truncation) is testable without parsing PDF bytes. The second stage
//! ([`crate::writer`]) replays the plan against the PDF backend.
//!
//! Pagination invariants:
//! - one vertical cursor runs across all segments and pages;
//! - a new page starts whenever the next unit (one wrapped text line or
//!   one table row) would cross the bottom margin; a unit is never split;
//! - the letterhead appears on the first page only;
//! - the footer row is planned last, on a fresh page if it does not fit.

use campusdoc_ast::{Letterhead, Segment, Table};
use campusdoc_core::HeadingPolicy;

use crate::layout::{
    line_height, text_width, truncate_to_width, wrap_text, BODY_SIZE, BORDER_INSET, BOTTOM_LIMIT,
    CELL_PADDING, DETAIL_SIZE, HEADING_SIZE, LOGO_SIZE, MARGIN, NAME_SIZE, PAGE_HEIGHT, PAGE_WIDTH,
    PRINTABLE_WIDTH, ROW_HEIGHT, TABLE_SIZE,
};

/// One fixed-size planned page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Draw operations in z-order (fills first, then strokes, then text)
    pub ops: Vec<DrawOp>,
}

/// A positioned draw operation; coordinates in millimetres from the
/// top-left corner of the sheet
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A text baseline at (`x`, `y`)
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        tone: Tone,
        text: String,
    },
    /// A filled rectangle (table header / zebra tint)
    RectFill { x: f32, y: f32, w: f32, h: f32, fill: Fill },
    /// A stroked rectangle (page border, cell border)
    RectStroke { x: f32, y: f32, w: f32, h: f32 },
    /// A horizontal rule
    Rule { x1: f32, x2: f32, y: f32 },
    /// The letterhead logo box; bytes live on the `Letterhead`
    Logo { x: f32, y: f32, w: f32, h: f32 },
}

/// Text color tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Regular dark text
    Ink,
    /// Light text on the inverted table header
    Paper,
}

/// Rectangle fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Dark table header background
    HeaderDark,
    /// Even data rows (zero-based)
    RowEven,
    /// Odd data rows
    RowOdd,
}

/// Running paginator state: the single vertical cursor shared by all
/// segments, and the accumulated pages
struct Paginator {
    pages: Vec<Page>,
    cursor: f32,
}

impl Paginator {
    fn new() -> Self {
        let mut paginator = Self {
            pages: Vec::new(),
            cursor: MARGIN,
        };
        paginator.start_page();
        paginator
    }

    /// Open a fresh page with its border and reset the cursor
    fn start_page(&mut self) {
        self.pages.push(Page {
            ops: vec![DrawOp::RectStroke {
                x: BORDER_INSET,
                y: BORDER_INSET,
                w: PAGE_WIDTH - 2.0 * BORDER_INSET,
                h: PAGE_HEIGHT - 2.0 * BORDER_INSET,
            }],
        });
        self.cursor = MARGIN;
    }

    /// Break to a new page if the next unit of `height` would cross the
    /// bottom margin
    fn ensure_room(&mut self, height: f32) {
        if self.cursor + height > BOTTOM_LIMIT {
            self.start_page();
        }
    }

    fn push(&mut self, op: DrawOp) {
        // A page always exists after new()
        self.pages.last_mut().unwrap().ops.push(op);
    }

    /// Emit one text baseline at the current cursor and advance it
    fn text_line(&mut self, text: String, size: f32, bold: bool, x: f32) {
        let advance = line_height(size);
        self.ensure_room(advance);
        self.cursor += advance;
        self.push(DrawOp::Text {
            x,
            y: self.cursor,
            size,
            bold,
            tone: Tone::Ink,
            text,
        });
    }

    /// Centered variant of [`Paginator::text_line`]
    fn centered_line(&mut self, text: String, size: f32, bold: bool) {
        let x = (PAGE_WIDTH - text_width(&text, size)) / 2.0;
        self.text_line(text, size, bold, x.max(MARGIN));
    }
}

/// Plan the paginated layout for a segment sequence.
///
/// Pure function of its inputs; identical input and letterhead always
/// yield an identical plan.
pub fn paginate(segments: &[Segment], letterhead: &Letterhead) -> Vec<Page> {
    let policy = HeadingPolicy::Keyword;
    let mut paginator = Paginator::new();

    plan_letterhead(&mut paginator, letterhead);

    for segment in segments {
        match segment {
            Segment::Text(run) => {
                for line in &run.lines {
                    if line.trim().is_empty() {
                        // Blank lines advance half a line without drawing
                        paginator.cursor += line_height(BODY_SIZE) / 2.0;
                        continue;
                    }
                    if policy.is_heading(line) {
                        paginator.cursor += line_height(HEADING_SIZE) * 0.3;
                        for wrapped in wrap_text(line.trim(), HEADING_SIZE, PRINTABLE_WIDTH) {
                            paginator.centered_line(wrapped, HEADING_SIZE, true);
                        }
                        paginator.cursor += line_height(HEADING_SIZE) * 0.3;
                    } else {
                        for wrapped in wrap_text(line, BODY_SIZE, PRINTABLE_WIDTH) {
                            paginator.text_line(wrapped, BODY_SIZE, false, MARGIN);
                        }
                    }
                }
            }
            Segment::Table(table) => plan_table(&mut paginator, table),
            Segment::Footer(footer) => {
                let advance = line_height(BODY_SIZE);
                paginator.cursor += advance * 0.75;
                paginator.ensure_room(advance);
                paginator.cursor += advance;
                let y = paginator.cursor;
                paginator.push(DrawOp::Text {
                    x: MARGIN,
                    y,
                    size: BODY_SIZE,
                    bold: false,
                    tone: Tone::Ink,
                    text: footer.left.clone(),
                });
                let center_x = (PAGE_WIDTH - text_width(&footer.center, BODY_SIZE)) / 2.0;
                paginator.push(DrawOp::Text {
                    x: center_x.max(MARGIN),
                    y,
                    size: BODY_SIZE,
                    bold: false,
                    tone: Tone::Ink,
                    text: footer.center.clone(),
                });
                let right_x = PAGE_WIDTH - MARGIN - text_width(&footer.right, BODY_SIZE);
                paginator.push(DrawOp::Text {
                    x: right_x.max(MARGIN),
                    y,
                    size: BODY_SIZE,
                    bold: true,
                    tone: Tone::Ink,
                    text: footer.right.clone(),
                });
            }
        }
    }

    paginator.pages
}

/// First-page letterhead: optional logo, centered institution lines, rule
fn plan_letterhead(paginator: &mut Paginator, letterhead: &Letterhead) {
    let resolved = letterhead.resolved();
    let top = paginator.cursor;

    if resolved.logo.is_some() {
        paginator.push(DrawOp::Logo {
            x: MARGIN,
            y: top,
            w: LOGO_SIZE,
            h: LOGO_SIZE,
        });
    }

    paginator.cursor += line_height(NAME_SIZE) * 0.5;
    paginator.centered_line(resolved.name, NAME_SIZE, true);
    paginator.centered_line(resolved.affiliation, DETAIL_SIZE, false);
    paginator.centered_line(resolved.accreditation, DETAIL_SIZE, false);
    paginator.centered_line(resolved.certifications, DETAIL_SIZE, false);

    if resolved.logo.is_some() {
        paginator.cursor = paginator.cursor.max(top + LOGO_SIZE);
    }
    paginator.cursor += 3.0;
    paginator.push(DrawOp::Rule {
        x1: MARGIN,
        x2: PAGE_WIDTH - MARGIN,
        y: paginator.cursor,
    });
    paginator.cursor += 4.0;
}

/// Plan one table: evenly divided columns, inverted header, zebra rows,
/// truncated cell text, one page-break decision per row
fn plan_table(paginator: &mut Paginator, table: &Table) {
    let columns = table.column_count();
    if columns == 0 {
        return;
    }
    let col_width = PRINTABLE_WIDTH / columns as f32;
    let text_room = col_width - 2.0 * CELL_PADDING;

    paginator.cursor += 2.0;

    // Header row: dark fill, light bold text
    paginator.ensure_room(ROW_HEIGHT);
    let y = paginator.cursor;
    for col in 0..columns {
        let x = MARGIN + col as f32 * col_width;
        paginator.push(DrawOp::RectFill {
            x,
            y,
            w: col_width,
            h: ROW_HEIGHT,
            fill: Fill::HeaderDark,
        });
        paginator.push(DrawOp::RectStroke {
            x,
            y,
            w: col_width,
            h: ROW_HEIGHT,
        });
        paginator.push(DrawOp::Text {
            x: x + CELL_PADDING,
            y: y + ROW_HEIGHT - 2.0,
            size: TABLE_SIZE,
            bold: true,
            tone: Tone::Paper,
            text: truncate_to_width(table.header_cell(col), TABLE_SIZE, text_room),
        });
    }
    paginator.cursor += ROW_HEIGHT;

    // Data rows: zebra tint by zero-based index; break per whole row
    for row in 0..table.rows.len() {
        paginator.ensure_room(ROW_HEIGHT);
        let y = paginator.cursor;
        let fill = if row % 2 == 0 { Fill::RowEven } else { Fill::RowOdd };
        for col in 0..columns {
            let x = MARGIN + col as f32 * col_width;
            paginator.push(DrawOp::RectFill {
                x,
                y,
                w: col_width,
                h: ROW_HEIGHT,
                fill,
            });
            paginator.push(DrawOp::RectStroke {
                x,
                y,
                w: col_width,
                h: ROW_HEIGHT,
            });
            paginator.push(DrawOp::Text {
                x: x + CELL_PADDING,
                y: y + ROW_HEIGHT - 2.0,
                size: TABLE_SIZE,
                bold: false,
                tone: Tone::Ink,
                text: truncate_to_width(table.cell(row, col), TABLE_SIZE, text_room),
            });
        }
        paginator.cursor += ROW_HEIGHT;
    }

    paginator.cursor += 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdoc_core::segment;

    fn letterhead() -> Letterhead {
        Letterhead {
            name: "CITY COLLEGE".into(),
            ..Default::default()
        }
    }

    /// Baseline y positions of all text ops on a page
    fn text_ys(page: &Page) -> Vec<f32> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_short_document_fits_one_page() {
        let segments = segment("CIRCULAR\n\nClasses resume Monday.");
        let pages = paginate(&segments, &letterhead());
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_every_page_has_a_border() {
        let long = (0..300).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let pages = paginate(&segment(&long), &letterhead());
        assert!(pages.len() >= 2);
        for page in &pages {
            assert!(matches!(page.ops[0], DrawOp::RectStroke { .. }));
        }
    }

    #[test]
    fn test_overflowing_text_spans_pages_without_splitting_lines() {
        let long = (0..300).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let pages = paginate(&segment(&long), &letterhead());
        assert!(pages.len() >= 2);
        // Every baseline sits inside the printable band of its own page.
        for page in &pages {
            for y in text_ys(page) {
                assert!(y <= BOTTOM_LIMIT + 1e-3);
                assert!(y >= MARGIN - 1e-3);
            }
        }
        // No content line lost across the break.
        let total_lines: usize = pages
            .iter()
            .map(|p| text_ys(p).len())
            .sum();
        // 300 content lines + 4 letterhead lines
        assert_eq!(total_lines, 304);
    }

    #[test]
    fn test_table_rows_never_split_across_pages() {
        let mut raw = String::from("[TABLE]\nDay | Subject | Room\n");
        for i in 0..80 {
            raw.push_str(&format!("Day {} | Subject {} | Room {}\n", i, i, i));
        }
        raw.push_str("[/TABLE]");
        let pages = paginate(&segment(&raw), &letterhead());
        assert!(pages.len() >= 2);

        let mut total_fills = 0;
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::RectFill { y, h, .. } = op {
                    // A row's rect must lie entirely inside the page.
                    assert!(y + h <= BOTTOM_LIMIT + 1e-3);
                    total_fills += 1;
                }
            }
        }
        // 81 rows (header + 80 data) x 3 cells, none dropped or duplicated.
        assert_eq!(total_fills, 81 * 3);
    }

    #[test]
    fn test_letterhead_only_on_first_page() {
        let long = (0..300).map(|_| "text line".to_string()).collect::<Vec<_>>().join("\n");
        let mut lh = letterhead();
        lh.logo = Some(campusdoc_ast::Logo { bytes: vec![1, 2, 3] });
        let pages = paginate(&segment(&long), &lh);
        assert!(pages.len() >= 2);

        let logos_on_first = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Logo { .. }))
            .count();
        assert_eq!(logos_on_first, 1);
        for page in &pages[1..] {
            assert!(!page.ops.iter().any(|op| matches!(op, DrawOp::Logo { .. })));
            assert!(!page.ops.iter().any(
                |op| matches!(op, DrawOp::Text { text, .. } if text == "CITY COLLEGE")
            ));
        }
    }

    #[test]
    fn test_keyword_headings_are_centered_and_bold() {
        let segments = segment("EXAMINATION TIME TABLE\nplain body text");
        let pages = paginate(&segments, &letterhead());
        let heading = pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, bold, size, x, .. }
                    if text == "EXAMINATION TIME TABLE" =>
                {
                    Some((*bold, *size, *x))
                }
                _ => None,
            })
            .expect("heading op present");
        assert!(heading.0);
        assert_eq!(heading.1, HEADING_SIZE);
        assert!(heading.2 > MARGIN);
    }

    #[test]
    fn test_non_keyword_all_caps_line_is_body_text() {
        // The export heading policy diverges from the preview here.
        let segments = segment("ANNUAL SPORTS MEET");
        let pages = paginate(&segments, &letterhead());
        let op = pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, bold, size, .. } if text == "ANNUAL SPORTS MEET" => {
                    Some((*bold, *size))
                }
                _ => None,
            })
            .expect("text op present");
        assert!(!op.0);
        assert_eq!(op.1, BODY_SIZE);
    }

    #[test]
    fn test_footer_contract() {
        let raw = "body\n[FOOTER_ROW]\nCopy to: All | Read in all | PRINCIPAL\n[/FOOTER_ROW]";
        let pages = paginate(&segment(raw), &letterhead());
        let last = pages.last().unwrap();

        let right = last
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, bold, x, y, .. } if text == "PRINCIPAL" => {
                    Some((*bold, *x, *y))
                }
                _ => None,
            })
            .expect("right footer part present");
        assert!(right.0, "right footer part must be bold");

        let left = last
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, bold, x, y, .. } if text == "Copy to: All" => {
                    Some((*bold, *x, *y))
                }
                _ => None,
            })
            .expect("left footer part present");
        assert!(!left.0);
        assert_eq!(left.1, MARGIN);
        // Same baseline, no rule drawn at or above it after the body.
        assert_eq!(left.2, right.2);
        assert!(!last.ops.iter().any(
            |op| matches!(op, DrawOp::Rule { y, .. } if (*y - left.2).abs() < ROW_HEIGHT && *y > MARGIN + 20.0)
        ));
    }

    #[test]
    fn test_ragged_rows_render_blank_padded() {
        let raw = "[TABLE]\nA | B | C\n1 | 2\n1 | 2 | 3 | 4\n[/TABLE]";
        let pages = paginate(&segment(raw), &letterhead());
        // Column count is the max across header and rows: 4.
        let texts: Vec<&DrawOp> = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { size, .. } if *size == TABLE_SIZE))
            .collect();
        // header(4) + row(4) + row(4)
        assert_eq!(texts.len(), 12);
    }

    #[test]
    fn test_empty_table_plans_nothing() {
        let pages = paginate(&segment("[TABLE]\n\n[/TABLE]"), &letterhead());
        assert!(!pages[0].ops.iter().any(|op| matches!(op, DrawOp::RectFill { .. })));
    }

    #[test]
    fn test_cell_text_truncated_not_wrapped() {
        let long_cell = "an exceedingly long cell value that cannot fit in a narrow column";
        let raw = format!("[TABLE]\nA | B | C | D | E | F\n{} | 2 | 3 | 4 | 5 | 6\n[/TABLE]", long_cell);
        let pages = paginate(&segment(&raw), &letterhead());
        let cell_op = pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, size, .. }
                    if *size == TABLE_SIZE && long_cell.starts_with(text.as_str()) && text != "A" =>
                {
                    Some(text.clone())
                }
                _ => None,
            })
            .expect("truncated cell present");
        assert!(cell_op.len() < long_cell.len());
    }

    #[test]
    fn test_plan_is_deterministic() {
        let segments = segment("HEAD\n[TABLE]\nA | B\n1 | 2\n[/TABLE]");
        let lh = letterhead();
        assert_eq!(paginate(&segments, &lh), paginate(&segments, &lh));
    }
}
