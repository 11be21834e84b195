//! Markup tokenizer/segmenter
//!
//! Splits a raw generated-document string into an ordered [`Segment`]
//! sequence. The grammar is deliberately tiny:
//!
//! ```text
//! [TABLE]
//! HEADER1 | HEADER2 | ...
//! value1 | value2 | ...
//! [/TABLE]
//!
//! [FOOTER_ROW]
//! left | center | right
//! [/FOOTER_ROW]
//! ```
//!
//! No other bracketed token is recognized; anything else stays literal
//! text. The segmenter is a pure function and never fails: an unmatched
//! `[TABLE]` marker or a footer span that does not split into exactly
//! three parts degrades to ordinary text instead of raising an error.

use campusdoc_ast::{FooterRow, Segment, Table, TextRun};
use regex::Regex;

/// Opening table marker
pub const TABLE_OPEN: &str = "[TABLE]";
/// Closing table marker
pub const TABLE_CLOSE: &str = "[/TABLE]";
/// Opening footer marker
pub const FOOTER_OPEN: &str = "[FOOTER_ROW]";
/// Closing footer marker
pub const FOOTER_CLOSE: &str = "[/FOOTER_ROW]";

/// Tokenize a raw document string into an ordered segment sequence.
///
/// The footer span is extracted first, wherever it appears, and re-appended
/// as the last segment; table blocks are scanned in document order; all
/// remaining non-blank text becomes [`TextRun`] segments.
pub fn segment(raw: &str) -> Vec<Segment> {
    // Normalize line endings
    let text = raw.replace("\r\n", "\n");

    let (working, footer) = extract_footer(&text);

    let mut segments = Vec::new();
    let mut rest = working.as_str();

    while let Some(open) = rest.find(TABLE_OPEN) {
        let after_open = open + TABLE_OPEN.len();
        match rest[after_open..].find(TABLE_CLOSE) {
            Some(rel_close) => {
                push_text(&mut segments, &rest[..open]);
                let interior = &rest[after_open..after_open + rel_close];
                segments.push(Segment::Table(parse_table(interior)));
                rest = &rest[after_open + rel_close + TABLE_CLOSE.len()..];
            }
            None => {
                // Dangling [TABLE] with no close: the whole remainder,
                // marker included, stays literal text. No content is lost.
                log::debug!("unmatched {} marker, keeping remainder as text", TABLE_OPEN);
                push_text(&mut segments, rest);
                rest = "";
                break;
            }
        }
    }

    push_text(&mut segments, rest);

    if let Some(footer) = footer {
        segments.push(Segment::Footer(footer));
    }

    segments
}

/// Parse a table block interior into a header row and data rows.
///
/// The first non-blank line is the header; every other non-blank line is a
/// data row. Cells are split on `|` and trimmed. An empty interior yields
/// an empty table, which renderers skip.
pub fn parse_table(interior: &str) -> Table {
    let mut lines = interior.lines().filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(line) => split_cells(line),
        None => return Table::default(),
    };

    let rows = lines.map(split_cells).collect();

    Table { header, rows }
}

/// Split a pipe-delimited line into trimmed cells
fn split_cells(line: &str) -> Vec<String> {
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Extract the first well-formed footer span from the text.
///
/// A span is well-formed when its interior splits on `|` into exactly three
/// parts. Only the first well-formed span is honored; later spans and all
/// malformed spans remain literal text in the returned working copy.
fn extract_footer(text: &str) -> (String, Option<FooterRow>) {
    let span_re = Regex::new(r"(?s)\[FOOTER_ROW\](.*?)\[/FOOTER_ROW\]").unwrap();

    for captures in span_re.captures_iter(text) {
        let whole = captures.get(0).unwrap();
        let interior = captures.get(1).unwrap().as_str();

        let parts: Vec<&str> = interior.split('|').map(str::trim).collect();
        if parts.len() == 3 {
            let footer = FooterRow {
                left: parts[0].to_string(),
                center: parts[1].to_string(),
                right: parts[2].to_string(),
            };
            let mut working = String::with_capacity(text.len());
            working.push_str(&text[..whole.start()]);
            working.push_str(&text[whole.end()..]);
            return (working, Some(footer));
        }
        // Malformed span: keep scanning, leave this one as ordinary text
        log::debug!(
            "footer span with {} part(s) instead of 3, keeping it as text",
            parts.len()
        );
    }

    (text.to_string(), None)
}

/// Append a text span as a segment if it is non-blank
fn push_text(segments: &mut Vec<Segment>, span: &str) {
    if span.trim().is_empty() {
        return;
    }
    let run = TextRun::from_span(span);
    if !run.is_blank() {
        segments.push(Segment::Text(run));
    }
}
