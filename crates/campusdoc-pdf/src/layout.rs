//! Page geometry and text metrics
//!
//! One unit system throughout the paginated target: millimetres on an A4
//! portrait sheet, measured from the top-left corner (the writer flips to
//! PDF's bottom-left origin at the very end).
//!
//! Text measurement is a fixed-width approximation: every glyph is assumed
//! to occupy half an em at the given font size. The approximation is
//! deliberate. The wrapping and column-fit math must be deterministic and
//! medium-independent, and the generated documents are plain ASCII office
//! prose where the average-width model holds up well.

/// Page width, A4 portrait
pub const PAGE_WIDTH: f32 = 210.0;
/// Page height, A4 portrait
pub const PAGE_HEIGHT: f32 = 297.0;
/// Inset of the decorative page border from the sheet edges
pub const BORDER_INSET: f32 = 8.0;
/// Content margin on all four sides
pub const MARGIN: f32 = 14.0;
/// Width available to content
pub const PRINTABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Cursor limit; drawing past this starts a new page
pub const BOTTOM_LIMIT: f32 = PAGE_HEIGHT - MARGIN;

/// Body text size in points
pub const BODY_SIZE: f32 = 10.0;
/// Heading text size in points
pub const HEADING_SIZE: f32 = 13.0;
/// Institution name size in points
pub const NAME_SIZE: f32 = 16.0;
/// Letterhead detail lines size in points
pub const DETAIL_SIZE: f32 = 9.0;
/// Table cell text size in points
pub const TABLE_SIZE: f32 = 9.0;

/// Height of one table row, header included
pub const ROW_HEIGHT: f32 = 7.0;
/// Horizontal padding inside a table cell
pub const CELL_PADDING: f32 = 1.5;
/// Logo box side length on the first page
pub const LOGO_SIZE: f32 = 22.0;

const PT_TO_MM: f32 = 0.3528;
/// Average glyph advance as a fraction of the font size
const GLYPH_WIDTH_EM: f32 = 0.5;
/// Baseline-to-baseline distance as a fraction of the font size
const LINE_SPACING: f32 = 1.45;

/// Width of `text` at `size` points, in millimetres
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * GLYPH_WIDTH_EM
}

/// Vertical advance of one text line at `size` points, in millimetres
pub fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * LINE_SPACING
}

/// Wrap `text` to `max_width` millimetres at `size` points.
///
/// Word wrap with a hard character split for words wider than a whole
/// line; a blank input yields a single empty line so callers advance the
/// cursor uniformly.
pub fn wrap_text(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let max_chars = max_chars_for(size, max_width);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() && word_len <= max_chars {
            current.push_str(word);
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word_len <= max_chars {
                current.push_str(word);
            } else {
                // Hard-split a word wider than the whole line
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == max_chars {
                        lines.push(std::mem::take(&mut chunk));
                    }
                    chunk.push(ch);
                }
                current = chunk;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Truncate `text` character by character from the end until it fits in
/// `max_width` millimetres at `size` points.
///
/// Cell text is truncated rather than wrapped: a reproduced simplification
/// of the system this replaces, kept for output compatibility.
pub fn truncate_to_width(text: &str, size: f32, max_width: f32) -> String {
    let mut result = text.to_string();
    while !result.is_empty() && text_width(&result, size) > max_width {
        result.pop();
    }
    result
}

fn max_chars_for(size: f32, max_width: f32) -> usize {
    let glyph = size * PT_TO_MM * GLYPH_WIDTH_EM;
    ((max_width / glyph).floor() as usize).max(1)
}
