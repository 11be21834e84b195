//! Plain-text export
//!
//! The plain-text download is the one export that does not go through the
//! segment model: it strips exactly the literal `[TABLE]` and `[/TABLE]`
//! marker strings from the raw document, leaving the pipe-delimited rows as
//! plain lines. Footer markers are left untouched.

use crate::segmenter::{TABLE_CLOSE, TABLE_OPEN};

/// Strip the table markers from a raw document string.
///
/// A line consisting solely of a marker is dropped entirely (so no stray
/// blank line is left where it stood); markers embedded in a longer line
/// are removed in place. Nothing else is altered.
pub fn strip_markup(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed == TABLE_OPEN || trimmed == TABLE_CLOSE {
            continue;
        }
        let cleaned = line.replace(TABLE_OPEN, "").replace(TABLE_CLOSE, "");
        output.push_str(&cleaned);
        output.push('\n');
    }

    if !raw.ends_with('\n') {
        output.pop();
    }
    output
}
