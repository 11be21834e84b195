//! campusdoc-core - Markup segmentation and preview rendering
//!
//! Core library for campusdoc: tokenizes the generated-document mini markup
//! (`[TABLE]...[/TABLE]`, `[FOOTER_ROW]...[/FOOTER_ROW]`, uppercase
//! headings) into a neutral [`Segment`] sequence, and provides the
//! reflowable preview renderer plus the plain-text export.
//!
//! Tokenization is lenient by design: malformed markup never fails, it
//! degrades to literal text. Every renderer consumes the same segment
//! sequence, so the tolerance rules live here exactly once.
//!
//! # Example
//!
//! ```
//! use campusdoc_core::segment;
//! use campusdoc_ast::Segment;
//!
//! let raw = "CIRCULAR\n\n[TABLE]\nDay | Subject\nMon | Physics\n[/TABLE]";
//! let segments = segment(raw);
//!
//! assert_eq!(segments.len(), 2);
//! assert!(matches!(segments[0], Segment::Text(_)));
//! assert!(matches!(segments[1], Segment::Table(_)));
//! ```

pub mod heading;
pub mod preview;
pub mod segmenter;
pub mod text_export;

// Re-export main types and functions
pub use heading::HeadingPolicy;
pub use preview::{render_preview, PreviewDoc, PreviewLine, PreviewNode, PreviewRow};
pub use segmenter::{parse_table, segment};
pub use text_export::strip_markup;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
