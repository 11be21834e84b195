//! campusdoc-pdf - Paginated PDF export
//!
//! This crate renders a segment sequence to a multi-page A4 PDF.
//!
//! # Architecture
//!
//! The pipeline has two stages:
//!
//! 1. **Planner** ([`paginate`]) - pure layout math: a single running
//!    cursor, page breaks at line/row granularity, column-fit and cell
//!    truncation, producing positioned draw operations per page.
//! 2. **Writer** ([`write_pdf`]) - replays the plan against `printpdf`
//!    and serializes the document to bytes.
//!
//! Keeping the stages apart makes every pagination invariant testable on
//! plain data, without parsing PDF output.
//!
//! # Example
//!
//! ```ignore
//! use campusdoc_ast::Letterhead;
//! use campusdoc_core::segment;
//! use campusdoc_pdf::render_pdf;
//!
//! let segments = segment("CIRCULAR\n\nClasses resume Monday.");
//! let bytes = render_pdf(&segments, &Letterhead::default(), "circular")?;
//! ```

pub mod error;
pub mod layout;
pub mod plan;
mod writer;

pub use error::{PdfError, Result};
pub use plan::{paginate, DrawOp, Fill, Page, Tone};
pub use writer::write_pdf;

use campusdoc_ast::{Letterhead, Segment};

/// Convenience function to render a segment sequence to PDF bytes
///
/// # Arguments
/// * `segments` - The tokenized document
/// * `letterhead` - Institution branding for the first page
/// * `title` - Document title stored in the PDF metadata
///
/// # Returns
/// PDF bytes on success; no partial output is produced on failure
pub fn render_pdf(segments: &[Segment], letterhead: &Letterhead, title: &str) -> Result<Vec<u8>> {
    let pages = paginate(segments, letterhead);
    write_pdf(&pages, letterhead, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pdf_end_to_end() {
        let segments = campusdoc_core::segment(
            "NOTICE\n[TABLE]\nDay | Subject\nMon | Physics\n[/TABLE]\n\
             [FOOTER_ROW]\nCopy to: All | Read in all | PRINCIPAL\n[/FOOTER_ROW]",
        );
        let bytes = render_pdf(&segments, &Letterhead::default(), "notice").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
