//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// PDF backend error (font registration, byte serialization)
    #[error("PDF backend error: {0}")]
    Backend(#[from] printpdf::Error),
}
