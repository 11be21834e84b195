//! campusdoc-cli - Command-line interface
//!
//! Thin front end over the render crates: loads the input document and
//! letterhead settings, then dispatches to the preview, PDF, canvas, or
//! plain-text renderer.

pub mod app;
pub mod settings;

pub use app::run_cli;
pub use settings::{load_settings, Settings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
