//! campusdoc-canvas - Single-canvas HTML export
//!
//! Renders a segment sequence into one self-contained HTML document sized
//! to a single A4 page at 96 DPI (794 x 1123 px). The output is meant to
//! be handed to an external rasterization step (a DOM screenshot or
//! equivalent) that produces the final image; that capability must wait
//! for all embedded images to load before capturing, which is why the logo
//! is inlined as a base64 data URI rather than referenced by URL.
//!
//! There is no pagination and no overflow enforcement here: the content
//! source is instructed to fit a single page, and keeping within the
//! canvas is the caller's responsibility. This crate's job ends at
//! producing correct, fully laid-out markup at the fixed pixel dimensions.

mod markup;

pub use markup::render_canvas;

/// Canvas width in pixels (A4 at 96 DPI)
pub const CANVAS_WIDTH: u32 = 794;
/// Canvas height in pixels (A4 at 96 DPI)
pub const CANVAS_HEIGHT: u32 = 1123;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
