//! campusdoc-ast - Segment model definitions
//!
//! This crate provides the neutral segment types shared by every campusdoc
//! renderer: a parsed document is an ordered sequence of [`Segment`]s, and
//! each render call additionally receives a [`Letterhead`] describing the
//! institution branding block.
//!
//! All renderers consume the same segment sequence; none of them own or
//! mutate it, so documents can be rendered to several targets concurrently.

pub mod letterhead;
pub mod segment;

pub use letterhead::{Letterhead, Logo};
pub use segment::{FooterRow, Segment, Table, TextRun};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
