//! Tinge-tabular - aligned, optionally bordered ASCII tables.
//!
//! Turns a rectangular grid of displayable values into a text block,
//! using `+`, `-` and `|` as the only structural glyphs. Column widths
//! are computed from content, ANSI-aware: cells may carry SGR escape
//! sequences (for instance from the `tinge` styling engine) without
//! skewing alignment.
//!
//! # Quick Start
//!
//! ```rust
//! use tinge_tabular::{render, Align, TableOptions};
//!
//! let rows = vec![
//!     vec!["local", "remote", "status"],
//!     vec![":4444", "10.0.0.5:22", "up"],
//! ];
//!
//! let block = render(&rows, &TableOptions::default()).unwrap();
//! assert_eq!(block.lines().count(), 5); // borders, header, separator, row
//!
//! // Unbordered, right-aligned, no header:
//! let options = TableOptions::new()
//!     .header(false)
//!     .border(false)
//!     .align(Align::Right);
//! let plain = render(&rows, &options).unwrap();
//! assert!(plain.starts_with("-"));
//! ```
//!
//! # Error policy
//!
//! Rendering is strict about structure: every row must have the same
//! column count as the first, or [`render`] returns
//! [`TableError::RaggedRow`] and produces no output. Cosmetic input, by
//! contrast, is tolerant: [`Align::from_name`] maps unknown alignment
//! names to left alignment.

mod error;
mod render;
mod types;

// Re-export public API
pub use error::{Result, TableError};
pub use render::{display_width, render};
pub use types::{Align, TableOptions};
