//! Block-wise line pattern extraction for pbnfix.
//!
//! A hand-record file is treated as a flat sequence of lines grouped into
//! fixed-size blocks. A [`LinePattern`] names which positions inside each
//! block to copy, and in which order; [`extract`] applies the pattern to
//! whole-file content and returns the selected lines, terminators intact.
//!
//! The crate is pure string-in / string-out: reading and writing files is
//! the `pbnfix-fs` crate's business.
//!
//! ```
//! use pbnfix_blocks::{LinePattern, extract};
//!
//! let pattern = LinePattern::new(vec![2, 1]).unwrap();
//! let out = extract("a\nb\nc\nd\n", &pattern);
//! assert_eq!(out, "b\na\nd\nc\n");
//! ```

pub mod error;
pub mod extract;
pub mod pattern;

pub use error::{Error, Result};
pub use extract::{extract, selected_indices, split_lines};
pub use pattern::LinePattern;
