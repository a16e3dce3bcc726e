//! # bas2tap
//!
//! Converts a ZX Spectrum BASIC listing into a TAP tape image that loads
//! with `LOAD ""` on the real machine or an emulator.
//!
//! ```
//! let options = bas2tap::Options::new("hello");
//! let mut tap: Vec<u8> = vec![];
//! bas2tap::convert(&options, &b"10 PRINT \"HELLO\"\n"[..], &mut tap).unwrap();
//! assert_eq!(&tap[4..14], b"hello     ");
//! ```
//!
//! Lines start with a line number. Keywords are matched in any case and
//! replaced by their tokens, numbers get their binary form appended, and a
//! line starting with `;` is a comment. A line starting with a keyword or a
//! string continues the previous line.

pub mod lang;
pub mod tape;

mod convert;

pub use convert::{convert, Options};
pub use lang::tokenize;

/// Largest tokenized program a TAP data block can carry.
pub const MAX_PROGRAM_LEN: usize = 0xFFFF - 2;
