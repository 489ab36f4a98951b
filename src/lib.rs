//! `charseq` - Growable UTF-8 character sequence
//!
//! A mutable, Unicode-aware text container composed of explicit
//! variable-byte-length character units. Every position in the API is a
//! character index, multi-byte characters are never split by any operation,
//! and a lazily-cached flat byte rendering (with NUL terminator) gives
//! byte-exact interop with fixed-width C-style text buffers.
//!
//! # Quick start
//!
//! ```
//! use charseq::CharSeq;
//!
//! let mut s = CharSeq::from("TSTING!!");
//! s.insert(1, "E").unwrap();
//! assert_eq!(s, "TESTING!!");
//! assert_eq!(s.len(), 9);           // characters
//! assert_eq!(s.byte_size(), 10);    // bytes, incl. NUL terminator
//! assert_eq!(s.as_bytes(), b"TESTING!!");
//! ```
//!
//! # What this crate is not
//!
//! No normalization, grapheme clustering, locale-aware collation, or case
//! folding: ordering and equality operate on raw bytes one character unit
//! at a time, and comparison is deliberately length-first (see [`CharSeq`]
//! and [`Utf8Char`]). No UTF-8 validation either - malformed input degrades
//! to 1-byte units instead of failing.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional u8 length casts
#![allow(clippy::cast_possible_wrap)] // Intentional shift-offset conversions
#![allow(clippy::module_name_repetitions)] // Allow seq::CharSeq etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::must_use_candidate)] // must_use applied where it matters
#![allow(clippy::return_self_not_must_use)] // Chaining mutators is optional
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod seq;
pub mod utf8char;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use seq::{CharSeq, CharSource};
pub use utf8char::{MAX_BYTES, Utf8Char, char_count, encoded_len, parse_units};
