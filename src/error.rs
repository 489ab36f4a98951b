//! Error types for charseq.

use std::fmt;

/// Result type alias for charseq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for charseq operations.
///
/// The only failure the core can report is an out-of-range character index.
/// Allocation failure is not modeled (it propagates from the allocator), and
/// malformed UTF-8 input is never rejected — unrecognized leading bytes are
/// stored as 1-byte units instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Character index out of bounds for the target sequence or source.
    OutOfBounds {
        /// The offending character index.
        pos: usize,
        /// The character count of the sequence it was checked against.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, len } => {
                write!(
                    f,
                    "character index {pos} out of bounds for sequence of {len} characters"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
