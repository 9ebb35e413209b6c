//! Error handling types.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while converting between text and binary units.
///
/// Every variant identifies the first offending element of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A character's code point needs more bits than the unit width allows.
    #[error("char {ch:?} at index {index} does not fit into {width} bits")]
    EncodingOverflow { index: usize, ch: char, width: u32 },
    /// A unit had the wrong length or contained something other than `0` and
    /// `1`.
    #[error("unit at index {index} is malformed: {kind}")]
    MalformedUnit { index: usize, kind: MalformedKind },
    /// A unit parsed fine but its value is not a Unicode scalar value.
    #[error("unit at index {index} has value {value:#X}, which is not a valid char")]
    InvalidCodePoint { index: usize, value: u32 },

    /// A unit width outside `1..=32` was requested.
    #[error("unit width must be between 1 and 32 bits, got {0}")]
    InvalidWidth(u32),
    /// A bit stream ended in the middle of a word.
    #[error("{count} bits left over past the last full word")]
    TrailingBits { count: usize },
    /// The written buffer returned an error.
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

/// Why a unit was rejected by [`MalformedUnit`](Error::MalformedUnit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The unit contained a character other than `0` or `1`.
    ///
    /// `offset` counts chars from the start of the unit.
    InvalidDigit { ch: char, offset: usize },
    /// The unit consisted of binary digits but had the wrong count of them.
    WrongWidth { len: usize, expected: u32 },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { ch, offset } => {
                write!(f, "invalid binary digit {ch:?} at offset {offset}")
            },
            Self::WrongWidth { len, expected } => {
                write!(f, "expected {expected} digits, found {len}")
            },
        }
    }
}
