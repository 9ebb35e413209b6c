//! Incremental reassembly of text from a stream of bits.
//!
//! Unlike [`Codec::decode_bits`](crate::Codec::decode_bits), the assembler
//! receives bits one at a time and never fails on a bad word. If a full word
//! does not decode to a [`char`], the oldest buffered bit is discarded and the
//! word is retried once the next bit arrives. This lets a receiver recover
//! from a spurious leading bit at the cost of possibly losing one char.

use std::collections::VecDeque;

use crate::codec::word_value;
use crate::error::{Error, Result};
use crate::width::Width;

/// Collects bits into words and words into text.
#[derive(Debug, Clone, Default)]
pub struct UnitAssembler {
    width: Width,
    pending: VecDeque<bool>,
    message: String,
}

impl UnitAssembler {
    /// Creates an empty assembler for words of the given width.
    #[must_use]
    pub fn new(width: Width) -> Self {
        Self {
            width,
            pending: VecDeque::with_capacity(width.digits()),
            message: String::new(),
        }
    }

    /// The word width.
    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    /// Amount of bits received since the last completed word.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The text assembled so far.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Adds a bit to the current word.
    ///
    /// Returns the decoded [`char`] if this bit completed a valid word.
    pub fn push(&mut self, bit: bool) -> Option<char> {
        self.pending.push_back(bit);
        if self.pending.len() < self.width.digits() {
            return None;
        }

        let value = word_value(self.pending.make_contiguous());

        if let Some(ch) = char::from_u32(value) {
            self.pending.clear();
            self.message.push(ch);
            Some(ch)
        } else {
            log::debug!("Word {value:#X} is not a char, dropping its first bit.");
            self.pending.pop_front();
            None
        }
    }

    /// Discards all pending bits and the assembled text.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.message.clear();
    }

    /// Returns the assembled text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrailingBits`] if a partial word is still pending.
    pub fn finish(self) -> Result<String> {
        match self.pending.len() {
            0 => Ok(self.message),
            count => Err(Error::TrailingBits { count }),
        }
    }
}

impl Extend<bool> for UnitAssembler {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for bit in iter {
            self.push(bit);
        }
    }
}
