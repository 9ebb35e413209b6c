//! Conversion between text and fixed-width binary units.
//!
//! Each [`char`] of the text is represented by exactly one unit: its code
//! point written as a base-2 numeral, most significant digit first, and
//! left-padded with `0` up to the configured [`Width`].
//!
//! The flat bit form concatenates those units, so a text of `n` chars becomes
//! `n * width` bits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, MalformedKind, Result};
use crate::width::Width;

/// Converts text to binary units and back with a fixed unit width.
///
/// The default codec uses [`Width::BYTE`].
///
/// When deserialized, a missing `width` falls back to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codec {
    width: Width,
}

impl Codec {
    /// Creates a codec using units of the given width.
    #[must_use]
    pub const fn new(width: Width) -> Self {
        Self { width }
    }

    /// Creates a codec using units of `bits` binary digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `bits` is not a valid [`Width`].
    pub fn with_bits(bits: u32) -> Result<Self> {
        Width::new(bits).map(Self::new)
    }

    /// The unit width used by this codec.
    #[must_use]
    pub const fn width(self) -> Width {
        self.width
    }

    /// Splits `text` into one binary unit per [`char`].
    ///
    /// Use [`Codec::compose`] to reverse the operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] for the first char whose code point
    /// does not fit into the unit width.
    pub fn decompose(self, text: &str) -> Result<Vec<String>> {
        let width = self.width.digits();
        let mut units = Vec::with_capacity(text.len());

        for (index, ch) in text.chars().enumerate() {
            let code = self.code_point(index, ch)?;
            units.push(format!("{code:0width$b}"));
        }

        log::trace!("Decomposed {} chars into {}-bit units.", units.len(), self.width);
        Ok(units)
    }

    /// Joins binary units back into text, one [`char`] per unit.
    ///
    /// This is equivalent to using [`Codec::compose_into`] with a [`String`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUnit`] if a unit does not consist of exactly
    /// as many `0` and `1` characters as the width, or
    /// [`Error::InvalidCodePoint`] if a unit's value is not a [`char`].
    pub fn compose<I>(self, units: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let units = units.into_iter();
        let mut text = String::with_capacity(units.size_hint().0);

        self.compose_into(&mut text, units)?;
        Ok(text)
    }

    /// Joins binary units back into text, writing the chars to a buffer.
    ///
    /// If an error is returned, the chars composed up to that point have
    /// already been written.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] in the same cases as [`Codec::compose`] or if `writer`
    /// returns an error.
    pub fn compose_into<W, I>(self, mut writer: W, units: I) -> Result<()>
    where
        W: fmt::Write,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut count = 0usize;
        for (index, unit) in units.into_iter().enumerate() {
            let value = self.parse_unit(index, unit.as_ref())?;
            writer.write_char(to_char(index, value)?)?;
            count += 1;
        }

        log::trace!("Composed {count} chars from {}-bit units.", self.width);
        Ok(())
    }

    /// Converts `text` into a flat sequence of bits.
    ///
    /// The result is the concatenation of the units [`Codec::decompose`] would
    /// return, with `true` standing in for `1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] under the same conditions as
    /// [`Codec::decompose`].
    pub fn encode_bits(self, text: &str) -> Result<Vec<bool>> {
        let mut bits = Vec::with_capacity(text.len().saturating_mul(self.width.digits()));

        for (index, ch) in text.chars().enumerate() {
            let code = self.code_point(index, ch)?;
            bits.extend(
                (0..self.width.bits())
                    .rev()
                    .map(|shift| (code >> shift) & 1 == 1),
            );
        }

        Ok(bits)
    }

    /// Converts a flat sequence of bits back into text.
    ///
    /// This is the strict inverse of [`Codec::encode_bits`]. For a receiver
    /// that needs to tolerate noise, use [`UnitAssembler`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrailingBits`] if the bit count is not a multiple of
    /// the width, or [`Error::InvalidCodePoint`] if a word is not a [`char`].
    ///
    /// [`UnitAssembler`]: crate::UnitAssembler
    pub fn decode_bits(self, bits: &[bool]) -> Result<String> {
        let words = bits.chunks_exact(self.width.digits());

        let rest = words.remainder().len();
        if rest != 0 {
            log::debug!("Bit stream has {rest} bits past the last {}-bit word.", self.width);
            return Err(Error::TrailingBits { count: rest });
        }

        let mut text = String::with_capacity(words.len());
        for (index, word) in words.enumerate() {
            text.push(to_char(index, word_value(word))?);
        }

        Ok(text)
    }

    /// Gets the code point of `ch`, checking that it fits into the width.
    fn code_point(self, index: usize, ch: char) -> Result<u32> {
        let code = u32::from(ch);
        if self.width.fits(code) {
            Ok(code)
        } else {
            log::debug!("Char {ch:?} at {index} overflows {}-bit units.", self.width);
            Err(Error::EncodingOverflow {
                index,
                ch,
                width: self.width.bits(),
            })
        }
    }

    /// Parses a single unit into its numeric value.
    ///
    /// Digits are checked before the length, so a unit with both defects
    /// reports the invalid digit.
    fn parse_unit(self, index: usize, unit: &str) -> Result<u32> {
        let mut value = 0u32;
        let mut len = 0usize;

        for (offset, ch) in unit.chars().enumerate() {
            let digit = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(malformed(index, MalformedKind::InvalidDigit { ch, offset })),
            };

            // overlong units shift digits out of the top; they get rejected below
            value = (value << 1) | digit;
            len = offset + 1;
        }

        if len != self.width.digits() {
            let kind = MalformedKind::WrongWidth {
                len,
                expected: self.width.bits(),
            };
            return Err(malformed(index, kind));
        }

        Ok(value)
    }
}

/// Splits `text` into 8-bit binary units.
///
/// Equivalent to [`Codec::decompose`] on the default codec.
///
/// # Errors
///
/// Returns [`Error::EncodingOverflow`] if `text` contains a char above
/// `U+00FF`.
///
/// # Examples
///
/// ```
/// let units = bin_text::decompose("AB").unwrap();
/// assert_eq!(units, ["01000001", "01000010"]);
/// ```
pub fn decompose(text: &str) -> Result<Vec<String>> {
    Codec::default().decompose(text)
}

/// Joins 8-bit binary units back into text.
///
/// Equivalent to [`Codec::compose`] on the default codec.
///
/// # Errors
///
/// Returns [`Error::MalformedUnit`] if a unit is not exactly 8 binary digits.
///
/// # Examples
///
/// ```
/// let text = bin_text::compose(["01000001", "01000010"]).unwrap();
/// assert_eq!(text, "AB");
/// ```
pub fn compose<I>(units: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Codec::default().compose(units)
}

/// Folds a word of bits, most significant first, into its value.
///
/// Words longer than 32 bits only keep their low 32 bits.
pub(crate) fn word_value(word: &[bool]) -> u32 {
    word.iter()
        .fold(0u32, |value, &bit| (value << 1) | u32::from(bit))
}

/// Converts a unit value to a [`char`].
pub(crate) fn to_char(index: usize, value: u32) -> Result<char> {
    char::from_u32(value).ok_or_else(|| {
        log::debug!("Unit {index} holds {value:#X}, which is not a char.");
        Error::InvalidCodePoint { index, value }
    })
}

fn malformed(index: usize, kind: MalformedKind) -> Error {
    log::debug!("Rejected unit {index}: {kind}");
    Error::MalformedUnit { index, kind }
}
