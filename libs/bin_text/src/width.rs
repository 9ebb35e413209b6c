use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The amount of binary digits in each unit.
///
/// Valid widths are `1..=32`. Widths of 21 and more can represent every
/// [`char`]; smaller widths restrict the accepted characters to those whose
/// code point fits.
///
/// Deserializes from a plain integer, rejecting out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Width(u32);

impl Width {
    /// 7 bits, covering ASCII.
    pub const ASCII: Self = Self(7);
    /// 8 bits, covering Latin-1. This is the default.
    pub const BYTE: Self = Self(8);
    /// 16 bits, covering the Basic Multilingual Plane.
    pub const UTF16: Self = Self(16);
    /// 21 bits, the smallest width covering every [`char`].
    pub const UNICODE: Self = Self(21);

    /// Largest supported width.
    pub const MAX_BITS: u32 = u32::BITS;

    /// Creates a width of `bits` binary digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `bits` is 0 or larger than
    /// [`Width::MAX_BITS`].
    pub const fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(Error::InvalidWidth(bits));
        }

        Ok(Self(bits))
    }

    /// The amount of binary digits per unit.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The amount of binary digits per unit, as a [`usize`].
    #[must_use]
    pub const fn digits(self) -> usize {
        self.0 as usize
    }

    /// The largest value a unit of this width can hold.
    #[must_use]
    pub const fn max_value(self) -> u32 {
        u32::MAX >> (Self::MAX_BITS - self.0)
    }

    /// Whether `value` can be represented in this width without loss.
    #[must_use]
    pub const fn fits(self, value: u32) -> bool {
        value <= self.max_value()
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::BYTE
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Width> for u32 {
    fn from(value: Width) -> Self {
        value.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
