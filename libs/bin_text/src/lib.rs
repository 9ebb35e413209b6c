//! Converts text into fixed-width binary units and back.
//!
//! Every [`char`] maps to exactly one unit: a string of `0` and `1` holding
//! the char's code point in base 2, zero-padded to the configured [`Width`].
//! The default width is 8 bits.
//!
//! [`decompose`] produces the units and [`compose`] reverses it. For texts
//! whose code points all fit into the width, the two are exact inverses. Input
//! that cannot be represented is rejected rather than truncated.
//!
//! ```
//! let units = bin_text::decompose("AB")?;
//! assert_eq!(units, ["01000001", "01000010"]);
//!
//! let text = bin_text::compose(&units)?;
//! assert_eq!(text, "AB");
//! # Ok::<(), bin_text::Error>(())
//! ```
//!
//! Other widths are configured through a [`Codec`], which also offers a flat
//! bit form of the units. Bits arriving one at a time can be turned back into
//! text with a [`UnitAssembler`].

// for benchmarks
#[cfg(test)]
use criterion as _;

mod assembler;
mod codec;
mod error;
mod ext;
mod width;


pub use assembler::UnitAssembler;
pub use codec::{Codec, compose, decompose};
pub use error::{Error, MalformedKind, Result};
pub use ext::BinaryStrExt;
pub use width::Width;
