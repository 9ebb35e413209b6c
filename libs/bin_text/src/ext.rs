use crate::codec::Codec;
use crate::error::Result;
use crate::width::Width;

/// Adds binary decomposition as methods on [`str`].
///
/// # Examples
///
/// ```
/// use bin_text::{BinaryStrExt as _, Width};
///
/// assert_eq!(
///     "aZ".decompose_binary_with(Width::ASCII).unwrap(),
///     ["1100001", "1011010"]
/// );
/// ```
pub trait BinaryStrExt {
    /// Splits the string into 8-bit binary units.
    ///
    /// # Errors
    ///
    /// See [`Codec::decompose`].
    fn decompose_binary(&self) -> Result<Vec<String>>;

    /// Splits the string into binary units of the given width.
    ///
    /// # Errors
    ///
    /// See [`Codec::decompose`].
    fn decompose_binary_with(&self, width: Width) -> Result<Vec<String>>;
}

impl BinaryStrExt for str {
    fn decompose_binary(&self) -> Result<Vec<String>> {
        Codec::default().decompose(self)
    }

    fn decompose_binary_with(&self, width: Width) -> Result<Vec<String>> {
        Codec::new(width).decompose(self)
    }
}
