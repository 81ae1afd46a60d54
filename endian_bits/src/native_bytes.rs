//! Conversion between values and their bytes in the host's byte order.

use crate::error::ErrorKind;

/// The type can be converted to and from bytes in the host's native byte
/// order.
///
/// This is the building block of [`crate::EndianConverter`]: the converter
/// takes the native representation and reverses it when the requested byte
/// order differs from the host's. The trait is implemented for [`bool`],
/// [`crate::CodeUnit`], the 16, 32 and 64 bit integers, [`f32`], [`f64`] and
/// [`crate::Decimal`].
pub trait NativeBytes: Sized {
    /// A byte array exactly [`NativeBytes::WIDTH`] long.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// The number of bytes the value occupies.
    const WIDTH: usize;

    /// The name reported in errors.
    const NAME: &'static str;

    /// Return the value's bytes in native byte order.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Reconstruct a value from its bytes in native byte order.
    ///
    /// Fails only for types where not every bit pattern is a valid value.
    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self, ErrorKind>;
}
