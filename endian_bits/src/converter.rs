use crate::byte_order::ByteOrder;
use crate::code_unit::CodeUnit;
use crate::convert::{check_range, extract, extract_reversed};
use crate::decimal::Decimal;
use crate::error::{Error, ErrorKind};
use crate::native_bytes::NativeBytes;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

pub(crate) static LITTLE_ENDIAN: EndianConverter = EndianConverter::new(ByteOrder::LittleEndian);
pub(crate) static BIG_ENDIAN: EndianConverter = EndianConverter::new(ByteOrder::BigEndian);

const STRING_NAME: &str = "string";

/// Converts values to and from bytes in one particular byte order.
///
/// Converters hold no state besides their byte order. There is one for each
/// order, obtained from [`little_endian`], [`big_endian`], [`select`], or
/// [`ByteOrder::converter`].
///
/// ```
/// use endian_bits::{big_endian, little_endian};
///
/// assert_eq!(big_endian().encode(0x01020304_i32), [0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(little_endian().encode(0x01020304_i32), [0x04, 0x03, 0x02, 0x01]);
/// assert_eq!(big_endian().decode_i32(&[0xFF, 0x01, 0x02, 0x03, 0x04], 1), Ok(0x01020304));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndianConverter {
    byte_order: ByteOrder,
}

macro_rules! decode_as {
    ($func:ident, $type:ty) => {
        #[doc = concat!("Decode a [`", stringify!($type), "`] from the bytes starting at `start`.")]
        ///
        /// See [`EndianConverter::decode`].
        pub fn $func(&self, bytes: &[u8], start: usize) -> Result<$type, Error> {
            self.decode(bytes, start)
        }
    };
}

impl EndianConverter {
    const fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }

    /// The byte order of the produced and consumed bytes.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn needs_reversal(&self) -> bool {
        !self.byte_order.is_native()
    }

    /// Return the bytes of `value` in this converter's byte order.
    ///
    /// The result is exactly [`NativeBytes::WIDTH`] bytes long.
    pub fn encode<Value: NativeBytes>(&self, value: Value) -> Value::Bytes {
        let mut bytes = value.to_ne_bytes();
        if self.needs_reversal() {
            bytes.as_mut().reverse();
        }
        bytes
    }

    /// Decode a value from the bytes starting at `start`.
    ///
    /// ## Errors
    ///
    /// - [`ErrorKind::InvalidStartIndex`] if `start` is not inside `bytes`,
    /// - [`ErrorKind::InsufficientBytes`] if `bytes` ends before the value does,
    /// - [`ErrorKind::InvalidDecimal`] if a [`Decimal`]'s flags are malformed.
    pub fn decode<Value: NativeBytes>(&self, bytes: &[u8], start: usize) -> Result<Value, Error> {
        let raw: Result<Value::Bytes, ErrorKind> =
            if self.needs_reversal() { extract_reversed(bytes, start) } else { extract(bytes, start) };
        raw.and_then(Value::from_ne_bytes).map_err(|kind| Error::from(kind).enclose(Value::NAME))
    }

    decode_as!(decode_bool, bool);
    decode_as!(decode_code_unit, CodeUnit);
    decode_as!(decode_i16, i16);
    decode_as!(decode_u16, u16);
    decode_as!(decode_i32, i32);
    decode_as!(decode_u32, u32);
    decode_as!(decode_i64, i64);
    decode_as!(decode_u64, u64);
    decode_as!(decode_f32, f32);
    decode_as!(decode_f64, f64);
    decode_as!(decode_decimal, Decimal);

    /// The number of bytes `value` occupies when encoded as UTF-16.
    pub fn encode_utf16_len(value: &str) -> usize {
        value.encode_utf16().count() * CodeUnit::WIDTH
    }

    /// Encode `value` as UTF-16 with every code unit in this converter's byte
    /// order.
    ///
    /// Code units are never reordered, only the two bytes within each of them.
    #[cfg(feature = "alloc")]
    pub fn encode_str(&self, value: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::encode_utf16_len(value));
        for unit in value.encode_utf16() {
            bytes.extend_from_slice(&self.encode(CodeUnit(unit)));
        }
        bytes
    }

    /// Decode `count` bytes of UTF-16 text starting at `start`.
    ///
    /// The returned iterator yields the characters of the text. Unpaired
    /// surrogates are replaced by [`char::REPLACEMENT_CHARACTER`].
    ///
    /// ## Errors
    ///
    /// - [`ErrorKind::OddByteCount`] if `count` is odd,
    /// - [`ErrorKind::InvalidStartIndex`] or [`ErrorKind::InsufficientBytes`]
    ///   if the range is not inside `bytes`.
    pub fn decode_utf16<'bytes>(
        &self,
        bytes: &'bytes [u8],
        start: usize,
        count: usize,
    ) -> Result<DecodeUtf16Chars<'bytes>, Error> {
        if count % CodeUnit::WIDTH != 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(start, count, "rejected UTF-16 byte count: {}", ErrorKind::OddByteCount);
            return Err(Error::from(ErrorKind::OddByteCount).enclose(STRING_NAME));
        }
        check_range(bytes, start, count).map_err(|kind| Error::from(kind).enclose(STRING_NAME))?;
        let chunks = bytes[start..(start + count)].chunks_exact(CodeUnit::WIDTH);
        let units = CodeUnits { chunks, converter: *self };
        Ok(DecodeUtf16Chars { chars: char::decode_utf16(units) })
    }

    /// Decode `count` bytes of UTF-16 text starting at `start` into a string.
    ///
    /// See [`EndianConverter::decode_utf16`].
    #[cfg(feature = "alloc")]
    pub fn decode_string(&self, bytes: &[u8], start: usize, count: usize) -> Result<String, Error> {
        self.decode_utf16(bytes, start, count).map(Iterator::collect)
    }
}

/// Iterator over the characters of UTF-16 text in a particular byte order.
///
/// Returned by [`EndianConverter::decode_utf16`].
#[derive(Debug, Clone)]
pub struct DecodeUtf16Chars<'bytes> {
    chars: core::char::DecodeUtf16<CodeUnits<'bytes>>,
}

#[derive(Debug, Clone)]
struct CodeUnits<'bytes> {
    chunks: core::slice::ChunksExact<'bytes, u8>,
    converter: EndianConverter,
}

impl Iterator for CodeUnits<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        self.converter.decode::<CodeUnit>(chunk, 0).ok().map(u16::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl Iterator for DecodeUtf16Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next().map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// The converter for the little endian byte order.
pub fn little_endian() -> &'static EndianConverter {
    &LITTLE_ENDIAN
}

/// The converter for the big endian byte order.
pub fn big_endian() -> &'static EndianConverter {
    &BIG_ENDIAN
}

/// The converter for `byte_order`.
pub fn select(byte_order: ByteOrder) -> &'static EndianConverter {
    byte_order.converter()
}

/// The converter for the host's own byte order.
pub fn native() -> &'static EndianConverter {
    select(ByteOrder::native())
}
