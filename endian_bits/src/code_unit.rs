//! A single 16-bit unit of UTF-16 text.

/// One UTF-16 code unit.
///
/// Characters of the Basic Multilingual Plane occupy a single code unit,
/// other characters occupy a surrogate pair of two code units. Encoding a
/// code unit always produces exactly two bytes.
///
/// ```
/// use endian_bits::{CodeUnit, big_endian};
///
/// let unit = CodeUnit::from_char('A').unwrap();
/// assert_eq!(big_endian().encode(unit), [0x00, 0x41]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CodeUnit(pub u16);

impl CodeUnit {
    /// The code unit of a character in the Basic Multilingual Plane.
    ///
    /// Returns [`None`] for characters that need a surrogate pair.
    pub fn from_char(value: char) -> Option<Self> {
        let mut units = [0u16; 2];
        match value.encode_utf16(&mut units) {
            [unit] => Some(Self(*unit)),
            _ => None,
        }
    }

    /// The character this code unit stands for on its own.
    ///
    /// Returns [`None`] for surrogates, which only form a character as a pair.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0 as u32)
    }

    /// Returns true for both high and low surrogates.
    pub fn is_surrogate(self) -> bool {
        (0xD800..=0xDFFF).contains(&self.0)
    }
}

impl From<u16> for CodeUnit {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<CodeUnit> for u16 {
    fn from(value: CodeUnit) -> Self {
        value.0
    }
}
