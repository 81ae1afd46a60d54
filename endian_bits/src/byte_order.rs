//! The order of bytes within multi-byte values.

use crate::converter::{BIG_ENDIAN, EndianConverter, LITTLE_ENDIAN};

/// The order in which the bytes of a multi-byte value are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteOrder {
    /// The least significant byte comes first.
    LittleEndian,
    /// The most significant byte comes first.
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the machine the code is compiled for.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") { ByteOrder::LittleEndian } else { ByteOrder::BigEndian }
    }

    /// Returns true if this is the byte order of the host machine.
    pub const fn is_native(self) -> bool {
        self as u8 == Self::native() as u8
    }

    /// The opposite byte order.
    pub const fn reverse(self) -> Self {
        match self {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        }
    }

    /// The converter that produces and consumes bytes in this order.
    pub fn converter(self) -> &'static EndianConverter {
        match self {
            ByteOrder::LittleEndian => &LITTLE_ENDIAN,
            ByteOrder::BigEndian => &BIG_ENDIAN,
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "little endian"),
            ByteOrder::BigEndian => write!(f, "big endian"),
        }
    }
}
