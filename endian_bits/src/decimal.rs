//! A 128-bit decimal floating point number.

use num::{Integer, Zero};

use crate::error::{Error, ErrorKind};

const SIGN_MASK: u32 = 0x8000_0000;
const SCALE_MASK: u32 = 0x00FF_0000;
const SCALE_SHIFT: u32 = 16;
const MAX_MAGNITUDE: u128 = (1 << 96) - 1;

/// A decimal number made of a 96-bit magnitude, a sign, and a power of ten
/// scale.
///
/// The value is `(-1)^sign * magnitude / 10^scale`. It is stored as four
/// 32-bit words:
///
/// | word    | contents                                        |
/// |---------|-------------------------------------------------|
/// | `lo`    | bits 0..32 of the magnitude                     |
/// | `mid`   | bits 32..64 of the magnitude                    |
/// | `hi`    | bits 64..96 of the magnitude                    |
/// | `flags` | scale in bits 16..24, sign in bit 31, rest zero |
///
/// Equality compares the words, so `1.0` and `1.00` are different values, as
/// are `0` and `-0`. That is what a byte-exact round trip needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    lo: u32,
    mid: u32,
    hi: u32,
    flags: u32,
}

impl Decimal {
    /// Zero with a scale of zero.
    pub const ZERO: Self = Self { lo: 0, mid: 0, hi: 0, flags: 0 };

    /// The largest supported scale.
    pub const MAX_SCALE: u32 = 28;

    /// Create the decimal `mantissa / 10^scale`.
    ///
    /// The magnitude of the mantissa must fit into 96 bits and the scale must
    /// not exceed [`Decimal::MAX_SCALE`].
    ///
    /// ```
    /// use endian_bits::Decimal;
    ///
    /// let price = Decimal::new(-1999, 2).unwrap();
    /// assert_eq!(price.to_string(), "-19.99");
    /// ```
    pub fn new(mantissa: i128, scale: u32) -> Result<Self, Error> {
        let magnitude = mantissa.unsigned_abs();
        if scale > Self::MAX_SCALE || magnitude > MAX_MAGNITUDE {
            #[cfg(feature = "tracing")]
            tracing::debug!(scale, "rejected decimal mantissa or scale: {}", ErrorKind::InvalidDecimal);
            return Err(Error::from(ErrorKind::InvalidDecimal).enclose("decimal"));
        }
        Ok(Self::from_parts(magnitude, scale, mantissa < 0))
    }

    /// Create a decimal from its `[lo, mid, hi, flags]` words.
    pub fn from_bits(bits: [u32; 4]) -> Result<Self, Error> {
        let [lo, mid, hi, flags] = bits;
        Self::from_words(lo, mid, hi, flags).map_err(|kind| Error::from(kind).enclose("decimal"))
    }

    /// The `[lo, mid, hi, flags]` words of the decimal.
    pub const fn to_bits(&self) -> [u32; 4] {
        [self.lo, self.mid, self.hi, self.flags]
    }

    /// The signed integer the decimal is made of before scaling.
    pub fn mantissa(&self) -> i128 {
        let magnitude = self.magnitude() as i128;
        if self.is_sign_negative() { -magnitude } else { magnitude }
    }

    /// The power of ten the mantissa is divided by.
    pub const fn scale(&self) -> u32 {
        (self.flags & SCALE_MASK) >> SCALE_SHIFT
    }

    /// Returns true if the sign bit is set, including for negative zero.
    pub const fn is_sign_negative(&self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    fn magnitude(&self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    fn from_parts(magnitude: u128, scale: u32, negative: bool) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        Self {
            lo: magnitude as u32,
            mid: (magnitude >> 32) as u32,
            hi: (magnitude >> 64) as u32,
            flags: sign | scale << SCALE_SHIFT,
        }
    }

    fn from_words(lo: u32, mid: u32, hi: u32, flags: u32) -> Result<Self, ErrorKind> {
        let reserved = flags & !(SIGN_MASK | SCALE_MASK);
        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if reserved != 0 || scale > Self::MAX_SCALE {
            #[cfg(feature = "tracing")]
            tracing::debug!(flags, "rejected decimal flags: {}", ErrorKind::InvalidDecimal);
            return Err(ErrorKind::InvalidDecimal);
        }
        Ok(Self { lo, mid, hi, flags })
    }

    /// The words packed into one integer, `flags` being the most significant.
    pub(crate) fn to_packed(self) -> u128 {
        (self.flags as u128) << 96 | self.magnitude()
    }

    pub(crate) fn from_packed(packed: u128) -> Result<Self, ErrorKind> {
        Self::from_words(packed as u32, (packed >> 32) as u32, (packed >> 64) as u32, (packed >> 96) as u32)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from_parts(value.unsigned_abs() as u128, 0, value < 0)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::from_parts(value as u128, 0, false)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_parts(value.unsigned_abs() as u128, 0, value < 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::from_parts(value as u128, 0, false)
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let magnitude = self.magnitude();
        let scale = self.scale();
        if self.is_sign_negative() && !magnitude.is_zero() {
            write!(f, "-")?;
        }
        let (integral, fractional) = magnitude.div_rem(&10u128.pow(scale));
        write!(f, "{integral}")?;
        if scale > 0 {
            write!(f, ".{fractional:0width$}", width = scale as usize)?;
        }
        Ok(())
    }
}
