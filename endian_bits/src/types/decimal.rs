use crate::decimal::Decimal;
use crate::error::ErrorKind;
use crate::native_bytes::NativeBytes;

// The four words travel as one 128-bit integer, so reversing the native bytes
// reverses the word order as well and the layout is the same on every host.
impl NativeBytes for Decimal {
    type Bytes = [u8; 16];
    const WIDTH: usize = 16;
    const NAME: &'static str = "decimal";

    fn to_ne_bytes(self) -> Self::Bytes {
        self.to_packed().to_ne_bytes()
    }

    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self, ErrorKind> {
        Decimal::from_packed(u128::from_ne_bytes(bytes))
    }
}
