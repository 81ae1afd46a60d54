use crate::error::ErrorKind;
use crate::native_bytes::NativeBytes;

impl NativeBytes for bool {
    type Bytes = [u8; 1];
    const WIDTH: usize = 1;
    const NAME: &'static str = "bool";

    fn to_ne_bytes(self) -> Self::Bytes {
        [self as u8]
    }

    // Any non-zero byte reads as true.
    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self, ErrorKind> {
        Ok(bytes[0] != 0)
    }
}
