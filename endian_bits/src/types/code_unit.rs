use crate::code_unit::CodeUnit;
use crate::error::ErrorKind;
use crate::native_bytes::NativeBytes;

impl NativeBytes for CodeUnit {
    type Bytes = [u8; 2];
    const WIDTH: usize = 2;
    const NAME: &'static str = "char";

    fn to_ne_bytes(self) -> Self::Bytes {
        self.0.to_ne_bytes()
    }

    fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self, ErrorKind> {
        Ok(CodeUnit(u16::from_ne_bytes(bytes)))
    }
}
