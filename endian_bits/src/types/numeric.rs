use crate::error::ErrorKind;
use crate::native_bytes::NativeBytes;

macro_rules! impl_native_bytes {
    ($type:ty, $name:literal) => {
        impl NativeBytes for $type {
            type Bytes = [u8; size_of::<$type>()];
            const WIDTH: usize = size_of::<$type>();
            const NAME: &'static str = $name;

            fn to_ne_bytes(self) -> Self::Bytes {
                <$type>::to_ne_bytes(self)
            }

            fn from_ne_bytes(bytes: Self::Bytes) -> Result<Self, ErrorKind> {
                Ok(<$type>::from_ne_bytes(bytes))
            }
        }
    };
}

impl_native_bytes!(u16, "u16");
impl_native_bytes!(u32, "u32");
impl_native_bytes!(u64, "u64");
impl_native_bytes!(i16, "i16");
impl_native_bytes!(i32, "i32");
impl_native_bytes!(i64, "i64");
impl_native_bytes!(f32, "f32");
impl_native_bytes!(f64, "f64");
