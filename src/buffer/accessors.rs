//! Named accessors for every width, signedness and byte order.
//!
//! Each accessor forwards to [`DirectBuffer::get`] / [`DirectBuffer::put`],
//! so all of them share one bounds and growth path.

use super::DirectBuffer;
use crate::endian::ByteOrder;
use crate::error::BufferError;

macro_rules! accessors {
    ($($ty:ty => $get_le:ident, $put_le:ident, $get_be:ident, $put_be:ident;)*) => {
        impl DirectBuffer<'_> {
            $(
                #[doc = concat!("Reads a little-endian `", stringify!($ty), "` at `index`.")]
                #[inline]
                pub fn $get_le(&mut self, index: usize) -> Result<$ty, BufferError> {
                    self.get(index, ByteOrder::LittleEndian)
                }

                #[doc = concat!("Writes a little-endian `", stringify!($ty), "` at `index`.")]
                #[inline]
                pub fn $put_le(&mut self, index: usize, value: $ty) -> Result<(), BufferError> {
                    self.put(index, value, ByteOrder::LittleEndian)
                }

                #[doc = concat!("Reads a big-endian `", stringify!($ty), "` at `index`.")]
                #[inline]
                pub fn $get_be(&mut self, index: usize) -> Result<$ty, BufferError> {
                    self.get(index, ByteOrder::BigEndian)
                }

                #[doc = concat!("Writes a big-endian `", stringify!($ty), "` at `index`.")]
                #[inline]
                pub fn $put_be(&mut self, index: usize, value: $ty) -> Result<(), BufferError> {
                    self.put(index, value, ByteOrder::BigEndian)
                }
            )*
        }
    };
}

accessors! {
    i16 => get_i16_le, put_i16_le, get_i16_be, put_i16_be;
    u16 => get_u16_le, put_u16_le, get_u16_be, put_u16_be;
    i32 => get_i32_le, put_i32_le, get_i32_be, put_i32_be;
    u32 => get_u32_le, put_u32_le, get_u32_be, put_u32_be;
    i64 => get_i64_le, put_i64_le, get_i64_be, put_i64_be;
    u64 => get_u64_le, put_u64_le, get_u64_be, put_u64_be;
    f32 => get_f32_le, put_f32_le, get_f32_be, put_f32_be;
    f64 => get_f64_le, put_f64_le, get_f64_be, put_f64_be;
}
