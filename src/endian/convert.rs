//! Fixed-width byte reordering.
//!
//! Conversion is a pure reinterpretation of the value's bit pattern: a
//! converted value, stored in native order, has its bytes laid out in the
//! requested order. Floats are reordered through their bit representation,
//! never numerically.

use std::mem::size_of;

use super::ByteOrder;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value with a defined byte order.
///
/// Implemented for the 16, 32 and 64-bit integers (signed and unsigned) and
/// for `f32`/`f64`. Single bytes have no byte order and are not covered.
pub trait Endian: Copy + sealed::Sealed {
    /// Width of the value in bytes.
    const WIDTH: usize;

    /// Raw byte representation, `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Reverses the byte order of the value's bit pattern.
    fn swap_bytes(self) -> Self;

    /// Reinterprets native-order bytes as a value.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// Returns the value's bytes in native order.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Normalizes a native-order value to/from `order`.
    ///
    /// The identity when `order` is the host's order; a byte reversal
    /// otherwise. Applying the same order twice returns the original value.
    #[inline]
    fn apply(self, order: ByteOrder) -> Self {
        if order.is_native() {
            self
        } else {
            self.swap_bytes()
        }
    }
}

macro_rules! impl_endian_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Endian for $ty {
                const WIDTH: usize = size_of::<$ty>();
                type Bytes = [u8; size_of::<$ty>()];

                #[inline]
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }
            }
        )*
    };
}

macro_rules! impl_endian_float {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Endian for $ty {
                const WIDTH: usize = size_of::<$ty>();
                type Bytes = [u8; size_of::<$ty>()];

                #[inline]
                fn swap_bytes(self) -> Self {
                    <$ty>::from_bits(self.to_bits().swap_bytes())
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_bits(<$bits>::from_ne_bytes(bytes))
                }

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    self.to_bits().to_ne_bytes()
                }
            }
        )*
    };
}

impl_endian_int!(i16, u16, i32, u32, i64, u64);
impl_endian_float!(f32 => u32, f64 => u64);

macro_rules! apply_fn {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Normalizes a native-order `", stringify!($ty), "` to/from `order`.")]
            #[inline]
            pub fn $name(order: ByteOrder, value: $ty) -> $ty {
                value.apply(order)
            }
        )*
    };
}

apply_fn! {
    apply_i16 => i16,
    apply_u16 => u16,
    apply_i32 => i32,
    apply_u32 => u32,
    apply_i64 => i64,
    apply_u64 => u64,
    apply_f32 => f32,
    apply_f64 => f64,
}
