//! Byte order normalization.
//!
//! - [`ByteOrder`] - Requested wire byte order
//! - [`Endian`] - Fixed-width values whose bytes can be reordered
//! - `apply_*` - Per-width conversion functions

mod convert;
mod order;

pub use convert::{
    Endian, apply_f32, apply_f64, apply_i16, apply_i32, apply_i64, apply_u16, apply_u32,
    apply_u64,
};
pub use order::ByteOrder;
