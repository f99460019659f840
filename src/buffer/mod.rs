//! The buffer handle.
//!
//! - [`DirectBuffer`] - Bounds-checked get/put over an owned or borrowed region

mod accessors;
mod direct;
mod region;

pub use direct::DirectBuffer;
