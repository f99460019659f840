//! directbuf
//!
//! Zero-copy, bounds-checked binary buffer access for Rust.
//!
//! `directbuf` reads and writes fixed-width, endian-tagged primitives
//! directly over a contiguous byte region. It is the runtime primitive
//! beneath fixed-layout binary message codecs (SBE-style market data
//! encoding):
//!
//! - typed get/put for 8/16/32/64-bit integers and 32/64-bit floats
//! - explicit little-endian or big-endian layout per access
//! - one central bounds gate, with optional growth on overflow
//! - owned or borrowed backing memory, rebindable at any time
//!
//! The crate intentionally:
//! - does NOT parse or validate message schemas
//! - does NOT define a framing or header format
//! - does NOT synchronize access across threads
//!
//! It only does one thing: **offset + width + byte order → bytes**
//!
//! # Fixed region
//!
//! ```
//! use bytes::BytesMut;
//! use directbuf::{BufferError, DirectBuffer};
//!
//! fn main() -> Result<(), BufferError> {
//!     let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(16));
//!
//!     buffer.put_u16_be(0, 0xCAFE)?;
//!     buffer.put_f64_le(8, 101.25)?;
//!
//!     assert_eq!(buffer.get_u16_be(0)?, 0xCAFE);
//!     assert_eq!(buffer.get_f64_le(8)?, 101.25);
//!     assert!(buffer.put_u8(16, 0).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Borrowed memory with growth
//!
//! ```
//! use bytes::BytesMut;
//! use directbuf::{BufferError, DirectBuffer, PowerOfTwoGrowth};
//!
//! fn main() -> Result<(), BufferError> {
//!     let mut scratch = [0u8; 8];
//!     let mut buffer = DirectBuffer::from_slice(&mut scratch);
//!     buffer.set_growth_strategy(PowerOfTwoGrowth::new(1024))?;
//!
//!     buffer.put_i64_le(0, -1)?;
//!     buffer.put_i64_le(8, 2)?; // grows into an owned 16-byte region
//!
//!     assert!(buffer.is_owned());
//!     assert_eq!(buffer.capacity(), 16);
//!     assert_eq!(buffer.get_i64_le(0)?, -1);
//!     Ok(())
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod endian;
mod error;
mod growth;

//
// Public surface
//

pub use buffer::DirectBuffer;
pub use config::{BufferConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_CAPACITY};
pub use endian::{
    ByteOrder, Endian, apply_f32, apply_f64, apply_i16, apply_i32, apply_i64, apply_u16,
    apply_u32, apply_u64,
};
pub use error::BufferError;
pub use growth::{GrowthStrategy, PowerOfTwoGrowth};
