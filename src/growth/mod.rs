//! Growth strategies invoked when an access overflows the bound region.
//!
//! - [`GrowthStrategy`] - Supplies a larger region, or refuses
//! - [`PowerOfTwoGrowth`] - Doubling policy with an upper bound
//!
//! Any `FnMut(usize, usize) -> Option<BytesMut>` closure is a strategy.
//! [`DirectBuffer`](crate::DirectBuffer) only accepts `Send` strategies.

mod policy;

use bytes::BytesMut;

pub use policy::PowerOfTwoGrowth;

/// Supplies a replacement region when an access exceeds capacity.
///
/// `grow` receives the current capacity and the requested limit. Returning
/// `None` means the request cannot be satisfied; the buffer then fails the
/// access with [`BufferError::OutOfRange`] and is left untouched.
///
/// The returned region may be larger than requested. The buffer adopts its
/// full length as the new capacity after copying the previously committed
/// bytes to its start.
///
/// [`BufferError::OutOfRange`]: crate::BufferError::OutOfRange
pub trait GrowthStrategy {
    /// Returns a region of at least `requested` bytes, or `None`.
    fn grow(&mut self, current: usize, requested: usize) -> Option<BytesMut>;
}

impl<F> GrowthStrategy for F
where
    F: FnMut(usize, usize) -> Option<BytesMut>,
{
    #[inline]
    fn grow(&mut self, current: usize, requested: usize) -> Option<BytesMut> {
        self(current, requested)
    }
}
