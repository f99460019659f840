//! The DirectBuffer handle.
//!
//! A [`DirectBuffer`] is bound to exactly one region at a time and gates
//! every access through [`DirectBuffer::check_limit`]:
//!
//! - `limit <= capacity` - the access proceeds
//! - `limit > capacity`, no growth strategy - `OutOfRange`
//! - `limit > capacity`, growth strategy - the strategy supplies a larger
//!   region, committed bytes are copied over and the buffer rebinds to it;
//!   if it refuses, `OutOfRange` and nothing changes
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use directbuf::{ByteOrder, DirectBuffer};
//!
//! let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(16));
//!
//! buffer.put_i64_le(1, i64::MAX)?;
//! assert_eq!(buffer.get_i64_le(1)?, i64::MAX);
//!
//! buffer.put(8, 0x0102_u16, ByteOrder::BigEndian)?;
//! assert_eq!(&buffer.as_slice()?[8..10], &[0x01, 0x02]);
//! # Ok::<(), directbuf::BufferError>(())
//! ```

use std::fmt;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use bytes::BytesMut;
use tracing::{debug, trace};

use super::region::Backing;
use crate::config::BufferConfig;
use crate::endian::{ByteOrder, Endian};
use crate::error::BufferError;
use crate::growth::{GrowthStrategy, PowerOfTwoGrowth};

/// A bounds-checked accessor over a contiguous byte region.
///
/// # Binding modes
///
/// - **Owned**: a [`BytesMut`] moved into the buffer. Its storage stays put
///   for as long as the buffer holds it and is released on rewrap or
///   [`dispose`](Self::dispose).
/// - **Borrowed**: a `&'a mut [u8]`, or a raw pointer and length via the
///   `unsafe` constructors. The caller keeps ownership; the buffer never
///   releases it.
///
/// # Lifecycle
///
/// `Unbound -> Bound` via a wrap, `Bound -> Bound` via rewrap or growth,
/// `Bound -> Disposed` via [`dispose`](Self::dispose) or drop. `Disposed` is
/// terminal: further wraps and accesses fail with [`BufferError::Disposed`].
///
/// # Concurrency
///
/// Not synchronized, but `Send`: growth strategies must be `Send`, so a
/// buffer can move to another thread or sit behind a `Mutex`. Growth runs
/// synchronously inside the call that overflowed.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use directbuf::DirectBuffer;
///
/// let mut buffer = DirectBuffer::with_growth(BytesMut::zeroed(8), |_current: usize, requested: usize| {
///     Some(BytesMut::zeroed(requested.next_power_of_two()))
/// });
///
/// buffer.put_u64_le(0, 1)?;
/// buffer.put_u64_le(8, 2)?;
/// assert_eq!(buffer.capacity(), 16);
/// assert_eq!(buffer.get_u64_le(0)?, 1);
/// # Ok::<(), directbuf::BufferError>(())
/// ```
pub struct DirectBuffer<'a> {
    backing: Backing<'a>,
    capacity: usize,
    growth: Option<Box<dyn GrowthStrategy + Send + 'a>>,
}

impl<'a> DirectBuffer<'a> {
    /// Creates an unbound buffer. Every access fails with
    /// [`BufferError::Unbound`] until a region is wrapped.
    pub fn new() -> Self {
        Self {
            backing: Backing::Unbound,
            capacity: 0,
            growth: None,
        }
    }

    /// Creates a buffer owning `region`.
    pub fn from_region(region: BytesMut) -> Self {
        let mut buffer = Self::new();
        buffer.bind(Backing::Owned(region));
        buffer
    }

    /// Creates a buffer over caller-owned memory.
    pub fn from_slice(region: &'a mut [u8]) -> Self {
        let mut buffer = Self::new();
        buffer.bind(Backing::Borrowed(region));
        buffer
    }

    /// Creates a buffer over `len` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` bytes for all of
    /// `'a`, and no other reference may access that memory while the buffer
    /// is bound to it.
    pub unsafe fn from_raw_parts(ptr: NonNull<u8>, len: usize) -> Self {
        // SAFETY: upheld by the caller.
        let region = unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), len) };
        Self::from_slice(region)
    }

    /// Creates a buffer owning `region` that grows through `strategy`.
    pub fn with_growth(region: BytesMut, strategy: impl GrowthStrategy + Send + 'a) -> Self {
        let mut buffer = Self::from_region(region);
        buffer.growth = Some(Box::new(strategy));
        buffer
    }

    /// Creates a zero-filled owned buffer of `config.initial_capacity()`
    /// bytes that grows by powers of two up to `config.max_capacity()`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if the config is invalid.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        Ok(Self::with_growth(
            BytesMut::zeroed(config.initial_capacity()),
            PowerOfTwoGrowth::from_config(&config),
        ))
    }

    /// Rebinds to an owned region, releasing any previously owned one.
    ///
    /// An attached growth strategy stays attached.
    pub fn wrap(&mut self, region: BytesMut) -> Result<(), BufferError> {
        self.ensure_not_disposed()?;
        self.bind(Backing::Owned(region));
        Ok(())
    }

    /// Rebinds to caller-owned memory, releasing any previously owned region.
    pub fn wrap_slice(&mut self, region: &'a mut [u8]) -> Result<(), BufferError> {
        self.ensure_not_disposed()?;
        self.bind(Backing::Borrowed(region));
        Ok(())
    }

    /// Rebinds to `len` bytes starting at `ptr`, releasing any previously
    /// owned region.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    pub unsafe fn wrap_raw(&mut self, ptr: NonNull<u8>, len: usize) -> Result<(), BufferError> {
        // SAFETY: upheld by the caller.
        let region = unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), len) };
        self.wrap_slice(region)
    }

    /// Rebinds to an owned region and replaces the growth strategy.
    pub fn wrap_with_growth(
        &mut self,
        region: BytesMut,
        strategy: impl GrowthStrategy + Send + 'a,
    ) -> Result<(), BufferError> {
        self.wrap(region)?;
        self.growth = Some(Box::new(strategy));
        Ok(())
    }

    /// Attaches a growth strategy to the current binding.
    pub fn set_growth_strategy(
        &mut self,
        strategy: impl GrowthStrategy + Send + 'a,
    ) -> Result<(), BufferError> {
        self.ensure_not_disposed()?;
        self.growth = Some(Box::new(strategy));
        Ok(())
    }

    /// Detaches the growth strategy; overflow becomes fatal.
    pub fn clear_growth_strategy(&mut self) {
        self.growth = None;
    }

    /// Returns the number of addressable bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if bound to a region.
    pub fn is_bound(&self) -> bool {
        self.backing.ensure_bound().is_ok()
    }

    /// Returns true if the bound region is owned by the buffer.
    pub fn is_owned(&self) -> bool {
        self.backing.is_owned()
    }

    /// Returns true once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        matches!(self.backing, Backing::Disposed)
    }

    /// Returns true if a growth strategy is attached.
    pub fn has_growth_strategy(&self) -> bool {
        self.growth.is_some()
    }

    /// Ensures `limit` bytes are addressable, growing if a strategy allows.
    ///
    /// On failure the bound region and capacity are exactly as before the
    /// call.
    ///
    /// # Errors
    ///
    /// - [`BufferError::OutOfRange`] if `limit > capacity` and growth is
    ///   unavailable or refused
    /// - [`BufferError::Unbound`] / [`BufferError::Disposed`] without a region
    pub fn check_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        self.backing.ensure_bound()?;
        if limit <= self.capacity {
            return Ok(());
        }
        self.grow(limit)
    }

    /// Reads a `T` at `index`, interpreting its bytes in `order`.
    #[inline]
    pub fn get<T: Endian>(&mut self, index: usize, order: ByteOrder) -> Result<T, BufferError> {
        let limit = self.reserve(index, T::WIDTH)?;
        let mut raw = T::Bytes::default();
        raw.as_mut().copy_from_slice(&self.backing.as_slice()?[index..limit]);
        Ok(T::from_ne_bytes(raw).apply(order))
    }

    /// Writes `value` at `index` with its bytes laid out in `order`.
    #[inline]
    pub fn put<T: Endian>(
        &mut self,
        index: usize,
        value: T,
        order: ByteOrder,
    ) -> Result<(), BufferError> {
        let limit = self.reserve(index, T::WIDTH)?;
        let raw = value.apply(order).to_ne_bytes();
        self.backing.as_mut_slice()?[index..limit].copy_from_slice(raw.as_ref());
        Ok(())
    }

    /// Reads the raw byte at `index`.
    #[inline]
    pub fn get_u8(&mut self, index: usize) -> Result<u8, BufferError> {
        self.reserve(index, 1)?;
        Ok(self.backing.as_slice()?[index])
    }

    /// Writes the raw byte at `index`.
    #[inline]
    pub fn put_u8(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        self.reserve(index, 1)?;
        self.backing.as_mut_slice()?[index] = value;
        Ok(())
    }

    /// Reads a signed byte at `index`.
    #[inline]
    pub fn get_i8(&mut self, index: usize) -> Result<i8, BufferError> {
        self.get_u8(index).map(|b| b as i8)
    }

    /// Writes a signed byte at `index`.
    #[inline]
    pub fn put_i8(&mut self, index: usize, value: i8) -> Result<(), BufferError> {
        self.put_u8(index, value as u8)
    }

    /// Reads a character byte at `index`.
    #[inline]
    pub fn get_char(&mut self, index: usize) -> Result<u8, BufferError> {
        self.get_u8(index)
    }

    /// Writes a character byte at `index`.
    #[inline]
    pub fn put_char(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        self.put_u8(index, value)
    }

    /// Copies `dst.len()` bytes starting at `index` into `dst`.
    ///
    /// Returns the number of bytes copied.
    pub fn get_bytes(&mut self, index: usize, dst: &mut [u8]) -> Result<usize, BufferError> {
        let limit = self.reserve(index, dst.len())?;
        dst.copy_from_slice(&self.backing.as_slice()?[index..limit]);
        Ok(dst.len())
    }

    /// Copies `src` into the region starting at `index`.
    ///
    /// Returns the number of bytes copied.
    pub fn put_bytes(&mut self, index: usize, src: &[u8]) -> Result<usize, BufferError> {
        let limit = self.reserve(index, src.len())?;
        self.backing.as_mut_slice()?[index..limit].copy_from_slice(src);
        Ok(src.len())
    }

    /// Returns the bound region.
    pub fn as_slice(&self) -> Result<&[u8], BufferError> {
        self.backing.as_slice()
    }

    /// Returns the bound region mutably.
    pub fn as_mut_slice(&mut self) -> Result<&mut [u8], BufferError> {
        self.backing.as_mut_slice()
    }

    /// Hands the owned region back to the caller, leaving the buffer unbound.
    ///
    /// The region is returned as-is, including any bytes written after
    /// growth; nothing is copied. Returns `None`, and changes nothing, when
    /// the buffer is borrowed, unbound or disposed. An attached growth
    /// strategy stays attached.
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::BytesMut;
    /// use directbuf::DirectBuffer;
    ///
    /// let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(4));
    /// buffer.put_u32_be(0, 0xCAFE_F00D)?;
    ///
    /// let frame = buffer.take_region().unwrap().freeze();
    /// assert_eq!(&frame[..], &[0xCA, 0xFE, 0xF0, 0x0D]);
    /// assert!(!buffer.is_bound());
    /// # Ok::<(), directbuf::BufferError>(())
    /// ```
    pub fn take_region(&mut self) -> Option<BytesMut> {
        if !self.is_owned() {
            return None;
        }
        self.capacity = 0;
        match mem::replace(&mut self.backing, Backing::Unbound) {
            Backing::Owned(region) => Some(region),
            _ => None,
        }
    }

    /// Consumes the buffer, returning its owned region.
    ///
    /// See [`take_region`](Self::take_region).
    pub fn into_region(mut self) -> Option<BytesMut> {
        self.take_region()
    }

    /// Releases an owned region and drops the growth strategy.
    ///
    /// Idempotent. Borrowed memory is left alone. Runs automatically on drop.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.bind(Backing::Disposed);
        self.growth = None;
    }

    /// Bounds-checks `index..index + width` and returns the exclusive end.
    #[inline]
    fn reserve(&mut self, index: usize, width: usize) -> Result<usize, BufferError> {
        self.backing.ensure_bound()?;
        let limit = index.checked_add(width).ok_or(BufferError::OutOfRange {
            limit: usize::MAX,
            capacity: self.capacity,
        })?;
        self.check_limit(limit)?;
        Ok(limit)
    }

    fn ensure_not_disposed(&self) -> Result<(), BufferError> {
        if self.is_disposed() {
            return Err(BufferError::Disposed);
        }
        Ok(())
    }

    /// Replaces the backing, releasing a previously owned region.
    fn bind(&mut self, backing: Backing<'a>) {
        let previous = mem::replace(&mut self.backing, backing);
        self.capacity = self.backing.len();
        if let Backing::Owned(region) = previous {
            debug!(len = region.len(), "released owned region");
        }
    }

    #[cold]
    fn grow(&mut self, limit: usize) -> Result<(), BufferError> {
        let capacity = self.capacity;
        let out_of_range = BufferError::OutOfRange { limit, capacity };

        let Some(strategy) = self.growth.as_mut() else {
            return Err(out_of_range);
        };

        trace!(current = capacity, requested = limit, "growing buffer");
        let Some(mut region) = GrowthStrategy::grow(&mut **strategy, capacity, limit) else {
            debug!(current = capacity, requested = limit, "growth refused");
            return Err(out_of_range);
        };

        if region.len() < limit {
            debug!(
                current = capacity,
                requested = limit,
                granted = region.len(),
                "growth returned a short region"
            );
            return Err(out_of_range);
        }

        let committed = capacity.min(region.len());
        region[..committed].copy_from_slice(&self.backing.as_slice()?[..committed]);
        self.bind(Backing::Owned(region));

        debug!(previous = capacity, capacity = self.capacity, "grew buffer");
        Ok(())
    }
}

impl Default for DirectBuffer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DirectBuffer<'_> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DirectBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.backing {
            Backing::Unbound => "unbound",
            Backing::Owned(_) => "owned",
            Backing::Borrowed(_) => "borrowed",
            Backing::Disposed => "disposed",
        };
        f.debug_struct("DirectBuffer")
            .field("state", &state)
            .field("capacity", &self.capacity)
            .field("growth", &self.growth.is_some())
            .finish()
    }
}
