//! The region a buffer is bound to.

use bytes::BytesMut;

use crate::error::BufferError;

/// Backing storage of a [`DirectBuffer`], tagged by ownership.
///
/// An owned region is released when it is replaced or the buffer is
/// disposed. A borrowed region belongs to the caller and is never released
/// here.
///
/// [`DirectBuffer`]: super::DirectBuffer
#[derive(Debug, Default)]
pub(crate) enum Backing<'a> {
    /// Not yet bound.
    #[default]
    Unbound,
    /// Heap region owned by the buffer. Its storage never moves while owned.
    Owned(BytesMut),
    /// Caller-managed memory.
    Borrowed(&'a mut [u8]),
    /// Released; terminal.
    Disposed,
}

impl Backing<'_> {
    /// Number of addressable bytes; zero when unbound or disposed.
    pub(crate) fn len(&self) -> usize {
        match self {
            Backing::Owned(region) => region.len(),
            Backing::Borrowed(region) => region.len(),
            Backing::Unbound | Backing::Disposed => 0,
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Backing::Owned(_))
    }

    /// Fails with `Unbound` or `Disposed` when there is no region.
    pub(crate) fn ensure_bound(&self) -> Result<(), BufferError> {
        match self {
            Backing::Unbound => Err(BufferError::Unbound),
            Backing::Disposed => Err(BufferError::Disposed),
            Backing::Owned(_) | Backing::Borrowed(_) => Ok(()),
        }
    }

    pub(crate) fn as_slice(&self) -> Result<&[u8], BufferError> {
        match self {
            Backing::Owned(region) => Ok(&region[..]),
            Backing::Borrowed(region) => Ok(&region[..]),
            Backing::Unbound => Err(BufferError::Unbound),
            Backing::Disposed => Err(BufferError::Disposed),
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> Result<&mut [u8], BufferError> {
        match self {
            Backing::Owned(region) => Ok(&mut region[..]),
            Backing::Borrowed(region) => Ok(&mut region[..]),
            Backing::Unbound => Err(BufferError::Unbound),
            Backing::Disposed => Err(BufferError::Disposed),
        }
    }
}
