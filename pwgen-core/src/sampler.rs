//! Uniform index sampling by rejection.

use crate::source::ByteSource;
use crate::{Error, MAX_CHARSET_LEN, Result};

/// Returns the exclusive upper bound on accepted bytes for a range of `len`.
///
/// `len == 256` gives 256, meaning every byte is accepted.
#[inline]
pub fn rejection_limit(len: usize) -> Result<u16> {
    if len == 0 || len > MAX_CHARSET_LEN {
        return Err(Error::InvalidRange { len });
    }
    let len = len as u16;
    Ok(256 - (256 % len))
}

/// Draws an index uniformly distributed over `0..len` from `source`.
///
/// Bytes at or above [`rejection_limit`] are discarded and redrawn, so every
/// index has probability exactly `1 / len`.
pub fn unbiased_index<S: ByteSource + ?Sized>(source: &mut S, len: usize) -> Result<usize> {
    let limit = rejection_limit(len)?;
    loop {
        let byte = source.next_byte()?;
        if u16::from(byte) < limit {
            return Ok(byte as usize % len);
        }
        tracing::trace!(byte, limit, "rejected biased byte");
    }
}
