//! Byte streams that feed the index sampler.

use std::fmt;

use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha3::Sha3_512;

use crate::Result;

type HmacSha3_512 = Hmac<Sha3_512>;

/// Output size of one HMAC-SHA3-512 block.
pub const BLOCK_LEN: usize = 64;

/// Anything that can hand out an unbounded sequence of random bytes.
pub trait ByteSource {
    /// Fills `dest` entirely with the next bytes of the stream.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Returns the next single byte of the stream.
    fn next_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill_bytes(&mut buf)?;
        Ok(buf[0])
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// Operating system CSPRNG.
///
/// A failure of the OS source is returned as [`Error::Entropy`](crate::Error::Entropy)
/// and must abort generation. There is no fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureSource;

impl ByteSource for SecureSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Deterministic stream derived from a seed.
///
/// Block `n` is `HMAC-SHA3-512(seed, n as big-endian u64)`, with `n` starting
/// at 1. Reads consume the blocks in order regardless of how they are split.
#[derive(Clone)]
pub struct SeededSource {
    mac: HmacSha3_512,
    counter: u64,
    buffer: [u8; BLOCK_LEN],
    position: usize,
}

impl SeededSource {
    /// Creates a stream keyed by `seed`. Any seed length is accepted,
    /// including an empty one.
    pub fn new(seed: &[u8]) -> Self {
        let mac = <HmacSha3_512 as Mac>::new_from_slice(seed)
            .expect("HMAC accepts keys of any length");
        Self {
            mac,
            counter: 1,
            buffer: [0u8; BLOCK_LEN],
            // Start exhausted so the first read computes block 1.
            position: BLOCK_LEN,
        }
    }

    /// Counter value that the next refill will hash.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    fn refill(&mut self) {
        let mut mac = self.mac.clone();
        mac.update(&self.counter.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        self.buffer.copy_from_slice(&digest);
        self.position = 0;
        tracing::trace!(counter = self.counter, "seeded source refilled");
        self.counter = self.counter.wrapping_add(1);
    }

    /// Infallible read used by the [`ByteSource`] impl.
    pub fn read(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            if self.position >= BLOCK_LEN {
                self.refill();
            }
            let n = (BLOCK_LEN - self.position).min(dest.len() - offset);
            dest[offset..offset + n].copy_from_slice(&self.buffer[self.position..self.position + n]);
            self.position += n;
            offset += n;
        }
    }
}

impl ByteSource for SeededSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.read(dest);
        Ok(())
    }
}

// The seed is secret; keep it out of logs.
impl fmt::Debug for SeededSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededSource")
            .field("counter", &self.counter)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
