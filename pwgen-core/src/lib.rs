//! Password generation over an unbiased, optionally reproducible byte stream.
//!
//! Passwords are built by drawing uniformly distributed indices into a
//! [`Charset`]. Indices come from a [`ByteSource`], of which there are two:
//!
//! - [`SecureSource`] reads from the operating system CSPRNG.
//! - [`SeededSource`] derives an unbounded stream from a seed using
//!   HMAC-SHA3-512 over a big-endian 64-bit counter. The same seed always
//!   yields the same bytes, on any platform and in any implementation that
//!   follows the same construction.
//!
//! # Seeded stream
//!
//! Block `i` (counting from 1) of the stream is
//!
//! ```text
//! HMAC-SHA3-512(key = seed, message = u64::to_be_bytes(i))
//! ```
//!
//! and the stream is the concatenation of all blocks. How the caller splits its
//! reads does not matter: reading one byte at a time or 64 at a time yields the
//! same sequence.
//!
//! # Removing modulo bias
//!
//! A byte taken modulo a charset length that does not divide 256 favours the
//! low indices. The [`sampler`] rejects every byte at or above
//! `256 - (256 % len)` and draws again, so each index is exactly equally likely.
//! At most half of the bytes are ever rejected, so the expected number of draws
//! per index is below two.
//!
//! # Usage
//!
//! ```
//! use pwgen_core::{CharClasses, Charset, PasswordGenerator, SeededSource};
//!
//! let charset = Charset::from_classes(&CharClasses::default())?;
//! let mut generator = PasswordGenerator::new(SeededSource::new(&[0u8; 32]), charset);
//! let password = generator.generate(16)?;
//! assert_eq!(password.chars().count(), 16);
//! # Ok::<(), pwgen_core::Error>(())
//! ```

pub mod charset;
mod error;
pub mod generator;
pub mod phonetic;
pub mod sampler;
pub mod source;

pub use charset::{CharClasses, Charset};
pub use error::Error;
pub use generator::{PasswordGenerator, generate_password};
pub use phonetic::spell;
pub use sampler::{rejection_limit, unbiased_index};
pub use source::{ByteSource, SecureSource, SeededSource};

/// Error reported by the operating system random source.
pub use rand::Error as RandError;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Largest charset the byte sampler can address (one byte per draw).
pub const MAX_CHARSET_LEN: usize = 256;
