//! Password assembly on top of the sampler.

use crate::charset::Charset;
use crate::sampler::unbiased_index;
use crate::source::ByteSource;
use crate::{Error, Result};

/// Draws `length` characters from `charset`, one sampled index per position.
pub fn generate_password<S: ByteSource + ?Sized>(
    source: &mut S,
    charset: &Charset,
    length: usize,
) -> Result<String> {
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = unbiased_index(source, charset.len())?;
        // The sampler only returns indices below charset.len().
        let c = charset.get(index).ok_or(Error::InvalidRange { len: charset.len() })?;
        password.push(c);
    }
    Ok(password)
}

/// Owns a byte source and a charset for a whole generation run.
///
/// The source is advanced sequentially, so consecutive passwords from a
/// seeded source continue the same stream.
#[derive(Debug)]
pub struct PasswordGenerator<S> {
    source: S,
    charset: Charset,
}

impl<S: ByteSource> PasswordGenerator<S> {
    pub fn new(source: S, charset: Charset) -> Self {
        Self { source, charset }
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Generates a single password of `length` characters.
    pub fn generate(&mut self, length: usize) -> Result<String> {
        generate_password(&mut self.source, &self.charset, length)
    }

    /// Generates `count` passwords of `length` characters each, stopping at the
    /// first source failure.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn generate_batch(&mut self, count: usize, length: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(length)).collect()
    }
}
