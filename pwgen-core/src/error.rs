#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("operating system entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[error("cannot sample an index in 0..{len}; range must be 1..=256")]
    InvalidRange { len: usize },

    #[error("no character category selected")]
    NoCategories,

    #[error("character set is empty after removing excluded characters")]
    EmptyCharset,
}

impl Error {
    /// Whether the error comes from the requested character set rather than
    /// from the random source.
    pub fn is_charset(&self) -> bool {
        matches!(self, Error::NoCategories | Error::EmptyCharset | Error::InvalidRange { .. })
    }
}
