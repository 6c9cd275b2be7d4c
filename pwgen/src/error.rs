#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please select at least one character set.")]
    NoCharacterSet,

    #[error("Invalid seed format. Use hex (e.g., 64 hex chars for 32 bytes).")]
    InvalidSeed {
        #[source]
        source: hex::FromHexError,
    },

    #[error(transparent)]
    Generation(#[from] pwgen_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Configuration errors are reported to the user and end the run without
    /// output; everything else is fatal.
    pub fn is_configuration(&self) -> bool {
        match self {
            Error::NoCharacterSet | Error::InvalidSeed { .. } => true,
            Error::Generation(e) => e.is_charset(),
            Error::Io(_) => false,
        }
    }
}
