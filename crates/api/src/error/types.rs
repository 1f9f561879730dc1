//! Error type definitions for KEM operations

/// Primary error type for kcl operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for kcl operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}", context)?;
                write_message(f, message)
            }
            Self::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext: {}", context)?;
                write_message(f, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}", context)?;
                write_message(f, message)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}", context)?;
                write_message(f, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}", context)?;
                write_message(f, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}", context)?;
                write_message(f, message)
            }
        }
    }
}

fn write_message(f: &mut core::fmt::Formatter<'_>, message: &str) -> core::fmt::Result {
    if message.is_empty() {
        Ok(())
    } else {
        write!(f, ": {}", message)
    }
}
