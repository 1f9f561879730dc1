//! Error handling for KEM operations

use kcl_algorithms::error::Error as PrimitiveError;
use kcl_api::Error as CoreError;
use thiserror::Error;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Primitive error
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The rng failed to produce a keypair seed
    #[error("key generation error for {algorithm}: {details}")]
    KeyGeneration {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// The rng failed to produce an encapsulation seed
    #[error("encapsulation error for {algorithm}: {details}")]
    Encapsulation {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    #[error("invalid {key_type} key: {reason}")]
    InvalidKey {
        /// Which key, e.g. "AKCN-MLWE public"
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        /// Algorithm name
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                message: format!("encapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
