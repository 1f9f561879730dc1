//! Error handling for the kcl ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl std::error::Error for Error {}
