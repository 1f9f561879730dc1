//! Public API traits and types for the kcl library
//!
//! This crate provides the public API surface shared by every kcl crate:
//! the `Kem` trait, byte serialization contracts, the error type and a few
//! secret-carrying byte containers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
