//! # kcl
//!
//! Key Consensus from Lattices: the AKCN/OKCN family of key-encapsulation
//! mechanisms over Module-LWE and Ring-LWE.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kcl = "0.3"
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the four KEM variants (implies `algorithms`)
//! - `algorithms`: the NTT engine, samplers, packing and the seed expander
//! - `serde`: serde support for public keys and ciphertexts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kcl-api`]: `Kem` and serialization traits, error types
//! - [`kcl-params`]: constant tables for every parameter set
//! - [`kcl-algorithms`]: ring arithmetic, sampling, packing, AES-256 seed expander
//! - [`kcl-kem`]: AKCN-MLWE, OKCN-MLWE, AKCN-SEC and OKCN-SEC

// Core re-exports (always available)
pub use kcl_api as api;
pub use kcl_internal as internal;
pub use kcl_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use kcl_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use kcl_kem as kem;

/// Common imports for kcl users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret};

    #[cfg(feature = "kem")]
    pub use crate::kem::{AkcnMlwe, AkcnSec, OkcnMlwe, OkcnSec};
}
