//! Primitives for the kcl key encapsulation mechanisms
//!
//! This crate holds everything below the KEM layer:
//!
//! - [`poly`]: modular reduction, the negacyclic NTT, domain-tagged
//!   polynomials, samplers and bit packing
//! - [`block`]: AES-256 encryption
//! - [`xof`]: the AES-256 counter-mode seed expander
//!
//! Nothing here allocates secrets on the heap without zeroizing them, and no
//! operation branches on secret coefficients.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher};

// Polynomial engine
pub mod poly;
pub use poly::params::{Modulus, NttModulus, Q12289, Q7681};
pub use poly::polynomial::{Montgomery, Ntt, Polynomial, Standard};

// Seed expansion
pub mod xof;
pub use xof::SeedExpander;
