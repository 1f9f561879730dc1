//! Key encapsulation from lattice key consensus
//!
//! This crate implements the AKCN/OKCN KEM family: AKCN-MLWE and OKCN-MLWE
//! over a rank-3 module of Z_7681[x]/(x^256 + 1), and AKCN-SEC and OKCN-SEC
//! over the ring Z_12289[x]/(x^1024 + 1).

pub mod error;
pub mod kcl;

// Re-exports
pub use kcl::{AkcnMlwe, AkcnSec, OkcnMlwe, OkcnSec};
