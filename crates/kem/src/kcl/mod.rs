//! AKCN/OKCN key-consensus KEMs over Module-LWE and Ring-LWE.
//!
//! Both parties derive a noisy shared ring element: the encapsulator runs
//! Con on its copy and publishes the signal, the decapsulator runs Rec on its
//! own copy with that signal. No re-encryption check is performed, so a
//! reconciliation failure shows up only as differing shared secrets.

// Modules defining the KCL logic and parameters.
mod consensus;
mod engine;
mod kem;
mod params;
mod polyvec;
mod serialize;

// Concrete KCL variants
mod akcn_mlwe;
mod akcn_sec;
mod okcn_mlwe;
mod okcn_sec;

// Re-export the primary KEM types for each parameter set.
pub use self::akcn_mlwe::AkcnMlwe;
pub use self::akcn_sec::AkcnSec;
pub use self::okcn_mlwe::OkcnMlwe;
pub use self::okcn_sec::OkcnSec;

pub use self::consensus::{Akcn, KeyConsensus, Okcn};
pub use self::kem::{KclCiphertext, KclKem, KclPublicKey, KclSecretKey, KclSharedSecret};
pub use self::params::{
    AkcnMlweParams, AkcnSecParams, KclParams, KclVariant, OkcnMlweParams, OkcnSecParams,
};
