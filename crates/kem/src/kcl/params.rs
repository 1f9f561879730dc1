//! KCL parameter definitions.

use kcl_algorithms::poly::params::{Modulus, NttModulus, Q12289, Q7681};
use kcl_params::pqc::kcl::{self as global_params, bit_length, ConsensusKind, KclParamSet};

use super::consensus::KeyConsensus;

/// A named parameter set, independent of the ring degree.
///
/// Key and ciphertext newtypes are generic over this trait only, so they can
/// check lengths without naming the ring.
pub trait KclVariant: Send + Sync + 'static {
    /// Size and shape constants
    const SET: KclParamSet;
}

/// Trait defining the ring and consensus for a KCL variant of degree `N`.
pub trait KclParams<const N: usize>: KclVariant {
    /// Coefficient modulus with NTT tables for degree N
    type Modulus: NttModulus<N>;

    /// Reconciliation strategy, fixed for the parameter set
    const CONSENSUS: KeyConsensus = KeyConsensus::for_set(&Self::SET);

    /// Algorithm name string.
    const NAME: &'static str = Self::SET.name;
    /// Module rank.
    const ELL: usize = Self::SET.ell;
    /// Truncated low-order bits.
    const T: u32 = Self::SET.t;
    /// Width of one packed truncated coefficient.
    const TRUNC_BITS: u32 = Self::SET.truncated_bits();
    /// Width of one packed secret coefficient.
    const SMALL_BITS: u32 = Self::SET.small_bits();
    /// Width of one packed signal value.
    const SIGNAL_BITS: u32 = Self::SET.signal_bits();

    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize = Self::SET.public_key_size;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize = Self::SET.secret_key_size;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize = Self::SET.ciphertext_size;
    /// Size of the shared secret in bytes.
    const SHARED_SECRET_BYTES: usize = Self::SET.shared_secret_size;

    /// Compile-time consistency checks, forced by every KEM entry point
    const CHECK: () = check_set::<N>(&Self::SET, <Self::Modulus as Modulus>::Q);
}

/// Rejects parameter sets the engine cannot run correctly.
///
/// Evaluated in `const` context, so a bad set fails to build.
pub const fn check_set<const N: usize>(set: &KclParamSet, q: u32) {
    assert!(set.n == N, "parameter set degree differs from the ring degree");
    assert!(set.q == q, "parameter set modulus differs from the ring modulus");
    assert!(N.is_power_of_two() && N % 8 == 0, "N must be a power of two");
    assert!((q - 1) as usize % (2 * N) == 0, "2N must divide q - 1");
    assert!(set.ell >= 1 && 2 * set.ell < 256, "module rank out of range");
    assert!(set.eta == 2, "the noise sampler draws from [-2, 2]");
    assert!(set.t >= 1 && set.t < bit_length(q), "truncation out of range");
    assert!(set.g >= 2, "signal modulus must be at least 2");
    assert!(
        9 * set.g as u64 * q as u64 <= u32::MAX as u64,
        "consensus arithmetic must fit in u32"
    );
    if let ConsensusKind::Akcn = set.consensus {
        assert!(set.g.is_power_of_two(), "AKCN needs a power-of-two signal modulus");
    }
    let top = ((q - 1) + (1 << (set.t - 1))) >> set.t;
    assert!(top << set.t < q, "detruncated values must stay below q");
    assert!(set.sizes_consistent(), "advertised sizes differ from the packing layout");
}

/// AKCN-MLWE parameter set.
pub struct AkcnMlweParams;
impl KclVariant for AkcnMlweParams {
    const SET: KclParamSet = global_params::AKCN_MLWE;
}
impl KclParams<256> for AkcnMlweParams {
    type Modulus = Q7681;
}

/// OKCN-MLWE parameter set.
pub struct OkcnMlweParams;
impl KclVariant for OkcnMlweParams {
    const SET: KclParamSet = global_params::OKCN_MLWE;
}
impl KclParams<256> for OkcnMlweParams {
    type Modulus = Q7681;
}

/// AKCN-SEC parameter set.
pub struct AkcnSecParams;
impl KclVariant for AkcnSecParams {
    const SET: KclParamSet = global_params::AKCN_SEC;
}
impl KclParams<1024> for AkcnSecParams {
    type Modulus = Q12289;
}

/// OKCN-SEC parameter set.
pub struct OkcnSecParams;
impl KclVariant for OkcnSecParams {
    const SET: KclParamSet = global_params::OKCN_SEC;
}
impl KclParams<1024> for OkcnSecParams {
    type Modulus = Q12289;
}
