//! Constants for the AKCN/OKCN key-consensus KEM family

/// Matrix seed size in bytes, stored at the front of every public key
pub const KCL_MATRIX_SEED_BYTES: usize = 32;

/// Noise seed size in bytes. The seed expander key is this seed followed by
/// a one-byte nonce.
pub const KCL_NOISE_SEED_BYTES: usize = 31;

/// Seed consumed by keypair generation: matrix seed followed by noise seed
pub const KCL_KEYPAIR_SEED_BYTES: usize = KCL_MATRIX_SEED_BYTES + KCL_NOISE_SEED_BYTES;

/// Seed consumed by encapsulation
pub const KCL_ENCAPS_SEED_BYTES: usize = KCL_NOISE_SEED_BYTES;

/// Which reconciliation strategy a parameter set uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsensusKind {
    /// Asymmetric key consensus with a power-of-two signal modulus
    Akcn,
    /// Optimally-balanced key consensus with an arbitrary signal modulus
    Okcn,
}

/// Structure containing one KCL parameter set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KclParamSet {
    /// Algorithm name
    pub name: &'static str,

    /// Polynomial degree
    pub n: usize,

    /// Field modulus
    pub q: u32,

    /// Module rank (1 for the Ring-LWE sets)
    pub ell: usize,

    /// Noise bound: coefficients lie in [-eta, eta]
    pub eta: u32,

    /// Truncated low-order bits of public and ciphertext vectors
    pub t: u32,

    /// Reconciliation strategy
    pub consensus: ConsensusKind,

    /// Signal modulus
    pub g: u32,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// AKCN-MLWE: rank-3 module over Z_7681[x]/(x^256 + 1)
pub const AKCN_MLWE: KclParamSet = KclParamSet {
    name: "AKCN-MLWE",
    n: 256,
    q: 7681,
    ell: 3,
    eta: 2,
    t: 4,
    consensus: ConsensusKind::Akcn,
    g: 16,
    public_key_size: 896,
    secret_key_size: 288,
    ciphertext_size: 992,
    shared_secret_size: 32,
};

/// OKCN-MLWE: same ring and module as AKCN-MLWE, signal modulus 6
pub const OKCN_MLWE: KclParamSet = KclParamSet {
    name: "OKCN-MLWE",
    n: 256,
    q: 7681,
    ell: 3,
    eta: 2,
    t: 4,
    consensus: ConsensusKind::Okcn,
    g: 6,
    public_key_size: 896,
    secret_key_size: 288,
    ciphertext_size: 960,
    shared_secret_size: 32,
};

/// AKCN-SEC: Ring-LWE over Z_12289[x]/(x^1024 + 1)
pub const AKCN_SEC: KclParamSet = KclParamSet {
    name: "AKCN-SEC",
    n: 1024,
    q: 12289,
    ell: 1,
    eta: 2,
    t: 4,
    consensus: ConsensusKind::Akcn,
    g: 16,
    public_key_size: 1312,
    secret_key_size: 384,
    ciphertext_size: 1792,
    shared_secret_size: 128,
};

/// OKCN-SEC: Ring-LWE over Z_12289[x]/(x^1024 + 1), five truncated bits
pub const OKCN_SEC: KclParamSet = KclParamSet {
    name: "OKCN-SEC",
    n: 1024,
    q: 12289,
    ell: 1,
    eta: 2,
    t: 5,
    consensus: ConsensusKind::Okcn,
    g: 12,
    public_key_size: 1184,
    secret_key_size: 384,
    ciphertext_size: 1664,
    shared_secret_size: 128,
};

/// All parameter sets, in the order they are documented
pub const ALL: [KclParamSet; 4] = [AKCN_MLWE, OKCN_MLWE, AKCN_SEC, OKCN_SEC];

/// Number of bits needed to represent `x`
pub const fn bit_length(x: u32) -> u32 {
    32 - x.leading_zeros()
}

impl KclParamSet {
    /// Width of a truncated coefficient: bit length of the largest rounded value
    pub const fn truncated_bits(&self) -> u32 {
        bit_length(((self.q - 1) + (1 << (self.t - 1))) >> self.t)
    }

    /// Width of a packed secret coefficient (stored as `c + eta`)
    pub const fn small_bits(&self) -> u32 {
        bit_length(2 * self.eta)
    }

    /// Width of a packed signal value
    pub const fn signal_bits(&self) -> u32 {
        bit_length(self.g - 1)
    }

    /// Bytes of one packed vector of `ell` truncated polynomials
    pub const fn truncated_vec_bytes(&self) -> usize {
        self.ell * self.n * self.truncated_bits() as usize / 8
    }

    /// Bytes of the packed signal polynomial
    pub const fn signal_bytes(&self) -> usize {
        self.n * self.signal_bits() as usize / 8
    }

    /// Checks that the advertised sizes match the packing layout
    pub const fn sizes_consistent(&self) -> bool {
        self.public_key_size == KCL_MATRIX_SEED_BYTES + self.truncated_vec_bytes()
            && self.secret_key_size == self.ell * self.n * self.small_bits() as usize / 8
            && self.ciphertext_size == self.truncated_vec_bytes() + self.signal_bytes()
            && self.shared_secret_size == self.n / 8
    }
}
