//! Block cipher and seed expander constants

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-256 rounds
pub const AES256_ROUNDS: usize = 14;

/// Seed expander diversifier size in bytes
pub const SEEDEXPANDER_DIVERSIFIER_SIZE: usize = 8;
