//! Block ciphers
//!
//! Only the forward direction of AES-256 is provided: the seed expander runs
//! it in counter mode and never decrypts.

pub mod aes;

pub use aes::Aes256;

use crate::error::Result;

/// A block cipher keyed once and used for many single-block encryptions
pub trait BlockCipher: Sized {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// Expand `key` into a ready-to-use cipher
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
