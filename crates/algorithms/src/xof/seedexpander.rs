//! AES-256 counter-mode seed expander
//!
//! The construction of the NIST PQC reference `seedexpander`:
//!
//! ```text
//! counter block = diversifier (8) ‖ max_len (4, BE) ‖ block index (4, BE)
//! stream        = AES-256_seed(block 0) ‖ AES-256_seed(block 1) ‖ ...
//! ```
//!
//! Output is consumed sequentially. The expander refuses to produce more than
//! `max_len` bytes over its lifetime.

use kcl_params::utils::symmetric::{AES_BLOCK_SIZE, SEEDEXPANDER_DIVERSIFIER_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Aes256, BlockCipher};
use crate::error::{Error, Result};

/// Seed expander state
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SeedExpander {
    cipher: Aes256,
    counter: [u8; AES_BLOCK_SIZE],
    buffer: [u8; AES_BLOCK_SIZE],
    buffer_pos: usize,
    remaining: u64,
}

impl SeedExpander {
    /// Largest lifetime output accepted by `new`
    pub const MAX_LENGTH: u32 = u32::MAX;

    /// Key an expander with a 32-byte seed and an 8-byte diversifier
    pub fn new(
        seed: &[u8; 32],
        diversifier: &[u8; SEEDEXPANDER_DIVERSIFIER_SIZE],
        max_len: u32,
    ) -> Result<Self> {
        let cipher = Aes256::new(seed)?;
        let mut counter = [0u8; AES_BLOCK_SIZE];
        counter[..8].copy_from_slice(diversifier);
        counter[8..12].copy_from_slice(&max_len.to_be_bytes());
        Ok(Self {
            cipher,
            counter,
            buffer: [0u8; AES_BLOCK_SIZE],
            buffer_pos: AES_BLOCK_SIZE,
            remaining: max_len as u64,
        })
    }

    /// Bytes that may still be requested
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Fill `out` with the next bytes of the stream
    pub fn expand(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() as u64 > self.remaining {
            return Err(Error::Processing {
                operation: "SeedExpander::expand",
                details: "requested more than max_len bytes",
            });
        }
        self.remaining -= out.len() as u64;

        let mut written = 0;
        while written < out.len() {
            if self.buffer_pos == AES_BLOCK_SIZE {
                self.refill()?;
            }
            let take = (AES_BLOCK_SIZE - self.buffer_pos).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.buffer[self.buffer_pos..self.buffer_pos + take]);
            self.buffer_pos += take;
            written += take;
        }
        Ok(())
    }

    fn refill(&mut self) -> Result<()> {
        self.buffer = self.counter;
        self.cipher.encrypt_block(&mut self.buffer)?;
        self.buffer_pos = 0;

        // Big-endian increment of the block index
        for byte in self.counter[12..].iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                break;
            }
        }
        Ok(())
    }
}
