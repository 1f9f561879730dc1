//! AES-256 block cipher (FIPS 197), encryption direction
//!
//! ## Constant-Time Guarantees
//!
//! - GF(2^8) arithmetic is branchless
//! - The S-box is computed (inversion plus affine map), never looked up
//! - Round keys are touched in full before every block
//!
//! The state is held column-major: byte `4c + r` is row `r` of column `c`,
//! which is also the input byte order.

use std::sync::atomic::{compiler_fence, Ordering};

use kcl_params::utils::symmetric::{AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockCipher;
use crate::error::{validate, Result};

/// Round constants for key expansion, high byte of each word
const RCON: [u32; 8] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000,
];

const ROUND_KEY_BYTES: usize = AES_BLOCK_SIZE * (AES256_ROUNDS + 1);
const KEY_WORDS: usize = AES256_KEY_SIZE / 4;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// x^254 = x⁻¹ in GF(2⁸), with 0 mapped to 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// Forward S-box: inv(x) ⊕ ROTL(inv(x), 1..=4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// Multiply by x in GF(2^8)
#[inline(always)]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7) * 0x1B)
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: [u8; ROUND_KEY_BYTES],
}

impl Aes256 {
    /// Key schedule with Nk = 8: an extra SubWord every fourth word
    fn expand_key(key: &[u8]) -> Result<[u8; ROUND_KEY_BYTES]> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;

        let mut w = [0u32; ROUND_KEY_BYTES / 4];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in KEY_WORDS..w.len() {
            let mut temp = w[i - 1];
            if i % KEY_WORDS == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / KEY_WORDS];
            } else if i % KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - KEY_WORDS] ^ temp;
        }

        let mut out = [0u8; ROUND_KEY_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(w.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        w.zeroize();
        Ok(out)
    }

    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    /// Row r rotates left by r columns
    fn shift_rows(state: &mut [u8; 16]) {
        let t = *state;
        for c in 0..4 {
            for r in 1..4 {
                state[4 * c + r] = t[4 * ((c + r) % 4) + r];
            }
        }
    }

    fn mix_columns(state: &mut [u8; 16]) {
        for col in state.chunks_exact_mut(4) {
            let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
            col[0] = xtime(s0) ^ xtime(s1) ^ s1 ^ s2 ^ s3;
            col[1] = s0 ^ xtime(s1) ^ xtime(s2) ^ s2 ^ s3;
            col[2] = s0 ^ s1 ^ xtime(s2) ^ xtime(s3) ^ s3;
            col[3] = xtime(s0) ^ s0 ^ s1 ^ s2 ^ xtime(s3);
        }
    }

    fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
        for (s, k) in state.iter_mut().zip(round_key.iter()) {
            *s ^= k;
        }
    }
}

impl BlockCipher for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }

    fn new(key: &[u8]) -> Result<Self> {
        Ok(Aes256 {
            round_keys: Self::expand_key(key)?,
        })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        // Warm the cache by touching all round key bytes
        let mut _warm: u8 = 0;
        for &b in self.round_keys.iter() {
            _warm = _warm.wrapping_add(b);
        }
        compiler_fence(Ordering::SeqCst);

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        Self::add_round_key(&mut state, &self.round_keys[..16]);
        for round in 1..AES256_ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round * 16..(round + 1) * 16]);
        }
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[AES256_ROUNDS * 16..]);

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}
