//! sampling.rs - Deterministic polynomial samplers
//!
//! Both samplers are pure functions of their seed material: the same seed
//! and position always yield the same polynomial.

use zeroize::Zeroizing;

use super::params::Modulus;
use super::polynomial::{Polynomial, Standard};
use crate::error::{validate, Result};
use crate::xof::SeedExpander;

/// Bytes pulled from the expander per refill while rejection sampling
const UNIFORM_CHUNK_BYTES: usize = 128;

/// Uniform sampling from `[0, Q)`
pub trait UniformSampler<M: Modulus, const N: usize> {
    /// Sample a uniform polynomial from a 32-byte seed and an 8-byte position
    /// diversifier.
    fn sample_uniform(seed: &[u8; 32], diversifier: &[u8; 8]) -> Result<Polynomial<M, N, Standard>>;
}

/// Small noise with coefficients in `[-2, 2]`
pub trait NoiseSampler<M: Modulus, const N: usize> {
    /// Sample a noise polynomial from a 31-byte seed and a one-byte nonce.
    fn sample_noise(seed: &[u8; 31], nonce: u8) -> Result<Polynomial<M, N, Standard>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl<M: Modulus, const N: usize> UniformSampler<M, N> for DefaultSamplers {
    /// Little-endian 16-bit candidates masked to the bit length of Q and kept
    /// when below Q. The expander is refilled until N values are accepted.
    fn sample_uniform(seed: &[u8; 32], diversifier: &[u8; 8]) -> Result<Polynomial<M, N, Standard>> {
        let mut expander = SeedExpander::new(seed, diversifier, SeedExpander::MAX_LENGTH)?;
        let mask = (1u32 << M::BITS) - 1;

        let mut out = [0u32; N];
        let mut filled = 0;
        let mut buf = [0u8; UNIFORM_CHUNK_BYTES];
        while filled < N {
            expander.expand(&mut buf)?;
            for pair in buf.chunks_exact(2) {
                let candidate = u16::from_le_bytes([pair[0], pair[1]]) as u32 & mask;
                if candidate < M::Q {
                    out[filled] = candidate;
                    filled += 1;
                    if filled == N {
                        break;
                    }
                }
            }
        }
        Ok(Polynomial::from_raw(out))
    }
}

impl<M: Modulus, const N: usize> NoiseSampler<M, N> for DefaultSamplers {
    /// The expander key is `seed ‖ nonce`. Each byte yields two coefficients,
    /// low nibble first; a nibble `b` maps to `popcount(b & 3) - popcount(b >> 2)`.
    fn sample_noise(seed: &[u8; 31], nonce: u8) -> Result<Polynomial<M, N, Standard>> {
        validate::parameter(N % 2 == 0, "N", "noise sampling needs an even degree")?;

        let mut key = Zeroizing::new([0u8; 32]);
        key[..31].copy_from_slice(seed);
        key[31] = nonce;

        let mut bytes = Zeroizing::new(vec![0u8; N / 2]);
        let mut expander = SeedExpander::new(&key, &[0u8; 8], (N / 2) as u32)?;
        expander.expand(&mut bytes)?;

        let red = M::REDUCER;
        let mut out = [0u32; N];
        for (pair, &b) in out.chunks_exact_mut(2).zip(bytes.iter()) {
            pair[0] = red.reduce_once(M::Q.wrapping_add(nibble_to_small(b & 0x0F)), M::Q);
            pair[1] = red.reduce_once(M::Q.wrapping_add(nibble_to_small(b >> 4)), M::Q);
        }
        Ok(Polynomial::from_raw(out))
    }
}

/// Centered value of a nibble in two's complement, `v` in `[-2, 2]`.
/// Adding Q with wrapping arithmetic gives `Q + v`.
#[inline(always)]
fn nibble_to_small(n: u8) -> u32 {
    let pos = (n & 0b0011).count_ones();
    let neg = (n >> 2).count_ones();
    pos.wrapping_sub(neg)
}
