//! Wire encodings for KCL keys and ciphertexts.
//!
//! Every field is a run of fixed-width values packed by
//! [`compress`](kcl_algorithms::poly::serialize::compress), most significant
//! bit first:
//!
//! ```text
//! public key  = matrix seed (32) ‖ truncated Y1 (ELL polynomials)
//! secret key  = X1 + η (ELL polynomials, 3 bits per coefficient)
//! ciphertext  = truncated Y2 (ELL polynomials) ‖ signal (N values)
//! shared key  = key bits (N bits)
//! ```

use kcl_algorithms::error::{validate, Result as AlgoResult};
use kcl_algorithms::poly::params::Modulus;
use kcl_algorithms::poly::polynomial::Polynomial;
use kcl_algorithms::poly::serialize::{bytes_required, compress, decompress};
use zeroize::Zeroizing;

use super::params::KclParams;
use super::polyvec::PolyVec;

/// Bytes of one truncated polynomial
pub(crate) const fn truncated_poly_bytes<P: KclParams<N>, const N: usize>() -> usize {
    bytes_required(N, P::TRUNC_BITS)
}

/// Bytes of one packed secret polynomial
pub(crate) const fn small_poly_bytes<P: KclParams<N>, const N: usize>() -> usize {
    bytes_required(N, P::SMALL_BITS)
}

/// Rounds every coefficient to its top bits, `(c + 2^(t-1)) >> t`, and packs
/// the vector into `out`.
pub fn pack_truncated<P: KclParams<N>, const N: usize>(
    v: &PolyVec<P::Modulus, N>,
    out: &mut [u8],
) -> AlgoResult<()> {
    let chunk = truncated_poly_bytes::<P, N>();
    validate::length("truncated vector", out.len(), v.len() * chunk)?;
    let half = 1u32 << (P::T - 1);
    let mut rounded = [0u32; N];
    for (poly, dst) in v.polys().iter().zip(out.chunks_exact_mut(chunk)) {
        for (r, &c) in rounded.iter_mut().zip(poly.coeffs().iter()) {
            *r = (c + half) >> P::T;
        }
        compress(&rounded, P::TRUNC_BITS, dst)?;
    }
    Ok(())
}

/// Unpacks a truncated vector and shifts every value back by t bits.
///
/// The result approximates the packed vector to within `2^(t-1)` per
/// coefficient. Values that would land at or above q are rejected.
pub fn unpack_truncated<P: KclParams<N>, const N: usize>(
    bytes: &[u8],
) -> AlgoResult<PolyVec<P::Modulus, N>> {
    let chunk = truncated_poly_bytes::<P, N>();
    validate::length("truncated vector", bytes.len(), P::ELL * chunk)?;
    let q = <P::Modulus as Modulus>::Q;
    let mut polys = Vec::with_capacity(P::ELL);
    for src in bytes.chunks_exact(chunk) {
        let mut coeffs = [0u32; N];
        decompress(src, P::TRUNC_BITS, &mut coeffs)?;
        for c in coeffs.iter_mut() {
            *c <<= P::T;
            validate::below(*c, q, "detruncated coefficient")?;
        }
        polys.push(Polynomial::from_coeffs(&coeffs)?);
    }
    Ok(PolyVec::from_polys(polys))
}

/// Packs a secret vector with coefficients in `[-η, η]` as `c + η`.
pub fn pack_small<P: KclParams<N>, const N: usize>(
    v: &PolyVec<P::Modulus, N>,
    out: &mut [u8],
) -> AlgoResult<()> {
    let chunk = small_poly_bytes::<P, N>();
    validate::length("secret vector", out.len(), v.len() * chunk)?;
    let eta = P::SET.eta as i32;
    let mut shifted = Zeroizing::new([0u32; N]);
    for (poly, dst) in v.polys().iter().zip(out.chunks_exact_mut(chunk)) {
        for (i, s) in shifted.iter_mut().enumerate() {
            let c = poly.centered(i);
            debug_assert!(c.abs() <= eta);
            *s = (c + eta) as u32;
        }
        compress(&shifted[..], P::SMALL_BITS, dst)?;
    }
    Ok(())
}

/// Inverse of [`pack_small`]. Packed values above 2η are rejected.
pub fn unpack_small<P: KclParams<N>, const N: usize>(
    bytes: &[u8],
) -> AlgoResult<PolyVec<P::Modulus, N>> {
    let chunk = small_poly_bytes::<P, N>();
    validate::length("secret vector", bytes.len(), P::ELL * chunk)?;
    let eta = P::SET.eta;
    let q = <P::Modulus as Modulus>::Q;
    let mut polys = Vec::with_capacity(P::ELL);
    let mut raw = Zeroizing::new([0u32; N]);
    for src in bytes.chunks_exact(chunk) {
        decompress(src, P::SMALL_BITS, &mut raw[..])?;
        let mut coeffs = Zeroizing::new([0u32; N]);
        for (c, &s) in coeffs.iter_mut().zip(raw.iter()) {
            validate::below(s, 2 * eta + 1, "secret coefficient")?;
            // s - η mod q
            *c = (q + s - eta) % q;
        }
        polys.push(Polynomial::from_coeffs(&coeffs[..])?);
    }
    Ok(PolyVec::from_polys(polys))
}

/// Packs the signal, one value per coefficient.
pub fn pack_signal<P: KclParams<N>, const N: usize>(
    signal: &[u32; N],
    out: &mut [u8],
) -> AlgoResult<()> {
    compress(signal, P::SIGNAL_BITS, out)
}

/// Unpacks the signal. Values at or above the signal modulus are rejected.
pub fn unpack_signal<P: KclParams<N>, const N: usize>(bytes: &[u8]) -> AlgoResult<[u32; N]> {
    let mut signal = [0u32; N];
    decompress(bytes, P::SIGNAL_BITS, &mut signal)?;
    let g = P::CONSENSUS.signal_modulus();
    for &v in signal.iter() {
        validate::below(v, g, "signal")?;
    }
    Ok(signal)
}

/// Packs the agreed key bits into the shared secret.
pub fn pack_key_bits<const N: usize>(bits: &[u32; N], out: &mut [u8]) -> AlgoResult<()> {
    compress(bits, 1, out)
}

/// Unpacks one bit per coefficient.
#[cfg(test)]
pub fn unpack_key_bits<const N: usize>(bytes: &[u8]) -> AlgoResult<Zeroizing<[u32; N]>> {
    let mut bits = Zeroizing::new([0u32; N]);
    decompress(bytes, 1, &mut bits[..])?;
    Ok(bits)
}
