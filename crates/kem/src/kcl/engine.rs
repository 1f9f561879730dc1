//! Deterministic keypair, encapsulation and decapsulation.
//!
//! Every call re-derives the matrix and all noise from its seed arguments;
//! nothing is cached between calls. Nonce layout of the noise seed:
//!
//! | call | nonces |
//! |------|--------|
//! | keypair | `X1 = 0..ELL`, `E1 = ELL..2ELL` |
//! | encapsulate | `X2 = 0..ELL`, `E2 = ELL..2ELL`, `Eσ = 2ELL` |

use kcl_params::pqc::kcl::{
    KCL_ENCAPS_SEED_BYTES, KCL_KEYPAIR_SEED_BYTES, KCL_MATRIX_SEED_BYTES, KCL_NOISE_SEED_BYTES,
};
use tracing::{debug, instrument, trace};
use zeroize::Zeroizing;

use super::params::KclParams;
use super::polyvec::{Matrix, PolyVec};
use super::serialize::{
    pack_key_bits, pack_signal, pack_small, pack_truncated, truncated_poly_bytes, unpack_signal,
    unpack_small, unpack_truncated,
};
use crate::error::{validate, Error, Result};

/// Packed public key and secret key
pub(crate) type KeyPairBytes = (Vec<u8>, Zeroizing<Vec<u8>>);

/// Packed ciphertext and shared secret
pub(crate) type EncapsulationBytes = (Vec<u8>, Zeroizing<Vec<u8>>);

/// Derives a keypair from a 63-byte seed: matrix seed followed by noise seed.
#[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
pub(crate) fn keypair<P: KclParams<N>, const N: usize>(
    seed: &[u8; KCL_KEYPAIR_SEED_BYTES],
) -> Result<KeyPairBytes> {
    let () = P::CHECK;

    let mut matrix_seed = [0u8; KCL_MATRIX_SEED_BYTES];
    matrix_seed.copy_from_slice(&seed[..KCL_MATRIX_SEED_BYTES]);
    let mut noise_seed = Zeroizing::new([0u8; KCL_NOISE_SEED_BYTES]);
    noise_seed.copy_from_slice(&seed[KCL_MATRIX_SEED_BYTES..]);

    let a = Matrix::<P::Modulus, N>::uniform(&matrix_seed, P::ELL, false)?;
    trace!(rank = a.rank(), "matrix expanded");

    let x1 = Zeroizing::new(PolyVec::<P::Modulus, N>::sample_noise(&noise_seed, 0, P::ELL)?);
    let e1 = Zeroizing::new(PolyVec::<P::Modulus, N>::sample_noise(
        &noise_seed,
        P::ELL as u8,
        P::ELL,
    )?);

    // Y1 = A·X1 + E1
    let x1_hat = Zeroizing::new(x1.to_ntt());
    let mut y1 = a.mul_vec(&x1_hat);
    y1.add_assign(&e1);

    let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
    pk[..KCL_MATRIX_SEED_BYTES].copy_from_slice(&matrix_seed);
    pack_truncated::<P, N>(&y1, &mut pk[KCL_MATRIX_SEED_BYTES..])?;

    let mut sk = Zeroizing::new(vec![0u8; P::SECRET_KEY_BYTES]);
    pack_small::<P, N>(&x1, &mut sk)?;

    debug!(pk_bytes = pk.len(), sk_bytes = sk.len(), "keypair generated");
    Ok((pk, sk))
}

/// Encapsulates to a packed public key using a 31-byte noise seed.
#[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
pub(crate) fn encapsulate<P: KclParams<N>, const N: usize>(
    pk: &[u8],
    seed: &[u8; KCL_ENCAPS_SEED_BYTES],
) -> Result<EncapsulationBytes> {
    let () = P::CHECK;

    validate::key(
        pk.len() == P::PUBLIC_KEY_BYTES,
        P::NAME,
        "public key has the wrong length",
    )?;
    let (seed_bytes, packed) = pk.split_at(KCL_MATRIX_SEED_BYTES);
    let mut matrix_seed = [0u8; KCL_MATRIX_SEED_BYTES];
    matrix_seed.copy_from_slice(seed_bytes);
    let y1 = unpack_truncated::<P, N>(packed).map_err(|_| Error::InvalidKey {
        key_type: P::NAME,
        reason: "public vector out of range",
    })?;

    let at = Matrix::<P::Modulus, N>::uniform(&matrix_seed, P::ELL, true)?;
    trace!(rank = at.rank(), "transposed matrix expanded");

    let x2 = Zeroizing::new(PolyVec::<P::Modulus, N>::sample_noise(seed, 0, P::ELL)?);
    let e2 = Zeroizing::new(PolyVec::<P::Modulus, N>::sample_noise(
        seed,
        P::ELL as u8,
        P::ELL,
    )?);
    let e_sigma = Zeroizing::new(PolyVec::<P::Modulus, N>::sample_noise(
        seed,
        (2 * P::ELL) as u8,
        1,
    )?);

    // Y2 = Aᵀ·X2 + E2
    let x2_hat = Zeroizing::new(x2.to_ntt());
    let mut y2 = at.mul_vec(&x2_hat);
    y2.add_assign(&e2);

    // σ2 = ⟨Y1, X2⟩ + Eσ, over the detruncated Y1
    let mut sigma2 = Zeroizing::new(y1.to_ntt().inner_product(&x2_hat));
    sigma2.add_assign(&e_sigma.polys()[0]);

    let (keys, signal) = P::CONSENSUS.con_poly(&*sigma2);

    let split = P::ELL * truncated_poly_bytes::<P, N>();
    let mut ct = vec![0u8; P::CIPHERTEXT_BYTES];
    pack_truncated::<P, N>(&y2, &mut ct[..split])?;
    pack_signal::<P, N>(&signal, &mut ct[split..])?;

    let mut ss = Zeroizing::new(vec![0u8; P::SHARED_SECRET_BYTES]);
    pack_key_bits(&*keys, &mut ss)?;

    debug!(ct_bytes = ct.len(), ss_bytes = ss.len(), "encapsulated");
    Ok((ct, ss))
}

/// Recovers the shared secret from a packed secret key and ciphertext.
///
/// A reconciliation failure is indistinguishable from success: it produces a
/// different shared secret, never an error.
#[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
pub(crate) fn decapsulate<P: KclParams<N>, const N: usize>(
    sk: &[u8],
    ct: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let () = P::CHECK;

    validate::key(
        sk.len() == P::SECRET_KEY_BYTES,
        P::NAME,
        "secret key has the wrong length",
    )?;
    validate::ciphertext(
        ct.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "ciphertext has the wrong length",
    )?;

    let x1 = Zeroizing::new(unpack_small::<P, N>(sk).map_err(|_| Error::InvalidKey {
        key_type: P::NAME,
        reason: "secret coefficient out of range",
    })?);

    let (y2_bytes, signal_bytes) = ct.split_at(P::ELL * truncated_poly_bytes::<P, N>());
    let y2 = unpack_truncated::<P, N>(y2_bytes).map_err(|_| Error::InvalidCiphertext {
        algorithm: P::NAME,
        reason: "ciphertext vector out of range",
    })?;
    let signal = unpack_signal::<P, N>(signal_bytes).map_err(|_| Error::InvalidCiphertext {
        algorithm: P::NAME,
        reason: "signal out of range",
    })?;

    // σ1 = ⟨X1, Y2⟩ over the detruncated Y2
    let x1_hat = Zeroizing::new(x1.to_ntt());
    let sigma1 = Zeroizing::new(x1_hat.inner_product(&y2.to_ntt()));
    let keys = P::CONSENSUS.rec_poly(&*sigma1, &signal);

    let mut ss = Zeroizing::new(vec![0u8; P::SHARED_SECRET_BYTES]);
    pack_key_bits(&*keys, &mut ss)?;

    debug!(ss_bytes = ss.len(), "decapsulated");
    Ok(ss)
}
