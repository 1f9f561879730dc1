//! polynomial.rs - Ring elements of Z_Q[X]/(X^N + 1) tagged with their domain
//!
//! Every coefficient of every domain is kept canonical in `[0, Q)`; the
//! domain tag records which implicit factors the coefficients carry.
//!
//! | tag | coefficient `i` holds |
//! |-----|------------------------|
//! | [`Standard`] | `a_i` |
//! | [`Montgomery`] | `a_i · φ^i · R` (twisted, one Montgomery factor) |
//! | [`Ntt`] | spectrum of the twisted polynomial, one Montgomery factor |
//!
//! Transitions between tags are only available through the NTT engine, so a
//! value can never be fed to an operation expecting another domain.

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use super::params::Modulus;
use crate::error::{validate, Result};

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for coefficient domains
pub trait Domain: sealed::Sealed + 'static {
    /// Human-readable name, used in debug output
    const NAME: &'static str;
}

/// Canonical coefficients of the polynomial itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standard {}

/// Twisted by `φ^i` and scaled by the Montgomery factor R
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Montgomery {}

/// Spectral representation, scaled by the Montgomery factor R
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ntt {}

impl sealed::Sealed for Standard {}
impl sealed::Sealed for Montgomery {}
impl sealed::Sealed for Ntt {}

impl Domain for Standard {
    const NAME: &'static str = "standard";
}
impl Domain for Montgomery {
    const NAME: &'static str = "montgomery";
}
impl Domain for Ntt {
    const NAME: &'static str = "ntt";
}

/// A polynomial in R_Q = Z_Q[X]/(X^N + 1) in domain `D`
pub struct Polynomial<M: Modulus, const N: usize, D: Domain = Standard> {
    pub(crate) coeffs: [u32; N],
    _marker: PhantomData<fn() -> (M, D)>,
}

impl<M: Modulus, const N: usize, D: Domain> Polynomial<M, N, D> {
    pub(crate) const fn from_raw(coeffs: [u32; N]) -> Self {
        Self {
            coeffs,
            _marker: PhantomData,
        }
    }

    /// The all-zero polynomial (zero in every domain)
    pub const fn zero() -> Self {
        Self::from_raw([0u32; N])
    }

    /// Returns the degree N of the ring
    pub const fn degree() -> usize {
        N
    }

    /// Returns the modulus Q for coefficient arithmetic
    pub const fn modulus_q() -> u32 {
        M::Q
    }

    /// Read-only view of the coefficients
    pub fn coeffs(&self) -> &[u32; N] {
        &self.coeffs
    }

    /// Coefficient-wise addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let red = M::REDUCER;
        let mut out = [0u32; N];
        for (o, (a, b)) in out.iter_mut().zip(self.coeffs.iter().zip(other.coeffs.iter())) {
            *o = red.add(*a, *b);
        }
        Self::from_raw(out)
    }

    /// In-place coefficient-wise addition modulo Q
    pub fn add_assign(&mut self, other: &Self) {
        let red = M::REDUCER;
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = red.add(*a, *b);
        }
    }

    /// Coefficient-wise subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let red = M::REDUCER;
        let mut out = [0u32; N];
        for (o, (a, b)) in out.iter_mut().zip(self.coeffs.iter().zip(other.coeffs.iter())) {
            *o = red.sub(*a, *b);
        }
        Self::from_raw(out)
    }
}

impl<M: Modulus, const N: usize> Polynomial<M, N, Standard> {
    /// Creates a polynomial from canonical coefficients.
    ///
    /// Fails if the slice length differs from N or a coefficient is not below Q.
    pub fn from_coeffs(coeffs: &[u32]) -> Result<Self> {
        validate::length("Polynomial::from_coeffs", coeffs.len(), N)?;
        let mut out = [0u32; N];
        for (o, &c) in out.iter_mut().zip(coeffs.iter()) {
            validate::below(c, M::Q, "coefficient")?;
            *o = c;
        }
        Ok(Self::from_raw(out))
    }

    /// Creates a polynomial from signed coefficients, reducing them modulo Q
    pub fn from_signed(coeffs: &[i32]) -> Result<Self> {
        validate::length("Polynomial::from_signed", coeffs.len(), N)?;
        let q = M::Q as i64;
        let mut out = [0u32; N];
        for (o, &c) in out.iter_mut().zip(coeffs.iter()) {
            *o = (c as i64).rem_euclid(q) as u32;
        }
        Ok(Self::from_raw(out))
    }

    /// Draws every coefficient uniformly from `[0, Q)`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut out = [0u32; N];
        for c in out.iter_mut() {
            *c = rng.gen_range(0..M::Q);
        }
        Self::from_raw(out)
    }

    /// Centered representative of coefficient `i`, in `(-Q/2, Q/2]`
    pub fn centered(&self, i: usize) -> i32 {
        let c = self.coeffs[i] as i32;
        let q = M::Q as i32;
        if c > q / 2 {
            c - q
        } else {
            c
        }
    }

    /// Largest centered absolute value over all coefficients
    pub fn infinity_norm(&self) -> u32 {
        (0..N).map(|i| self.centered(i).unsigned_abs()).max().unwrap_or(0)
    }

    /// Negacyclic schoolbook multiplication, O(N²).
    ///
    /// Reference oracle for the NTT-based product.
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let q = M::Q as u64;
        let mut acc = vec![0u64; N];
        for i in 0..N {
            let a = self.coeffs[i] as u64;
            if a == 0 {
                continue;
            }
            for j in 0..N {
                let prod = a * other.coeffs[j] as u64 % q;
                let k = i + j;
                if k < N {
                    acc[k] += prod;
                } else {
                    // X^N = -1
                    acc[k - N] += q - prod;
                }
            }
        }
        let mut out = [0u32; N];
        for (o, a) in out.iter_mut().zip(acc.iter()) {
            *o = (a % q) as u32;
        }
        Self::from_raw(out)
    }
}

impl<M: Modulus, const N: usize, D: Domain> Clone for Polynomial<M, N, D> {
    fn clone(&self) -> Self {
        Self::from_raw(self.coeffs)
    }
}

impl<M: Modulus, const N: usize, D: Domain> PartialEq for Polynomial<M, N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<M: Modulus, const N: usize, D: Domain> Eq for Polynomial<M, N, D> {}

impl<M: Modulus, const N: usize, D: Domain> fmt::Debug for Polynomial<M, N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial<q={}, n={}, {}>", M::Q, N, D::NAME)?;
        f.debug_list().entries(self.coeffs.iter().take(8)).finish()?;
        if N > 8 {
            write!(f, "..")?;
        }
        Ok(())
    }
}

impl<M: Modulus, const N: usize, D: Domain> Zeroize for Polynomial<M, N, D> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}
