//! Polynomial vectors and the public matrix.

use kcl_algorithms::error::Result as AlgoResult;
use kcl_algorithms::poly::params::NttModulus;
use kcl_algorithms::poly::polynomial::{Domain, Ntt, Polynomial, Standard};
use kcl_algorithms::poly::sampling::{DefaultSamplers, NoiseSampler, UniformSampler};
use zeroize::Zeroize;

/// A vector of ELL polynomials in one domain.
pub struct PolyVec<M: NttModulus<N>, const N: usize, D: Domain = Standard> {
    pub(crate) polys: Vec<Polynomial<M, N, D>>,
}

impl<M: NttModulus<N>, const N: usize, D: Domain> PolyVec<M, N, D> {
    /// Wraps an existing list of polynomials.
    pub fn from_polys(polys: Vec<Polynomial<M, N, D>>) -> Self {
        Self { polys }
    }

    /// Number of polynomials.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// The polynomials in order.
    pub fn polys(&self) -> &[Polynomial<M, N, D>] {
        &self.polys
    }

    /// Adds another vector to this one, coefficient-wise.
    pub fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }
}

impl<M: NttModulus<N>, const N: usize> PolyVec<M, N, Standard> {
    /// Samples `len` noise polynomials using nonces `first_nonce..first_nonce + len`.
    pub fn sample_noise(seed: &[u8; 31], first_nonce: u8, len: usize) -> AlgoResult<Self> {
        let mut polys = Vec::with_capacity(len);
        for i in 0..len {
            let nonce = first_nonce.wrapping_add(i as u8);
            polys.push(<DefaultSamplers as NoiseSampler<M, N>>::sample_noise(seed, nonce)?);
        }
        Ok(Self { polys })
    }

    /// Moves every polynomial into the NTT domain.
    pub fn to_ntt(&self) -> PolyVec<M, N, Ntt> {
        PolyVec {
            polys: self.polys.iter().map(|p| p.pre_ntt().ntt()).collect(),
        }
    }
}

impl<M: NttModulus<N>, const N: usize> PolyVec<M, N, Ntt> {
    /// Module inner product `Σ self[i]·other[i]`, returned in the standard domain.
    pub fn inner_product(&self, other: &Self) -> Polynomial<M, N, Standard> {
        debug_assert_eq!(self.len(), other.len());
        let mut acc = Polynomial::<M, N, Ntt>::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.multiply_accumulate(a, b);
        }
        acc.inverse_ntt().post_ntt()
    }
}

impl<M: NttModulus<N>, const N: usize, D: Domain> Clone for PolyVec<M, N, D> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
        }
    }
}

impl<M: NttModulus<N>, const N: usize, D: Domain> Zeroize for PolyVec<M, N, D> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

/// Diversifier of matrix cell (i, j): little-endian u64 of `i·256 + j`
pub fn cell_diversifier(i: usize, j: usize) -> [u8; 8] {
    ((i as u64) << 8 | j as u64).to_le_bytes()
}

/// The ELL×ELL public matrix, held in the NTT domain.
pub struct Matrix<M: NttModulus<N>, const N: usize> {
    rows: Vec<PolyVec<M, N, Ntt>>,
}

impl<M: NttModulus<N>, const N: usize> Matrix<M, N> {
    /// Expands the matrix from its seed.
    ///
    /// Cell (i, j) is always sampled with the diversifier of (i, j); with
    /// `transpose` set it is stored at (j, i) instead.
    pub fn uniform(seed: &[u8; 32], ell: usize, transpose: bool) -> AlgoResult<Self> {
        let mut cells: Vec<Vec<Option<Polynomial<M, N, Ntt>>>> =
            (0..ell).map(|_| (0..ell).map(|_| None).collect()).collect();
        for i in 0..ell {
            for j in 0..ell {
                let a = <DefaultSamplers as UniformSampler<M, N>>::sample_uniform(
                    seed,
                    &cell_diversifier(i, j),
                )?;
                let (r, c) = if transpose { (j, i) } else { (i, j) };
                cells[r][c] = Some(a.pre_ntt().ntt());
            }
        }
        let rows = cells
            .into_iter()
            .map(|row| PolyVec::from_polys(row.into_iter().flatten().collect()))
            .collect();
        Ok(Self { rows })
    }

    /// Rank of the matrix.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// `self · v`, returned in the standard domain.
    pub fn mul_vec(&self, v: &PolyVec<M, N, Ntt>) -> PolyVec<M, N, Standard> {
        PolyVec::from_polys(self.rows.iter().map(|row| row.inner_product(v)).collect())
    }
}
