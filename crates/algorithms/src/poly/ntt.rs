//! ntt.rs - Negacyclic Number Theoretic Transform
//!
//! Multiplication in Z_Q[X]/(X^N + 1) is folded into a length-N cyclic
//! transform by twisting coefficient `i` with `φ^i`, where φ is a primitive
//! 2N-th root of unity and ω = φ² drives the cyclic NTT:
//!
//! ```text
//! a·b = post( NTT⁻¹( NTT(pre(a)) ∘ NTT(pre(b)) ) )
//! ```
//!
//! ## Montgomery bookkeeping
//! - `pre_ntt`: `redc(a_i · φ^i·R²)` = `a_i·φ^i·R`
//! - `ntt` / `inverse_ntt`: linear, Shoup multiplications by plain twiddles;
//!   the inverse also scales by N⁻¹, so both directions keep exactly one R
//! - `pointwise_multiply`: `redc(aR · bR)` = `ab·R`
//! - `post_ntt`: `redc(c_i·φ^i·R · φ^(-i))` = `c_i`
//!
//! ## Network
//! Gentleman–Sande (decimation in frequency) over log₂N stages in natural
//! input order, each butterfly
//!
//! ```text
//! X' = (X + Y) mod 2q
//! Y' = ((X - Y) mod 2q) · ω^k mod q
//! ```
//!
//! followed by a bit-reversal permutation that also brings every value back
//! to `[0, q)`. Stage s+1 reads what stage s wrote, so stages run strictly in
//! order; butterflies inside one stage are independent.

use super::params::NttModulus;
use super::polynomial::{Montgomery, Ntt, Polynomial, Standard};
use super::reduce::Reducer;

/// Transform direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// ω^k twiddles
    Forward,
    /// ω^(-k) twiddles, output scaled by N⁻¹
    Inverse,
}

/// Precomputed tables for one (modulus, length) pair
///
/// All tables are computed by `const fn` and stored in a `static`; nothing
/// here is ever mutated.
#[derive(Debug)]
pub struct NttTables<const N: usize> {
    q: u32,
    phi: u32,
    /// ω^k for k in 0..N
    omega_pow: [u32; N],
    /// Shoup companions of `omega_pow`
    omega_shoup: [u32; N],
    /// φ^i·R² mod q
    pre: [u32; N],
    /// φ^(-i) mod q
    post: [u32; N],
    bitrev: [u16; N],
    n_inv: u32,
    n_inv_shoup: u32,
}

impl<const N: usize> NttTables<N> {
    /// Build the tables for modulus `q`.
    ///
    /// Fails to compile (when used in a `static`) unless N is a power of two
    /// no larger than 2^15 and `2N | q - 1`.
    pub const fn new(q: u32) -> Self {
        assert!(N >= 2 && N & (N - 1) == 0, "N must be a power of two");
        assert!(N <= 1 << 15, "N too large for the bit-reversal table");
        assert!((q - 1) as usize % (2 * N) == 0, "2N must divide q - 1");

        let red = Reducer::new(q);
        let phi = find_phi(&red, N);
        let omega = red.pow(phi, 2);
        let phi_inv = red.pow(phi, (2 * N - 1) as u64);

        let mut omega_pow = [0u32; N];
        let mut omega_shoup = [0u32; N];
        let mut pre = [0u32; N];
        let mut post = [0u32; N];
        let mut bitrev = [0u16; N];

        let log_n = N.trailing_zeros();
        let mut w = 1u32;
        let mut f = 1u32;
        let mut f_inv = 1u32;
        let mut i = 0;
        while i < N {
            omega_pow[i] = w;
            omega_shoup[i] = red.shoup(w);
            pre[i] = ((f as u64 * red.r2() as u64) % q as u64) as u32;
            post[i] = f_inv;
            bitrev[i] = ((i as u32).reverse_bits() >> (32 - log_n)) as u16;

            w = ((w as u64 * omega as u64) % q as u64) as u32;
            f = ((f as u64 * phi as u64) % q as u64) as u32;
            f_inv = ((f_inv as u64 * phi_inv as u64) % q as u64) as u32;
            i += 1;
        }

        let n_inv = red.pow(N as u32, (q - 2) as u64);
        Self {
            q,
            phi,
            omega_pow,
            omega_shoup,
            pre,
            post,
            bitrev,
            n_inv,
            n_inv_shoup: red.shoup(n_inv),
        }
    }

    /// The primitive 2N-th root of unity the tables were built from
    pub const fn phi(&self) -> u32 {
        self.phi
    }

    /// The modulus the tables were built for
    pub const fn modulus(&self) -> u32 {
        self.q
    }

    /// Bit-reversal permutation of `0..N`
    pub fn bit_reversal(&self) -> &[u16; N] {
        &self.bitrev
    }
}

/// Smallest primitive 2N-th root of unity modulo `q`
///
/// φ = g^((q-1)/2N) has order dividing 2N; it is primitive exactly when
/// φ^N = -1.
const fn find_phi(red: &Reducer, n: usize) -> u32 {
    let q = red.q();
    let exp = ((q - 1) as usize / (2 * n)) as u64;
    let mut g = 2u32;
    while g < q {
        let phi = red.pow(g, exp);
        if red.pow(phi, n as u64) == q - 1 {
            return phi;
        }
        g += 1;
    }
    panic!("no primitive 2N-th root of unity");
}

/// In-place cyclic transform of coefficients in `[0, q)`; output in `[0, q)`
pub fn transform<const N: usize>(
    coeffs: &mut [u32; N],
    tables: &NttTables<N>,
    red: &Reducer,
    direction: Direction,
) {
    let q = red.q();
    let two_q = 2 * q;

    let mut h = N / 2;
    let mut stride = 1;
    while h >= 1 {
        for start in (0..N).step_by(2 * h) {
            for j in 0..h {
                let e = j * stride;
                let idx = match direction {
                    Direction::Forward => e,
                    Direction::Inverse => (N - e) % N,
                };
                let x = coeffs[start + j];
                let y = coeffs[start + j + h];
                debug_assert!(x < two_q && y < two_q);
                coeffs[start + j] = red.barrett_reduce(x + y, 1);
                let diff = red.reduce_once(x + two_q - y, two_q);
                coeffs[start + j + h] =
                    red.shoup_mul(diff, tables.omega_pow[idx], tables.omega_shoup[idx]);
            }
        }
        h /= 2;
        stride *= 2;
    }

    let mut out = [0u32; N];
    for (k, o) in out.iter_mut().enumerate() {
        let v = coeffs[tables.bitrev[k] as usize];
        *o = match direction {
            Direction::Forward => red.reduce_once(v, q),
            Direction::Inverse => red.shoup_mul(v, tables.n_inv, tables.n_inv_shoup),
        };
    }
    *coeffs = out;
}

impl<M: NttModulus<N>, const N: usize> Polynomial<M, N, Standard> {
    /// Twist by `φ^i` and enter Montgomery form
    pub fn pre_ntt(&self) -> Polynomial<M, N, Montgomery> {
        let red = M::REDUCER;
        let pre = &M::tables().pre;
        let mut out = [0u32; N];
        for (i, o) in out.iter_mut().enumerate() {
            *o = red.mont_mul(self.coeffs[i], pre[i]);
        }
        Polynomial::from_raw(out)
    }

    /// Full ring multiplication through the NTT
    pub fn ring_multiply(&self, other: &Self) -> Self {
        self.pre_ntt()
            .ntt()
            .pointwise_multiply(&other.pre_ntt().ntt())
            .inverse_ntt()
            .post_ntt()
    }
}

impl<M: NttModulus<N>, const N: usize> Polynomial<M, N, Montgomery> {
    /// Forward transform
    pub fn ntt(mut self) -> Polynomial<M, N, Ntt> {
        transform(&mut self.coeffs, M::tables(), &M::REDUCER, Direction::Forward);
        Polynomial::from_raw(self.coeffs)
    }

    /// Undo the twist and leave Montgomery form
    pub fn post_ntt(&self) -> Polynomial<M, N, Standard> {
        let red = M::REDUCER;
        let post = &M::tables().post;
        let mut out = [0u32; N];
        for (i, o) in out.iter_mut().enumerate() {
            *o = red.mont_mul(self.coeffs[i], post[i]);
        }
        Polynomial::from_raw(out)
    }
}

impl<M: NttModulus<N>, const N: usize> Polynomial<M, N, Ntt> {
    /// Inverse transform, scaled by N⁻¹
    pub fn inverse_ntt(mut self) -> Polynomial<M, N, Montgomery> {
        transform(&mut self.coeffs, M::tables(), &M::REDUCER, Direction::Inverse);
        Polynomial::from_raw(self.coeffs)
    }

    /// Coefficient-wise product; one Montgomery factor is consumed
    pub fn pointwise_multiply(&self, other: &Self) -> Self {
        let red = M::REDUCER;
        let mut out = [0u32; N];
        for (o, (a, b)) in out.iter_mut().zip(self.coeffs.iter().zip(other.coeffs.iter())) {
            *o = red.mont_mul(*a, *b);
        }
        Polynomial::from_raw(out)
    }

    /// `self += a ∘ b`, the accumulation step of a module inner product
    pub fn multiply_accumulate(&mut self, a: &Self, b: &Self) {
        let red = M::REDUCER;
        for (acc, (x, y)) in self.coeffs.iter_mut().zip(a.coeffs.iter().zip(b.coeffs.iter())) {
            *acc = red.add(*acc, red.mont_mul(*x, *y));
        }
    }
}
