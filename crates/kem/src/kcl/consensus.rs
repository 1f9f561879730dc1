//! Key consensus: Con and Rec
//!
//! Con runs at encapsulation over `σ2`, producing one key bit and one public
//! signal per coefficient. Rec runs at decapsulation over `σ1`, which differs
//! from `σ2` by accumulated noise, and recovers the same bit from the signal.
//!
//! With a signal modulus g and one key bit per coefficient, both strategies
//! agree whenever `|σ1 - σ2| mod q < q(g-1)/4g`. All divisions by q go
//! through Barrett division; nothing branches on the secret inputs.

use kcl_algorithms::poly::params::Modulus;
use kcl_algorithms::poly::polynomial::{Polynomial, Standard};
use kcl_algorithms::poly::reduce::Reducer;
use kcl_params::pqc::kcl::{ConsensusKind, KclParamSet};
use zeroize::Zeroizing;

/// Asymmetric key consensus with signal modulus g = 2^b
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Akcn {
    log_g: u32,
}

impl Akcn {
    /// Strategy for signal modulus `g`, a power of two
    pub const fn new(g: u32) -> Self {
        assert!(g >= 2 && g.is_power_of_two(), "AKCN signal modulus must be a power of two");
        Self {
            log_g: g.trailing_zeros(),
        }
    }

    /// Signal modulus
    pub const fn g(&self) -> u32 {
        1 << self.log_g
    }

    /// `z = ⌊(2g·x + ⌊q/2⌋) / q⌋ mod 2g`; the top bit of z is the key, the rest
    /// is the signal.
    #[inline]
    pub fn con(&self, red: &Reducer, x: u32) -> (u32, u32) {
        debug_assert!(x < red.q());
        let g = self.g();
        let z = red.barrett_divide(2 * g * x + red.q() / 2, 0) & (2 * g - 1);
        (z >> self.log_g, z & (g - 1))
    }

    /// `⌊(4g·y + 5g·q - 2q·v) / 2gq⌋ mod 2`
    #[inline]
    pub fn rec(&self, red: &Reducer, y: u32, v: u32) -> u32 {
        debug_assert!(y < red.q() && v < self.g());
        let g = self.g();
        let q = red.q();
        let num = 4 * g * y + 5 * g * q - 2 * q * v;
        red.barrett_divide(num, self.log_g + 1) & 1
    }
}

/// Optimally-balanced key consensus with an arbitrary signal modulus g
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Okcn {
    g: u32,
}

impl Okcn {
    /// Strategy for signal modulus `g >= 2`
    pub const fn new(g: u32) -> Self {
        assert!(g >= 2, "OKCN signal modulus must be at least 2");
        Self { g }
    }

    /// Signal modulus
    pub const fn g(&self) -> u32 {
        self.g
    }

    /// `z = ⌊2g·x / q⌋`, key `⌊z / g⌋`, signal `z mod g`
    #[inline]
    pub fn con(&self, red: &Reducer, x: u32) -> (u32, u32) {
        debug_assert!(x < red.q());
        let z = red.barrett_divide(2 * self.g * x, 0);
        (z / self.g, z % self.g)
    }

    /// `⌊⌊(4g·y + 5g·q - q(2v + 1)) / q⌋ / 2g⌋ mod 2`
    #[inline]
    pub fn rec(&self, red: &Reducer, y: u32, v: u32) -> u32 {
        debug_assert!(y < red.q() && v < self.g);
        let g = self.g;
        let q = red.q();
        let num = 4 * g * y + 5 * g * q - q * (2 * v + 1);
        (red.barrett_divide(num, 0) / (2 * g)) & 1
    }
}

/// The reconciliation strategy of a parameter set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyConsensus {
    /// Power-of-two grid
    Akcn(Akcn),
    /// Arbitrary grid
    Okcn(Okcn),
}

impl KeyConsensus {
    /// Strategy named by a parameter set
    pub const fn for_set(set: &KclParamSet) -> Self {
        match set.consensus {
            ConsensusKind::Akcn => KeyConsensus::Akcn(Akcn::new(set.g)),
            ConsensusKind::Okcn => KeyConsensus::Okcn(Okcn::new(set.g)),
        }
    }

    /// Signal modulus; every signal lies in `[0, g)`
    pub const fn signal_modulus(&self) -> u32 {
        match self {
            KeyConsensus::Akcn(a) => a.g(),
            KeyConsensus::Okcn(o) => o.g(),
        }
    }

    /// Scalar Con: `(key bit, signal)`
    #[inline]
    pub fn con(&self, red: &Reducer, x: u32) -> (u32, u32) {
        match self {
            KeyConsensus::Akcn(a) => a.con(red, x),
            KeyConsensus::Okcn(o) => o.con(red, x),
        }
    }

    /// Scalar Rec: the key bit
    #[inline]
    pub fn rec(&self, red: &Reducer, y: u32, v: u32) -> u32 {
        match self {
            KeyConsensus::Akcn(a) => a.rec(red, y, v),
            KeyConsensus::Okcn(o) => o.rec(red, y, v),
        }
    }

    /// Coefficient-wise Con over a polynomial
    pub fn con_poly<M: Modulus, const N: usize>(
        &self,
        x: &Polynomial<M, N, Standard>,
    ) -> (Zeroizing<[u32; N]>, [u32; N]) {
        let red = M::REDUCER;
        let mut keys = Zeroizing::new([0u32; N]);
        let mut signal = [0u32; N];
        for (i, &c) in x.coeffs().iter().enumerate() {
            let (k, v) = self.con(&red, c);
            keys[i] = k;
            signal[i] = v;
        }
        (keys, signal)
    }

    /// Coefficient-wise Rec over a polynomial
    pub fn rec_poly<M: Modulus, const N: usize>(
        &self,
        y: &Polynomial<M, N, Standard>,
        signal: &[u32; N],
    ) -> Zeroizing<[u32; N]> {
        let red = M::REDUCER;
        let mut keys = Zeroizing::new([0u32; N]);
        for (k, (&c, &v)) in keys.iter_mut().zip(y.coeffs().iter().zip(signal.iter())) {
            *k = self.rec(&red, c, v);
        }
        keys
    }
}
