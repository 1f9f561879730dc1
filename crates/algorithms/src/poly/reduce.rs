//! Division-free modular reduction for moduli below 2^15
//!
//! ## Montgomery form
//! R = 2^32. A value `a` in Montgomery form is stored as `a·R mod q`;
//! `redc` removes one factor of R:
//! - Standard → Montgomery: `redc(a · R²) = a·R`
//! - Montgomery → Standard: `redc(a·R) = a`
//! - Product of two Montgomery values: `redc(aR · bR) = ab·R`
//!
//! ## Barrett
//! The multiplier `M = ⌊2^32 / q⌋` gives a quotient estimate that is at most
//! one below the true quotient for every `u32` input, so one conditional
//! correction is enough.

/// Precomputed reduction constants for one modulus
///
/// Built by `const fn` so every modulus carries its constants at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reducer {
    q: u32,
    /// -q⁻¹ mod 2^32
    q_inv_neg: u32,
    /// R² mod q
    r2: u32,
    /// ⌊2^32 / q⌋
    barrett_m: u32,
}

impl Reducer {
    /// Build the constants for an odd modulus `q < 2^15`.
    ///
    /// Panics (at compile time when used in a `const`) for an unsupported modulus.
    pub const fn new(q: u32) -> Self {
        assert!(q % 2 == 1, "modulus must be odd");
        assert!(q > 2 && q < (1 << 15), "modulus must lie in (2, 2^15)");

        // Newton iteration doubles the number of correct low bits each step;
        // q·q ≡ 1 (mod 8) seeds it with three.
        let mut inv = q;
        let mut i = 0;
        while i < 4 {
            inv = inv.wrapping_mul(2u32.wrapping_sub(q.wrapping_mul(inv)));
            i += 1;
        }

        let r = (1u64 << 32) % q as u64;
        Self {
            q,
            q_inv_neg: inv.wrapping_neg(),
            r2: ((r * r) % q as u64) as u32,
            barrett_m: ((1u64 << 32) / q as u64) as u32,
        }
    }

    /// The modulus
    #[inline(always)]
    pub const fn q(&self) -> u32 {
        self.q
    }

    /// R² mod q, the multiplier that moves a standard value into Montgomery form
    #[inline(always)]
    pub const fn r2(&self) -> u32 {
        self.r2
    }

    /// Montgomery reduction: `x·R⁻¹ mod q`, output in `[0, q)`.
    ///
    /// Requires `x < R·q`.
    #[inline(always)]
    pub const fn redc(&self, x: u64) -> u32 {
        debug_assert!(x < (self.q as u64) << 32);
        let m = (x as u32).wrapping_mul(self.q_inv_neg) as u64;
        let t = ((x + m * self.q as u64) >> 32) as u32;
        self.reduce_once(t, self.q)
    }

    /// Montgomery multiplication: `a·b·R⁻¹ mod q`. Requires `a·b < R·q`.
    #[inline(always)]
    pub const fn mont_mul(&self, a: u32, b: u32) -> u32 {
        self.redc(a as u64 * b as u64)
    }

    /// Standard → Montgomery: `a·R mod q`. Requires `a < 2q`.
    #[inline(always)]
    pub const fn to_montgomery(&self, a: u32) -> u32 {
        self.mont_mul(a, self.r2)
    }

    /// Branch-free conditional subtraction: `x` in `[0, 2·bound)` → `[0, bound)`
    #[inline(always)]
    pub const fn reduce_once(&self, x: u32, bound: u32) -> u32 {
        debug_assert!(x < 2 * bound);
        let mask = ((x >= bound) as u32).wrapping_neg();
        x.wrapping_sub(bound & mask)
    }

    /// `⌊x / (q·2^e)⌋` for any `u32` input
    #[inline(always)]
    pub const fn barrett_divide(&self, x: u32, e: u32) -> u32 {
        debug_assert!(e <= 16);
        let d = self.q << e;
        let est = ((x as u64 * self.barrett_m as u64) >> (32 + e)) as u32;
        // est never exceeds the true quotient and trails it by at most one
        let r = x - est * d;
        est + (r >= d) as u32
    }

    /// `x mod (q·2^e)` for any `u32` input
    #[inline(always)]
    pub const fn barrett_reduce(&self, x: u32, e: u32) -> u32 {
        x - self.barrett_divide(x, e) * (self.q << e)
    }

    /// `(a + b) mod q` for `a, b < q`
    #[inline(always)]
    pub const fn add(&self, a: u32, b: u32) -> u32 {
        self.reduce_once(a + b, self.q)
    }

    /// `(a - b) mod q` for `a, b < q`
    #[inline(always)]
    pub const fn sub(&self, a: u32, b: u32) -> u32 {
        self.reduce_once(a + self.q - b, self.q)
    }

    /// Shoup companion of a constant `w < q`: `⌊w·2^32 / q⌋`
    pub const fn shoup(&self, w: u32) -> u32 {
        (((w as u64) << 32) / self.q as u64) as u32
    }

    /// `a·w mod q` using the precomputed Shoup companion `w_shoup` of `w`.
    ///
    /// Valid for every `u32` input `a`.
    #[inline(always)]
    pub const fn shoup_mul(&self, a: u32, w: u32, w_shoup: u32) -> u32 {
        let est = ((a as u64 * w_shoup as u64) >> 32) as u32;
        let r = a.wrapping_mul(w).wrapping_sub(est.wrapping_mul(self.q));
        self.reduce_once(r, self.q)
    }

    /// `base^exp mod q` in the standard domain
    pub const fn pow(&self, base: u32, mut exp: u64) -> u32 {
        let q = self.q as u64;
        let mut acc = 1u64;
        let mut b = base as u64 % q;
        while exp != 0 {
            if exp & 1 == 1 {
                acc = acc * b % q;
            }
            b = b * b % q;
            exp >>= 1;
        }
        acc as u32
    }
}
