//! params.rs - Coefficient moduli and their NTT tables

use super::ntt::NttTables;
use super::reduce::Reducer;

/// Basic trait defining the coefficient modulus of a polynomial ring
pub trait Modulus: 'static {
    /// The modulus Q for coefficient arithmetic
    const Q: u32;

    /// Montgomery and Barrett constants for Q
    const REDUCER: Reducer = Reducer::new(Self::Q);

    /// Bit length of Q, used as the rejection-sampling mask width
    const BITS: u32 = 32 - Self::Q.leading_zeros();
}

/// Moduli supporting a negacyclic NTT of length `N`
///
/// Requires `2N | Q - 1`. The tables are built at compile time and live in a
/// `static`, shared read-only by every caller.
pub trait NttModulus<const N: usize>: Modulus {
    /// Precomputed twiddle, twist and permutation tables
    fn tables() -> &'static NttTables<N>;
}

/// q = 7681 = 15·2^9 + 1, used with N = 256
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Q7681;

impl Modulus for Q7681 {
    const Q: u32 = 7681;
}

static Q7681_N256: NttTables<256> = NttTables::new(7681);

impl NttModulus<256> for Q7681 {
    fn tables() -> &'static NttTables<256> {
        &Q7681_N256
    }
}

/// q = 12289 = 3·2^12 + 1, used with N = 1024
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Q12289;

impl Modulus for Q12289 {
    const Q: u32 = 12289;
}

static Q12289_N1024: NttTables<1024> = NttTables::new(12289);

impl NttModulus<1024> for Q12289 {
    fn tables() -> &'static NttTables<1024> {
        &Q12289_N1024
    }
}

/// Check if a number is prime (trial division)
pub const fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    if q % 2 == 0 {
        return q == 2;
    }
    let mut i = 3u32;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check if N is a power of 2
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}
