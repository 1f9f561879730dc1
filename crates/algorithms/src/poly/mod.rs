//! Polynomial engine for the rings Z_Q[X]/(X^N + 1)
//!
//! Reduction constants, NTT tables, domain-tagged polynomials, deterministic
//! samplers and fixed-width packing. The KEM layer builds everything on top
//! of these pieces.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{transform, Direction, NttTables};
    pub use super::params::{Modulus, NttModulus, Q12289, Q7681};
    pub use super::polynomial::{Domain, Montgomery, Ntt, Polynomial, Standard};
    pub use super::reduce::Reducer;
    pub use super::sampling::{DefaultSamplers, NoiseSampler, UniformSampler};
    pub use super::serialize::{bytes_required, compress, decompress};
}
