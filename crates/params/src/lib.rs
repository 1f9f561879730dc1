//! Constant values for the kcl library
//!
//! Plain `const` tables describing every parameter set and the sizes of the
//! symmetric building blocks. The algorithm crates derive their types and
//! compile-time checks from these values.

pub mod pqc;
pub mod utils;
