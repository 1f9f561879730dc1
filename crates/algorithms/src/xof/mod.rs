//! Deterministic byte-stream expansion
//!
//! Every pseudorandom value in kcl (the public matrix and all noise) is drawn
//! from a [`SeedExpander`] keyed by a seed that travels in a key or is
//! derived from the top-level seed. Same seed and diversifier, same bytes.

pub mod seedexpander;

pub use seedexpander::SeedExpander;
