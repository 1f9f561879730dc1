//! Constants shared by the symmetric building blocks

pub mod symmetric;
