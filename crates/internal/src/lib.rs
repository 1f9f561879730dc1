//! Internal utilities shared by the kcl crates

pub mod constant_time;
