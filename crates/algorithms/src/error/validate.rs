//! Validation utilities for primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a coefficient lies below a bound
#[inline(always)]
pub fn below(value: u32, bound: u32, name: &'static str) -> Result<()> {
    if value >= bound {
        return Err(Error::param(
            name,
            format!("value {} out of range (must be < {})", value, bound),
        ));
    }
    Ok(())
}
