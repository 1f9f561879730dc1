//! serialize.rs - Fixed-width bit packing
//!
//! Values are packed eight at a time into `width` bytes, most significant
//! bit of the first value first. Every packed length is therefore a whole
//! number of bytes and the layout does not depend on the platform.

use crate::error::{validate, Error, Result};

/// Widest supported field in bits
pub const MAX_WIDTH: u32 = 16;

/// Bytes needed to pack `count` values of `width` bits (`count` a multiple of 8)
pub const fn bytes_required(count: usize, width: u32) -> usize {
    count / 8 * width as usize
}

fn check_shape(count: usize, width: u32, bytes: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::param(
            "width",
            format!("bit width must be in 1..={}, got {}", MAX_WIDTH, width),
        ));
    }
    validate::parameter(count % 8 == 0, "count", "value count must be a multiple of 8")?;
    validate::length("packed buffer", bytes, bytes_required(count, width))
}

/// Pack `values` into `out` using `width` bits each.
///
/// Every value must fit in `width` bits.
pub fn compress(values: &[u32], width: u32, out: &mut [u8]) -> Result<()> {
    check_shape(values.len(), width, out.len())?;
    let limit = 1u32 << width;
    let w = width as usize;

    for (group, dst) in values.chunks_exact(8).zip(out.chunks_exact_mut(w)) {
        let mut acc: u128 = 0;
        for &v in group {
            validate::below(v, limit, "packed value")?;
            acc = (acc << width) | v as u128;
        }
        for (k, byte) in dst.iter_mut().enumerate() {
            *byte = (acc >> (8 * (w - 1 - k))) as u8;
        }
    }
    Ok(())
}

/// Unpack `out.len()` values of `width` bits from `bytes`
pub fn decompress(bytes: &[u8], width: u32, out: &mut [u32]) -> Result<()> {
    check_shape(out.len(), width, bytes.len())?;
    let mask = (1u128 << width) - 1;
    let w = width as usize;

    for (src, group) in bytes.chunks_exact(w).zip(out.chunks_exact_mut(8)) {
        let acc = src.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128);
        for (j, v) in group.iter_mut().enumerate() {
            *v = ((acc >> (width as usize * (7 - j))) & mask) as u32;
        }
    }
    Ok(())
}
