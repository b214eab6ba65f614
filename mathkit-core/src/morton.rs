//! Morton (Z-order) codes.
//!
//! Interleaves the bits of 2 or 3 coordinates into a single integer so that
//! points close in space tend to be close in code order. The x coordinate
//! always occupies the least significant bit of each group.

/// Maximum coordinate bits per axis for 3D codes (3 × 21 = 63 bits).
pub const MORTON_3D_BITS: u32 = 21;

const MASK_3D: u64 = (1 << MORTON_3D_BITS) - 1;

/// Spread the low 32 bits of `v` so that there is one zero bit between each.
#[inline]
fn spread_2(v: u32) -> u64 {
    let mut x = v as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

#[inline]
fn compact_2(code: u64) -> u32 {
    let mut x = code & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Spread the low 21 bits of `v` so that there are two zero bits between each.
#[inline]
fn spread_3(v: u32) -> u64 {
    let mut x = v as u64 & MASK_3D;
    x = (x | (x << 32)) & 0x001F_0000_0000_FFFF;
    x = (x | (x << 16)) & 0x001F_0000_FF00_00FF;
    x = (x | (x << 8)) & 0x100F_00F0_0F00_F00F;
    x = (x | (x << 4)) & 0x10C3_0C30_C30C_30C3;
    x = (x | (x << 2)) & 0x1249_2492_4924_9249;
    x
}

#[inline]
fn compact_3(code: u64) -> u32 {
    let mut x = code & 0x1249_2492_4924_9249;
    x = (x | (x >> 2)) & 0x10C3_0C30_C30C_30C3;
    x = (x | (x >> 4)) & 0x100F_00F0_0F00_F00F;
    x = (x | (x >> 8)) & 0x001F_0000_FF00_00FF;
    x = (x | (x >> 16)) & 0x001F_0000_0000_FFFF;
    x = (x | (x >> 32)) & MASK_3D;
    x as u32
}

/// Interleave two 32-bit coordinates into a 64-bit code.
pub fn encode_2d(x: u32, y: u32) -> u64 {
    spread_2(x) | (spread_2(y) << 1)
}

pub fn decode_2d(code: u64) -> (u32, u32) {
    (compact_2(code), compact_2(code >> 1))
}

/// Interleave three coordinates into a 63-bit code.
///
/// Only the low [`MORTON_3D_BITS`] bits of each coordinate are kept.
pub fn encode_3d(x: u32, y: u32, z: u32) -> u64 {
    spread_3(x) | (spread_3(y) << 1) | (spread_3(z) << 2)
}

pub fn decode_3d(code: u64) -> (u32, u32, u32) {
    (compact_3(code), compact_3(code >> 1), compact_3(code >> 2))
}
