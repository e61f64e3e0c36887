/// Integer avalanche hash of a 2D lattice point.
#[inline]
pub fn hash2(ix: i32, iz: i32, seed: u32) -> u32 {
    let mut h = (ix as u32).wrapping_mul(0x85eb_ca6b)
        ^ (iz as u32).wrapping_mul(0xc2b2_ae35)
        ^ seed.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Uniform roll in `[0, 1)` for `(ix, iz)`; `salt` separates independent rolls
/// at the same cell.
#[inline]
pub fn rand01(seed: u32, ix: i32, iz: i32, salt: u32) -> f64 {
    let h = hash2(ix, iz, (seed ^ salt).wrapping_add(0x9E37_79B9));
    f64::from(h & 0x00FF_FFFF) / 16_777_216.0
}
