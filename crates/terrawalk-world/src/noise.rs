//! Seeded 2D value noise with quintic fade.

use crate::hash::hash2;

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ValueNoise {
    seed: u32,
}

impl ValueNoise {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Lattice value in `[-1, 1)`.
    #[inline]
    pub fn lattice(&self, ix: i32, iz: i32) -> f64 {
        let h = hash2(ix, iz, self.seed);
        f64::from(h & 0x00FF_FFFF) / 8_388_608.0 - 1.0
    }

    /// Faded bilinear blend of the four lattice corners around `(x, z)`.
    pub fn value_at(&self, x: f64, z: f64) -> f64 {
        let fx = x.floor();
        let fz = z.floor();
        let ix = fx as i32;
        let iz = fz as i32;
        let u = fade(x - fx);
        let v = fade(z - fz);
        let a = self.lattice(ix, iz);
        let b = self.lattice(ix.wrapping_add(1), iz);
        let c = self.lattice(ix, iz.wrapping_add(1));
        let d = self.lattice(ix.wrapping_add(1), iz.wrapping_add(1));
        lerp(lerp(a, b, u), lerp(c, d, u), v)
    }

    #[inline]
    pub fn interpolated(&self, x: f64, z: f64, scale: f64) -> f64 {
        self.value_at(x * scale, z * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_endpoints_and_midpoint() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn value_matches_lattice_at_integer_points() {
        let n = ValueNoise::new(3);
        for (x, z) in [(0, 0), (5, -2), (-17, 40)] {
            assert_eq!(n.value_at(f64::from(x), f64::from(z)), n.lattice(x, z));
        }
    }

    #[test]
    fn seed_changes_field() {
        let a = ValueNoise::new(1);
        let b = ValueNoise::new(2);
        let differs = (0..32).any(|i| a.value_at(i as f64 * 0.37, 1.5) != b.value_at(i as f64 * 0.37, 1.5));
        assert!(differs);
    }
}
