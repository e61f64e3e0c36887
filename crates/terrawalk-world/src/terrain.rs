//! Elevation, temperature and terrain height synthesis.

use crate::noise::ValueNoise;
use crate::worldgen::Terrain;

/// Climate and height at one integer cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSample {
    pub elevation: f64,
    pub temperature: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug)]
struct Octave {
    divisor: f64,
    weight: f64,
    sign: f64,
    /// Read the noise with `(z, x)` instead of `(x, z)`.
    swap: bool,
}

const fn octave(sign: f64, swap: bool, divisor: f64, weight: f64) -> Octave {
    Octave {
        divisor,
        weight,
        sign,
        swap,
    }
}

const CLIMATE_OCTAVES: [Octave; 4] = [
    octave(1.0, false, 3.0, 1.0),
    octave(-1.0, true, 100.0, 1.0),
    octave(1.0, false, 10.0, 10.0),
    octave(-1.0, false, 1000.0, 100.0),
];

const TERRAIN_OCTAVES: [Octave; 8] = [
    octave(1.0, false, 3.0, 1.0),
    octave(-1.0, true, 100.0, 1.0),
    octave(1.0, false, 10.0, 10.0),
    octave(-1.0, true, 1000.0, 100.0),
    octave(1.0, false, 3000.0, 10.0),
    octave(-1.0, true, 100_000.0, 10.0),
    octave(1.0, false, 10_000.0, 100.0),
    octave(-1.0, true, 1_000_000.0, 1000.0),
];

/// Pure sample synthesis. Memoization lives in [`crate::TerrainField`].
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    noise: ValueNoise,
    params: Terrain,
}

impl TerrainGenerator {
    pub fn new(seed: u32, params: Terrain) -> Self {
        Self {
            noise: ValueNoise::new(seed),
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &Terrain {
        &self.params
    }

    fn octave_sum(&self, octaves: &[Octave], x: f64, z: f64, rate: f64, modifier: f64) -> f64 {
        let g = self.params.gain;
        octaves
            .iter()
            .map(|o| {
                let (a, b) = if o.swap { (z, x) } else { (x, z) };
                let n = self.noise.interpolated(a, b, rate / o.divisor) * g;
                o.sign * n * g * o.weight * modifier
            })
            .sum()
    }

    /// Four-octave sum shared by the elevation and temperature signals.
    pub fn climate(&self, x: f64, z: f64, rate: f64, modifier: f64) -> f64 {
        self.octave_sum(&CLIMATE_OCTAVES, x, z, rate, modifier)
    }

    /// Eight-octave height sum scaled by `modifier`, offset by the base height.
    pub fn height_sum(&self, x: f64, z: f64, modifier: f64) -> f64 {
        self.octave_sum(&TERRAIN_OCTAVES, x, z, self.params.terrain_scale, modifier)
            + self.params.base_height
    }

    pub fn sample(&self, x: i32, z: i32) -> TerrainSample {
        let p = &self.params;
        let (fx, fz) = (f64::from(x), f64::from(z));

        let mut seed = self.climate(fx, fz, p.elevation_rate, p.elevation_seed_modifier);
        if seed <= 0.0 {
            seed = p.elevation_seed_floor;
        }
        let temperature = self.climate(fx, fz, p.temperature_rate, p.temperature_modifier);
        let elevation = self
            .climate(fx, fz, p.elevation_rate, seed)
            .max(p.elevation_floor)
            * p.elevation_factor;

        let mut height = self.height_sum(fx, fz, elevation);
        if height < 0.0 {
            height = -height.abs().powf(p.depth_exponent);
        }
        TerrainSample {
            elevation,
            temperature,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_respects_floor() {
        let g = TerrainGenerator::new(0, Terrain::default());
        for x in (0..2000).step_by(97) {
            for z in (0..2000).step_by(89) {
                let s = g.sample(x, z);
                assert!(s.elevation >= 0.2 - 1e-12, "elevation {} at ({x},{z})", s.elevation);
                assert!(s.height.is_finite() && s.temperature.is_finite());
            }
        }
    }

    #[test]
    fn depths_are_softened() {
        let p = Terrain {
            base_height: -1.0e9,
            ..Terrain::default()
        };
        let g = TerrainGenerator::new(0, p.clone());
        let s = g.sample(10, 10);
        let raw = g.height_sum(10.0, 10.0, s.elevation);
        assert!(raw < 0.0);
        assert_eq!(s.height, -raw.abs().powf(p.depth_exponent));
    }
}
