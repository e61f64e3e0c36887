//! Surface classification from height, temperature and slope.

use terrawalk_geom::Rgb;

use crate::hash::rand01;
use crate::worldgen::{Biomes, Tint};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    OceanSand,
    OceanStone,
    BeachSand,
    Stone,
    Grass,
    Snow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub biome: Biome,
    /// Whether trees may be rolled for this cell.
    pub vegetation: bool,
}

impl Classification {
    const fn bare(biome: Biome) -> Self {
        Self {
            biome,
            vegetation: false,
        }
    }
}

/// Largest diagonal height delta across a cell's four corners.
#[inline]
pub fn cell_slope(h00: f64, h10: f64, h01: f64, h11: f64) -> f64 {
    (h00 - h11).abs().max((h10 - h01).abs())
}

pub fn classify(height: f64, temperature: f64, slope: f64, b: &Biomes) -> Classification {
    let warm_and_gentle = temperature > b.warm_temperature && slope < b.steep_slope;
    if height <= b.ocean_level {
        if warm_and_gentle {
            Classification::bare(Biome::OceanSand)
        } else {
            Classification::bare(Biome::OceanStone)
        }
    } else if height <= b.beach_max {
        if warm_and_gentle {
            Classification::bare(Biome::BeachSand)
        } else {
            Classification::bare(Biome::Stone)
        }
    } else if height <= b.highland_max {
        if warm_and_gentle {
            Classification {
                biome: Biome::Grass,
                vegetation: true,
            }
        } else if slope > b.steep_slope {
            Classification::bare(Biome::Stone)
        } else {
            Classification {
                biome: Biome::Snow,
                vegetation: true,
            }
        }
    } else if slope < b.steep_slope {
        Classification::bare(Biome::Snow)
    } else {
        Classification::bare(Biome::Stone)
    }
}

pub fn tint(biome: Biome, b: &Biomes) -> Tint {
    let p = &b.colors;
    match biome {
        Biome::OceanSand => p.ocean_sand,
        Biome::OceanStone => p.ocean_stone,
        Biome::BeachSand => p.beach_sand,
        Biome::Stone => p.stone,
        Biome::Grass => p.grass,
        Biome::Snow => p.snow,
    }
}

const SALT_HUE: u32 = 0x1b87_3593;
const SALT_SAT: u32 = 0x5bd1_e995;
const SALT_LIGHT: u32 = 0x68e3_1da4;

/// Per-cell jittered color, stable for a given seed and cell.
pub fn jittered_color(t: Tint, seed: u32, x: i32, z: i32, salt: u32) -> Rgb {
    let rolls = [
        rand01(seed, x, z, SALT_HUE ^ salt) as f32,
        rand01(seed, x, z, SALT_SAT ^ salt) as f32,
        rand01(seed, x, z, SALT_LIGHT ^ salt) as f32,
    ];
    t.color.jittered(t.variance, rolls)
}
