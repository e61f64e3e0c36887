use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use terrawalk_geom::Rgb;

/// World generation settings, read from the `[world]`, `[terrain]`, `[trees]`
/// and `[biomes]` tables.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub world: World,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub trees: Trees,
    #[serde(default)]
    pub biomes: Biomes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct World {
    /// Edge length of the square world, in cells.
    #[serde(default = "default_world_size")]
    pub size: i32,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
    /// Streaming radius around the player, in chunks.
    #[serde(default = "default_stream_radius")]
    pub stream_radius: i32,
    #[serde(default)]
    pub seed: u32,
    /// Horizontal slack when matching object footprints under a ground probe.
    #[serde(default = "default_ground_tolerance")]
    pub ground_tolerance: f64,
}
fn default_world_size() -> i32 {
    1_000_000
}
fn default_chunk_size() -> i32 {
    25
}
fn default_stream_radius() -> i32 {
    5
}
fn default_ground_tolerance() -> f64 {
    0.6
}
impl Default for World {
    fn default() -> Self {
        Self {
            size: default_world_size(),
            chunk_size: default_chunk_size(),
            stream_radius: default_stream_radius(),
            seed: 0,
            ground_tolerance: default_ground_tolerance(),
        }
    }
}

/// Constants of the octave sums that shape elevation, temperature and height.
#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    /// Multiplier applied to every noise read and again to every octave term.
    #[serde(default = "default_gain")]
    pub gain: f64,
    #[serde(default = "default_terrain_scale")]
    pub terrain_scale: f64,
    #[serde(default = "default_base_height")]
    pub base_height: f64,
    #[serde(default = "default_elevation_rate")]
    pub elevation_rate: f64,
    #[serde(default = "default_elevation_seed_modifier")]
    pub elevation_seed_modifier: f64,
    /// Replaces a non-positive elevation seed.
    #[serde(default = "default_elevation_seed_floor")]
    pub elevation_seed_floor: f64,
    #[serde(default = "default_elevation_floor")]
    pub elevation_floor: f64,
    #[serde(default = "default_elevation_factor")]
    pub elevation_factor: f64,
    #[serde(default = "default_temperature_rate")]
    pub temperature_rate: f64,
    #[serde(default = "default_temperature_modifier")]
    pub temperature_modifier: f64,
    /// Exponent softening depths below zero.
    #[serde(default = "default_depth_exponent")]
    pub depth_exponent: f64,
}
fn default_gain() -> f64 {
    2.0
}
fn default_terrain_scale() -> f64 {
    0.05
}
fn default_base_height() -> f64 {
    10.0
}
fn default_elevation_rate() -> f64 {
    0.005
}
fn default_elevation_seed_modifier() -> f64 {
    0.05
}
fn default_elevation_seed_floor() -> f64 {
    0.1
}
fn default_elevation_floor() -> f64 {
    1.0
}
fn default_elevation_factor() -> f64 {
    0.2
}
fn default_temperature_rate() -> f64 {
    0.01
}
fn default_temperature_modifier() -> f64 {
    10.0
}
fn default_depth_exponent() -> f64 {
    0.9
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            gain: default_gain(),
            terrain_scale: default_terrain_scale(),
            base_height: default_base_height(),
            elevation_rate: default_elevation_rate(),
            elevation_seed_modifier: default_elevation_seed_modifier(),
            elevation_seed_floor: default_elevation_seed_floor(),
            elevation_floor: default_elevation_floor(),
            elevation_factor: default_elevation_factor(),
            temperature_rate: default_temperature_rate(),
            temperature_modifier: default_temperature_modifier(),
            depth_exponent: default_depth_exponent(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    /// Spawn chance per thousand eligible cells.
    #[serde(default = "default_spawn_rate")]
    pub spawn_rate: f64,
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    #[serde(default = "default_max_size")]
    pub max_size: f64,
    /// Exclusive terrain height band where trees may grow.
    #[serde(default = "default_min_height")]
    pub min_height: f64,
    #[serde(default = "default_max_height")]
    pub max_height: f64,
    /// How far the tree base sinks below the terrain surface.
    #[serde(default = "default_root_depth")]
    pub root_depth: f64,
    #[serde(default = "default_layers")]
    pub layers: u32,
    #[serde(default = "default_bark")]
    pub bark: Tint,
    #[serde(default = "default_foliage")]
    pub foliage: Tint,
}
fn default_spawn_rate() -> f64 {
    2.0
}
fn default_min_size() -> f64 {
    6.0
}
fn default_max_size() -> f64 {
    12.0
}
fn default_min_height() -> f64 {
    5.0
}
fn default_max_height() -> f64 {
    80.0
}
fn default_root_depth() -> f64 {
    2.0
}
fn default_layers() -> u32 {
    3
}
fn default_bark() -> Tint {
    Tint::new(0x8b4513, 0.1)
}
fn default_foliage() -> Tint {
    Tint::new(0x228b22, 0.1)
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            spawn_rate: default_spawn_rate(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            min_height: default_min_height(),
            max_height: default_max_height(),
            root_depth: default_root_depth(),
            layers: default_layers(),
            bark: default_bark(),
            foliage: default_foliage(),
        }
    }
}

/// A base color plus the HSL variance of its per-instance jitter.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Tint {
    pub color: Rgb,
    #[serde(default = "default_variance")]
    pub variance: f32,
}
fn default_variance() -> f32 {
    0.1
}
impl Tint {
    pub fn new(hex: u32, variance: f32) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            variance,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Biomes {
    /// Heights at or below this are ocean floor.
    #[serde(default)]
    pub ocean_level: f64,
    #[serde(default = "default_beach_max")]
    pub beach_max: f64,
    #[serde(default = "default_highland_max")]
    pub highland_max: f64,
    /// Temperatures above this count as warm.
    #[serde(default = "default_warm_temperature")]
    pub warm_temperature: f64,
    /// Corner deltas above this count as steep; below it as gentle.
    #[serde(default = "default_steep_slope")]
    pub steep_slope: f64,
    #[serde(default)]
    pub colors: Palette,
}
fn default_beach_max() -> f64 {
    10.0
}
fn default_highland_max() -> f64 {
    100.0
}
fn default_warm_temperature() -> f64 {
    40.0
}
fn default_steep_slope() -> f64 {
    1.0
}
impl Default for Biomes {
    fn default() -> Self {
        Self {
            ocean_level: 0.0,
            beach_max: default_beach_max(),
            highland_max: default_highland_max(),
            warm_temperature: default_warm_temperature(),
            steep_slope: default_steep_slope(),
            colors: Palette::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Palette {
    #[serde(default = "default_ocean_sand")]
    pub ocean_sand: Tint,
    #[serde(default = "default_ocean_stone")]
    pub ocean_stone: Tint,
    #[serde(default = "default_beach_sand")]
    pub beach_sand: Tint,
    #[serde(default = "default_stone")]
    pub stone: Tint,
    #[serde(default = "default_grass")]
    pub grass: Tint,
    #[serde(default = "default_snow")]
    pub snow: Tint,
}
fn default_ocean_sand() -> Tint {
    Tint::new(0xdecaac, 0.1)
}
fn default_ocean_stone() -> Tint {
    Tint::new(0x324a5f, 0.1)
}
fn default_beach_sand() -> Tint {
    Tint::new(0xc2b280, 0.1)
}
fn default_stone() -> Tint {
    Tint::new(0xb49cac, 0.1)
}
fn default_grass() -> Tint {
    Tint::new(0x228b22, 0.1)
}
fn default_snow() -> Tint {
    Tint::new(0xfffafa, 0.1)
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            ocean_sand: default_ocean_sand(),
            ocean_stone: default_ocean_stone(),
            beach_sand: default_beach_sand(),
            stone: default_stone(),
            grass: default_grass(),
            snow: default_snow(),
        }
    }
}

pub fn load_worldgen_from_path(path: &Path) -> Result<WorldGenConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(cfg)
}
