use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use terrawalk_edit::PlacementParams;
use terrawalk_edit::items::{BlockProfile, default_profiles};
use terrawalk_world::WorldGenConfig;

/// Everything the simulation reads from its TOML file.
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    #[serde(flatten)]
    pub worldgen: WorldGenConfig,
    #[serde(default)]
    pub player: PlayerParams,
    #[serde(default)]
    pub slope: SlopeParams,
    #[serde(default)]
    pub placement: PlacementParams,
    #[serde(default = "default_profiles")]
    pub items: Vec<BlockProfile>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            worldgen: WorldGenConfig::default(),
            player: PlayerParams::default(),
            slope: SlopeParams::default(),
            placement: PlacementParams::default(),
            items: default_profiles(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerParams {
    /// Horizontal distance per tick at full input.
    #[serde(default = "default_move_speed")]
    pub move_speed: f64,
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f64,
    /// Downward velocity gained per airborne tick.
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Magnitude cap of the falling speed.
    #[serde(default = "default_terminal_velocity")]
    pub terminal_velocity: f64,
    /// Eye height above the feet.
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_look_sensitivity")]
    pub look_sensitivity: f64,
    #[serde(default = "default_spawn")]
    pub spawn: [f64; 2],
}
fn default_move_speed() -> f64 {
    0.5
}
fn default_jump_impulse() -> f64 {
    0.3
}
fn default_gravity() -> f64 {
    0.01
}
fn default_terminal_velocity() -> f64 {
    53.8
}
fn default_height() -> f64 {
    3.2
}
fn default_look_sensitivity() -> f64 {
    0.002
}
fn default_spawn() -> [f64; 2] {
    [500.0, 500.0]
}
impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            jump_impulse: default_jump_impulse(),
            gravity: default_gravity(),
            terminal_velocity: default_terminal_velocity(),
            height: default_height(),
            look_sensitivity: default_look_sensitivity(),
            spawn: default_spawn(),
        }
    }
}

/// Slope bands, in degrees, and the ledge allowance.
#[derive(Clone, Debug, Deserialize)]
pub struct SlopeParams {
    /// Rises up to this angle need no correction.
    #[serde(default = "default_walkable_max_deg")]
    pub walkable_max_deg: f64,
    /// Rises up to this angle are climbed slowly; steeper ones are walls.
    #[serde(default = "default_climbable_max_deg")]
    pub climbable_max_deg: f64,
    /// Ledge height as a fraction of the player height.
    #[serde(default = "default_ledge_climb_ratio")]
    pub ledge_climb_ratio: f64,
    /// Climb speed factor is `divisor / (angle - offset)`, capped at 1.
    #[serde(default = "default_climb_offset_deg")]
    pub climb_offset_deg: f64,
    #[serde(default = "default_climb_divisor_deg")]
    pub climb_divisor_deg: f64,
}
fn default_walkable_max_deg() -> f64 {
    15.0
}
fn default_climbable_max_deg() -> f64 {
    70.0
}
fn default_ledge_climb_ratio() -> f64 {
    0.75
}
fn default_climb_offset_deg() -> f64 {
    10.0
}
fn default_climb_divisor_deg() -> f64 {
    5.0
}
impl Default for SlopeParams {
    fn default() -> Self {
        Self {
            walkable_max_deg: default_walkable_max_deg(),
            climbable_max_deg: default_climbable_max_deg(),
            ledge_climb_ratio: default_ledge_climb_ratio(),
            climb_offset_deg: default_climb_offset_deg(),
            climb_divisor_deg: default_climb_divisor_deg(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<SimConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: SimConfig = toml::from_str(&s)?;
    Ok(cfg)
}
