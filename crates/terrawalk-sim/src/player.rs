//! First-person walker over a heightfield: gravity, jumping, flight and
//! slope-limited movement.

use std::f64::consts::FRAC_PI_2;

use terrawalk_geom::Vec3;
use terrawalk_world::HeightResolver;

use crate::config::{PlayerParams, SlopeParams};
use crate::input::MoveKeys;

/// Anything that can answer "where is the ground under this probe".
pub trait GroundProbe {
    fn ground_level(&mut self, x: f64, y: f64, z: f64, consider_objects: bool) -> f64;
}

impl GroundProbe for HeightResolver<'_> {
    #[inline]
    fn ground_level(&mut self, x: f64, y: f64, z: f64, consider_objects: bool) -> f64 {
        HeightResolver::ground_level(self, x, y, z, consider_objects)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
    Flying,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    /// Eye position.
    pub position: Vec3,
    /// Radians around +Y; 0 looks down -Z.
    pub yaw: f64,
    /// Radians, clamped to straight up/down.
    pub pitch: f64,
    pub vertical_velocity: f64,
    pub motion: MotionState,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            vertical_velocity: 0.0,
            motion: MotionState::Grounded,
        }
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.motion == MotionState::Flying
    }

    #[inline]
    pub fn feet(&self, height: f64) -> Vec3 {
        Vec3::new(self.position.x, self.position.y - height, self.position.z)
    }

    /// Horizontal heading.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    pub fn toggle_flight(&mut self) {
        self.motion = match self.motion {
            MotionState::Flying => MotionState::Airborne,
            MotionState::Grounded | MotionState::Airborne => MotionState::Flying,
        };
        self.vertical_velocity = 0.0;
    }
}

/// How a horizontal move was treated against rising ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlopeResolution {
    /// Flat, falling or gentle enough to walk.
    Level,
    /// Steep but climbable; the move was scaled by `factor`.
    Climb { angle: f64, factor: f64 },
    /// Too steep, but low enough to step onto.
    Ledge { angle: f64, factor: f64 },
    /// Too steep and too high; the move was reverted.
    Wall { angle: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub slope: SlopeResolution,
    /// The position was held inside the world border.
    pub clamped: bool,
    /// Nothing was held and the player stood still.
    pub idle: bool,
}

impl StepReport {
    fn idle() -> Self {
        Self {
            slope: SlopeResolution::Level,
            clamped: false,
            idle: true,
        }
    }
}

pub struct PlayerController<'a> {
    params: &'a PlayerParams,
    slope: &'a SlopeParams,
    world_size: f64,
}

impl<'a> PlayerController<'a> {
    pub fn new(params: &'a PlayerParams, slope: &'a SlopeParams, world_size: i32) -> Self {
        Self {
            params,
            slope,
            world_size: f64::from(world_size),
        }
    }

    pub fn apply_look(&self, player: &mut PlayerState, dx: f64, dy: f64) {
        let s = self.params.look_sensitivity;
        player.yaw -= dx * s;
        player.pitch = (player.pitch - dy * s).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Classifies a rise of `dy` over horizontal distance `dist`.
    pub fn resolve_slope(&self, dy: f64, dist: f64) -> SlopeResolution {
        if dy <= 0.0 {
            return SlopeResolution::Level;
        }
        let s = self.slope;
        let angle = dy.atan2(dist.max(1e-6)).to_degrees();
        if angle <= s.walkable_max_deg {
            return SlopeResolution::Level;
        }
        let over = angle - s.climb_offset_deg;
        let factor = if over > 0.0 {
            (s.climb_divisor_deg / over).min(1.0)
        } else {
            1.0
        };
        if angle <= s.climbable_max_deg {
            SlopeResolution::Climb { angle, factor }
        } else if dy <= s.ledge_climb_ratio * self.params.height {
            SlopeResolution::Ledge { angle, factor }
        } else {
            SlopeResolution::Wall { angle }
        }
    }

    /// Advances `player` by one tick of `keys`.
    pub fn step<G: GroundProbe>(&self, player: &mut PlayerState, keys: MoveKeys, ground: &mut G) -> StepReport {
        if player.motion == MotionState::Grounded && !keys.any() {
            return StepReport::idle();
        }
        let p = self.params;
        let prev = player.position;
        let prev_motion = player.motion;

        let (sx, sy, sz) = keys.intent();
        let sy = if player.is_flying() { sy } else { 0.0 };
        let len = (sx * sx + sy * sy + sz * sz).sqrt();
        let scale = if len > 0.0 { p.move_speed / len } else { 0.0 };
        let displacement = player.forward() * (sz * scale) + player.right() * (sx * scale);
        player.position += displacement;

        let mut slope = SlopeResolution::Level;
        if player.is_flying() {
            player.position.y += sy * scale;
        } else {
            let pos = player.position;
            let g = ground.ground_level(pos.x, pos.y, pos.z, true);
            self.settle(player, g);
            if keys.jump && player.motion == MotionState::Grounded {
                player.vertical_velocity = p.jump_impulse;
                player.motion = MotionState::Airborne;
            }

            let dist = displacement.x.hypot(displacement.z);
            if dist > 0.0 {
                let g_prev = ground.ground_level(prev.x, prev.y - p.height, prev.z, true);
                slope = self.resolve_slope(g - g_prev, dist);
                match slope {
                    SlopeResolution::Level => {}
                    SlopeResolution::Climb { factor, .. } | SlopeResolution::Ledge { factor, .. } => {
                        player.position.x = prev.x + displacement.x * factor;
                        player.position.z = prev.z + displacement.z * factor;
                        self.resnap(player, ground);
                    }
                    SlopeResolution::Wall { angle } => {
                        log::trace!(target: "tick", "blocked by {:.1} degree rise", angle);
                        player.position = prev;
                        player.motion = prev_motion;
                        return StepReport {
                            slope,
                            clamped: false,
                            idle: false,
                        };
                    }
                }
            }
        }

        let clamped = self.clamp_to_world(player);
        if clamped {
            self.resnap(player, ground);
        }
        if !player.is_flying() {
            player.position.y += player.vertical_velocity;
        }
        StepReport {
            slope,
            clamped,
            idle: false,
        }
    }

    /// Gravity above the ground, snapping onto it otherwise.
    fn settle(&self, player: &mut PlayerState, ground: f64) {
        let p = self.params;
        let floor = ground + p.height;
        if player.position.y > floor {
            player.vertical_velocity = (player.vertical_velocity - p.gravity).max(-p.terminal_velocity);
            player.motion = MotionState::Airborne;
        } else {
            player.position.y = floor;
            player.vertical_velocity = 0.0;
            player.motion = MotionState::Grounded;
        }
    }

    fn resnap<G: GroundProbe>(&self, player: &mut PlayerState, ground: &mut G) {
        if player.motion != MotionState::Grounded {
            return;
        }
        let pos = player.position;
        player.position.y = ground.ground_level(pos.x, pos.y, pos.z, true) + self.params.height;
    }

    fn clamp_to_world(&self, player: &mut PlayerState) -> bool {
        let (lo, hi) = (0.5, self.world_size - 1.5);
        let before = player.position;
        player.position.x = player.position.x.clamp(lo, hi);
        player.position.z = player.position.z.clamp(lo, hi);
        before.x != player.position.x || before.z != player.position.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(f64);

    impl GroundProbe for Flat {
        fn ground_level(&mut self, _x: f64, _y: f64, _z: f64, _consider_objects: bool) -> f64 {
            self.0
        }
    }

    fn walk_forward() -> MoveKeys {
        MoveKeys {
            forward: true,
            ..MoveKeys::default()
        }
    }

    #[test]
    fn slope_bands() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        assert_eq!(c.resolve_slope(-2.0, 1.0), SlopeResolution::Level);
        assert_eq!(c.resolve_slope(0.2, 1.0), SlopeResolution::Level);
        match c.resolve_slope(0.3, 1.0) {
            SlopeResolution::Climb { angle, factor } => {
                assert!((angle - 16.699).abs() < 1e-3);
                assert!((factor - 5.0 / (angle - 10.0)).abs() < 1e-12);
            }
            other => panic!("expected climb, got {other:?}"),
        }
        match c.resolve_slope(2.0, 0.5) {
            SlopeResolution::Ledge { angle, factor } => {
                assert!(angle > 70.0);
                assert!(factor > 0.0 && factor < 1.0);
            }
            other => panic!("expected ledge, got {other:?}"),
        }
        assert!(matches!(c.resolve_slope(3.0, 1.0), SlopeResolution::Wall { .. }));
    }

    #[test]
    fn idle_grounded_player_is_untouched() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::new(10.0, 99.0, 10.0));
        let report = c.step(&mut player, MoveKeys::default(), &mut Flat(0.0));
        assert!(report.idle);
        assert_eq!(player.position.y, 99.0);
    }

    #[test]
    fn jump_then_land() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::new(10.0, params.height, 10.0));
        let jump = MoveKeys {
            jump: true,
            ..MoveKeys::default()
        };
        c.step(&mut player, jump, &mut Flat(0.0));
        assert_eq!(player.motion, MotionState::Airborne);
        assert!((player.position.y - (params.height + params.jump_impulse)).abs() < 1e-12);

        let mut ticks = 0;
        while player.motion != MotionState::Grounded {
            c.step(&mut player, MoveKeys::default(), &mut Flat(0.0));
            ticks += 1;
            assert!(ticks < 1000, "never landed");
        }
        assert_eq!(player.position.y, params.height);
        assert_eq!(player.vertical_velocity, 0.0);
    }

    #[test]
    fn falling_speed_is_capped() {
        let params = PlayerParams {
            gravity: 40.0,
            ..PlayerParams::default()
        };
        let slope = SlopeParams::default();
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::new(10.0, 1.0e6, 10.0));
        player.motion = MotionState::Airborne;
        for _ in 0..3 {
            c.step(&mut player, MoveKeys::default(), &mut Flat(0.0));
        }
        assert_eq!(player.vertical_velocity, -params.terminal_velocity);
    }

    #[test]
    fn look_pitch_is_clamped() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::ZERO);
        c.apply_look(&mut player, 100.0, -1.0e6);
        assert!((player.yaw + 0.2).abs() < 1e-12);
        assert_eq!(player.pitch, FRAC_PI_2);
    }

    #[test]
    fn border_holds_the_player() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::new(998.3, params.height, 10.0));
        player.yaw = -FRAC_PI_2;
        let report = c.step(&mut player, walk_forward(), &mut Flat(0.0));
        assert!(report.clamped);
        assert_eq!(player.position.x, 998.5);
    }

    #[test]
    fn flight_ignores_gravity() {
        let (params, slope) = (PlayerParams::default(), SlopeParams::default());
        let c = PlayerController::new(&params, &slope, 1000);
        let mut player = PlayerState::new(Vec3::new(10.0, 50.0, 10.0));
        player.toggle_flight();
        let up = MoveKeys {
            jump: true,
            ..MoveKeys::default()
        };
        c.step(&mut player, up, &mut Flat(0.0));
        assert_eq!(player.position.y, 50.0 + params.move_speed);
        c.step(&mut player, MoveKeys::default(), &mut Flat(0.0));
        assert_eq!(player.position.y, 50.0 + params.move_speed);
        assert_eq!(player.vertical_velocity, 0.0);
    }
}
