//! Where a click would place or break a block.

use terrawalk_geom::Vec3;
use terrawalk_world::HeightResolver;

/// Unit view vector for `yaw`/`pitch` in radians. Yaw 0 looks down -Z.
pub fn look_direction(yaw: f64, pitch: f64) -> Vec3 {
    Vec3::new(-yaw.sin() * pitch.cos(), pitch.sin(), -yaw.cos() * pitch.cos())
}

/// Grid cell `reach` units along the view ray, lifted so it never sits
/// below the terrain: the target is one unit above either the rounded ray
/// height or the rounded ground, whichever is higher.
pub fn placement_target(resolver: &mut HeightResolver<'_>, eye: Vec3, yaw: f64, pitch: f64, reach: f64) -> Vec3 {
    let ray = look_direction(yaw, pitch) * reach;
    let x = (eye.x + ray.x).round();
    let z = (eye.z + ray.z).round();
    let ground = resolver.ground_level(x, eye.y, z, false).round();
    let along_ray = (eye.y + ray.y).round() + 1.0;
    let y = if ground < along_ray { along_ray } else { ground + 1.0 };
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn look_direction_axes() {
        assert!(approx(look_direction(0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(look_direction(FRAC_PI_2, 0.0), Vec3::new(-1.0, 0.0, 0.0)));
        assert!(approx(look_direction(0.0, FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0)));
        let d = look_direction(0.7, -0.3);
        assert!((d.length() - 1.0).abs() < 1e-12);
    }
}
