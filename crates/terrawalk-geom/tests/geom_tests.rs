use terrawalk_geom::{Aabb, Vec3};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn yaw_basis_is_right_handed() {
    // Forward for yaw 0 looks down -Z; right = forward x up.
    let forward = Vec3::new(0.0, 0.0, -1.0);
    let right = forward.cross(Vec3::UP);
    assert!(vec3_approx_eq(right, Vec3::new(1.0, 0.0, 0.0), 1e-12));
}

#[test]
fn normalized_zero_stays_zero() {
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    let n = Vec3::new(3.0, 0.0, 4.0).normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-12));
}

#[test]
fn horizontal_drops_y() {
    let v = Vec3::new(1.0, 7.0, -2.0);
    assert_eq!(v.horizontal(), Vec3::new(1.0, 0.0, -2.0));
    assert!(approx_eq(
        Vec3::new(0.0, 50.0, 0.0).horizontal_distance(Vec3::new(3.0, -2.0, 4.0)),
        5.0,
        1e-12
    ));
}

#[test]
fn dominant_axis_step_picks_largest_magnitude() {
    assert_eq!(Vec3::new(-0.9, 0.1, 0.3).dominant_axis_step(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(Vec3::new(0.2, -0.7, 0.3).dominant_axis_step(), Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(Vec3::new(0.2, 0.1, 0.5).dominant_axis_step(), Vec3::new(0.0, 0.0, 1.0));
    // Ties go to x first.
    assert_eq!(Vec3::new(0.5, 0.5, 0.5).dominant_axis_step(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(Vec3::ZERO.dominant_axis_step(), Vec3::ZERO);
}

#[test]
fn aabb_center_size_roundtrip() {
    let b = Aabb::from_center_size(Vec3::new(10.0, 5.0, -3.0), Vec3::new(2.0, 4.0, 6.0));
    assert!(vec3_approx_eq(b.min, Vec3::new(9.0, 3.0, -6.0), 1e-12));
    assert!(vec3_approx_eq(b.max, Vec3::new(11.0, 7.0, 0.0), 1e-12));
    assert!(vec3_approx_eq(b.center(), Vec3::new(10.0, 5.0, -3.0), 1e-12));
    assert!(approx_eq(b.height(), 4.0, 1e-12));
}

#[test]
fn aabb_contains_is_inclusive_and_expandable() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    assert!(b.contains(Vec3::new(2.0, 0.0, 1.0)));
    assert!(!b.contains(Vec3::new(2.05, 1.0, 1.0)));
    assert!(b.expanded(0.1).contains(Vec3::new(2.05, 1.0, 1.0)));
}

#[test]
fn aabb_covers_xz_uses_strict_tolerance() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    assert!(b.covers_xz(2.5, 1.0, 0.6));
    assert!(!b.covers_xz(2.6, 1.0, 0.6));
    assert!(!b.covers_xz(1.0, 3.0, 0.6));
}

#[test]
fn aabb_union_encloses_both() {
    let a = Aabb::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Vec3::new(0.0, -2.0, 0.5), Vec3::new(0.5, 3.0, 4.0));
    let u = a.union(&b);
    assert_eq!(u.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(u.max, Vec3::new(1.0, 3.0, 4.0));
}
