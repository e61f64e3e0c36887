//! Vegetation rolls and compound tree geometry.

use terrawalk_geom::{Aabb, Vec3};
use terrawalk_spatial::{Cone, Owner, Shape, SurfaceObject, TreeShape};

use crate::biome::jittered_color;
use crate::hash::rand01;
use crate::worldgen::Trees;

const SALT_SPAWN: u32 = 0x7a3c_91e5;
const SALT_SIZE: u32 = 0x2f6b_d4c1;
const SALT_BARK: u32 = 0x0b4d_5a17;
const SALT_LEAF: u32 = 0x63e2_8f09;

pub const TREE_LABEL: &str = "tree";

/// Decides whether a tree grows at `(x, z)` with terrain height `height`.
/// Returns its size. The roll is a pure function of seed and cell.
pub fn spawn_roll(seed: u32, x: i32, z: i32, height: f64, t: &Trees) -> Option<f64> {
    if !(height > t.min_height && height < t.max_height) {
        return None;
    }
    if rand01(seed, x, z, SALT_SPAWN) * 1000.0 > t.spawn_rate {
        return None;
    }
    let span = (t.max_size - t.min_size).max(0.0);
    Some(t.min_size + rand01(seed, x, z, SALT_SIZE) * span)
}

/// Trunk and foliage layers for a tree of `size` whose base sits at `base`.
pub fn tree_shape(base: Vec3, size: f64, layers: u32) -> TreeShape {
    let trunk_radius = 0.2 * size;
    let trunk_height = 2.0 * size;
    let trunk = Aabb::new(
        Vec3::new(base.x - trunk_radius, base.y, base.z - trunk_radius),
        Vec3::new(base.x + trunk_radius, base.y + trunk_height, base.z + trunk_radius),
    );
    let cone_height = size;
    let layers = (0..layers)
        .map(|i| {
            let i = f64::from(i);
            let center_y = base.y + trunk_height + i * cone_height * 0.6;
            Cone {
                axis_x: base.x,
                axis_z: base.z,
                base_y: center_y - cone_height / 2.0,
                height: cone_height,
                radius: ((1.5 - i * 0.3) * size).max(0.1 * size),
            }
        })
        .collect();
    TreeShape { trunk, layers }
}

/// Natural tree object rooted in cell `(x, z)`.
pub fn grow_tree(seed: u32, x: i32, z: i32, height: f64, size: f64, t: &Trees) -> SurfaceObject {
    let base = Vec3::new(f64::from(x) + 0.5, height - t.root_depth, f64::from(z) + 0.5);
    let shape = Shape::CompoundTree(tree_shape(base, size, t.layers));
    let foliage = jittered_color(t.foliage, seed, x, z, SALT_LEAF);
    let bark = jittered_color(t.bark, seed, x, z, SALT_BARK);
    SurfaceObject::new(base, shape, Owner::Natural, TREE_LABEL, foliage).with_trim(bark)
}
