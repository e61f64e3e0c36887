//! Ground height: bilinear terrain combined with object surfaces.

use terrawalk_geom::Vec3;
use terrawalk_spatial::SpatialIndex;

use crate::field::TerrainField;

/// Borrowed view answering ground and occupancy queries for one step.
pub struct HeightResolver<'a> {
    field: &'a mut TerrainField,
    objects: &'a SpatialIndex,
    world_size: i32,
    tolerance: f64,
}

impl<'a> HeightResolver<'a> {
    pub fn new(field: &'a mut TerrainField, objects: &'a SpatialIndex, world_size: i32, tolerance: f64) -> Self {
        Self {
            field,
            objects,
            world_size,
            tolerance,
        }
    }

    #[inline]
    pub fn objects(&self) -> &SpatialIndex {
        self.objects
    }

    /// Bilinear terrain height at `(x, z)`; 0 outside the world.
    pub fn terrain_height(&mut self, x: f64, z: f64) -> f64 {
        let fx = x.floor();
        let fz = z.floor();
        let (x0, z0) = (fx as i64, fz as i64);
        let size = i64::from(self.world_size);
        if x0 < 0 || x0 + 1 >= size || z0 < 0 || z0 + 1 >= size {
            return 0.0;
        }
        let (x0, z0) = (x0 as i32, z0 as i32);
        let y00 = self.field.height(x0, z0);
        let y10 = self.field.height(x0 + 1, z0);
        let y01 = self.field.height(x0, z0 + 1);
        let y11 = self.field.height(x0 + 1, z0 + 1);
        let tx = x - fx;
        let tz = z - fz;
        let y0 = y00 + (y10 - y00) * tx;
        let y1 = y01 + (y11 - y01) * tx;
        y0 + (y1 - y0) * tz
    }

    /// Ground under `(x, z)` for a probe at altitude `y`. With
    /// `consider_objects`, the tallest qualifying object surface wins over the
    /// terrain when higher.
    pub fn ground_level(&mut self, x: f64, y: f64, z: f64, consider_objects: bool) -> f64 {
        let terrain = self.terrain_height(x, z);
        if !consider_objects {
            return terrain;
        }
        match self.objects.highest_surface_below(x, y, z, self.tolerance) {
            Some(h) if h > terrain => h,
            _ => terrain,
        }
    }

    #[inline]
    pub fn is_occupied(&self, p: Vec3, tolerance: f64) -> bool {
        self.objects.is_occupied(p, tolerance)
    }
}
