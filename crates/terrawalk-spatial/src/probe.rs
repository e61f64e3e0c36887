//! Surface and occupancy probes over the bucketed neighborhood.

use terrawalk_geom::Vec3;

use crate::index::SpatialIndex;
use crate::object::{ObjectId, Owner};
use crate::shape::Solid;

impl Solid {
    /// Height of this solid's walkable surface under `(x, z)` for a probe at
    /// altitude `max_y`, if the solid qualifies.
    ///
    /// Boxes qualify when their top is at or below the probe. Cones qualify
    /// when the probe lies within their vertical span and within the slice
    /// radius at that altitude (plus `tolerance`).
    pub fn surface_below(&self, x: f64, max_y: f64, z: f64, tolerance: f64) -> Option<f64> {
        let bounds = self.bounds();
        if bounds.min.y > max_y || !bounds.covers_xz(x, z, tolerance) {
            return None;
        }
        match self {
            Solid::Box(b) => (b.max.y <= max_y).then_some(b.max.y),
            Solid::Cone(c) => {
                let slice = c.slice_radius(max_y)?;
                let dist = c.axis_distance(x, z);
                (dist <= slice + tolerance).then(|| c.mantle_height(dist))
            }
        }
    }

    /// Whether `p` lies inside the solid grown by `tolerance`.
    pub fn occupies(&self, p: Vec3, tolerance: f64) -> bool {
        if !self.bounds().expanded(tolerance).contains(p) {
            return false;
        }
        match self {
            Solid::Box(_) => true,
            Solid::Cone(c) => match c.slice_radius(p.y) {
                Some(slice) => c.axis_distance(p.x, p.z) <= slice + tolerance,
                None => false,
            },
        }
    }
}

impl SpatialIndex {
    /// Tallest qualifying object surface under `(x, z)` for a probe at
    /// altitude `max_y`. Searches the 3x3 bucket ring.
    pub fn highest_surface_below(&self, x: f64, max_y: f64, z: f64, tolerance: f64) -> Option<f64> {
        let mut best: Option<f64> = None;
        for object in self.neighborhood(x, z, 1) {
            for solid in object.shape.solids() {
                if let Some(h) = solid.surface_below(x, max_y, z, tolerance) {
                    best = Some(best.map_or(h, |b| b.max(h)));
                }
            }
        }
        best
    }

    pub fn is_occupied(&self, p: Vec3, tolerance: f64) -> bool {
        self.neighborhood(p.x, p.z, 1)
            .any(|o| o.shape.solids().any(|s| s.occupies(p, tolerance)))
    }

    /// Most recently inserted object of `owner` whose position is within
    /// `tolerance` of `p` on every axis.
    pub fn latest_near(&self, p: Vec3, tolerance: f64, owner: Owner) -> Option<ObjectId> {
        self.neighborhood(p.x, p.z, 1)
            .filter(|o| o.owner == owner)
            .filter(|o| {
                let d = o.position - p;
                d.x.abs() <= tolerance && d.y.abs() <= tolerance && d.z.abs() <= tolerance
            })
            .map(|o| o.id())
            .max()
    }
}
