//! Bucketed spatial index over surface objects (trees, placed blocks).
//!
//! Objects live in exactly one grid bucket keyed by the floor of their
//! position divided by the cell size. All queries walk a fixed square of
//! buckets around the probe and never the whole scene.
#![forbid(unsafe_code)]

mod index;
mod object;
mod probe;
mod shape;

pub use index::{BucketKey, SpatialIndex, SpatialIndexStats};
pub use object::{ObjectId, Owner, SurfaceObject};
pub use shape::{Cone, Shape, Solid, Solids, TreeShape};
