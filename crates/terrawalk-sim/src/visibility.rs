//! Which chunks and objects are close enough to draw.

use std::collections::BTreeSet;

use terrawalk_geom::Vec3;
use terrawalk_spatial::{ObjectId, SpatialIndex};
use terrawalk_world::{ChunkCoord, ChunkManager};

use crate::collab::RenderSink;

/// Visible sets, recomputed only when the player's chunk or the object index
/// changes.
#[derive(Debug, Default)]
pub struct Visibility {
    objects: BTreeSet<ObjectId>,
    chunks: BTreeSet<ChunkCoord>,
    seen: Option<(ChunkCoord, u64)>,
}

impl Visibility {
    /// Returns the number of visibility flips reported to `sink`.
    pub fn update(&mut self, eye: Vec3, chunks: &ChunkManager, objects: &SpatialIndex, sink: &mut dyn RenderSink) -> usize {
        let center = chunks.chunk_at(eye.x, eye.z);
        let key = (center, objects.revision());
        if self.seen == Some(key) {
            return 0;
        }
        self.seen = Some(key);

        let cs = chunks.chunk_size();
        let radius = chunks.config().world.stream_radius;
        let reach = f64::from(radius * cs);

        let ring = (reach / objects.cell_size()).ceil() as i32 + 1;
        let now: BTreeSet<ObjectId> = objects
            .neighborhood(eye.x, eye.z, ring)
            .filter(|o| o.position.horizontal_distance(eye) < reach)
            .map(|o| o.id())
            .collect();

        let half = f64::from(cs) / 2.0;
        let mut now_chunks = BTreeSet::new();
        for dz in -(radius + 1)..=radius + 1 {
            for dx in -(radius + 1)..=radius + 1 {
                let coord = center.offset(dx, dz);
                if !chunks.is_loaded(coord) {
                    continue;
                }
                let (ox, oz) = coord.origin(cs);
                let mid = Vec3::new(f64::from(ox) + half, eye.y, f64::from(oz) + half);
                if mid.horizontal_distance(eye) < reach {
                    now_chunks.insert(coord);
                }
            }
        }

        let mut flips = 0;
        for &id in now.difference(&self.objects) {
            sink.on_object_visibility_changed(id, true);
            flips += 1;
        }
        for &id in self.objects.difference(&now) {
            // Removed objects were already reported as such.
            if objects.get(id).is_some() {
                sink.on_object_visibility_changed(id, false);
                flips += 1;
            }
        }
        for &coord in now_chunks.difference(&self.chunks) {
            sink.on_chunk_visibility_changed(coord, true);
            flips += 1;
        }
        for &coord in self.chunks.difference(&now_chunks) {
            sink.on_chunk_visibility_changed(coord, false);
            flips += 1;
        }
        if flips > 0 {
            log::debug!(
                target: "tick",
                "visibility around ({}, {}): {} objects, {} chunks, {} flips",
                center.cx,
                center.cz,
                now.len(),
                now_chunks.len(),
                flips
            );
        }
        self.objects = now;
        self.chunks = now_chunks;
        flips
    }

    #[inline]
    pub fn is_object_visible(&self, id: ObjectId) -> bool {
        self.objects.contains(&id)
    }

    #[inline]
    pub fn is_chunk_visible(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains(&coord)
    }

    #[inline]
    pub fn visible_objects(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn visible_chunks(&self) -> usize {
        self.chunks.len()
    }
}
