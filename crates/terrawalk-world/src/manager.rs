//! Lazy chunk materialization, one-shot vegetation and streaming.

use std::collections::HashMap;

use terrawalk_spatial::{ObjectId, SpatialIndex};

use crate::chunk::Chunk;
use crate::chunk_coord::ChunkCoord;
use crate::field::TerrainField;
use crate::terrain::TerrainGenerator;
use crate::trees::{grow_tree, spawn_roll};
use crate::worldgen::WorldGenConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkStatus {
    Created,
    AlreadyLoaded,
    /// Origin outside the world extent; nothing was materialized.
    OutsideWorld,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkReport {
    pub coord: ChunkCoord,
    pub status: ChunkStatus,
    /// Trees inserted while creating the chunk.
    pub spawned: Vec<ObjectId>,
}

impl ChunkReport {
    #[inline]
    pub fn created(&self) -> bool {
        self.status == ChunkStatus::Created
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct ChunkManagerStats {
    pub loaded: usize,
    pub built: u64,
    pub rebuilt: u64,
    pub trees: u64,
}

pub struct ChunkManager {
    cfg: WorldGenConfig,
    field: TerrainField,
    chunks: HashMap<ChunkCoord, Chunk>,
    built: u64,
    rebuilt: u64,
    trees: u64,
}

impl ChunkManager {
    pub fn new(cfg: WorldGenConfig) -> Self {
        let generator = TerrainGenerator::new(cfg.world.seed, cfg.terrain.clone());
        let field = TerrainField::new(generator, cfg.world.chunk_size);
        Self {
            cfg,
            field,
            chunks: HashMap::new(),
            built: 0,
            rebuilt: 0,
            trees: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &WorldGenConfig {
        &self.cfg
    }

    #[inline]
    pub fn chunk_size(&self) -> i32 {
        self.cfg.world.chunk_size
    }

    #[inline]
    pub fn world_size(&self) -> i32 {
        self.cfg.world.size
    }

    #[inline]
    pub fn field(&self) -> &TerrainField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut TerrainField {
        &mut self.field
    }

    pub fn stats(&self) -> ChunkManagerStats {
        ChunkManagerStats {
            loaded: self.chunks.len(),
            built: self.built,
            rebuilt: self.rebuilt,
            trees: self.trees,
        }
    }

    /// Whether the chunk's origin cell lies inside the world.
    pub fn in_world(&self, coord: ChunkCoord) -> bool {
        let (ox, oz) = coord.origin(self.chunk_size());
        let size = self.world_size();
        (0..size).contains(&ox) && (0..size).contains(&oz)
    }

    #[inline]
    pub fn chunk_at(&self, x: f64, z: f64) -> ChunkCoord {
        ChunkCoord::at_position(x, z, self.chunk_size())
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn loaded(&self) -> impl Iterator<Item = &Chunk> + '_ {
        self.chunks.values()
    }

    /// Materializes `coord` if absent. Trees are decided here, once.
    pub fn ensure_chunk(&mut self, coord: ChunkCoord, objects: &mut SpatialIndex) -> ChunkReport {
        if self.chunks.contains_key(&coord) {
            return ChunkReport {
                coord,
                status: ChunkStatus::AlreadyLoaded,
                spawned: Vec::new(),
            };
        }
        if !self.in_world(coord) {
            return ChunkReport {
                coord,
                status: ChunkStatus::OutsideWorld,
                spawned: Vec::new(),
            };
        }

        let seed = self.cfg.world.seed;
        let size = self.chunk_size();
        let mut chunk = Chunk::build(coord, size, &mut self.field, &self.cfg.biomes, seed);
        self.built += 1;

        let (ox, oz) = coord.origin(size);
        let mut spawned = Vec::new();
        for lx in 0..size {
            for lz in 0..size {
                if !chunk.classify_cell(lx, lz, &self.cfg.biomes).vegetation {
                    continue;
                }
                let (x, z) = (ox + lx, oz + lz);
                let height = chunk.local(lx, lz).height;
                if let Some(tree_size) = spawn_roll(seed, x, z, height, &self.cfg.trees) {
                    let id = objects.insert(grow_tree(seed, x, z, height, tree_size, &self.cfg.trees));
                    chunk.record_tree(id);
                    spawned.push(id);
                }
            }
        }
        self.trees += spawned.len() as u64;
        log::debug!(
            target: "stream",
            "chunk ({}, {}) built: {} samples, {} trees",
            coord.cx,
            coord.cz,
            chunk.samples().len(),
            spawned.len()
        );
        self.chunks.insert(coord, chunk);
        ChunkReport {
            coord,
            status: ChunkStatus::Created,
            spawned,
        }
    }

    /// Re-meshes a loaded chunk from its cached samples. Trees are untouched.
    pub fn rebuild_mesh(&mut self, coord: ChunkCoord) -> bool {
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        chunk.remesh(&self.cfg.biomes, self.cfg.world.seed);
        self.rebuilt += 1;
        true
    }

    /// Ensures every chunk within Chebyshev `radius` of `center`; returns the
    /// reports of chunks created by this call.
    pub fn stream_around(&mut self, center: ChunkCoord, radius: i32, objects: &mut SpatialIndex) -> Vec<ChunkReport> {
        let mut created = Vec::new();
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let report = self.ensure_chunk(center.offset(dx, dz), objects);
                if report.created() {
                    created.push(report);
                }
            }
        }
        if !created.is_empty() {
            log::debug!(
                target: "stream",
                "streamed {} chunks around ({}, {}); {} loaded",
                created.len(),
                center.cx,
                center.cz,
                self.chunks.len()
            );
        }
        created
    }
}
