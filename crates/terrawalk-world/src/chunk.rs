use terrawalk_spatial::ObjectId;

use crate::biome::{self, Classification, cell_slope, classify, jittered_color};
use crate::chunk_coord::ChunkCoord;
use crate::field::TerrainField;
use crate::terrain::TerrainSample;
use crate::worldgen::Biomes;

const SALT_SURFACE: u32 = 0x3c6e_f372;

/// Quad-per-cell surface with positions relative to the chunk origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    fn with_cells(cells: usize) -> Self {
        Self {
            positions: Vec::with_capacity(cells * 4),
            colors: Vec::with_capacity(cells * 4),
            indices: Vec::with_capacity(cells * 6),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// A materialized chunk: its `(size+1)^2` sample footprint and surface mesh.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    size: i32,
    samples: Vec<TerrainSample>,
    mesh: SurfaceMesh,
    trees: Vec<ObjectId>,
}

impl Chunk {
    /// Reads the footprint through `field` (generating missing samples) and
    /// meshes it. Population is the manager's concern.
    pub(crate) fn build(coord: ChunkCoord, size: i32, field: &mut TerrainField, biomes: &Biomes, seed: u32) -> Self {
        let (ox, oz) = coord.origin(size);
        let side = (size + 1) as usize;
        let mut samples = Vec::with_capacity(side * side);
        for lz in 0..=size {
            for lx in 0..=size {
                samples.push(field.sample(ox + lx, oz + lz));
            }
        }
        let mut chunk = Self {
            coord,
            size,
            samples,
            mesh: SurfaceMesh::default(),
            trees: Vec::new(),
        };
        chunk.mesh = chunk.mesh_from_samples(biomes, seed);
        chunk
    }

    pub(crate) fn remesh(&mut self, biomes: &Biomes, seed: u32) {
        self.mesh = self.mesh_from_samples(biomes, seed);
    }

    pub(crate) fn record_tree(&mut self, id: ObjectId) {
        self.trees.push(id);
    }

    fn mesh_from_samples(&self, biomes: &Biomes, seed: u32) -> SurfaceMesh {
        let n = self.size as usize;
        let mut mesh = SurfaceMesh::with_cells(n * n);
        let (ox, oz) = self.coord.origin(self.size);
        for lx in 0..self.size {
            for lz in 0..self.size {
                let h00 = self.local(lx, lz).height;
                let h10 = self.local(lx + 1, lz).height;
                let h11 = self.local(lx + 1, lz + 1).height;
                let h01 = self.local(lx, lz + 1).height;

                let class = self.classify_cell(lx, lz, biomes);
                let color = jittered_color(biome::tint(class.biome, biomes), seed, ox + lx, oz + lz, SALT_SURFACE)
                    .to_array();

                let base = mesh.positions.len() as u32;
                let (x0, z0) = (lx as f32, lz as f32);
                mesh.positions.push([x0, h00 as f32, z0]);
                mesh.positions.push([x0 + 1.0, h10 as f32, z0]);
                mesh.positions.push([x0 + 1.0, h11 as f32, z0 + 1.0]);
                mesh.positions.push([x0, h01 as f32, z0 + 1.0]);
                mesh.colors.extend_from_slice(&[color; 4]);
                mesh.indices
                    .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
            }
        }
        mesh
    }

    /// Biome of the cell whose lower corner is local `(lx, lz)`.
    pub fn classify_cell(&self, lx: i32, lz: i32, biomes: &Biomes) -> Classification {
        let s00 = self.local(lx, lz);
        let slope = cell_slope(
            s00.height,
            self.local(lx + 1, lz).height,
            self.local(lx, lz + 1).height,
            self.local(lx + 1, lz + 1).height,
        );
        classify(s00.height, s00.temperature, slope, biomes)
    }

    /// Footprint sample at local `(lx, lz)`, both in `0..=size`.
    #[inline]
    pub fn local(&self, lx: i32, lz: i32) -> TerrainSample {
        self.samples[(lz * (self.size + 1) + lx) as usize]
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        self.coord.origin(self.size)
    }

    #[inline]
    pub fn samples(&self) -> &[TerrainSample] {
        &self.samples
    }

    #[inline]
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Trees rooted in this chunk's cells.
    #[inline]
    pub fn trees(&self) -> &[ObjectId] {
        &self.trees
    }
}
