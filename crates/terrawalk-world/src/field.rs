//! Lazily computed terrain samples, stored in tiles owned by chunks.

use std::collections::HashMap;

use crate::chunk_coord::ChunkCoord;
use crate::terrain::{TerrainGenerator, TerrainSample};

#[derive(Default, Debug, Clone, Copy)]
pub struct FieldStats {
    pub tiles: usize,
    /// Samples synthesized so far; each cell is counted once.
    pub computed: u64,
    pub hits: u64,
}

/// Dense `chunk_size^2` block of samples for one chunk; `None` until first read.
struct SampleTile {
    samples: Vec<Option<TerrainSample>>,
}

pub struct TerrainField {
    generator: TerrainGenerator,
    chunk_size: i32,
    tiles: HashMap<ChunkCoord, SampleTile>,
    computed: u64,
    hits: u64,
}

impl TerrainField {
    pub fn new(generator: TerrainGenerator, chunk_size: i32) -> Self {
        Self {
            generator,
            chunk_size: chunk_size.max(1),
            tiles: HashMap::new(),
            computed: 0,
            hits: 0,
        }
    }

    #[inline]
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    #[inline]
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            tiles: self.tiles.len(),
            computed: self.computed,
            hits: self.hits,
        }
    }

    #[inline]
    fn locate(&self, x: i32, z: i32) -> (ChunkCoord, usize) {
        let cs = self.chunk_size;
        let coord = ChunkCoord::containing(x, z, cs);
        let lx = x.rem_euclid(cs) as usize;
        let lz = z.rem_euclid(cs) as usize;
        (coord, lz * cs as usize + lx)
    }

    /// Sample at `(x, z)`, computing and caching it on first access.
    pub fn sample(&mut self, x: i32, z: i32) -> TerrainSample {
        let (coord, slot) = self.locate(x, z);
        let area = (self.chunk_size * self.chunk_size) as usize;
        let tile = self.tiles.entry(coord).or_insert_with(|| SampleTile {
            samples: vec![None; area],
        });
        if let Some(s) = tile.samples[slot] {
            self.hits += 1;
            return s;
        }
        let s = self.generator.sample(x, z);
        tile.samples[slot] = Some(s);
        self.computed += 1;
        s
    }

    #[inline]
    pub fn height(&mut self, x: i32, z: i32) -> f64 {
        self.sample(x, z).height
    }

    #[inline]
    pub fn temperature(&mut self, x: i32, z: i32) -> f64 {
        self.sample(x, z).temperature
    }

    #[inline]
    pub fn elevation(&mut self, x: i32, z: i32) -> f64 {
        self.sample(x, z).elevation
    }

    /// Cached sample without generating; `None` means not yet generated.
    pub fn peek(&self, x: i32, z: i32) -> Option<TerrainSample> {
        let (coord, slot) = self.locate(x, z);
        self.tiles.get(&coord).and_then(|t| t.samples[slot])
    }

    /// Whether any sample owned by `coord` has been generated.
    pub fn has_tile(&self, coord: ChunkCoord) -> bool {
        self.tiles.contains_key(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::Terrain;

    fn field() -> TerrainField {
        TerrainField::new(TerrainGenerator::new(0, Terrain::default()), 25)
    }

    #[test]
    fn second_read_is_a_hit() {
        let mut f = field();
        assert!(f.peek(3, 4).is_none());
        let a = f.sample(3, 4);
        let b = f.sample(3, 4);
        assert_eq!(a, b);
        let st = f.stats();
        assert_eq!(st.computed, 1);
        assert_eq!(st.hits, 1);
        assert_eq!(f.peek(3, 4), Some(a));
    }

    #[test]
    fn samples_land_in_owning_tile() {
        let mut f = field();
        f.sample(25, 0);
        assert!(f.has_tile(ChunkCoord::new(1, 0)));
        assert!(!f.has_tile(ChunkCoord::new(0, 0)));
        f.sample(-1, -1);
        assert!(f.has_tile(ChunkCoord::new(-1, -1)));
        assert_eq!(f.stats().tiles, 2);
    }

    #[test]
    fn cached_value_matches_generator() {
        let mut f = field();
        let direct = f.generator().sample(123, -45);
        assert_eq!(f.sample(123, -45), direct);
    }
}
