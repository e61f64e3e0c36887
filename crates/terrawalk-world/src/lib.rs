//! Procedural heightfield world: noise, memoized terrain samples, chunk
//! meshes, biome coloring, vegetation and ground height resolution.
#![forbid(unsafe_code)]

pub mod biome;
pub mod chunk;
mod chunk_coord;
pub mod collision;
pub mod field;
mod hash;
pub mod manager;
pub mod noise;
pub mod terrain;
pub mod trees;
pub mod worldgen;

pub use chunk::{Chunk, SurfaceMesh};
pub use chunk_coord::ChunkCoord;
pub use collision::HeightResolver;
pub use field::{FieldStats, TerrainField};
pub use hash::{hash2, rand01};
pub use manager::{ChunkManager, ChunkManagerStats, ChunkReport, ChunkStatus};
pub use noise::ValueNoise;
pub use terrain::{TerrainGenerator, TerrainSample};
pub use worldgen::{WorldGenConfig, load_worldgen_from_path};
