use terrawalk_edit::{Inventory, ItemCatalog};
use terrawalk_geom::Vec3;
use terrawalk_spatial::SpatialIndex;
use terrawalk_world::{ChunkCoord, ChunkManager, HeightResolver};

use crate::config::SimConfig;
use crate::player::PlayerState;
use crate::visibility::Visibility;

/// Everything one session mutates. Owned by the driver and lent to each tick.
pub struct SimulationState {
    pub config: SimConfig,
    pub chunks: ChunkManager,
    pub objects: SpatialIndex,
    pub player: PlayerState,
    pub inventory: Inventory,
    pub catalog: ItemCatalog,
    /// Cell a click would act on, refreshed every tick.
    pub target: Vec3,
    /// Chunk the last streaming pass was centered on.
    pub current_chunk: Option<ChunkCoord>,
    pub visibility: Visibility,
    pub tick: u64,
}

impl SimulationState {
    /// Spawns the player standing on the terrain. Nothing is streamed until
    /// the first tick.
    pub fn new(config: SimConfig, inventory: Inventory) -> Self {
        let world = &config.worldgen.world;
        let mut chunks = ChunkManager::new(config.worldgen.clone());
        let objects = SpatialIndex::new(f64::from(world.chunk_size));
        let catalog = ItemCatalog::from_profiles(config.items.iter().cloned());

        let hi = (f64::from(world.size) - 1.5).max(0.5);
        let sx = config.player.spawn[0].clamp(0.5, hi);
        let sz = config.player.spawn[1].clamp(0.5, hi);
        let ground = HeightResolver::new(chunks.field_mut(), &objects, world.size, world.ground_tolerance)
            .terrain_height(sx, sz);
        let player = PlayerState::new(Vec3::new(sx, ground + config.player.height, sz));
        log::info!(
            "spawned at ({:.1}, {:.1}, {:.1}) in a {} cell world, seed {}",
            sx,
            player.position.y,
            sz,
            world.size,
            world.seed
        );

        Self {
            config,
            chunks,
            objects,
            player,
            inventory,
            catalog,
            target: Vec3::ZERO,
            current_chunk: None,
            visibility: Visibility::default(),
            tick: 0,
        }
    }

    pub fn resolver(&mut self) -> HeightResolver<'_> {
        let world = &self.config.worldgen.world;
        HeightResolver::new(self.chunks.field_mut(), &self.objects, world.size, world.ground_tolerance)
    }
}
