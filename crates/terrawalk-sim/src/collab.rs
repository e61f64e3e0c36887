//! Hooks the simulation calls out to. Drawing and storage live behind these.

use std::error::Error;

use terrawalk_edit::InventorySnapshot;
use terrawalk_spatial::{ObjectId, SurfaceObject};
use terrawalk_world::{Chunk, ChunkCoord};

/// Receives scene changes. Every hook defaults to doing nothing.
pub trait RenderSink {
    /// A chunk was materialized and its mesh is ready to upload.
    fn on_chunk_ready(&mut self, _chunk: &Chunk) {}
    fn on_object_added(&mut self, _object: &SurfaceObject) {}
    fn on_object_removed(&mut self, _object: &SurfaceObject) {}
    fn on_object_visibility_changed(&mut self, _id: ObjectId, _visible: bool) {}
    fn on_chunk_visibility_changed(&mut self, _coord: ChunkCoord, _visible: bool) {}
}

/// Headless sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {}

/// Loads and saves the hotbar between sessions.
pub trait InventoryStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&mut self) -> Result<Option<InventorySnapshot>, Box<dyn Error>>;
    fn save(&mut self, snapshot: &InventorySnapshot) -> Result<(), Box<dyn Error>>;
}
