use terrawalk_spatial::{ObjectId, SurfaceObject};
use terrawalk_sim::RenderSink;
use terrawalk_world::{Chunk, ChunkCoord};

/// Stand-in renderer: tallies what a real one would upload or hide.
#[derive(Default, Debug)]
pub struct LoggingRenderer {
    pub chunks: usize,
    pub vertices: usize,
    pub indices: usize,
    pub added: usize,
    pub removed: usize,
    pub shown: usize,
    pub hidden: usize,
    pub chunk_flips: usize,
}

impl RenderSink for LoggingRenderer {
    fn on_chunk_ready(&mut self, chunk: &Chunk) {
        let mesh = chunk.mesh();
        self.chunks += 1;
        self.vertices += mesh.vertex_count();
        self.indices += mesh.index_count();
        let (ox, oz) = chunk.origin();
        log::trace!(target: "stream", "upload chunk at ({}, {}): {} vertices", ox, oz, mesh.vertex_count());
    }

    fn on_object_added(&mut self, object: &SurfaceObject) {
        self.added += 1;
        log::trace!("add {} {:?} at {:?}", object.label, object.id(), object.position);
    }

    fn on_object_removed(&mut self, object: &SurfaceObject) {
        self.removed += 1;
        log::trace!("remove {} {:?}", object.label, object.id());
    }

    fn on_object_visibility_changed(&mut self, _id: ObjectId, visible: bool) {
        if visible {
            self.shown += 1;
        } else {
            self.hidden += 1;
        }
    }

    fn on_chunk_visibility_changed(&mut self, _coord: ChunkCoord, _visible: bool) {
        self.chunk_flips += 1;
    }
}
