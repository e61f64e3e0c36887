use terrawalk_spatial::SpatialIndex;
use terrawalk_world::worldgen::{Biomes, Trees};
use terrawalk_world::{ChunkCoord, ChunkManager, ChunkStatus, WorldGenConfig};

fn small_world() -> WorldGenConfig {
    let mut cfg = WorldGenConfig::default();
    cfg.world.size = 1000;
    cfg.world.chunk_size = 25;
    cfg
}

// Every cell is vegetated and every roll succeeds.
fn forest_world() -> WorldGenConfig {
    let mut cfg = small_world();
    cfg.biomes = Biomes {
        ocean_level: -1.0e12,
        beach_max: -1.0e12,
        highland_max: 1.0e12,
        steep_slope: 1.0e12,
        ..Biomes::default()
    };
    cfg.trees = Trees {
        spawn_rate: 1000.0,
        min_height: -1.0e12,
        max_height: 1.0e12,
        ..Trees::default()
    };
    cfg
}

#[test]
fn first_chunk_materializes_footprint_and_mesh() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    let report = mgr.ensure_chunk(ChunkCoord::new(0, 0), &mut objects);
    assert_eq!(report.status, ChunkStatus::Created);

    let chunk = mgr.get(ChunkCoord::new(0, 0)).expect("loaded");
    assert_eq!(chunk.samples().len(), 26 * 26);
    assert_eq!(chunk.mesh().vertex_count(), 25 * 25 * 4);
    assert_eq!(chunk.mesh().index_count(), 25 * 25 * 6);
    assert_eq!(chunk.mesh().colors.len(), 25 * 25 * 4);
    for x in 0..=25 {
        for z in 0..=25 {
            assert!(mgr.field().peek(x, z).is_some(), "sample ({x},{z}) missing");
        }
    }
    assert_eq!(mgr.field().stats().computed, 26 * 26);
}

#[test]
fn re_ensure_keeps_cached_samples() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    mgr.ensure_chunk(ChunkCoord::new(0, 0), &mut objects);
    let before = mgr.get(ChunkCoord::new(0, 0)).unwrap().samples().to_vec();
    let computed = mgr.field().stats().computed;

    let again = mgr.ensure_chunk(ChunkCoord::new(0, 0), &mut objects);
    assert_eq!(again.status, ChunkStatus::AlreadyLoaded);
    assert!(again.spawned.is_empty());
    assert_eq!(mgr.get(ChunkCoord::new(0, 0)).unwrap().samples(), before.as_slice());
    assert_eq!(mgr.field().stats().computed, computed);
    assert_eq!(mgr.stats().built, 1);
}

#[test]
fn neighbor_reuses_shared_edge_samples() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    mgr.ensure_chunk(ChunkCoord::new(0, 0), &mut objects);
    let edge = mgr.field().peek(25, 3).expect("edge sample cached");
    mgr.ensure_chunk(ChunkCoord::new(1, 0), &mut objects);
    // 26*26 for the first chunk, 26*25 new for the second.
    assert_eq!(mgr.field().stats().computed, 26 * 26 + 26 * 25);
    let neighbor = mgr.get(ChunkCoord::new(1, 0)).unwrap();
    assert_eq!(neighbor.local(0, 3), edge);
}

#[test]
fn mesh_vertices_are_chunk_local() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    mgr.ensure_chunk(ChunkCoord::new(3, 2), &mut objects);
    let chunk = mgr.get(ChunkCoord::new(3, 2)).unwrap();
    let mesh = chunk.mesh();
    assert_eq!(mesh.positions[0][0], 0.0);
    assert_eq!(mesh.positions[0][2], 0.0);
    assert_eq!(mesh.positions[0][1], chunk.local(0, 0).height as f32);
    assert_eq!(mesh.positions[2], [1.0, chunk.local(1, 1).height as f32, 1.0]);
    assert_eq!(&mesh.indices[0..6], &[0u32, 1, 2, 2, 3, 0]);
    let max = mesh.indices.iter().copied().max().unwrap();
    assert_eq!(max as usize, mesh.vertex_count() - 1);
}

#[test]
fn population_is_decided_once() {
    let mut mgr = ChunkManager::new(forest_world());
    let mut objects = SpatialIndex::new(25.0);
    let first = mgr.ensure_chunk(ChunkCoord::new(1, 1), &mut objects);
    assert_eq!(first.spawned.len(), 25 * 25);
    assert_eq!(objects.len(), 25 * 25);

    let again = mgr.ensure_chunk(ChunkCoord::new(1, 1), &mut objects);
    assert!(again.spawned.is_empty());
    assert!(mgr.rebuild_mesh(ChunkCoord::new(1, 1)));
    assert_eq!(objects.len(), 25 * 25);
    assert_eq!(mgr.get(ChunkCoord::new(1, 1)).unwrap().trees(), first.spawned.as_slice());
    assert_eq!(mgr.stats().rebuilt, 1);
    assert_eq!(mgr.stats().trees, 25 * 25);
}

#[test]
fn rebuild_reproduces_mesh() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    mgr.ensure_chunk(ChunkCoord::new(0, 0), &mut objects);
    let before = mgr.get(ChunkCoord::new(0, 0)).unwrap().mesh().clone();
    mgr.rebuild_mesh(ChunkCoord::new(0, 0));
    assert_eq!(mgr.get(ChunkCoord::new(0, 0)).unwrap().mesh(), &before);
    assert!(!mgr.rebuild_mesh(ChunkCoord::new(9, 9)));
}

#[test]
fn stream_around_skips_outside_world_and_loaded() {
    let mut mgr = ChunkManager::new(small_world());
    let mut objects = SpatialIndex::new(25.0);
    let created = mgr.stream_around(ChunkCoord::new(0, 0), 1, &mut objects);
    // Only (0,0), (1,0), (0,1), (1,1) are inside the world.
    assert_eq!(created.len(), 4);
    let again = mgr.stream_around(ChunkCoord::new(1, 0), 1, &mut objects);
    assert_eq!(again.len(), 2);
    assert_eq!(mgr.stats().loaded, 6);
    let outside = mgr.ensure_chunk(ChunkCoord::new(40, 0), &mut objects);
    assert_eq!(outside.status, ChunkStatus::OutsideWorld);
}

#[test]
fn independent_managers_agree() {
    let mut a = ChunkManager::new(forest_world());
    let mut b = ChunkManager::new(forest_world());
    let mut oa = SpatialIndex::new(25.0);
    let mut ob = SpatialIndex::new(25.0);
    a.ensure_chunk(ChunkCoord::new(2, 0), &mut oa);
    b.ensure_chunk(ChunkCoord::new(2, 0), &mut ob);
    let ca = a.get(ChunkCoord::new(2, 0)).unwrap();
    let cb = b.get(ChunkCoord::new(2, 0)).unwrap();
    assert_eq!(ca.samples(), cb.samples());
    assert_eq!(ca.mesh(), cb.mesh());
    for (ia, ib) in ca.trees().iter().zip(cb.trees()) {
        assert_eq!(oa.get(*ia).unwrap().shape, ob.get(*ib).unwrap().shape);
    }
}
