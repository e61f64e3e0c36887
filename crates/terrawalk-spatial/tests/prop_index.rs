use proptest::prelude::*;
use terrawalk_geom::{Aabb, Rgb, Vec3};
use terrawalk_spatial::{ObjectId, Owner, Shape, SpatialIndex, SurfaceObject};

const CELL: f64 = 25.0;

fn block(p: Vec3) -> SurfaceObject {
    let shape = Shape::Box(Aabb::from_center_size(p, Vec3::new(2.0, 2.0, 2.0)));
    SurfaceObject::new(p, shape, Owner::Player, "foundation", Rgb::from_hex(0xa9a9a9))
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (-500.0f64..500.0, -10.0f64..100.0, -500.0f64..500.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // ring 1 returns exactly the objects in the Chebyshev-1 buckets
    #[test]
    fn neighborhood_is_complete_and_exact(
        points in prop::collection::vec(arb_point(), 0..64),
        probe in arb_point(),
    ) {
        let mut idx = SpatialIndex::new(CELL);
        let ids: Vec<ObjectId> = points.iter().map(|p| idx.insert(block(*p))).collect();
        let (bx, bz) = idx.bucket_key(probe.x, probe.z);
        let mut expected: Vec<ObjectId> = ids
            .iter()
            .copied()
            .filter(|id| {
                let (kx, kz) = idx.bucket_of(*id).unwrap();
                (kx - bx).abs() <= 1 && (kz - bz).abs() <= 1
            })
            .collect();
        let mut got: Vec<ObjectId> = idx
            .query_neighborhood(probe.x, probe.z, 1)
            .iter()
            .map(|o| o.id())
            .collect();
        expected.sort();
        got.sort();
        prop_assert_eq!(got, expected);
    }

    // after any relocation sequence every object sits in exactly its position's bucket
    #[test]
    fn relocate_keeps_bucket_consistent(
        start in prop::collection::vec(arb_point(), 1..16),
        moves in prop::collection::vec((0usize..16, arb_point()), 0..48),
    ) {
        let mut idx = SpatialIndex::new(CELL);
        let ids: Vec<ObjectId> = start.iter().map(|p| idx.insert(block(*p))).collect();
        for (i, to) in moves {
            let id = ids[i % ids.len()];
            prop_assert!(idx.relocate(id, to));
        }
        for id in &ids {
            let obj = idx.get(*id).unwrap();
            prop_assert_eq!(idx.buckets_containing(*id), 1);
            prop_assert_eq!(idx.bucket_of(*id), Some(idx.bucket_key(obj.position.x, obj.position.z)));
            prop_assert!(idx.bucket(idx.bucket_key(obj.position.x, obj.position.z)).contains(id));
        }
        prop_assert_eq!(idx.len(), ids.len());
    }
}
