use hashbrown::HashMap;
use terrawalk_geom::Vec3;

use crate::object::{ObjectId, SurfaceObject};

/// Grid bucket coordinate `(floor(x / cell), floor(z / cell))`.
pub type BucketKey = (i32, i32);

#[derive(Default, Debug, Clone, Copy)]
pub struct SpatialIndexStats {
    pub objects: usize,
    pub buckets: usize,
    pub largest_bucket: usize,
}

struct Entry {
    object: SurfaceObject,
    key: BucketKey,
}

pub struct SpatialIndex {
    cell: f64,
    buckets: HashMap<BucketKey, Vec<ObjectId>>,
    entries: HashMap<ObjectId, Entry>,
    next_id: u64,
    revision: u64,
}

impl SpatialIndex {
    /// `cell_size` is the bucket edge length, normally the chunk size.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell: cell_size.max(f64::MIN_POSITIVE),
            buckets: HashMap::new(),
            entries: HashMap::new(),
            next_id: 1,
            revision: 0,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    #[inline]
    pub fn bucket_key(&self, x: f64, z: f64) -> BucketKey {
        ((x / self.cell).floor() as i32, (z / self.cell).floor() as i32)
    }

    /// Stamp bumped by every insert, remove and relocate.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SpatialIndexStats {
        SpatialIndexStats {
            objects: self.entries.len(),
            buckets: self.buckets.len(),
            largest_bucket: self.buckets.values().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Assigns a fresh id and files the object under its position's bucket.
    pub fn insert(&mut self, mut object: SurfaceObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        object.id = id;
        let key = self.bucket_key(object.position.x, object.position.z);
        self.buckets.entry(key).or_default().push(id);
        self.entries.insert(id, Entry { object, key });
        self.revision += 1;
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SurfaceObject> {
        let entry = self.entries.remove(&id)?;
        self.detach(id, entry.key);
        self.revision += 1;
        Some(entry.object)
    }

    /// Moves an object, translating its shape along with it. Returns false
    /// for unknown ids.
    pub fn relocate(&mut self, id: ObjectId, position: Vec3) -> bool {
        let new_key = self.bucket_key(position.x, position.z);
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        let delta = position - entry.object.position;
        entry.object.shape = entry.object.shape.translated(delta);
        entry.object.position = position;
        let old_key = entry.key;
        entry.key = new_key;
        if old_key != new_key {
            self.detach(id, old_key);
            self.buckets.entry(new_key).or_default().push(id);
        }
        self.revision += 1;
        true
    }

    fn detach(&mut self, id: ObjectId, key: BucketKey) {
        if let Some(ids) = self.buckets.get_mut(&key) {
            ids.retain(|&o| o != id);
            if ids.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&SurfaceObject> {
        self.entries.get(&id).map(|e| &e.object)
    }

    #[inline]
    pub fn bucket_of(&self, id: ObjectId) -> Option<BucketKey> {
        self.entries.get(&id).map(|e| e.key)
    }

    /// Ids filed under `key`, in insertion order.
    pub fn bucket(&self, key: BucketKey) -> &[ObjectId] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Objects whose bucket is within Chebyshev distance `ring` of the bucket
    /// containing `(x, z)`. Buckets are visited row by row, objects in
    /// insertion order.
    pub fn neighborhood(&self, x: f64, z: f64, ring: i32) -> impl Iterator<Item = &SurfaceObject> + '_ {
        let (bx, bz) = self.bucket_key(x, z);
        let ring = ring.max(0);
        (-ring..=ring)
            .flat_map(move |dz| (-ring..=ring).map(move |dx| (bx + dx, bz + dz)))
            .flat_map(move |key| self.bucket(key).iter())
            .filter_map(move |id| self.get(*id))
    }

    pub fn query_neighborhood(&self, x: f64, z: f64, ring: i32) -> Vec<&SurfaceObject> {
        self.neighborhood(x, z, ring).collect()
    }

    /// Every object, in no particular order.
    pub fn objects(&self) -> impl Iterator<Item = &SurfaceObject> + '_ {
        self.entries.values().map(|e| &e.object)
    }

    /// Number of buckets listing `id`. Diagnostic full scan; not for hot paths.
    pub fn buckets_containing(&self, id: ObjectId) -> usize {
        self.buckets.values().filter(|ids| ids.contains(&id)).count()
    }
}
