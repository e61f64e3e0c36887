use terrawalk_geom::{Aabb, Rgb, Vec3};

use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Placeholder carried by objects that have not been inserted yet.
    pub const PENDING: ObjectId = ObjectId(0);
}

/// Who created the object. Natural objects are never removed by edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Natural,
    Player,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceObject {
    pub(crate) id: ObjectId,
    pub position: Vec3,
    pub shape: Shape,
    pub owner: Owner,
    /// Item id for placed blocks, `"tree"` for vegetation.
    pub label: String,
    /// Block color, or foliage color for trees.
    pub tint: Rgb,
    /// Secondary color (tree bark).
    pub trim: Option<Rgb>,
}

impl SurfaceObject {
    pub fn new(position: Vec3, shape: Shape, owner: Owner, label: impl Into<String>, tint: Rgb) -> Self {
        Self {
            id: ObjectId::PENDING,
            position,
            shape,
            owner,
            label: label.into(),
            tint,
            trim: None,
        }
    }

    pub fn with_trim(mut self, trim: Rgb) -> Self {
        self.trim = Some(trim);
        self
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.shape.bounds()
    }
}
