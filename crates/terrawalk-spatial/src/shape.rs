use terrawalk_geom::{Aabb, Vec3};

/// Upright cone standing on its base disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub axis_x: f64,
    pub axis_z: f64,
    pub base_y: f64,
    pub height: f64,
    pub radius: f64,
}

impl Cone {
    #[inline]
    pub fn top(&self) -> f64 {
        self.base_y + self.height
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec3::new(self.axis_x - self.radius, self.base_y, self.axis_z - self.radius),
            Vec3::new(self.axis_x + self.radius, self.top(), self.axis_z + self.radius),
        )
    }

    pub fn translated(&self, delta: Vec3) -> Cone {
        Cone {
            axis_x: self.axis_x + delta.x,
            axis_z: self.axis_z + delta.z,
            base_y: self.base_y + delta.y,
            ..*self
        }
    }

    #[inline]
    pub fn axis_distance(&self, x: f64, z: f64) -> f64 {
        let dx = x - self.axis_x;
        let dz = z - self.axis_z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Radius of the horizontal slice at altitude `y`, or `None` outside the
    /// vertical span.
    pub fn slice_radius(&self, y: f64) -> Option<f64> {
        let from_tip = self.top() - y;
        if from_tip < 0.0 || from_tip > self.height || self.height <= 0.0 {
            return None;
        }
        Some(from_tip / self.height * self.radius)
    }

    /// Altitude of the mantle at horizontal distance `dist` from the axis.
    pub fn mantle_height(&self, dist: f64) -> f64 {
        if self.radius <= 0.0 {
            return self.top();
        }
        let t = (1.0 - dist / self.radius).clamp(0.0, 1.0);
        self.base_y + t * self.height
    }
}

/// A single collidable primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solid {
    Box(Aabb),
    Cone(Cone),
}

impl Solid {
    pub fn bounds(&self) -> Aabb {
        match self {
            Solid::Box(b) => *b,
            Solid::Cone(c) => c.bounds(),
        }
    }
}

/// Trunk plus stacked foliage cones.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeShape {
    pub trunk: Aabb,
    pub layers: Vec<Cone>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Box(Aabb),
    Cone(Cone),
    CompoundTree(TreeShape),
}

impl Shape {
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Box(b) => *b,
            Shape::Cone(c) => c.bounds(),
            Shape::CompoundTree(t) => t
                .layers
                .iter()
                .fold(t.trunk, |acc, c| acc.union(&c.bounds())),
        }
    }

    pub fn translated(&self, delta: Vec3) -> Shape {
        match self {
            Shape::Box(b) => Shape::Box(b.translated(delta)),
            Shape::Cone(c) => Shape::Cone(c.translated(delta)),
            Shape::CompoundTree(t) => Shape::CompoundTree(TreeShape {
                trunk: t.trunk.translated(delta),
                layers: t.layers.iter().map(|c| c.translated(delta)).collect(),
            }),
        }
    }

    pub fn solids(&self) -> Solids<'_> {
        Solids {
            shape: self,
            next: 0,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Box(_) => "box",
            Shape::Cone(_) => "cone",
            Shape::CompoundTree(_) => "tree",
        }
    }
}

/// Iterator over the primitives of a [`Shape`].
pub struct Solids<'a> {
    shape: &'a Shape,
    next: usize,
}

impl Iterator for Solids<'_> {
    type Item = Solid;

    fn next(&mut self) -> Option<Solid> {
        let i = self.next;
        self.next += 1;
        match self.shape {
            Shape::Box(b) => (i == 0).then_some(Solid::Box(*b)),
            Shape::Cone(c) => (i == 0).then_some(Solid::Cone(*c)),
            Shape::CompoundTree(t) => {
                if i == 0 {
                    Some(Solid::Box(t.trunk))
                } else {
                    t.layers.get(i - 1).copied().map(Solid::Cone)
                }
            }
        }
    }
}
