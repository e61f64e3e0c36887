use serde::{Deserialize, Serialize};

/// Chunk grid coordinate in the XZ plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk owning the integer world cell `(x, z)`.
    #[inline]
    pub fn containing(x: i32, z: i32, chunk_size: i32) -> Self {
        Self::new(x.div_euclid(chunk_size), z.div_euclid(chunk_size))
    }

    /// Chunk owning the continuous position `(x, z)`.
    #[inline]
    pub fn at_position(x: f64, z: f64, chunk_size: i32) -> Self {
        Self::containing(x.floor() as i32, z.floor() as i32, chunk_size)
    }

    #[inline]
    pub fn origin(self, chunk_size: i32) -> (i32, i32) {
        (self.cx * chunk_size, self.cz * chunk_size)
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self::new(self.cx + dx, self.cz + dz)
    }

    #[inline]
    pub fn chebyshev(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cz)
    }
}
