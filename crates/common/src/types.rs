use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Half the edge length of every block. Blocks are unit cubes.
pub const BLOCK_HALF_EXTENT: f32 = 0.5;

/// Distance from the player's feet to the eye when standing.
pub const EYE_HEIGHT: f32 = 1.0;

/// An axis-aligned unit cube, identified by its center.
///
/// Blocks are immutable once placed. To move one, remove it and place a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    center: Vec3,
}

impl Block {
    pub fn new(center: Vec3) -> Self {
        Self { center }
    }

    /// Block in grid cell `(x, y, z)`.
    ///
    /// Columns are centered on integer X and Z; layers stack from the ground,
    /// so layer `y` is centered at `y + 0.5`.
    pub fn at_cell(x: i32, y: i32, z: i32) -> Self {
        Self::new(Vec3::new(x as f32, y as f32 + BLOCK_HALF_EXTENT, z as f32))
    }

    /// Grid cell whose volume contains `point`.
    pub fn enclosing(point: Vec3) -> Self {
        Self::at_cell(
            point.x.round() as i32,
            point.y.floor() as i32,
            point.z.round() as i32,
        )
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Height of the top face.
    pub fn top(&self) -> f32 {
        self.center.y + BLOCK_HALF_EXTENT
    }

    /// Whether the block's horizontal footprint contains `(x, z)`. Edges count.
    pub fn footprint_contains(&self, x: f32, z: f32) -> bool {
        (x - self.center.x).abs() <= BLOCK_HALF_EXTENT
            && (z - self.center.z).abs() <= BLOCK_HALF_EXTENT
    }

    /// Grid column the block's center falls in.
    pub fn column(&self) -> ColumnCoord {
        ColumnCoord::containing(self.center.x, self.center.z)
    }
}

/// Integer XZ column of the unit grid (the Y axis is ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnCoord {
    pub x: i32,
    pub z: i32,
}

impl ColumnCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Column containing the world-space point `(x, z)`.
    pub fn containing(x: f32, z: f32) -> Self {
        Self {
            x: x.floor() as i32,
            z: z.floor() as i32,
        }
    }
}
