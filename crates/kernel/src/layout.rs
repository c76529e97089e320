use crate::world::BlockWorld;
use voxelwalk_common::Block;

/// A square grid of column heights, each column a stack of unit blocks.
///
/// Column `(i, j)` with height `h` becomes the cells `Block::at_cell(i, k, j)`
/// for `k in 0..h`, centered at `(i, k + 0.5, j)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    size: usize,
    heights: Vec<u32>,
}

impl HeightMap {
    /// A flat, empty map of `size × size` columns.
    pub fn flat(size: usize) -> Self {
        Self {
            size,
            heights: vec![0; size * size],
        }
    }

    /// Walled arena: boundary columns of height 4 and a small L-shaped
    /// interior wall of height 3 at (5,5), (5,6) and (6,5).
    pub fn arena(size: usize) -> Self {
        let mut map = Self::flat(size);
        for i in 0..size {
            for j in 0..size {
                if i == 0 || j == 0 || i + 1 == size || j + 1 == size {
                    map.set(i, j, 4);
                }
            }
        }
        for (i, j) in [(5, 5), (5, 6), (6, 5)] {
            if i + 1 < size && j + 1 < size {
                map.set(i, j, 3);
            }
        }
        map
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Height of column `(i, j)`; out-of-range columns are empty.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        if i < self.size && j < self.size {
            self.heights[i * self.size + j]
        } else {
            0
        }
    }

    /// Set the height of column `(i, j)`. Out-of-range writes are ignored.
    pub fn set(&mut self, i: usize, j: usize, height: u32) {
        if i < self.size && j < self.size {
            self.heights[i * self.size + j] = height;
        }
    }

    /// Expand into blocks, column by column.
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::new();
        for i in 0..self.size {
            for j in 0..self.size {
                for k in 0..self.get(i, j) {
                    blocks.push(Block::at_cell(i as i32, k as i32, j as i32));
                }
            }
        }
        blocks
    }

    /// Build a [`BlockWorld`] from this map.
    pub fn build(&self) -> BlockWorld {
        let world = BlockWorld::from_blocks(self.blocks());
        tracing::info!(
            size = self.size,
            blocks = world.block_count(),
            "built world from height map"
        );
        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_map_has_no_blocks() {
        assert!(HeightMap::flat(8).blocks().is_empty());
    }

    #[test]
    fn arena_block_count() {
        let map = HeightMap::arena(16);
        // 60 boundary columns of 4, three interior columns of 3.
        assert_eq!(map.blocks().len(), 60 * 4 + 3 * 3);
        assert_eq!(map.get(0, 7), 4);
        assert_eq!(map.get(5, 6), 3);
        assert_eq!(map.get(8, 8), 0);
    }

    #[test]
    fn build_produces_walkable_interior() {
        let world = HeightMap::arena(16).build();
        assert_eq!(world.terrain_height(8.0, 8.0), 0.0);
        assert_eq!(world.terrain_height(5.0, 5.0), 3.0);
        assert_eq!(world.terrain_height(0.0, 3.0), 4.0);
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut map = HeightMap::flat(2);
        map.set(5, 5, 9);
        assert_eq!(map.get(5, 5), 0);
    }
}
