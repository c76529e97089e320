use std::collections::HashMap;
use voxelwalk_common::{Block, ColumnCoord};

/// Uniform grid over XZ columns of unit size.
///
/// Each block is filed under the column its center falls in. Queries return
/// slot indices into the owning block list, sorted ascending, so callers see
/// blocks in insertion order just as a linear scan would.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    columns: HashMap<ColumnCoord, Vec<usize>>,
}

impl ColumnIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the entire index from a block list.
    pub fn rebuild(&mut self, blocks: &[Block]) {
        self.columns.clear();
        for (slot, block) in blocks.iter().enumerate() {
            self.columns.entry(block.column()).or_default().push(slot);
        }
    }

    /// File a block appended at `slot`. Slots must be inserted in increasing
    /// order, which holds when blocks are only ever pushed.
    pub fn insert(&mut self, slot: usize, block: &Block) {
        self.columns.entry(block.column()).or_default().push(slot);
    }

    /// Forget the block at `slot` and shift every later slot down by one,
    /// mirroring `Vec::remove` on the owning list.
    pub fn remove(&mut self, slot: usize, block: &Block) {
        let column = block.column();
        if let Some(slots) = self.columns.get_mut(&column) {
            slots.retain(|&s| s != slot);
            if slots.is_empty() {
                self.columns.remove(&column);
            }
        }
        for slots in self.columns.values_mut() {
            for s in slots.iter_mut().filter(|s| **s > slot) {
                *s -= 1;
            }
        }
    }

    /// Slots of all blocks in one column, in insertion order.
    pub fn slots_in_column(&self, coord: ColumnCoord) -> &[usize] {
        self.columns.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slots of every block whose center could lie within `reach` of `(x, z)`
    /// on both horizontal axes. Sorted ascending.
    pub fn slots_near(&self, x: f32, z: f32, reach: f32) -> Vec<usize> {
        let lo = ColumnCoord::containing(x - reach, z - reach);
        let hi = ColumnCoord::containing(x + reach, z + reach);
        let mut slots = Vec::new();
        for cx in lo.x..=hi.x {
            for cz in lo.z..=hi.z {
                slots.extend_from_slice(self.slots_in_column(ColumnCoord::new(cx, cz)));
            }
        }
        slots.sort_unstable();
        slots
    }

    /// Number of non-empty columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
