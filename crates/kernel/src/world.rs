use crate::index::ColumnIndex;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use voxelwalk_common::{BLOCK_HALF_EXTENT, Block};

/// An event record produced by every mutation to the block world.
///
/// The event log is the foundation for replay: feeding the same events to
/// [`BlockWorld::replay`] reconstructs an identical world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A block was placed with the given center.
    BlockPlaced { center: Vec3 },
    /// The block with the given center was removed.
    BlockRemoved { center: Vec3 },
    /// The world advanced one frame.
    Stepped { tick: u64 },
}

/// Errors from block placement and removal.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BlockError {
    #[error("a block already occupies {0}")]
    Occupied(Vec3),
    #[error("no block at {0}")]
    NotFound(Vec3),
}

/// The authoritative block collection.
///
/// Blocks are kept in insertion order. A [`ColumnIndex`] is updated on
/// every mutation so neighborhood queries stay cheap for large worlds while
/// returning exactly what a linear scan would.
#[derive(Debug, Clone, Default)]
pub struct BlockWorld {
    blocks: Vec<Block>,
    index: ColumnIndex,
    tick: u64,
    /// Append-only event log of all mutations.
    event_log: Vec<WorldEvent>,
}

impl BlockWorld {
    /// Create an empty world at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from a block list, skipping duplicate centers.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut world = Self::new();
        for block in blocks {
            if let Err(err) = world.place(block.center()) {
                tracing::debug!(%err, "skipping duplicate block");
            }
        }
        world
    }

    /// Current frame counter.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of blocks in the world.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// All blocks, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Whether a block with exactly this center exists.
    pub fn contains(&self, center: Vec3) -> bool {
        self.slot_of(center).is_some()
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Place a block centered at `center`.
    pub fn place(&mut self, center: Vec3) -> Result<(), BlockError> {
        if self.contains(center) {
            return Err(BlockError::Occupied(center));
        }
        let block = Block::new(center);
        self.index.insert(self.blocks.len(), &block);
        self.blocks.push(block);
        self.event_log.push(WorldEvent::BlockPlaced { center });
        tracing::debug!(?center, count = self.blocks.len(), "block placed");
        Ok(())
    }

    /// Place a block filling the integer cell `(x, y, z)`.
    pub fn place_at(&mut self, x: i32, y: i32, z: i32) -> Result<Block, BlockError> {
        let block = Block::at_cell(x, y, z);
        self.place(block.center())?;
        Ok(block)
    }

    /// Remove the block centered at `center`, returning it.
    pub fn remove(&mut self, center: Vec3) -> Result<Block, BlockError> {
        let slot = self.slot_of(center).ok_or(BlockError::NotFound(center))?;
        let block = self.blocks.remove(slot);
        self.index.remove(slot, &block);
        self.event_log.push(WorldEvent::BlockRemoved { center });
        tracing::debug!(?center, count = self.blocks.len(), "block removed");
        Ok(block)
    }

    /// Advance the frame counter by one.
    pub fn step(&mut self) {
        self.tick += 1;
        self.event_log.push(WorldEvent::Stepped { tick: self.tick });
    }

    /// Blocks whose centers may lie within `reach` of `(x, z)` on both
    /// horizontal axes, in insertion order.
    pub fn blocks_near(&self, x: f32, z: f32, reach: f32) -> Vec<&Block> {
        self.index
            .slots_near(x, z, reach)
            .into_iter()
            .map(|slot| &self.blocks[slot])
            .collect()
    }

    /// Highest block top whose footprint contains `(x, z)`, or 0 when no
    /// block covers the point. Columns lying wholly below zero report their
    /// own top.
    pub fn terrain_height(&self, x: f32, z: f32) -> f32 {
        self.blocks_near(x, z, BLOCK_HALF_EXTENT)
            .into_iter()
            .filter(|b| b.footprint_contains(x, z))
            .map(Block::top)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    /// Reconstruct a world from a sequence of events.
    pub fn replay(events: &[WorldEvent]) -> Self {
        let mut world = Self::new();
        for event in events {
            match event {
                WorldEvent::BlockPlaced { center } => {
                    world.blocks.push(Block::new(*center));
                }
                WorldEvent::BlockRemoved { center } => {
                    if let Some(slot) = world.blocks.iter().position(|b| b.center() == *center) {
                        world.blocks.remove(slot);
                    }
                }
                WorldEvent::Stepped { tick } => {
                    world.tick = *tick;
                }
            }
        }
        world.index.rebuild(&world.blocks);
        world
    }

    /// Deterministic hash of the tick and the block list in insertion order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        for block in &self.blocks {
            let c = block.center();
            mix(&mut h, &c.x.to_le_bytes());
            mix(&mut h, &c.y.to_le_bytes());
            mix(&mut h, &c.z.to_le_bytes());
        }
        h
    }

    fn slot_of(&self, center: Vec3) -> Option<usize> {
        self.index
            .slots_near(center.x, center.z, 0.0)
            .into_iter()
            .find(|&slot| self.blocks[slot].center() == center)
    }
}
