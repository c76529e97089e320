//! Block World Kernel: the authoritative block collection the controller
//! collides against, with terrain queries and deterministic replay hooks.
//!
//! # Invariants
//! - Blocks are immutable once placed; mutation is placement or removal.
//! - Mutations happen between controller ticks, never during one.
//! - Block iteration order is insertion order.

pub mod index;
pub mod layout;
pub mod world;

pub use index::ColumnIndex;
pub use layout::HeightMap;
pub use world::{BlockError, BlockWorld, WorldEvent};
