//! Shared types for the voxelwalk workspace: blocks, grid columns, and the
//! geometric constants every other crate agrees on.

pub mod types;

pub use types::{BLOCK_HALF_EXTENT, Block, ColumnCoord, EYE_HEIGHT};
