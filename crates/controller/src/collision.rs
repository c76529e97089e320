//! Per-axis collision against unit blocks.
//!
//! X is resolved before Z. Each axis is tried on its own and reverted on
//! penetration, which lets the player slide along a wall when approaching it
//! diagonally.

use crate::state::PlayerState;
use glam::{Vec2, Vec3};
use voxelwalk_common::{BLOCK_HALF_EXTENT, Block};
use voxelwalk_kernel::BlockWorld;

/// A horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    fn along(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Z => v.z,
        }
    }

    fn across(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.z,
            Self::Z => v.x,
        }
    }

    fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Z => Vec3::Z,
        }
    }

    fn component(self, v: Vec2) -> f32 {
        match self {
            Self::X => v.x,
            Self::Z => v.y,
        }
    }

    fn zero_component(self, v: &mut Vec2) {
        match self {
            Self::X => v.x = 0.0,
            Self::Z => v.y = 0.0,
        }
    }
}

/// Which axes were blocked during one resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub blocked_x: bool,
    pub blocked_z: bool,
}

/// Whether `block` stops an eye at `eye` moving along `axis`.
///
/// The block must reach above the feet, and the eye must be within
/// `radius + 0.5` of its center along the axis and within 0.5 across it.
pub fn obstructs(block: &Block, eye: Vec3, axis: Axis, radius: f32, eye_height: f32) -> bool {
    let c = block.center();
    block.top() > eye.y - eye_height
        && (axis.along(eye) - axis.along(c)).abs() < radius + BLOCK_HALF_EXTENT
        && (axis.across(eye) - axis.across(c)).abs() < BLOCK_HALF_EXTENT
}

/// First obstructing block in iteration order.
pub fn first_obstruction<'a>(
    blocks: impl IntoIterator<Item = &'a Block>,
    eye: Vec3,
    axis: Axis,
    radius: f32,
    eye_height: f32,
) -> Option<&'a Block> {
    blocks
        .into_iter()
        .find(|b| obstructs(b, eye, axis, radius, eye_height))
}

fn resolve_axis(
    state: &mut PlayerState,
    displacement: Vec2,
    axis: Axis,
    world: &BlockWorld,
    radius: f32,
    eye_height: f32,
) -> bool {
    let delta = axis.component(displacement);
    if delta == 0.0 {
        return false;
    }
    let saved = (state.eye, state.at);
    state.translate(axis.unit() * delta);

    let reach = radius + BLOCK_HALF_EXTENT;
    let candidates = world.blocks_near(state.eye.x, state.eye.z, reach);
    match first_obstruction(candidates, state.eye, axis, radius, eye_height) {
        Some(block) => {
            tracing::trace!(?axis, block = ?block.center(), "movement blocked");
            (state.eye, state.at) = saved;
            axis.zero_component(&mut state.velocity);
            true
        }
        None => false,
    }
}

/// Apply `displacement` to the player, X then Z, reverting any axis that
/// would penetrate a block and zeroing that axis's velocity.
pub fn resolve(
    state: &mut PlayerState,
    displacement: Vec2,
    world: &BlockWorld,
    radius: f32,
    eye_height: f32,
) -> Resolution {
    Resolution {
        blocked_x: resolve_axis(state, displacement, Axis::X, world, radius, eye_height),
        blocked_z: resolve_axis(state, displacement, Axis::Z, world, radius, eye_height),
    }
}
