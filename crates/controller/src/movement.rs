//! Horizontal movement: held keys and frame time to a velocity update and a
//! tentative displacement.

use crate::config::ControllerConfig;
use crate::state::PlayerState;
use glam::{Vec2, Vec3};
use voxelwalk_input::{InputState, MoveKey};

/// Normalize `v`, or return zero when it is shorter than `epsilon`.
pub fn planar_unit(v: Vec2, epsilon: f32) -> Vec2 {
    let len = v.length();
    if len > epsilon { v / len } else { Vec2::ZERO }
}

fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Forward and left unit vectors in the XZ plane.
///
/// Forward is the view direction flattened; left is `up × forward`
/// flattened. Either is zero when the view direction has no horizontal
/// component.
pub fn horizontal_basis(state: &PlayerState, epsilon: f32) -> (Vec2, Vec2) {
    let dir = state.look_direction();
    let forward = planar_unit(xz(dir), epsilon);
    let left = planar_unit(xz(state.up.cross(dir)), epsilon);
    (forward, left)
}

/// Acceleration requested by the held keys.
pub fn wish_acceleration(
    state: &PlayerState,
    input: &InputState,
    config: &ControllerConfig,
) -> Vec2 {
    let (forward, left) = horizontal_basis(state, config.direction_epsilon);
    let mut wish = Vec2::ZERO;
    for key in input.held_keys() {
        wish += match key {
            MoveKey::Forward => forward,
            MoveKey::Back => -forward,
            MoveKey::Left => left,
            MoveKey::Right => -left,
        };
    }
    planar_unit(wish, config.direction_epsilon) * config.acceleration
}

/// Multiplier applied to velocity by friction over `dt`. Never negative, so a
/// long frame stops the player instead of reversing them.
pub fn friction_factor(friction: f32, dt: f32) -> f32 {
    (1.0 - friction * dt).max(0.0)
}

/// Integrate horizontal velocity over `dt` and return the tentative
/// displacement. Position is not touched; collision applies it per axis.
pub fn integrate(
    state: &mut PlayerState,
    input: &InputState,
    dt: f32,
    config: &ControllerConfig,
) -> Vec2 {
    let accel = wish_acceleration(state, input, config);
    state.velocity += accel * dt;
    state.velocity *= friction_factor(config.friction, dt);
    state.velocity * dt
}
