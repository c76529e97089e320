//! Vertical motion: gravity, landing on the terrain, and jumping.

use crate::config::ControllerConfig;
use crate::state::PlayerState;
use voxelwalk_kernel::BlockWorld;

/// Outcome of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityStep {
    /// Terrain height under the eye after the step.
    pub terrain: f32,
    /// The player touched down this step after being airborne.
    pub landed: bool,
}

/// Advance vertical velocity and position, then clamp to the terrain.
///
/// When the eye ends at or below standing height it is snapped to exactly
/// `terrain + eye_height`, `at` follows by the same amount, vertical velocity
/// is zeroed and the player is grounded. Otherwise the player is airborne.
pub fn apply(
    state: &mut PlayerState,
    world: &BlockWorld,
    dt: f32,
    config: &ControllerConfig,
) -> GravityStep {
    let h = config.vertical_step(dt);
    let was_grounded = state.grounded;

    state.vertical_velocity += config.gravity * h;
    let dy = state.vertical_velocity * h;
    state.eye.y += dy;
    state.at.y += dy;

    let terrain = world.terrain_height(state.eye.x, state.eye.z);
    let standing = terrain + config.eye_height;
    if state.eye.y <= standing {
        let lift = standing - state.eye.y;
        state.eye.y = standing;
        state.at.y += lift;
        state.vertical_velocity = 0.0;
        state.grounded = true;
    } else {
        state.grounded = false;
    }

    let landed = state.grounded && !was_grounded;
    if landed {
        tracing::debug!(terrain, "landed");
    }
    GravityStep { terrain, landed }
}

/// Start a jump if grounded. Returns whether the jump happened.
pub fn try_jump(state: &mut PlayerState, config: &ControllerConfig) -> bool {
    if !state.grounded {
        return false;
    }
    state.vertical_velocity = config.jump_speed;
    state.grounded = false;
    tracing::debug!(speed = config.jump_speed, "jump");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GravityScaling;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn settle(state: &mut PlayerState, world: &BlockWorld, config: &ControllerConfig) -> usize {
        for n in 0..10_000 {
            apply(state, world, DT, config);
            if state.grounded {
                return n;
            }
        }
        panic!("never settled");
    }

    #[test]
    fn falls_to_flat_ground() {
        let config = ControllerConfig::default();
        let world = BlockWorld::new();
        let mut s = PlayerState::new(Vec3::new(3.0, 6.0, 3.0), Vec3::new(3.0, 6.0, 2.0));
        settle(&mut s, &world, &config);
        assert_eq!(s.eye.y, 1.0);
        assert_eq!(s.vertical_velocity, 0.0);
    }

    #[test]
    fn settles_on_top_of_stack() {
        let config = ControllerConfig::default();
        let mut world = BlockWorld::new();
        world.place(Vec3::new(0.5, 0.5, 0.5)).unwrap();
        world.place(Vec3::new(0.5, 1.5, 0.5)).unwrap();
        let mut s = PlayerState::new(Vec3::new(0.5, 7.3, 0.5), Vec3::new(0.5, 6.3, -0.5));
        settle(&mut s, &world, &config);
        assert_eq!(s.eye.y, world.terrain_height(s.eye.x, s.eye.z) + 1.0);
        assert_eq!(s.eye.y, 3.0);
        // Look direction survives the clamp.
        assert!((s.look_direction() - Vec3::new(0.0, -1.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn grounded_player_stays_grounded() {
        let config = ControllerConfig::default();
        let world = BlockWorld::new();
        let mut s = PlayerState::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, -1.0));
        for dt in [DT, 0.0, DT, 0.25] {
            apply(&mut s, &world, dt, &config);
            assert!(s.grounded);
            assert_eq!(s.eye.y, 1.0);
            assert_eq!(s.vertical_velocity, 0.0);
        }
    }

    #[test]
    fn landing_is_reported_once() {
        let config = ControllerConfig::default();
        let world = BlockWorld::new();
        let mut s = PlayerState::new(Vec3::new(0.0, 1.2, 0.0), Vec3::new(0.0, 1.2, -1.0));
        let mut landings = 0;
        for _ in 0..60 {
            if apply(&mut s, &world, DT, &config).landed {
                landings += 1;
            }
        }
        assert_eq!(landings, 1);
    }

    #[test]
    fn jump_only_when_grounded() {
        let config = ControllerConfig::default();
        let mut s = PlayerState::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 3.0, -1.0));
        s.vertical_velocity = -2.0;
        assert!(!try_jump(&mut s, &config));
        assert_eq!(s.vertical_velocity, -2.0);

        s.grounded = true;
        s.vertical_velocity = 0.0;
        assert!(try_jump(&mut s, &config));
        assert_eq!(s.vertical_velocity, config.jump_speed);
        assert!(!s.grounded);
        // No double jump.
        assert!(!try_jump(&mut s, &config));
    }

    #[test]
    fn jump_rises_then_lands() {
        let config = ControllerConfig::default();
        let world = BlockWorld::new();
        let mut s = PlayerState::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, -1.0));
        apply(&mut s, &world, DT, &config);
        assert!(try_jump(&mut s, &config));

        let mut peak: f32 = s.eye.y;
        let mut airborne_ticks = 0;
        while !apply(&mut s, &world, DT, &config).landed {
            peak = peak.max(s.eye.y);
            airborne_ticks += 1;
            assert!(airborne_ticks < 1_000, "never came down");
        }
        // v²/2g = 225 / 108, minus discretization.
        assert!(peak > 2.8 && peak < 3.1, "peak {peak}");
        assert!(airborne_ticks > 20);
        assert_eq!(s.eye.y, 1.0);
    }

    #[test]
    fn removing_support_makes_player_fall() {
        let config = ControllerConfig::default();
        let mut world = BlockWorld::new();
        let support = Vec3::new(0.5, 0.5, 0.5);
        world.place(support).unwrap();
        let mut s = PlayerState::new(Vec3::new(0.5, 2.0, 0.5), Vec3::new(0.5, 2.0, -0.5));
        apply(&mut s, &world, DT, &config);
        assert!(s.grounded);

        world.remove(support).unwrap();
        apply(&mut s, &world, DT, &config);
        assert!(!s.grounded);
        settle(&mut s, &world, &config);
        assert_eq!(s.eye.y, 1.0);
    }

    #[test]
    fn fixed_tick_ignores_frame_time() {
        let config = ControllerConfig {
            gravity_scaling: GravityScaling::FixedTick,
            ..ControllerConfig::default()
        };
        let world = BlockWorld::new();
        let mut a = PlayerState::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 10.0, -1.0));
        let mut b = a;
        apply(&mut a, &world, 0.001, &config);
        apply(&mut b, &world, 0.5, &config);
        assert_eq!(a, b);
        // Legacy per-tick drop of 0.015.
        assert!((10.0 - a.eye.y - 0.015).abs() < 1e-5);
    }

    #[test]
    fn time_scaled_fall_is_rate_independent() {
        let config = ControllerConfig::default();
        let world = BlockWorld::new();
        let start = PlayerState::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, 50.0, -1.0));

        let mut slow = start;
        for _ in 0..30 {
            apply(&mut slow, &world, 1.0 / 30.0, &config);
        }
        let mut fast = start;
        for _ in 0..120 {
            apply(&mut fast, &world, 1.0 / 120.0, &config);
        }
        // Both simulate one second: vertical speeds agree and drops are
        // within the semi-implicit Euler discretization error.
        assert!((slow.vertical_velocity - fast.vertical_velocity).abs() < 1e-2);
        assert!((slow.eye.y - fast.eye.y).abs() < 1.0);
    }
}
