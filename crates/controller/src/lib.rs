//! First-Person Controller: per-frame movement, block collision, gravity,
//! and look-at view construction for a player walking a block world.
//!
//! # Invariants
//! - One tick runs movement, collision, gravity, then view, to completion.
//! - `grounded` holds iff the eye rests exactly at terrain height plus eye
//!   height, with zero vertical velocity.
//! - The cached view matrix is rebuilt after every eye/at mutation.
//! - Near-zero direction vectors normalize to zero, never to NaN.

pub mod collision;
pub mod config;
pub mod controller;
pub mod gravity;
pub mod movement;
pub mod state;
pub mod view;

pub use config::{ConfigError, ControllerConfig, GravityScaling};
pub use controller::{ActionError, FirstPersonController, TickReport};
pub use state::PlayerState;

pub fn crate_info() -> &'static str {
    "voxelwalk-controller v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("controller"));
    }
}
