//! Input: held movement keys sampled once per tick, plus discrete actions.
//!
//! # Invariants
//! - The controller consumes `InputState` and `Action`, never raw key events.
//! - Input state is read-only during a tick.

pub mod action;
pub mod keys;

pub use action::Action;
pub use keys::{InputError, InputState, MoveKey};

pub fn crate_info() -> &'static str {
    "voxelwalk-input v0.1.0"
}
