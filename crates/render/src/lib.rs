//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderer cannot mutate world or player state.
//! - Render state derives from the block world and the controller's view.
//! - Every scene shape is one of a closed set of variants; there is no
//!   fallback drawing path.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use scene::{Scene, SceneShape};

pub fn crate_info() -> &'static str {
    "voxelwalk-render v0.1.0"
}
