use crate::scene::Scene;
use glam::{Mat4, Vec3};
use voxelwalk_controller::FirstPersonController;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// World-to-view transform.
    pub view: Mat4,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        let eye = Vec3::new(8.0, 2.0, 25.0);
        let target = Vec3::new(8.0, 2.0, 8.0);
        Self {
            eye,
            target,
            view: Mat4::look_at_rh(eye, target, Vec3::Y),
            fov_degrees: 60.0,
        }
    }
}

impl RenderView {
    /// Snapshot the controller's current camera.
    pub fn from_controller(controller: &FirstPersonController) -> Self {
        let state = controller.state();
        Self {
            eye: state.eye,
            target: state.at,
            view: controller.view_matrix(),
            ..Self::default()
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a scene and a view, then produces output. It never
/// mutates the world or the player.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable frame description. Useful for CLI output,
/// logging, and testing the render interface.
#[derive(Debug)]
pub struct DebugTextRenderer {
    /// Shapes listed individually before the rest are summarized.
    pub max_listed: usize,
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        Self { max_listed: 16 }
    }
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (shapes={}, blocks={}) ===\n",
            scene.shapes().len(),
            scene.count("block")
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));
        for row in 0..4 {
            let r = view.view.row(row);
            out.push_str(&format!(
                "  view[{row}] = [{:8.3} {:8.3} {:8.3} {:8.3}]\n",
                r.x, r.y, r.z, r.w
            ));
        }

        for shape in scene.shapes().iter().take(self.max_listed) {
            let t = shape.model_matrix(view.eye).w_axis;
            out.push_str(&format!(
                "  {:<6} at=({:.2}, {:.2}, {:.2}){}\n",
                shape.label(),
                t.x,
                t.y,
                t.z,
                if shape.writes_depth() { "" } else { " no-depth" }
            ));
        }
        let hidden = scene.shapes().len().saturating_sub(self.max_listed);
        if hidden > 0 {
            out.push_str(&format!("  ... {hidden} more\n"));
        }

        tracing::trace!(bytes = out.len(), "debug frame rendered");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneShape;
    use voxelwalk_common::Block;
    use voxelwalk_controller::{ControllerConfig, PlayerState};
    use voxelwalk_kernel::HeightMap;

    #[test]
    fn debug_renderer_empty_scene() {
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&Scene::new(), &RenderView::default());

        assert!(output.contains("shapes=0"));
        assert!(output.contains("eye=(8.00, 2.00, 25.00)"));
        assert!(output.contains("view[3]"));
    }

    #[test]
    fn debug_renderer_lists_and_truncates() {
        let world = HeightMap::arena(16).build();
        let scene = Scene::from_world(&world, 16.0);
        let renderer = DebugTextRenderer { max_listed: 3 };
        let output = renderer.render(&scene, &RenderView::default());

        assert!(output.contains("blocks=249"));
        assert!(output.contains("sky    at=(8.00, 2.00, 25.00) no-depth"));
        assert!(output.contains("ground"));
        assert!(output.contains(&format!("... {} more", scene.shapes().len() - 3)));
    }

    #[test]
    fn view_from_controller_matches_its_matrix() {
        let state = PlayerState::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 0.0));
        let controller = FirstPersonController::new(ControllerConfig::default(), state);
        let view = RenderView::from_controller(&controller);
        assert_eq!(view.eye, state.eye);
        assert_eq!(view.target, state.at);
        assert_eq!(view.view, controller.view_matrix());
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 60.0);
        assert_eq!(view.target, Vec3::new(8.0, 2.0, 8.0));
    }

    #[test]
    fn blocks_render_at_their_centers() {
        let mut scene = Scene::new();
        scene.push(SceneShape::Block(Block::at_cell(4, 1, 4)));
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());
        assert!(output.contains("block  at=(4.00, 1.50, 4.00)"));
    }
}
