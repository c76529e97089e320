use glam::{Mat4, Vec3};
use voxelwalk_common::Block;
use voxelwalk_kernel::BlockWorld;

/// Edge length of the sky cube, centered on the eye every frame.
const SKY_SCALE: f32 = 500.0;

/// Thickness of the ground slab; its top face sits at y = 0.
const GROUND_THICKNESS: f32 = 0.1;

/// Everything a frame can contain. Each variant supplies its own model
/// transform from a unit cube centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneShape {
    /// Flat slab under a `size × size` grid of block columns.
    Ground { size: f32 },
    /// Background cube that follows the eye.
    Sky { scale: f32 },
    Block(Block),
}

impl SceneShape {
    /// Model matrix for this shape when viewed from `eye`.
    pub fn model_matrix(&self, eye: Vec3) -> Mat4 {
        match self {
            Self::Ground { size } => {
                // Columns are centered on integers, so the grid spans
                // [-0.5, size - 0.5] on both axes.
                let half = size / 2.0 - 0.5;
                let center = Vec3::new(half, -GROUND_THICKNESS / 2.0, half);
                Mat4::from_translation(center)
                    * Mat4::from_scale(Vec3::new(*size, GROUND_THICKNESS, *size))
            }
            Self::Sky { scale } => {
                Mat4::from_translation(eye) * Mat4::from_scale(Vec3::splat(*scale))
            }
            Self::Block(block) => Mat4::from_translation(block.center()),
        }
    }

    /// Whether the shape writes depth. The sky never does, so it always
    /// stays behind the world.
    pub fn writes_depth(&self) -> bool {
        !matches!(self, Self::Sky { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ground { .. } => "ground",
            Self::Sky { .. } => "sky",
            Self::Block(_) => "block",
        }
    }
}

/// Draw list for one frame: sky first, then ground, then blocks in world order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<SceneShape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the draw list for a block world over a ground of `ground_size`.
    pub fn from_world(world: &BlockWorld, ground_size: f32) -> Self {
        let mut shapes = Vec::with_capacity(world.block_count() + 2);
        shapes.push(SceneShape::Sky { scale: SKY_SCALE });
        shapes.push(SceneShape::Ground { size: ground_size });
        shapes.extend(world.blocks().iter().copied().map(SceneShape::Block));
        Self { shapes }
    }

    pub fn push(&mut self, shape: SceneShape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    /// Number of shapes with the given label.
    pub fn count(&self, label: &str) -> usize {
        self.shapes.iter().filter(|s| s.label() == label).count()
    }
}
