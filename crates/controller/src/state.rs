use glam::{Vec2, Vec3};

/// The player's camera and motion state, owned by the controller.
///
/// Horizontal velocity is stored as a `Vec2` whose `x` is world X and whose
/// `y` is world Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera looks toward.
    pub at: Vec3,
    /// Constant up axis.
    pub up: Vec3,
    /// Horizontal velocity (XZ).
    pub velocity: Vec2,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Vec3::new(8.0, 2.0, 25.0), Vec3::new(8.0, 2.0, 8.0))
    }
}

impl PlayerState {
    /// At rest, airborne until the first gravity step settles it.
    pub fn new(eye: Vec3, at: Vec3) -> Self {
        Self {
            eye,
            at,
            up: Vec3::Y,
            velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            grounded: false,
        }
    }

    /// View direction, not normalized.
    pub fn look_direction(&self) -> Vec3 {
        self.at - self.eye
    }

    /// Height of the player's feet.
    pub fn foot_level(&self, eye_height: f32) -> f32 {
        self.eye.y - eye_height
    }

    /// Move eye and at together, preserving the look direction.
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.at += delta;
    }
}
