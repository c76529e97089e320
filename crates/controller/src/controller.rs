use crate::collision::{self, Resolution};
use crate::config::ControllerConfig;
use crate::gravity::{self, GravityStep};
use crate::movement;
use crate::state::PlayerState;
use crate::view;
use glam::{Mat4, Quat, Vec3};
use voxelwalk_common::Block;
use voxelwalk_input::{Action, InputState};
use voxelwalk_kernel::{BlockError, BlockWorld};

/// Horizontal distance ahead of the eye probed for block placement.
const EDIT_REACH: f32 = 1.0;

/// Errors from applying a discrete action.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    Block(#[from] BlockError),
    #[error("target cell {0} overlaps the player")]
    InsidePlayer(Vec3),
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub collision: Resolution,
    pub gravity: GravityStep,
}

/// First-person controller: owns the player state and its cached view.
///
/// Each [`tick`](Self::tick) runs movement, collision, gravity and view in
/// that order. The world is borrowed immutably for the whole tick, so blocks
/// can only change between ticks.
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    state: PlayerState,
    config: ControllerConfig,
    view: Mat4,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(ControllerConfig::default(), PlayerState::default())
    }
}

impl FirstPersonController {
    /// Take ownership of `state`. A look target straight above or below the
    /// eye leaves the view basis undefined, so it is replaced by one unit
    /// toward -Z.
    pub fn new(config: ControllerConfig, mut state: PlayerState) -> Self {
        if looks_along_up(state.look_direction(), state.up, config.direction_epsilon) {
            tracing::warn!(eye = ?state.eye, at = ?state.at, "vertical look target replaced");
            state.at = state.eye - Vec3::Z;
        }
        let view = view::look_at(state.eye, state.at, state.up);
        Self {
            state,
            config,
            view,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn eye(&self) -> Vec3 {
        self.state.eye
    }

    /// View matrix for the current eye/at/up.
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Advance one frame of `dt` seconds with the given held keys.
    pub fn tick(&mut self, dt: f32, input: &InputState, world: &BlockWorld) -> TickReport {
        let dt = dt.max(0.0);
        let _span = tracing::trace_span!("controller_tick", dt).entered();

        let displacement = movement::integrate(&mut self.state, input, dt, &self.config);
        let collision = collision::resolve(
            &mut self.state,
            displacement,
            world,
            self.config.collision_radius,
            self.config.eye_height,
        );
        let gravity = gravity::apply(&mut self.state, world, dt, &self.config);
        self.rebuild_view();

        TickReport { collision, gravity }
    }

    /// Jump if grounded. Takes effect on the next tick.
    pub fn jump(&mut self) -> bool {
        gravity::try_jump(&mut self.state, &self.config)
    }

    /// Turn the view about the up axis, keeping the eye fixed. Positive
    /// degrees turn left.
    pub fn pan(&mut self, degrees: f32) {
        let rotation = Quat::from_axis_angle(self.state.up, degrees.to_radians());
        self.state.at = self.state.eye + rotation * self.state.look_direction();
        self.rebuild_view();
    }

    pub fn pan_left(&mut self) {
        self.pan(self.config.pan_step_degrees);
    }

    pub fn pan_right(&mut self) {
        self.pan(-self.config.pan_step_degrees);
    }

    /// Aim at `at`. Refused when the direction is (nearly) parallel to up,
    /// which would leave the view basis undefined.
    pub fn set_look_at(&mut self, at: Vec3) -> bool {
        if looks_along_up(at - self.state.eye, self.state.up, self.config.direction_epsilon) {
            tracing::debug!(?at, "rejected degenerate look target");
            return false;
        }
        self.state.at = at;
        self.rebuild_view();
        true
    }

    /// Center of the grid cell one unit ahead of the eye at foot level.
    pub fn target_cell(&self) -> Vec3 {
        let (forward, _) = movement::horizontal_basis(&self.state, self.config.direction_epsilon);
        let probe = Vec3::new(
            self.state.eye.x + forward.x * EDIT_REACH,
            self.state.foot_level(self.config.eye_height),
            self.state.eye.z + forward.y * EDIT_REACH,
        );
        Block::enclosing(probe).center()
    }

    /// Apply a discrete action. World edits target [`target_cell`](Self::target_cell).
    pub fn apply_action(
        &mut self,
        action: Action,
        world: &mut BlockWorld,
    ) -> Result<(), ActionError> {
        match action {
            Action::Jump => {
                self.jump();
            }
            Action::PanLeft => self.pan_left(),
            Action::PanRight => self.pan_right(),
            Action::Pan(degrees) => self.pan(degrees),
            Action::PlaceBlock => {
                let target = self.target_cell();
                let own = Block::enclosing(self.state.eye).center();
                if (target.x, target.z) == (own.x, own.z) {
                    return Err(ActionError::InsidePlayer(target));
                }
                world.place(target)?;
            }
            Action::RemoveBlock => {
                world.remove(self.target_cell())?;
            }
            Action::Noop => {}
        }
        Ok(())
    }

    fn rebuild_view(&mut self) {
        self.view = view::look_at(self.state.eye, self.state.at, self.state.up);
    }
}

fn looks_along_up(dir: Vec3, up: Vec3, epsilon: f32) -> bool {
    dir.cross(up).length() <= epsilon
}
