/// A discrete player action, delivered between or alongside ticks.
///
/// Held movement lives in [`crate::InputState`]; actions are one-shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Jump if standing on something.
    Jump,
    /// Place a block in the cell in front of the player.
    PlaceBlock,
    /// Remove the block in the cell in front of the player.
    RemoveBlock,
    /// Turn left by one configured pan step.
    PanLeft,
    /// Turn right by one configured pan step.
    PanRight,
    /// Turn the view about the up axis by the given degrees (positive = left).
    Pan(f32),
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

impl Action {
    /// Map a single-character key binding to an action.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            ' ' => Self::Jump,
            'f' => Self::PlaceBlock,
            'g' => Self::RemoveBlock,
            'q' => Self::PanLeft,
            'e' => Self::PanRight,
            other => {
                tracing::trace!(key = ?other, "unbound key");
                Self::Noop
            }
        }
    }

    /// Whether this action edits the block world.
    pub fn edits_world(&self) -> bool {
        matches!(self, Self::PlaceBlock | Self::RemoveBlock)
    }
}
