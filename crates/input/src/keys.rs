use std::str::FromStr;

/// A held movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [Self::Forward, Self::Back, Self::Left, Self::Right];

    fn bit(self) -> u8 {
        match self {
            Self::Forward => 1 << 0,
            Self::Back => 1 << 1,
            Self::Left => 1 << 2,
            Self::Right => 1 << 3,
        }
    }
}

/// Errors from parsing key names.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown movement key: {0:?}")]
    UnknownKey(String),
}

impl FromStr for MoveKey {
    type Err = InputError;

    /// Accepts WASD letters (either case) and arrow names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "up" | "forward" => Ok(Self::Forward),
            "s" | "down" | "back" => Ok(Self::Back),
            "a" | "left" => Ok(Self::Left),
            "d" | "right" => Ok(Self::Right),
            _ => Err(InputError::UnknownKey(s.to_string())),
        }
    }
}

/// The set of movement keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input state with the given keys held.
    pub fn holding(keys: &[MoveKey]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }

    /// Parse a compact key string such as `"wd"` into a held-key state.
    pub fn parse_keys(keys: &str) -> Result<Self, InputError> {
        let mut state = Self::new();
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            state.press(c.to_string().parse()?);
        }
        Ok(state)
    }

    pub fn press(&mut self, key: MoveKey) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: MoveKey) {
        self.held &= !key.bit();
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held & key.bit() != 0
    }

    /// Whether no movement key is held.
    pub fn is_idle(&self) -> bool {
        self.held == 0
    }

    pub fn clear(&mut self) {
        self.held = 0;
    }

    /// Held keys in a fixed order.
    pub fn held_keys(&self) -> impl Iterator<Item = MoveKey> + '_ {
        MoveKey::ALL.into_iter().filter(|k| self.is_held(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = InputState::new();
        assert!(input.is_idle());
        input.press(MoveKey::Forward);
        input.press(MoveKey::Left);
        assert!(input.is_held(MoveKey::Forward));
        assert!(!input.is_held(MoveKey::Back));
        input.release(MoveKey::Forward);
        assert!(!input.is_held(MoveKey::Forward));
        input.clear();
        assert!(input.is_idle());
    }

    #[test]
    fn parse_wasd() {
        let input = InputState::parse_keys("W d").unwrap();
        let held: Vec<MoveKey> = input.held_keys().collect();
        assert_eq!(held, vec![MoveKey::Forward, MoveKey::Right]);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert_eq!(
            InputState::parse_keys("wx"),
            Err(InputError::UnknownKey("x".into()))
        );
        assert_eq!("left".parse::<MoveKey>(), Ok(MoveKey::Left));
    }

    #[test]
    fn holding_opposite_keys_keeps_both() {
        let input = InputState::holding(&[MoveKey::Forward, MoveKey::Back]);
        assert_eq!(input.held_keys().count(), 2);
    }
}
