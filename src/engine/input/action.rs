// Game action definitions

/// Represents all in-game actions the player controller reads.
///
/// Mapping physical keys or buttons to these actions is the host's job;
/// this layer only tracks action state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Climb up while on a ladder
    Up,
    /// Crouch, and climb down while on a ladder
    Down,
    Jump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Down);
    }
}
