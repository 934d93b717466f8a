// Frame-by-frame action state tracking

use std::collections::HashSet;

use glam::Vec2;

use super::action::Action;

/// Tracks which actions are held and which were pressed this frame.
///
/// The host pushes `press`/`release` events in whatever order they arrive;
/// `update` must be called once at the end of each frame to age the
/// edge-triggered state.
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions currently held down
    pressed: HashSet<Action>,
    /// Actions pressed for the first time this frame
    just_pressed: HashSet<Action>,
    /// Actions released this frame
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Directional input as a vector with each axis in [-1, 1].
    /// +x is right, +y is down (so up is -1).
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_pressed(Action::MoveLeft) {
            dir.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            dir.x += 1.0;
        }
        if self.is_pressed(Action::Up) {
            dir.y -= 1.0;
        }
        if self.is_pressed(Action::Down) {
            dir.y += 1.0;
        }
        dir
    }

    /// Advance to the next frame, clearing edge-triggered state.
    /// Call once per frame after the controller has consumed the snapshot.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Clear all state (level reload)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));

        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeat_press_is_not_an_edge() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        // Key-repeat style second press while still held
        input.press(Action::Jump);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::Jump);
        assert!(!input.just_released(Action::Jump));
    }

    #[test]
    fn test_direction_axes() {
        let mut input = InputState::new();
        assert_eq!(input.direction(), Vec2::ZERO);

        input.press(Action::MoveRight);
        assert_eq!(input.direction(), Vec2::new(1.0, 0.0));

        input.press(Action::Up);
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));

        input.release(Action::MoveRight);
        input.press(Action::MoveLeft);
        input.release(Action::Up);
        input.press(Action::Down);
        assert_eq!(input.direction(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        assert_eq!(input.direction().x, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();
        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input.direction(), Vec2::ZERO);
    }
}
