// Animation selection for the player sprite
//
// This only picks *which* animation should play each frame; actual frame
// timing and sprite playback live in the host's animation system.

use glam::Vec2;

/// The player animations the controller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Standing still on ground
    Idle,
    /// Moving horizontally
    Run,
    /// Moving upward
    Jumping,
    /// Moving downward
    Falling,
    /// Crouch input held
    Crouch,
}

impl Animation {
    /// Name of the animation clip in the host's sprite system
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Run => "Run",
            Self::Jumping => "Jumping",
            Self::Falling => "Falling",
            Self::Crouch => "Crouch",
        }
    }

    /// Pick the animation for this frame, in strict priority order:
    /// crouch input beats vertical motion, vertical motion beats horizontal.
    ///
    /// The priority is input-driven, not motion-driven: a crouching player
    /// mid-fall still shows `Crouch` even though velocity.y is non-zero.
    pub fn select(crouch_held: bool, velocity: Vec2) -> Self {
        if crouch_held {
            Self::Crouch
        } else if velocity.y != 0.0 {
            if velocity.y < 0.0 {
                Self::Jumping
            } else {
                Self::Falling
            }
        } else if velocity.x.abs() > 0.0 {
            Self::Run
        } else {
            Self::Idle
        }
    }
}
