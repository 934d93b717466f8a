// Crouch hitbox state

use glam::Vec2;

/// Collision shape adjustment for the player, expressed as a scale applied
/// to the standing shape plus an offset from the body origin (+y is down).
///
/// The crouching offset is larger so the shrunken shape stays pinned to the
/// feet anchor instead of floating at the body center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxState {
    /// Scale applied to the standing collision shape
    pub scale: Vec2,
    /// Shape offset from the body origin, in world units
    pub offset: Vec2,
}

impl HitboxState {
    /// Full-size standing shape
    pub const STANDING: Self = Self {
        scale: Vec2::new(1.0, 1.0),
        offset: Vec2::new(0.0, 5.0),
    };

    /// Half-height crouching shape
    pub const CROUCHING: Self = Self {
        scale: Vec2::new(1.0, 0.5),
        offset: Vec2::new(0.0, 10.0),
    };

    /// Select the hitbox for this frame. Applied unconditionally every
    /// frame, overriding whatever shape was set before.
    pub fn for_frame(down_held: bool) -> Self {
        if down_held {
            Self::CROUCHING
        } else {
            Self::STANDING
        }
    }
}
