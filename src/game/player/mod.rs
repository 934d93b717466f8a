// Player character system
//
// This module contains the per-frame movement logic for the player:
// - Movement controller (jump, run, climb, gravity, facing)
// - Crouch hitbox state
// - Animation selection

pub mod animation;
pub mod controller;
pub mod hitbox;

// Re-export commonly used types
pub use animation::Animation;
pub use controller::{ControllerConfig, FrameInput, FrameOutput, MovementController};
pub use hitbox::HitboxState;
