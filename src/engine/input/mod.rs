// Input handling
//
// Tracks action state with per-frame edge detection. Physical key/button
// mapping is owned by the host; the game only ever sees `Action`s.

pub mod action;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use state::InputState;
