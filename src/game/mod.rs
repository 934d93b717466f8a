// Game logic: the player and the world wiring

pub mod player;
pub mod world;

// Re-export commonly used types
pub use world::{GameWorld, WorldError};
