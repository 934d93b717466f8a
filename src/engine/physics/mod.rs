// Physics system using rapier2d

pub mod body;
pub mod triggers;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder2D, CollisionLayer};
pub use triggers::{SensorEvent, TriggerEvent, TriggerVolumes};
pub use world::{MoveResult, PhysicsWorld};

// Re-export commonly used rapier types for convenience. `nalgebra` rides
// along because the `vector!` macro expands to paths under that name.
pub use rapier2d::prelude::{nalgebra, vector, ColliderHandle, Real, RigidBodyHandle, Vector};
