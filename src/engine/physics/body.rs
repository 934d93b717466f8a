use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Collision layers for filtering what can touch what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// The player character
    Player = 0b0000_0001,

    /// Static platforms, walls and floors
    Platform = 0b0000_0010,

    /// Ladder trigger volumes (sensors, never block movement)
    Ladder = 0b0000_0100,
}

impl CollisionLayer {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The player touches solid geometry and ladder volumes
            CollisionLayer::Player => Group::from_bits_truncate(
                CollisionLayer::Platform as u32 | CollisionLayer::Ladder as u32,
            ),

            // Platforms only need to stop the player
            CollisionLayer::Platform => Group::from_bits_truncate(CollisionLayer::Player as u32),

            // Ladder volumes only watch for the player
            CollisionLayer::Ladder => Group::from_bits_truncate(CollisionLayer::Player as u32),
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Builder for the rigid bodies this game needs
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// A kinematic position-based body: moved explicitly by the character
    /// controller, never by solver forces
    pub fn new_kinematic_position_based() -> Self {
        Self {
            body_type: RigidBodyType::KinematicPositionBased,
            position: Isometry::identity(),
            locked_axes: LockedAxes::empty(),
        }
    }

    /// A fixed (static) body, completely immovable
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Lock rotation (the player never tips over)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for cuboid colliders with the configuration this game needs
pub struct ColliderBuilder2D {
    half_width: Real,
    half_height: Real,
    layer: CollisionLayer,
    is_sensor: bool,
    friction: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider from full width/height
    pub fn box_shape(width: Real, height: Real) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
            layer: CollisionLayer::Platform,
            is_sensor: false,
            friction: 0.5,
        }
    }

    /// Set the collision layer for filtering
    pub fn layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Make this a sensor (detects overlap but doesn't block)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Set friction coefficient
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        rapier2d::prelude::ColliderBuilder::cuboid(self.half_width, self.half_height)
            .collision_groups(self.layer.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(self.friction)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            // The player body is kinematic and the level is fixed; rapier
            // skips kinematic-vs-fixed pairs unless asked for them.
            .active_collision_types(
                ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_FIXED,
            )
            .build()
    }
}

/// Body/collider configurations for the objects in this game
pub mod presets {
    use super::*;

    /// The player body: kinematic, rotation locked, driven by the
    /// movement controller through the swept-move primitive
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_kinematic_position_based()
            .position(x, y)
            .lock_rotation()
            .build()
    }

    /// The player collision shape (cuboid, frictionless for smooth sliding)
    pub fn player_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width, height)
            .layer(CollisionLayer::Player)
            .friction(0.0)
            .build()
    }

    /// A static platform body
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// A static platform collider
    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width, height)
            .layer(CollisionLayer::Platform)
            .friction(0.3)
            .build()
    }

    /// A ladder trigger volume: fixed sensor, reports enter/exit only
    pub fn ladder_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// The ladder trigger's sensor collider
    pub fn ladder_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width, height)
            .layer(CollisionLayer::Ladder)
            .sensor(true)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_bits_unique() {
        let layers = [
            CollisionLayer::Player,
            CollisionLayer::Platform,
            CollisionLayer::Ladder,
        ];
        for (i, a) in layers.iter().enumerate() {
            for (j, b) in layers.iter().enumerate() {
                if i != j {
                    assert_ne!(*a as u32, *b as u32, "layers must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_player_touches_ladders() {
        let player = CollisionLayer::Player.to_interaction_groups();
        let ladder_bit = Group::from_bits_truncate(CollisionLayer::Ladder as u32);
        assert!(player.filter.contains(ladder_bit));
    }

    #[test]
    fn test_player_body_preset() {
        let body = presets::player_body(3.0, -7.0);
        assert_eq!(body.body_type(), RigidBodyType::KinematicPositionBased);
        assert!(body.is_rotation_locked());
        assert_eq!(body.translation().x, 3.0);
        assert_eq!(body.translation().y, -7.0);
    }

    #[test]
    fn test_ladder_collider_is_sensor() {
        let collider = presets::ladder_collider(10.0, 40.0);
        assert!(collider.is_sensor());
    }

    #[test]
    fn test_platform_collider_is_solid() {
        let collider = presets::platform_collider(100.0, 10.0);
        assert!(!collider.is_sensor());
        assert_eq!(collider.friction(), 0.3);
    }
}
