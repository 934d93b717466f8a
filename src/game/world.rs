// Game world: wires the movement controller to physics and input

use glam::Vec2;

use crate::engine::input::{Action, InputState};
use crate::engine::physics::{
    nalgebra, presets, vector, ColliderHandle, PhysicsWorld, RigidBodyHandle, TriggerEvent,
    TriggerVolumes,
};
use crate::game::player::{Animation, ControllerConfig, FrameInput, MovementController};

/// Player collision shape dimensions in world units (standing)
pub const PLAYER_WIDTH: f32 = 12.0;
pub const PLAYER_HEIGHT: f32 = 20.0;

/// World setup errors
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("player rigid body missing from physics world")]
    PlayerBodyMissing,

    #[error("player collider missing from physics world")]
    PlayerColliderMissing,
}

/// Owns the physics world, the player and its controller, and the per-frame
/// wiring between them.
///
/// Frame sequence: input snapshot -> controller update -> hitbox -> swept
/// move (plus direct climb translation) -> physics step -> ladder trigger
/// dispatch. The grounded flag from the move is what the controller sees as
/// on-floor on the *next* frame.
pub struct GameWorld {
    physics: PhysicsWorld,
    controller: MovementController,
    triggers: TriggerVolumes,
    input: InputState,
    player_body: RigidBodyHandle,
    player_collider: ColliderHandle,
    on_floor: bool,
    animation: Animation,
}

impl GameWorld {
    /// Create a world with the player spawned at `spawn`.
    ///
    /// Fails fast if the freshly created physics handles don't resolve;
    /// a world without its player is unusable and should never get to the
    /// first frame.
    pub fn new(config: ControllerConfig, spawn: Vec2) -> Result<Self, WorldError> {
        let mut physics = PhysicsWorld::new();

        let player_body = physics.add_rigid_body(presets::player_body(spawn.x, spawn.y));
        let player_collider = physics.add_collider(
            presets::player_collider(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_body,
        );

        physics
            .get_rigid_body(player_body)
            .ok_or(WorldError::PlayerBodyMissing)?;
        physics
            .get_collider(player_collider)
            .ok_or(WorldError::PlayerColliderMissing)?;

        Ok(Self {
            physics,
            controller: MovementController::new(config),
            triggers: TriggerVolumes::new(),
            input: InputState::new(),
            player_body,
            player_collider,
            on_floor: false,
            animation: Animation::Idle,
        })
    }

    /// Add a static platform centered at (x, y)
    pub fn add_platform(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let body = self.physics.add_rigid_body(presets::platform_body(x, y));
        self.physics
            .add_collider(presets::platform_collider(width, height), body);
    }

    /// Add a ladder trigger volume centered at (x, y)
    pub fn add_ladder(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let body = self.physics.add_rigid_body(presets::ladder_body(x, y));
        let collider = self
            .physics
            .add_collider(presets::ladder_collider(width, height), body);
        self.triggers.register_ladder(collider);
    }

    /// Controller input snapshot for this frame
    fn frame_input(&self) -> FrameInput {
        FrameInput {
            direction: self.input.direction(),
            jump_just_pressed: self.input.just_pressed(Action::Jump),
            up_held: self.input.is_pressed(Action::Up),
            down_held: self.input.is_pressed(Action::Down),
            on_floor: self.on_floor,
        }
    }

    /// Run one frame of the game
    pub fn update(&mut self, dt: f32) {
        let frame = self.frame_input();
        let output = self.controller.update(dt, frame);

        // Crouch/standing hitbox, applied before the sweep so this frame's
        // collisions use this frame's shape
        self.physics.set_collider_shape(
            self.player_collider,
            PLAYER_WIDTH / 2.0 * output.hitbox.scale.x,
            PLAYER_HEIGHT / 2.0 * output.hitbox.scale.y,
            vector![output.hitbox.offset.x, output.hitbox.offset.y],
        );

        if let Some(result) = self.physics.move_and_slide(
            self.player_body,
            self.player_collider,
            vector![output.velocity.x, output.velocity.y],
            vector![0.0, output.climb_delta],
            dt,
        ) {
            self.on_floor = result.grounded;
            // The slide resolved the move against the floor; mirror that in
            // the controller's velocity so it doesn't keep the into-floor
            // component it handed us
            if result.grounded {
                self.controller.land();
            }
        }
        self.animation = output.animation;

        self.physics.step(dt);

        // Trigger volumes report between frames; the controller only learns
        // about ladders through these two callbacks
        let events = self.physics.sensor_events();
        for event in self.triggers.interpret(&events, self.player_collider) {
            match event {
                TriggerEvent::LadderEntered => self.controller.ladder_entered(),
                TriggerEvent::LadderExited => self.controller.ladder_exited(),
            }
        }

        self.input.update();
    }

    /// Current player position (body origin)
    pub fn player_position(&self) -> Option<Vec2> {
        self.physics
            .get_rigid_body(self.player_body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    pub fn is_on_floor(&self) -> bool {
        self.on_floor
    }

    /// Animation selected by the most recent frame
    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn controller(&self) -> &MovementController {
        &self.controller
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::game_loop::FIXED_TIMESTEP;

    const DT: f32 = FIXED_TIMESTEP;

    /// Spawn flush on a floor whose top surface sits at the player's feet
    fn world_with_floor() -> GameWorld {
        let mut world = GameWorld::new(ControllerConfig::default(), Vec2::ZERO).unwrap();
        // Standing collider offset is (0, 5), so feet sit at y = 15
        world.add_platform(0.0, 20.0, 400.0, 10.0);
        world
    }

    #[test]
    fn test_world_error_display() {
        assert_eq!(
            WorldError::PlayerBodyMissing.to_string(),
            "player rigid body missing from physics world"
        );
    }

    #[test]
    fn test_world_creation() {
        let world = GameWorld::new(ControllerConfig::default(), Vec2::new(3.0, -7.0)).unwrap();
        assert_eq!(world.player_position(), Some(Vec2::new(3.0, -7.0)));
        assert!(!world.is_on_floor());
    }

    #[test]
    fn test_player_settles_on_floor() {
        let mut world = world_with_floor();
        for _ in 0..60 {
            world.update(DT);
        }
        assert!(world.is_on_floor());
        let pos = world.player_position().unwrap();
        assert!((pos.y - 0.0).abs() < 1.0, "player sank to y = {}", pos.y);
    }

    #[test]
    fn test_landing_settles_velocity_and_idles() {
        let mut world = world_with_floor();
        for _ in 0..60 {
            world.update(DT);
        }
        assert!(world.is_on_floor());
        // The fall speed accumulated while settling must not survive the
        // landing, and a grounded idle player must read as idle
        assert_eq!(world.controller().velocity().y, 0.0);
        assert_eq!(world.animation(), Animation::Idle);
    }

    #[test]
    fn test_walking_moves_player() {
        let mut world = world_with_floor();
        for _ in 0..30 {
            world.update(DT);
        }
        world.input_mut().press(Action::MoveRight);
        for _ in 0..60 {
            world.update(DT);
        }
        let pos = world.player_position().unwrap();
        // 60 frames at 100 units/s
        assert!(pos.x > 80.0, "player only reached x = {}", pos.x);
    }

    #[test]
    fn test_ladder_enter_and_exit() {
        let mut world = world_with_floor();
        world.add_ladder(0.0, 0.0, 10.0, 40.0);

        for _ in 0..10 {
            world.update(DT);
        }
        assert!(world.controller().on_ladder());

        // Walk right until clear of the ladder volume
        world.input_mut().press(Action::MoveRight);
        for _ in 0..60 {
            world.update(DT);
        }
        assert!(!world.controller().on_ladder());
    }

    #[test]
    fn test_climbing_raises_player() {
        let mut world = world_with_floor();
        world.add_ladder(0.0, -10.0, 10.0, 80.0);

        for _ in 0..10 {
            world.update(DT);
        }
        assert!(world.controller().on_ladder());

        // Exactly one unit per frame, straight position translation with no
        // gravity or residual fall speed bleeding in
        world.input_mut().press(Action::Up);
        let mut prev = world.player_position().unwrap().y;
        for frame in 0..30 {
            world.update(DT);
            let y = world.player_position().unwrap().y;
            assert!(
                ((prev - y) - 1.0).abs() < 0.05,
                "frame {}: climbed {} units instead of 1",
                frame,
                prev - y
            );
            prev = y;
        }
    }

    #[test]
    fn test_jump_leaves_floor() {
        let mut world = world_with_floor();
        for _ in 0..60 {
            world.update(DT);
        }
        assert!(world.is_on_floor());
        let floor_y = world.player_position().unwrap().y;

        world.input_mut().press(Action::Jump);
        for _ in 0..10 {
            world.update(DT);
        }
        let pos = world.player_position().unwrap();
        assert!(pos.y < floor_y - 10.0, "player did not rise: y = {}", pos.y);
        assert!(!world.is_on_floor());
    }
}
