// Player movement controller

use glam::Vec2;
use log::debug;

use crate::core::math::move_toward;

use super::animation::Animation;
use super::hitbox::HitboxState;

/// Vertical translation per climbing frame, in world units.
///
/// Deliberately not scaled by dt: climbing advances one unit per frame no
/// matter the frame rate. The level layouts are tuned around this.
const CLIMB_STEP: f32 = 1.0;

/// Movement tunables, fixed at construction time
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Horizontal movement speed (units/second)
    pub speed: f32,
    /// Vertical velocity applied on jump; negative is upward (+y is down)
    pub jump_velocity: f32,
    /// Downward gravity acceleration (units/second²)
    pub gravity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: 100.0,
            jump_velocity: -250.0,
            gravity: 980.0,
        }
    }
}

/// Input snapshot for one frame, assembled by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Directional input, each axis in [-1, 1]; y follows up = -1, down = +1
    pub direction: Vec2,
    /// Jump was pressed this frame (edge-triggered)
    pub jump_just_pressed: bool,
    /// Up is held
    pub up_held: bool,
    /// Down is held (also the crouch input)
    pub down_held: bool,
    /// Whether the last swept move ended on the floor
    pub on_floor: bool,
}

/// Everything the host needs to apply after one controller update
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Velocity to hand to the swept-collision move primitive
    pub velocity: Vec2,
    /// Direct vertical position translation for ladder climbing; bypasses
    /// the swept move entirely (0.0 when not climbing)
    pub climb_delta: f32,
    /// Collision shape for this frame
    pub hitbox: HitboxState,
    /// Facing direction; the sprite's horizontal scale sign must match
    pub facing_right: bool,
    /// Animation to play this frame
    pub animation: Animation,
}

/// Per-frame movement logic for the player character.
///
/// Owns velocity, facing, the frame-mutable gravity accelerator, and the
/// ladder contact flag. `update` runs once per frame; the two ladder event
/// methods are invoked by the host's trigger-volume dispatch between
/// frames. Strictly single-threaded.
#[derive(Debug)]
pub struct MovementController {
    config: ControllerConfig,
    velocity: Vec2,
    facing_right: bool,
    gravity_accel: f32,
    on_ladder: bool,
}

impl MovementController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            gravity_accel: config.gravity,
            config,
            velocity: Vec2::ZERO,
            facing_right: true,
            on_ladder: false,
        }
    }

    /// Run one frame of movement logic.
    ///
    /// Step order matters and must not be rearranged: gravity integration
    /// reads the gravity accelerator set by the climb logic in the same
    /// frame, and animation selection reads the post-gravity velocity.
    pub fn update(&mut self, dt: f32, input: FrameInput) -> FrameOutput {
        // A zero or garbage timestep would corrupt velocity; skip the frame.
        if !dt.is_finite() || dt <= 0.0 {
            return self.current_output(input);
        }

        // 1. Jump: grounded only, no double jump
        if input.jump_just_pressed && input.on_floor {
            self.velocity.y = self.config.jump_velocity;
        }

        // 2. Horizontal movement and ladder climbing
        let mut climbing = false;
        let mut climb_delta = 0.0;
        if input.direction != Vec2::ZERO {
            self.velocity.x = input.direction.x * self.config.speed;

            if input.up_held && self.on_ladder {
                climbing = true;
                climb_delta = -CLIMB_STEP;
                debug!("climb up");
            } else if input.down_held && self.on_ladder {
                climbing = true;
                climb_delta = CLIMB_STEP;
                debug!("climb down");
            }
        } else {
            // No input: ease to a stop instead of snapping
            self.velocity.x = move_toward(self.velocity.x, 0.0, self.config.speed * dt);
        }

        // Gravity is suspended only while actively climbing; any other
        // frame restores the configured value.
        self.gravity_accel = if climbing { 0.0 } else { self.config.gravity };

        // 3. Crouch hitbox, unconditional every frame
        let hitbox = HitboxState::for_frame(input.down_held);

        // 4. Gravity integration, using the accelerator set above this frame
        if !input.on_floor {
            self.velocity.y += self.gravity_accel * dt;
        }

        // 5. Flip facing when velocity sign disagrees with it
        if (self.velocity.x < 0.0 && self.facing_right)
            || (self.velocity.x > 0.0 && !self.facing_right)
        {
            self.facing_right = !self.facing_right;
        }

        // 6. Animation selection
        let animation = Animation::select(input.down_held, self.velocity);

        FrameOutput {
            velocity: self.velocity,
            climb_delta,
            hitbox,
            facing_right: self.facing_right,
            animation,
        }
    }

    /// Output reflecting the current state without integrating anything
    fn current_output(&self, input: FrameInput) -> FrameOutput {
        FrameOutput {
            velocity: self.velocity,
            climb_delta: 0.0,
            hitbox: HitboxState::for_frame(input.down_held),
            facing_right: self.facing_right,
            animation: Animation::select(input.down_held, self.velocity),
        }
    }

    /// Ladder trigger volume entered (host trigger dispatch)
    pub fn ladder_entered(&mut self) {
        self.on_ladder = true;
    }

    /// Ladder trigger volume exited (host trigger dispatch)
    pub fn ladder_exited(&mut self) {
        self.on_ladder = false;
    }

    /// Floor contact was resolved by the swept move. The slide cancels the
    /// into-floor velocity component on the physics side, so the
    /// controller's copy has to drop it too or the stale downward speed
    /// feeds into every following frame's move. Upward velocity is left
    /// alone; a jump issued on the contact frame must survive.
    pub fn land(&mut self) {
        if self.velocity.y > 0.0 {
            self.velocity.y = 0.0;
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn on_ladder(&self) -> bool {
        self.on_ladder
    }

    pub fn gravity_accel(&self) -> f32 {
        self.gravity_accel
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
