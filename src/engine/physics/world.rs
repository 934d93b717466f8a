use rapier2d::control::{CharacterLength, KinematicCharacterController};
use rapier2d::math::UnitVector;
use rapier2d::prelude::*;

use super::triggers::{SensorEvent, SensorEventQueue};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Result of a swept collision-aware move
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// The translation actually applied after collision resolution
    pub translation: Vector<Real>,
    /// Whether the character ended the move standing on the floor.
    /// This is the on-floor flag the game reads on the *next* frame.
    pub grounded: bool,
}

/// Physics world wrapping rapier2d's sets and pipelines.
///
/// Gravity is integrated by the movement controller, not the solver: the
/// player is a kinematic body and the level is fixed, so the solver's own
/// gravity stays at zero and the step only exists for collision detection
/// and sensor events.
pub struct PhysicsWorld {
    /// Solver gravity; zero by construction (see above)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set (unused, required by the pipeline)
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set (unused, required by the pipeline)
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for the character controller's shape casts
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Swept-move solver for the player character
    character_controller: KinematicCharacterController,

    /// Sensor overlap events from the last step
    sensor_event_queue: SensorEventQueue,
}

impl PhysicsWorld {
    /// Create a new physics world.
    ///
    /// The world uses screen coordinates: +y points down, so the character
    /// controller's up vector is -y.
    pub fn new() -> Self {
        let mut character_controller = KinematicCharacterController::default();
        character_controller.up = UnitVector::new_normalize(vector![0.0, -1.0]);
        character_controller.offset = CharacterLength::Absolute(0.1);
        // Keep the snap distance below the ladder climb step, or snapping
        // would pull a climbing character straight back to the floor
        character_controller.snap_to_ground = Some(CharacterLength::Absolute(0.2));

        Self {
            gravity: Vector::zeros(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            character_controller,
            sensor_event_queue: SensorEventQueue::new(),
        }
    }

    /// Step the physics simulation forward by `dt`.
    ///
    /// Updates sensor overlaps and the query pipeline; call once per frame
    /// after the player has been moved.
    pub fn step(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;

        // Clear the previous frame's sensor events
        self.sensor_event_queue.clear();

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.sensor_event_queue,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Move a kinematic body with collision response (swept move).
    ///
    /// `velocity` is resolved against the level over `dt`; `direct_translation`
    /// is applied verbatim on top of the resolved movement, bypassing the
    /// sweep (this is how ladder climbing nudges the position). The body's
    /// next kinematic position is set; the following `step` commits it.
    ///
    /// Relies on the query pipeline state from the latest `step`.
    pub fn move_and_slide(
        &mut self,
        body_handle: RigidBodyHandle,
        collider_handle: ColliderHandle,
        velocity: Vector<Real>,
        direct_translation: Vector<Real>,
        dt: Real,
    ) -> Option<MoveResult> {
        let collider = self.collider_set.get(collider_handle)?;
        let shape_pos = *collider.position();

        let mut filter = QueryFilter::default().exclude_rigid_body(body_handle);
        filter.flags |= QueryFilterFlags::EXCLUDE_SENSORS;

        let movement = self.character_controller.move_shape(
            dt,
            &self.rigid_body_set,
            &self.collider_set,
            &self.query_pipeline,
            collider.shape(),
            &shape_pos,
            velocity * dt,
            filter,
            |_collision| {},
        );

        let body = self.rigid_body_set.get_mut(body_handle)?;
        let next = body.translation() + movement.translation + direct_translation;
        body.set_next_kinematic_translation(next);

        Some(MoveResult {
            translation: movement.translation,
            grounded: movement.grounded,
        })
    }

    /// Swap a collider's cuboid shape and its offset from the parent body.
    /// Used for the standing/crouching hitbox toggle.
    pub fn set_collider_shape(
        &mut self,
        handle: ColliderHandle,
        half_width: Real,
        half_height: Real,
        offset: Vector<Real>,
    ) {
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_shape(SharedShape::cuboid(half_width, half_height));
            collider.set_position_wrt_parent(Isometry::translation(offset.x, offset.y));
        }
    }

    /// Get all sensor overlap events from the last step
    pub fn sensor_events(&self) -> Vec<SensorEvent> {
        self.sensor_event_queue.events()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
