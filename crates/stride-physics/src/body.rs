//! Capsule body moved by rapier3d's kinematic character controller

use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use tracing::trace;

use crate::mover::{CollisionMover, MoveOutcome};
use crate::PhysicsWorld;

/// Character body configuration
#[derive(Debug, Clone)]
pub struct CharacterBodyConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for CharacterBodyConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Capsule character body with collision
pub struct CharacterBody {
    /// Configuration
    pub config: CharacterBodyConfig,
    /// Current position (bottom of the capsule)
    pub position: Vec3,
    /// Velocity achieved by the last move
    pub velocity: Vec3,
    /// Whether the character is on the ground
    pub grounded: bool,
    /// The collider handle for this character
    pub collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl CharacterBody {
    /// Create a new character body with default config
    pub fn new() -> Self {
        Self::with_config(CharacterBodyConfig::default())
    }

    /// Create a new character body with custom config
    pub fn with_config(config: CharacterBodyConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: true,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: false,
            collider_handle: None,
            controller,
        }
    }

    /// Spawn the character in the physics world
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = false;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let center = self.capsule_center();
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(vector![center.x, center.y, center.z])
            .friction(0.0)
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        handle
    }

    /// Sweep the capsule by `desired_translation` and apply the corrected move.
    ///
    /// Returns the translation actually applied.
    pub fn move_character(
        &mut self,
        physics: &mut PhysicsWorld,
        desired_translation: Vec3,
        dt: f32,
    ) -> Vec3 {
        let Some(collider_handle) = self.collider_handle else {
            return Vec3::ZERO;
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return Vec3::ZERO;
        };

        let shape = collider.shape();
        let center = self.capsule_center();
        let current_pos = Isometry::translation(center.x, center.y, center.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.grounded = movement.grounded;

        let applied = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        self.position += applied;
        physics.set_collider_position(collider_handle, self.capsule_center());

        applied
    }

    /// Borrow this body together with its world as a [`CollisionMover`]
    pub fn mover<'a>(&'a mut self, physics: &'a mut PhysicsWorld) -> BodyMover<'a> {
        BodyMover {
            body: self,
            physics,
        }
    }

    /// Set the character's position directly (teleport)
    pub fn set_position(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;

        if let Some(handle) = self.collider_handle {
            physics.set_collider_position(handle, self.capsule_center());
        }
    }

    /// Capsule center, half a height above the feet
    fn capsule_center(&self) -> Vec3 {
        self.position + Vec3::Y * (self.config.height / 2.0)
    }

    /// Check if standing on ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}

impl Default for CharacterBody {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`CharacterBody`] paired with the world it moves through
pub struct BodyMover<'a> {
    body: &'a mut CharacterBody,
    physics: &'a mut PhysicsWorld,
}

impl CollisionMover for BodyMover<'_> {
    fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    fn move_with(&mut self, desired_velocity: Vec3, dt: f32) -> MoveOutcome {
        if !(dt > 0.0) {
            return MoveOutcome {
                velocity: Vec3::ZERO,
                grounded: self.body.grounded,
            };
        }

        let applied = self
            .body
            .move_character(self.physics, desired_velocity * dt, dt);
        self.body.velocity = applied / dt;

        trace!(
            desired = ?desired_velocity,
            actual = ?self.body.velocity,
            grounded = self.body.grounded,
            "character moved"
        );

        MoveOutcome {
            velocity: self.body.velocity,
            grounded: self.body.grounded,
        }
    }
}
