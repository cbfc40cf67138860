//! Stride Physics - Collision-resolved movement using rapier3d
//!
//! There is no dynamics simulation here. The world is a set of static
//! colliders plus a query pipeline; the kinematic capsule sweeps through it
//! and the camera raycasts against it. Gravity lives in the locomotion
//! controller, not in this crate.

mod body;
mod mover;

pub use body::{BodyMover, CharacterBody, CharacterBodyConfig};
pub use mover::{CollisionMover, MoveOutcome};

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;
use tracing::debug;

/// Static level geometry and the spatial queries over it
pub struct PhysicsWorld {
    /// Rigid body storage. Level colliders are parentless, but rapier's
    /// queries still take the set.
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,
    query_pipeline: QueryPipeline,
    /// Colliders were added or moved since the last refresh
    stale: bool,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            stale: false,
        }
    }

    /// Rebuild the query pipeline if anything moved since the last call
    pub fn refresh_queries(&mut self) {
        if self.stale {
            self.query_pipeline.update(&self.collider_set);
            self.stale = false;
        }
    }

    /// Whether queries may miss recent collider changes
    pub fn queries_stale(&self) -> bool {
        self.stale
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.stale = true;
        self.collider_set.insert(collider)
    }

    /// Get a collider by handle
    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Move a collider to a new world position
    pub fn set_collider_position(&mut self, handle: ColliderHandle, position: Vec3) {
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_translation(vector![position.x, position.y, position.z]);
            self.stale = true;
        }
    }

    /// Cast a ray and return the first hit and its distance
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, f32)> {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_distance,
            true,
            filter,
        )
    }

    /// Infinite floor at height `y`
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .build();
        debug!(y, "ground added");
        self.add_static_collider(ground)
    }

    /// Axis-aligned box centered at `position`
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .build();
        debug!(?half_extents, ?position, "box added");
        self.add_static_collider(collider)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_empty() {
        let world = PhysicsWorld::new();
        assert_eq!(world.collider_set.len(), 0);
        assert!(!world.queries_stale());
    }

    #[test]
    fn test_adding_colliders_marks_queries_stale() {
        let mut world = PhysicsWorld::new();
        let ground = world.create_ground(0.0);
        assert!(world.collider(ground).is_some());
        assert!(world.queries_stale());

        world.refresh_queries();
        assert!(!world.queries_stale());
    }

    #[test]
    fn test_raycast_hits_ground() {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        world.refresh_queries();

        let hit = world.raycast(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            100.0,
            QueryFilter::default(),
        );
        let (_, toi) = hit.unwrap();
        assert!((toi - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_raycast_sees_moved_box_after_refresh() {
        let mut world = PhysicsWorld::new();
        let wall = world.create_static_box(Vec3::splat(1.0), Vec3::new(0.0, 0.0, -5.0));
        world.refresh_queries();

        world.set_collider_position(wall, Vec3::new(0.0, 0.0, -8.0));
        assert!(world.queries_stale());
        world.refresh_queries();

        let (_, toi) = world
            .raycast(Vec3::ZERO, Vec3::NEG_Z, 20.0, QueryFilter::default())
            .unwrap();
        assert!((toi - 7.0).abs() < 0.01);
    }

    #[test]
    fn test_filter_excludes_collider() {
        let mut world = PhysicsWorld::new();
        let wall = world.create_static_box(Vec3::splat(1.0), Vec3::new(0.0, 0.0, -5.0));
        world.refresh_queries();

        let hit = world.raycast(
            Vec3::ZERO,
            Vec3::NEG_Z,
            20.0,
            QueryFilter::default().exclude_collider(wall),
        );
        assert!(hit.is_none());
    }
}
