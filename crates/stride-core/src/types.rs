//! Core types used throughout Stride
//!
//! Yaw is measured in degrees, clockwise seen from above, with 0 facing
//! world -Z and 90 facing +X.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rotation about the vertical axis for a yaw in degrees
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

/// Horizontal unit vector pointing along a yaw in degrees
pub fn yaw_direction(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Transform representing position and rotation of a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }
}
