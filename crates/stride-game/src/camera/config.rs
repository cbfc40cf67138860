//! Camera configuration

use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Minimum orbit distance
    pub min_distance: f32,
    /// Maximum orbit distance
    pub max_distance: f32,
    /// Starting orbit distance
    pub default_distance: f32,
    /// Zoom speed (scroll sensitivity)
    pub zoom_speed: f32,
    /// Zoom interpolation smoothing (0-1, lower = smoother)
    pub zoom_smoothing: f32,
    /// Look sensitivity (radians per unit of look axis)
    pub sensitivity: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Collision radius for camera
    pub collision_radius: f32,
    /// Height of the look-at point above the character's feet
    pub focus_height: f32,
    /// Horizontal offset for an over-the-shoulder view
    pub shoulder_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_distance: 1.5,
            max_distance: 12.0,
            default_distance: 5.0,
            zoom_speed: 1.0,
            zoom_smoothing: 0.15,
            sensitivity: 0.003,
            pitch_min: -70.0,
            pitch_max: 70.0,
            collision_radius: 0.3,
            focus_height: 1.6,
            shoulder_offset: 0.3,
        }
    }
}
