//! Third-person orbit camera with look and zoom

use glam::{Vec2, Vec3};
use rapier3d::prelude::{ColliderHandle, QueryFilter};
use stride_core::wrap_degrees;
use stride_physics::PhysicsWorld;

use super::{CameraConfig, CameraFacing};

/// Orbit camera following the character
pub struct CameraController {
    /// Configuration
    pub config: CameraConfig,
    /// Yaw rotation in radians (horizontal)
    pub yaw: f32,
    /// Pitch rotation in radians (vertical)
    pub pitch: f32,
    /// Collider the camera ray should ignore (the character's own capsule)
    pub ignore_collider: Option<ColliderHandle>,
    /// Target zoom distance (for smooth interpolation)
    target_distance: f32,
    /// Current interpolated zoom distance
    current_distance: f32,
    /// Camera world position (computed each frame)
    position: Vec3,
    /// Point we're looking at
    target: Vec3,
}

impl CameraController {
    /// Create a new camera controller
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera controller with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        let distance = config
            .default_distance
            .clamp(config.min_distance, config.max_distance);
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            ignore_collider: None,
            target_distance: distance,
            current_distance: distance,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Get the camera's current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the point the camera is looking at
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current orbit distance
    pub fn distance(&self) -> f32 {
        self.current_distance
    }

    /// Get the camera's forward direction
    pub fn forward(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        Vec3::new(
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
            -self.yaw.cos() * cos_pitch,
        )
    }

    /// Get the camera's right direction
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Apply look input (already gated by the dialogue freeze)
    pub fn handle_look(&mut self, look_delta: Vec2) {
        self.yaw += look_delta.x * self.config.sensitivity;
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);

        self.pitch -= look_delta.y * self.config.sensitivity;
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = self.pitch.clamp(pitch_min, pitch_max);
    }

    /// Handle scroll wheel zoom
    pub fn handle_zoom(&mut self, scroll_delta: f32) {
        self.target_distance -= scroll_delta * self.config.zoom_speed;
        self.target_distance = self
            .target_distance
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Update the camera (call each frame)
    pub fn update(
        &mut self,
        look_delta: Vec2,
        scroll_delta: f32,
        character_position: Vec3,
        physics: Option<&PhysicsWorld>,
        dt: f32,
    ) {
        self.handle_look(look_delta);
        if scroll_delta.abs() > 0.0 {
            self.handle_zoom(scroll_delta);
        }

        // Smooth zoom interpolation
        let zoom_lerp = 1.0 - (1.0 - self.config.zoom_smoothing).powf(dt * 60.0);
        self.current_distance += (self.target_distance - self.current_distance) * zoom_lerp;

        self.target = character_position + Vec3::Y * self.config.focus_height;

        let offset_dir = -self.forward();
        let shoulder = self.right() * self.config.shoulder_offset;
        let ray_start = self.target + shoulder;
        let ideal_position = ray_start + offset_dir * self.current_distance;

        self.position = match physics {
            Some(physics) => {
                let mut filter = QueryFilter::default();
                if let Some(handle) = self.ignore_collider {
                    filter = filter.exclude_collider(handle);
                }
                let ray_length = self.current_distance + self.config.collision_radius;

                match physics.raycast(ray_start, offset_dir, ray_length, filter) {
                    // Pull in so the camera doesn't clip through geometry
                    Some((_handle, toi)) => {
                        let safe_distance = (toi - self.config.collision_radius).max(0.5);
                        ray_start + offset_dir * safe_distance
                    }
                    None => ideal_position,
                }
            }
            None => ideal_position,
        };
    }

    /// Set the camera yaw directly, in radians
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw.rem_euclid(std::f32::consts::TAU);
    }

    /// Set the camera pitch directly
    pub fn set_pitch(&mut self, pitch: f32) {
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = pitch.clamp(pitch_min, pitch_max);
    }
}

impl CameraFacing for CameraController {
    fn yaw_degrees(&self) -> f32 {
        wrap_degrees(self.yaw.to_degrees())
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_controller_creation() {
        let camera = CameraController::new();
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.distance(), camera.config.default_distance);
    }

    #[test]
    fn test_yaw_degrees_wraps() {
        let mut camera = CameraController::new();
        camera.set_yaw(-std::f32::consts::FRAC_PI_2);
        assert!((camera.yaw_degrees() - 270.0).abs() < 1e-3);

        camera.set_yaw(std::f32::consts::TAU + 0.1);
        let yaw = camera.yaw_degrees();
        assert!((0.0..360.0).contains(&yaw));
    }

    #[test]
    fn test_camera_pitch_clamping() {
        let mut camera = CameraController::new();
        camera.set_pitch(100.0_f32.to_radians());
        assert!(camera.pitch <= camera.config.pitch_max.to_radians() + 0.01);

        camera.set_pitch(-100.0_f32.to_radians());
        assert!(camera.pitch >= camera.config.pitch_min.to_radians() - 0.01);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = CameraController::new();
        camera.handle_zoom(100.0);
        for _ in 0..600 {
            camera.update(Vec2::ZERO, 0.0, Vec3::ZERO, None, 1.0 / 60.0);
        }
        assert!((camera.distance() - camera.config.min_distance).abs() < 0.01);
    }

    #[test]
    fn test_camera_sits_behind_target() {
        let mut camera = CameraController::new();
        camera.config.shoulder_offset = 0.0;
        camera.update(Vec2::ZERO, 0.0, Vec3::ZERO, None, 1.0 / 60.0);

        // Facing -Z, so the camera is behind on +Z
        assert!(camera.position().z > 0.0);
        assert!((camera.target().y - camera.config.focus_height).abs() < 1e-6);
    }

    #[test]
    fn test_wall_pulls_camera_in() {
        let mut physics = PhysicsWorld::new();
        physics.create_static_box(Vec3::new(5.0, 5.0, 0.5), Vec3::new(0.0, 0.0, 3.0));
        physics.refresh_queries();

        let mut camera = CameraController::new();
        camera.config.shoulder_offset = 0.0;
        camera.update(Vec2::ZERO, 0.0, Vec3::ZERO, Some(&physics), 1.0 / 60.0);

        assert!(camera.position().z < 2.5);
    }
}
