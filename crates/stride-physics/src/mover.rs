//! The collision-move seam consumed by the locomotion controller

use glam::Vec3;

/// Result of a single collision-resolved move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Velocity the body actually achieved after collisions
    pub velocity: Vec3,
    /// Whether the body rests on a supporting surface after the move
    pub grounded: bool,
}

impl MoveOutcome {
    /// Magnitude of the horizontal (X, Z) part of the achieved velocity
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// Moves a body through the world with collision response.
///
/// Implementors resolve the sweep and report the velocity the body really
/// ended up with, so a wall hit shows up as lost speed.
pub trait CollisionMover {
    /// Grounded flag from the most recent move
    fn is_grounded(&self) -> bool;

    /// Move with `desired_velocity` for `dt` seconds
    fn move_with(&mut self, desired_velocity: Vec3, dt: f32) -> MoveOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_speed_ignores_vertical() {
        let outcome = MoveOutcome {
            velocity: Vec3::new(3.0, -20.0, 4.0),
            grounded: false,
        };
        assert!((outcome.horizontal_speed() - 5.0).abs() < 1e-6);
    }
}
