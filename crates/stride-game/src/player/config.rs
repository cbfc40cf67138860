//! Locomotion configuration and derived quantities

use serde::{Deserialize, Serialize};

use crate::error::LocomotionError;

/// Horizontal move direction used on ticks with no directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleDirection {
    /// No horizontal movement; the character stops at once
    #[default]
    Zero,
    /// Coast along the current facing while speed decays
    Facing,
    /// Normalized (1, 1, 1), kept only for parity with older tuning data
    LegacyDiagonal,
}

/// Locomotion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Steady-state walking speed in meters per second
    pub walk_speed: f32,
    /// Steady-state running speed in meters per second
    pub run_speed: f32,
    /// Time constant for speed changes (seconds)
    pub speed_smooth_time: f32,
    /// Time constant for turning (seconds)
    pub turn_smooth_time: f32,
    /// Vertical acceleration, negative is down
    pub gravity: f32,
    /// Apex height of a jump in meters
    pub jump_height: f32,
    /// How much of the ground responsiveness remains airborne, in [0, 1]
    pub air_control_percent: f32,
    /// What to do with the move direction when there is no input
    pub idle_direction: IdleDirection,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 3.0,
            speed_smooth_time: 0.1,
            turn_smooth_time: 0.2,
            gravity: -12.0,
            jump_height: 1.0,
            air_control_percent: 0.0,
            idle_direction: IdleDirection::Zero,
        }
    }
}

impl LocomotionConfig {
    /// Reject values the controller cannot tick with
    pub fn validate(&self) -> Result<(), LocomotionError> {
        if !(0.0..=1.0).contains(&self.air_control_percent) {
            return Err(LocomotionError::InvalidAirControl(self.air_control_percent));
        }
        if !(self.walk_speed > 0.0 && self.walk_speed.is_finite())
            || !(self.run_speed > 0.0 && self.run_speed.is_finite())
        {
            return Err(LocomotionError::InvalidSpeed {
                walk: self.walk_speed,
                run: self.run_speed,
            });
        }
        if !(self.gravity < 0.0 && self.gravity.is_finite()) {
            return Err(LocomotionError::InvalidGravity(self.gravity));
        }
        if !(self.jump_height >= 0.0 && self.jump_height.is_finite()) {
            return Err(LocomotionError::InvalidJumpHeight(self.jump_height));
        }
        for (name, value) in [
            ("speed_smooth_time", self.speed_smooth_time),
            ("turn_smooth_time", self.turn_smooth_time),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(LocomotionError::InvalidSmoothTime { name, value });
            }
        }
        Ok(())
    }

    /// Speed the character should settle at for this input
    pub fn target_speed(&self, running: bool, input_magnitude: f32) -> f32 {
        let speed = if running {
            self.run_speed
        } else {
            self.walk_speed
        };
        speed * input_magnitude
    }

    /// Launch speed that reaches `jump_height` under `gravity` (v² = 2gh)
    pub fn jump_velocity(&self) -> f32 {
        (-2.0 * self.gravity * self.jump_height).sqrt()
    }

    /// Stretch a smoothing time while airborne.
    ///
    /// Zero air control yields an infinite time, so nothing changes in the air.
    pub fn air_adjusted(&self, smooth_time: f32, grounded: bool) -> f32 {
        if grounded {
            smooth_time
        } else if self.air_control_percent == 0.0 {
            f32::INFINITY
        } else {
            smooth_time / self.air_control_percent
        }
    }

    /// Walk/run blend value for the animation layer.
    ///
    /// Walking tops out at 0.5 so the walk and run ranges don't overlap.
    pub fn blend_percent(&self, horizontal_speed: f32, running: bool) -> f32 {
        if running {
            horizontal_speed / self.run_speed
        } else {
            horizontal_speed / self.walk_speed * 0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(LocomotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_jump_velocity_closed_form() {
        let config = LocomotionConfig {
            gravity: -12.0,
            jump_height: 1.0,
            ..Default::default()
        };
        assert!((config.jump_velocity() - 24.0_f32.sqrt()).abs() < 1e-6);
        assert!((config.jump_velocity() - 4.899).abs() < 1e-3);
    }

    #[test]
    fn test_air_adjusted_times() {
        let mut config = LocomotionConfig::default();
        assert_eq!(config.air_adjusted(0.2, true), 0.2);
        assert_eq!(config.air_adjusted(0.2, false), f32::INFINITY);

        config.air_control_percent = 0.5;
        assert!((config.air_adjusted(0.2, false) - 0.4).abs() < 1e-6);
        assert_eq!(config.air_adjusted(0.2, true), 0.2);
    }

    #[test]
    fn test_target_speed() {
        let config = LocomotionConfig::default();
        assert_eq!(config.target_speed(false, 1.0), 2.0);
        assert_eq!(config.target_speed(true, 1.0), 3.0);
        assert_eq!(config.target_speed(true, 0.0), 0.0);
    }

    #[test]
    fn test_blend_percent() {
        let config = LocomotionConfig::default();
        assert_eq!(config.blend_percent(2.0, false), 0.5);
        assert_eq!(config.blend_percent(3.0, true), 1.0);
        assert_eq!(config.blend_percent(0.0, true), 0.0);
    }

    #[test]
    fn test_air_control_out_of_range_rejected() {
        for bad in [-0.1, 1.5, f32::NAN] {
            let config = LocomotionConfig {
                air_control_percent: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(LocomotionError::InvalidAirControl(_))
            ));
        }
    }

    #[test]
    fn test_other_invalid_values_rejected() {
        let config = LocomotionConfig {
            walk_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LocomotionError::InvalidSpeed { .. })));

        let config = LocomotionConfig {
            gravity: 9.81,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(LocomotionError::InvalidGravity(9.81)));

        let config = LocomotionConfig {
            jump_height: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(LocomotionError::InvalidJumpHeight(-1.0)));

        let config = LocomotionConfig {
            turn_smooth_time: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LocomotionError::InvalidSmoothTime { name: "turn_smooth_time", .. })
        ));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // serde(default) fills anything missing
        let config: LocomotionConfig =
            serde_json::from_str(r#"{ "run_speed": 6.0, "idle_direction": "facing" }"#).unwrap();
        assert_eq!(config.run_speed, 6.0);
        assert_eq!(config.walk_speed, 2.0);
        assert_eq!(config.idle_direction, IdleDirection::Facing);
    }
}
