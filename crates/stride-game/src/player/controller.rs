//! Locomotion controller: damped speed and facing, gravity, jumping

use std::rc::Weak;

use glam::{Quat, Vec2, Vec3};
use stride_core::{smooth_damp, smooth_damp_angle, wrap_degrees, yaw_direction, yaw_rotation};
use stride_physics::{CollisionMover, MoveOutcome};
use tracing::{debug, info, trace};

use crate::camera::CameraFacing;
use crate::dialogue::{DialogueChannel, DialogueFlag, DialogueSubscription};
use crate::error::LocomotionError;
use crate::input::{InputSample, InputSampler};

use super::{AnimationSink, IdleDirection, LocomotionConfig};

/// Blend parameter name written every tick
pub const SPEED_PERCENT_PARAM: &str = "speed_percent";

/// Per-tick integration state.
///
/// Only [`LocomotionController::tick`] mutates it; callers get a shared
/// reference through [`LocomotionController::state`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocomotionState {
    /// Magnitude of horizontal velocity, never negative
    pub horizontal_speed: f32,
    /// Signed vertical speed, positive is up
    pub vertical_velocity: f32,
    /// Facing in degrees, clockwise from -Z, in `[0, 360)`
    pub facing_yaw: f32,
    /// Grounded flag from the latest move
    pub grounded: bool,
    speed_smoothing_velocity: f32,
    yaw_smoothing_velocity: f32,
}

/// What one tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionFrame {
    /// Velocity submitted to the mover
    pub desired_velocity: Vec3,
    /// Velocity the mover reported back
    pub actual_velocity: Vec3,
    /// Grounded after the move
    pub grounded: bool,
    /// Target written to the speed blend parameter
    pub blend: f32,
    /// A jump launched this tick
    pub jumped: bool,
}

/// Third-person locomotion controller
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
    in_dialogue: DialogueFlag,
    _subscription: DialogueSubscription,
    /// Dialogue state seen by the previous tick, for transition logs
    was_in_dialogue: bool,
}

impl LocomotionController {
    /// Validate `config` and start listening on the scene's dialogue channel
    pub fn new(
        config: LocomotionConfig,
        channel: &Weak<DialogueChannel>,
    ) -> Result<Self, LocomotionError> {
        config.validate()?;

        let in_dialogue = DialogueFlag::new();
        let subscription = in_dialogue.listen(channel)?;
        info!(
            walk_speed = config.walk_speed,
            run_speed = config.run_speed,
            air_control = config.air_control_percent,
            "locomotion controller ready"
        );

        Ok(Self {
            config,
            state: LocomotionState::default(),
            in_dialogue,
            _subscription: subscription,
            was_in_dialogue: false,
        })
    }

    /// Start facing `yaw_degrees` instead of 0
    pub fn with_facing(mut self, yaw_degrees: f32) -> Self {
        self.state.facing_yaw = wrap_degrees(yaw_degrees);
        self
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Whether a dialogue is open right now
    pub fn in_dialogue(&self) -> bool {
        self.in_dialogue.is_set()
    }

    /// Facing as a rotation about +Y, for the body's transform
    pub fn facing(&self) -> Quat {
        yaw_rotation(self.state.facing_yaw)
    }

    /// Advance one frame
    pub fn tick<I, C, M, A>(
        &mut self,
        input: &I,
        camera: &C,
        mover: &mut M,
        animator: &mut A,
        dt: f32,
    ) -> LocomotionFrame
    where
        I: InputSampler + ?Sized,
        C: CameraFacing + ?Sized,
        M: CollisionMover + ?Sized,
        A: AnimationSink + ?Sized,
    {
        let in_dialogue = self.in_dialogue.is_set();
        if in_dialogue != self.was_in_dialogue {
            debug!(in_dialogue, "locomotion input gate changed");
            self.was_in_dialogue = in_dialogue;
        }

        self.state.grounded = mover.is_grounded();

        // No sampling in dialogue so held keys don't bleed through
        let sample = if in_dialogue {
            InputSample::default()
        } else {
            input.sample()
        };

        let (desired_velocity, outcome) = if in_dialogue {
            self.state.vertical_velocity += self.config.gravity * dt;
            let desired = Vec3::Y * self.state.vertical_velocity;
            (desired, mover.move_with(desired, dt))
        } else {
            self.move_active(&sample, camera.yaw_degrees(), mover, dt)
        };

        if outcome.grounded != self.state.grounded {
            debug!(
                grounded = outcome.grounded,
                vertical_velocity = self.state.vertical_velocity,
                "grounded state changed"
            );
        }
        self.state.grounded = outcome.grounded;
        if outcome.grounded {
            self.state.vertical_velocity = 0.0;
        }

        let jumped = !in_dialogue && sample.jump_pressed && self.state.grounded;
        if jumped {
            self.state.vertical_velocity = self.config.jump_velocity();
            debug!(launch_speed = self.state.vertical_velocity, "jump");
        }

        let blend = if in_dialogue {
            0.0
        } else {
            self.config
                .blend_percent(self.state.horizontal_speed, sample.running)
        };
        animator.set_blend_parameter(SPEED_PERCENT_PARAM, blend, self.config.speed_smooth_time, dt);

        trace!(
            speed = self.state.horizontal_speed,
            yaw = self.state.facing_yaw,
            vertical = self.state.vertical_velocity,
            "locomotion tick"
        );

        LocomotionFrame {
            desired_velocity,
            actual_velocity: outcome.velocity,
            grounded: outcome.grounded,
            blend,
            jumped,
        }
    }

    fn move_active<M>(
        &mut self,
        sample: &InputSample,
        camera_yaw: f32,
        mover: &mut M,
        dt: f32,
    ) -> (Vec3, MoveOutcome)
    where
        M: CollisionMover + ?Sized,
    {
        let grounded = self.state.grounded;
        let has_input = sample.direction != Vec2::ZERO;
        let speed_time = self
            .config
            .air_adjusted(self.config.speed_smooth_time, grounded);
        let turn_time = self
            .config
            .air_adjusted(self.config.turn_smooth_time, grounded);

        let target_speed = self
            .config
            .target_speed(sample.running, sample.direction.length());
        self.state.horizontal_speed = smooth_damp(
            self.state.horizontal_speed,
            target_speed,
            &mut self.state.speed_smoothing_velocity,
            speed_time,
            dt,
        )
        .max(0.0);

        if has_input {
            let target_yaw = sample.direction.x.atan2(sample.direction.y).to_degrees() + camera_yaw;
            self.state.facing_yaw = wrap_degrees(smooth_damp_angle(
                self.state.facing_yaw,
                target_yaw,
                &mut self.state.yaw_smoothing_velocity,
                turn_time,
                dt,
            ));
        } else {
            // Turning stops with the stick; no leftover spin on the next press
            self.state.yaw_smoothing_velocity = 0.0;
        }

        let direction = if has_input {
            yaw_direction(self.state.facing_yaw)
        } else {
            self.idle_direction()
        };

        self.state.vertical_velocity += self.config.gravity * dt;
        let desired = direction.normalize_or_zero() * self.state.horizontal_speed
            + Vec3::Y * self.state.vertical_velocity;

        let outcome = mover.move_with(desired, dt);
        // Walls show up as lost speed
        self.state.horizontal_speed = outcome.horizontal_speed();
        if self.state.horizontal_speed == 0.0 {
            self.state.speed_smoothing_velocity = 0.0;
        }
        (desired, outcome)
    }

    fn idle_direction(&self) -> Vec3 {
        match self.config.idle_direction {
            IdleDirection::Zero => Vec3::ZERO,
            IdleDirection::Facing => yaw_direction(self.state.facing_yaw),
            IdleDirection::LegacyDiagonal => Vec3::ONE.normalize(),
        }
    }
}
