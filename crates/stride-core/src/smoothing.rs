//! Smoothing filters for speeds, angles, and blend parameters
//!
//! `smooth_damp` is the closed-form critically-damped spring from Game
//! Programming Gems 4 (1.10). The caller owns the velocity term and must pass
//! the same one back every frame.

/// Smallest time constant the damped filters will use
pub const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target` without oscillating.
///
/// - `dt <= 0` returns `current` and leaves `velocity` alone.
/// - An infinite `smooth_time` holds the value (used for "no air control").
/// - A single large step never overshoots `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if !(dt > 0.0) || smooth_time == f32::INFINITY {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp if we passed the target this step
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Angle version of [`smooth_damp`], in degrees.
///
/// Takes the short way around the circle. The result is not wrapped; use
/// [`wrap_degrees`] if the caller stores angles in `[0, 360)`.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// One-parameter exponential approach, frame-rate independent.
///
/// A non-positive `smooth_time` snaps to the target.
pub fn exp_smooth(current: f32, target: f32, smooth_time: f32, dt: f32) -> f32 {
    if !(dt > 0.0) || smooth_time == f32::INFINITY {
        return current;
    }
    if smooth_time <= 0.0 {
        return target;
    }
    current + (target - current) * (1.0 - (-dt / smooth_time).exp())
}
