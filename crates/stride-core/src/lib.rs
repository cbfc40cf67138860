//! Stride Core - Core types and utilities shared by the Stride crates
//!
//! This crate provides the foundational pieces used by the locomotion stack:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and yaw helpers for character placement
//! - Critically-damped smoothing filters
//! - Frame time with a fixed-step accumulator

pub mod smoothing;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use smoothing::{delta_angle, exp_smooth, smooth_damp, smooth_damp_angle, wrap_degrees};
pub use time::{GameTime, TimeConfig};
pub use types::{yaw_direction, yaw_rotation, Transform};
