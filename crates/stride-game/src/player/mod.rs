//! Player locomotion module
//!
//! Third-person movement driven by camera-relative input, with damped speed
//! and facing, gravity and jumping, and a walk/run blend for animation.

mod animation;
mod config;
mod controller;

pub use animation::{AnimationSink, BlendParameters};
pub use config::{IdleDirection, LocomotionConfig};
pub use controller::{LocomotionController, LocomotionFrame, LocomotionState, SPEED_PERCENT_PARAM};
