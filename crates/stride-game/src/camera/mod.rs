//! Camera system module
//!
//! Third-person orbit camera, its yaw as seen by the locomotion controller,
//! and the look-input gate that freezes it during dialogue.

mod config;
mod controller;
mod freeze;

pub use config::CameraConfig;
pub use controller::CameraController;
pub use freeze::CameraInputFreeze;

/// Current heading of the controlling camera
pub trait CameraFacing {
    /// Yaw in degrees, within [0, 360)
    fn yaw_degrees(&self) -> f32;
}

/// A fixed heading, in degrees
impl CameraFacing for f32 {
    fn yaw_degrees(&self) -> f32 {
        stride_core::wrap_degrees(*self)
    }
}
