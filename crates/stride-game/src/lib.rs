//! Stride Game - Gameplay systems
//!
//! Third-person locomotion, the dialogue broadcast that pauses it, input
//! mapping, and the orbit camera.

pub mod camera;
pub mod dialogue;
pub mod error;
pub mod input;
pub mod player;

pub use camera::{CameraConfig, CameraController, CameraFacing, CameraInputFreeze};
pub use dialogue::{DialogueChannel, DialogueFlag, DialogueSubscription, SubscriptionId};
pub use error::{DialogueError, LocomotionError};
pub use input::{
    InputAction, InputBindings, InputHandler, InputSample, InputSampler, InputState, LookInput,
};
pub use player::{
    AnimationSink, BlendParameters, IdleDirection, LocomotionConfig, LocomotionController,
    LocomotionFrame, LocomotionState, SPEED_PERCENT_PARAM,
};
