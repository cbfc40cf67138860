use thiserror::Error;

/// Errors raised when wiring a listener to the dialogue channel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialogueError {
    #[error("no dialogue channel is alive in this scene")]
    ChannelMissing,
}

/// Errors raised when building a locomotion controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocomotionError {
    #[error("air control percent must be within [0, 1], got {0}")]
    InvalidAirControl(f32),

    #[error("walk and run speeds must be positive, got walk {walk} and run {run}")]
    InvalidSpeed { walk: f32, run: f32 },

    #[error("gravity must be a finite negative value, got {0}")]
    InvalidGravity(f32),

    #[error("jump height must be finite and non-negative, got {0}")]
    InvalidJumpHeight(f32),

    #[error("smooth time '{name}' must be finite and non-negative, got {value}")]
    InvalidSmoothTime { name: &'static str, value: f32 },

    #[error(transparent)]
    Dialogue(#[from] DialogueError),
}
