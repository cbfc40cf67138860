//! Look-input gate that holds the camera still while dialogue is open

use std::rc::Weak;

use glam::Vec2;

use crate::dialogue::{DialogueChannel, DialogueFlag, DialogueSubscription};
use crate::error::DialogueError;
use crate::input::LookInput;

/// Passes look axes through, or zeros them during dialogue
pub struct CameraInputFreeze {
    frozen: DialogueFlag,
    _subscription: DialogueSubscription,
}

impl CameraInputFreeze {
    /// Subscribe to the scene's dialogue channel
    pub fn new(channel: &Weak<DialogueChannel>) -> Result<Self, DialogueError> {
        let frozen = DialogueFlag::new();
        let subscription = frozen.listen(channel)?;
        Ok(Self {
            frozen,
            _subscription: subscription,
        })
    }

    /// Whether look input is currently suppressed
    pub fn is_frozen(&self) -> bool {
        self.frozen.is_set()
    }

    /// Sample one look axis: 0 is horizontal, 1 is vertical, anything else is 0
    pub fn sample(&self, axis: usize, raw: &impl LookInput) -> f32 {
        if self.is_frozen() {
            return 0.0;
        }
        match axis {
            0 => raw.look_horizontal(),
            1 => raw.look_vertical(),
            _ => 0.0,
        }
    }

    /// Both look axes at once
    pub fn look_delta(&self, raw: &impl LookInput) -> Vec2 {
        Vec2::new(self.sample(0, raw), self.sample(1, raw))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_passthrough_when_not_in_dialogue() {
        let channel = DialogueChannel::new();
        let freeze = CameraInputFreeze::new(&Rc::downgrade(&channel)).unwrap();
        let raw = Vec2::new(0.4, -0.7);

        assert_eq!(freeze.sample(0, &raw), 0.4);
        assert_eq!(freeze.sample(1, &raw), -0.7);
        assert_eq!(freeze.sample(2, &raw), 0.0);
    }

    #[test]
    fn test_zero_while_in_dialogue() {
        let channel = DialogueChannel::new();
        let freeze = CameraInputFreeze::new(&Rc::downgrade(&channel)).unwrap();
        let raw = Vec2::new(1.0, 1.0);

        channel.publish_start();
        assert!(freeze.is_frozen());
        assert_eq!(freeze.look_delta(&raw), Vec2::ZERO);

        channel.publish_end();
        assert_eq!(freeze.look_delta(&raw), raw);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let channel = DialogueChannel::new();
        let freeze = CameraInputFreeze::new(&Rc::downgrade(&channel)).unwrap();
        assert_eq!(channel.subscriber_count(), 1);

        drop(freeze);
        assert_eq!(channel.subscriber_count(), 0);
        channel.publish_start();
    }

    #[test]
    fn test_missing_channel_fails_fast() {
        let channel = DialogueChannel::new();
        let weak = Rc::downgrade(&channel);
        drop(channel);

        assert!(matches!(
            CameraInputFreeze::new(&weak),
            Err(DialogueError::ChannelMissing)
        ));
    }
}
