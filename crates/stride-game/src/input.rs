//! Input system with action-based mapping
//!
//! Turns raw winit events into game actions, then exposes them to the
//! locomotion controller as an [`InputSampler`] and to the camera as a
//! [`LookInput`].

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Run modifier (Shift by default)
    Run,
}

/// One frame of movement intent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Unit direction in the input plane (x = right, y = forward), or zero
    pub direction: Vec2,
    /// Run modifier held
    pub running: bool,
    /// Jump pressed this frame (edge, not level)
    pub jump_pressed: bool,
}

impl InputSample {
    /// Build a sample from raw axes in [-1, 1]; the direction is normalized
    pub fn from_axes(horizontal: f32, vertical: f32, running: bool, jump_pressed: bool) -> Self {
        let axes = Vec2::new(horizontal.clamp(-1.0, 1.0), vertical.clamp(-1.0, 1.0));
        Self {
            direction: axes.normalize_or_zero(),
            running,
            jump_pressed,
        }
    }
}

/// Source of movement input for the locomotion controller
pub trait InputSampler {
    /// Sample the current movement intent
    fn sample(&self) -> InputSample;
}

impl InputSampler for InputSample {
    fn sample(&self) -> InputSample {
        *self
    }
}

/// Source of raw camera look axes
pub trait LookInput {
    /// Horizontal look axis (axis 0)
    fn look_horizontal(&self) -> f32;
    /// Vertical look axis (axis 1)
    fn look_vertical(&self) -> f32;
}

impl LookInput for Vec2 {
    fn look_horizontal(&self) -> f32 {
        self.x
    }

    fn look_vertical(&self) -> f32 {
        self.y
    }
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
    /// Mouse movement delta for this frame
    pub mouse_delta: Vec2,
    /// Scroll wheel delta for this frame
    pub scroll_delta: f32,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Digital axis from a pair of opposing actions
    fn axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.held.clear();
        self.clear_frame();
    }
}

impl InputSampler for InputState {
    fn sample(&self) -> InputSample {
        InputSample::from_axes(
            self.axis(InputAction::MoveLeft, InputAction::MoveRight),
            self.axis(InputAction::MoveBackward, InputAction::MoveForward),
            self.is_held(InputAction::Run),
            self.is_just_pressed(InputAction::Jump),
        )
    }
}

impl LookInput for InputState {
    fn look_horizontal(&self) -> f32 {
        self.mouse_delta.x
    }

    fn look_vertical(&self) -> f32 {
        self.mouse_delta.y
    }
}

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<KeyCode, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Run);
        bindings.bind(KeyCode::ShiftRight, InputAction::Run);

        bindings
    }
}

impl InputBindings {
    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(key, action);
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
            mouse_sensitivity: 1.0,
            invert_y: false,
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        let PhysicalKey::Code(key_code) = physical_key else {
            return;
        };
        let Some(action) = self.bindings.get_key_action(key_code) else {
            return;
        };

        match element_state {
            ElementState::Pressed => {
                // Key repeat does not count as a fresh press
                if !self.state.held.contains(&action) {
                    self.state.just_pressed.insert(action);
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
                self.state.just_released.insert(action);
            }
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        let y_mult = if self.invert_y { -1.0 } else { 1.0 };
        self.state.mouse_delta += Vec2::new(
            delta.0 as f32 * self.mouse_sensitivity,
            delta.1 as f32 * self.mouse_sensitivity * y_mult,
        );
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };
        self.state.scroll_delta += scroll;
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}
