//! Key tracking and bindings.
//!
//! Turns raw key-down/key-up events into the "held" and "just pressed"
//! signals the motion controller consumes.

use std::collections::HashSet;

use serde::Deserialize;

use crate::input::queue::InputEvent;

/// Browser `KeyboardEvent.keyCode` values used by the default bindings.
pub mod key {
    pub const SPACE: u32 = 32;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_RIGHT: u32 = 39;
    pub const D: u32 = 68;
    pub const F: u32 = 70;
    pub const Q: u32 = 81;
    /// Numpad plus.
    pub const NUMPAD_ADD: u32 = 107;
    /// Numpad minus.
    pub const NUMPAD_SUBTRACT: u32 = 109;
    /// `=` / `+` on Firefox.
    pub const EQUAL_FIREFOX: u32 = 61;
    /// `-` on Firefox.
    pub const MINUS_FIREFOX: u32 = 173;
    /// `=` / `+` on Chromium and WebKit.
    pub const EQUAL: u32 = 187;
    /// `-` on Chromium and WebKit.
    pub const MINUS: u32 = 189;
}

/// Held and just-pressed key sets for the current display tick.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<u32>,
    pressed: HashSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one input event into the key sets. Non-key events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                // Auto-repeat sends KeyDown for a key that is already held.
                if self.held.insert(key_code) {
                    self.pressed.insert(key_code);
                }
            }
            InputEvent::KeyUp { key_code } => {
                self.held.remove(&key_code);
            }
            InputEvent::Blur => self.release_all(),
            InputEvent::Resize { .. } => {}
        }
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Pressed during this display tick. A tap that was released in the
    /// same tick still counts.
    pub fn just_pressed(&self, key_code: u32) -> bool {
        self.pressed.contains(&key_code)
    }

    /// Forget just-pressed keys. Call once at the end of every display tick.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}

/// Per-display-tick input flags for the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    pub const IDLE: Self = Self {
        move_left: false,
        move_right: false,
        jump: false,
    };

    pub fn left() -> Self {
        Self { move_left: true, ..Self::IDLE }
    }

    pub fn right() -> Self {
        Self { move_right: true, ..Self::IDLE }
    }

    pub fn jump() -> Self {
        Self { jump: true, ..Self::IDLE }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

/// Host-level requests triggered by a key press. Handled outside the motion core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    ToggleDebug,
    ToggleFullscreen,
    Quit,
}

/// Key code lists for each action. Any listed key triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<u32>,
    pub move_right: Vec<u32>,
    pub jump: Vec<u32>,
    pub speed_up: Vec<u32>,
    pub slow_down: Vec<u32>,
    pub toggle_debug: Vec<u32>,
    pub toggle_fullscreen: Vec<u32>,
    pub quit: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec![key::ARROW_LEFT],
            move_right: vec![key::ARROW_RIGHT],
            jump: vec![key::SPACE],
            speed_up: vec![key::EQUAL, key::EQUAL_FIREFOX, key::NUMPAD_ADD],
            slow_down: vec![key::MINUS, key::MINUS_FIREFOX, key::NUMPAD_SUBTRACT],
            toggle_debug: vec![key::D],
            toggle_fullscreen: vec![key::F],
            quit: vec![key::Q],
        }
    }
}

impl KeyBindings {
    /// Motion flags for this display tick.
    pub fn snapshot(&self, keys: &KeyState) -> InputSnapshot {
        InputSnapshot {
            move_left: self.move_left.iter().any(|&k| keys.is_held(k)),
            move_right: self.move_right.iter().any(|&k| keys.is_held(k)),
            jump: self.jump.iter().any(|&k| keys.just_pressed(k)),
        }
    }

    /// Commands whose key was pressed this display tick, in a fixed order.
    pub fn commands(&self, keys: &KeyState) -> Vec<Command> {
        let pressed = |codes: &[u32]| codes.iter().any(|&k| keys.just_pressed(k));
        [
            (Command::Quit, &self.quit),
            (Command::ToggleDebug, &self.toggle_debug),
            (Command::ToggleFullscreen, &self.toggle_fullscreen),
            (Command::SpeedUp, &self.speed_up),
            (Command::SlowDown, &self.slow_down),
        ]
        .into_iter()
        .filter(|(_, codes)| pressed(codes.as_slice()))
        .map(|(command, _)| command)
        .collect()
    }
}
