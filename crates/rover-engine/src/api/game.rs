use serde::Deserialize;

use crate::api::types::{EventKind, GameEvent};
use crate::components::animation::{FrameCycle, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_OFFSET};
use crate::core::motion::{
    MotionController, MotionTuning, DEFAULT_GRAVITY, DEFAULT_JUMP_IMPULSE, DEFAULT_MAX_SPEED,
};
use crate::core::time::MAX_SIMULATION_RATE;
use crate::bridge::protocol::{MAX_EVENTS, MAX_INSTANCES};
use crate::core::viewport::{Viewport, DEFAULT_GROUND_MARGIN, MAX_VIEWPORT_DIMENSION};
use crate::input::keys::{Command, KeyBindings, KeyState};
use crate::systems::debug::Diagnostics;

/// Background tiles plus the rover.
const MIN_INSTANCES: usize = 3;

/// Startup configuration, provided by the host as JSON.
/// Every field is optional; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial viewport width in pixels (default: 800).
    pub width: u32,
    /// Initial viewport height in pixels (default: 600).
    pub height: u32,
    /// Simulation steps per second, clamped to [0, 60] (default: 30).
    pub simulation_rate: i32,
    /// Amount `+`/`-` change the simulation rate by (default: 5).
    pub rate_step: i32,
    /// Verbose jump diagnostics (default: false).
    pub debug: bool,
    /// Horizontal speed in units per step (default: 15).
    pub max_speed: f64,
    /// Vertical velocity added at jump start, negative is up (default: -15).
    pub jump_impulse: f64,
    /// Downward acceleration in units per step squared (default: 2).
    pub gravity: f64,
    /// Distance from the bottom of the viewport to the ground (default: 75).
    pub ground_margin: u32,
    /// Frames in the walk cycle (default: 4).
    pub frame_count: u32,
    /// First sprite id of the walk cycle (default: 1).
    pub frame_offset: u32,
    /// Maximum number of render instances in the shared buffer (default: 8).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Key codes for each action.
    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            simulation_rate: 30,
            rate_step: 5,
            debug: false,
            max_speed: DEFAULT_MAX_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            gravity: DEFAULT_GRAVITY,
            ground_margin: DEFAULT_GROUND_MARGIN,
            frame_count: DEFAULT_FRAME_COUNT,
            frame_offset: DEFAULT_FRAME_OFFSET,
            max_instances: 8,
            max_events: 32,
            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp every field into its usable range. Never fails.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.simulation_rate = self.simulation_rate.clamp(0, MAX_SIMULATION_RATE as i32);
        self.rate_step = self.rate_step.saturating_abs();
        self.max_speed = if self.max_speed.is_finite() {
            self.max_speed.abs()
        } else {
            defaults.max_speed
        };
        self.jump_impulse = if self.jump_impulse.is_finite() {
            -self.jump_impulse.abs()
        } else {
            defaults.jump_impulse
        };
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            self.gravity = defaults.gravity;
        }
        self.frame_count = self.frame_count.max(1);
        self.width = self.width.min(MAX_VIEWPORT_DIMENSION);
        self.height = self.height.min(MAX_VIEWPORT_DIMENSION);
        self.ground_margin = self.ground_margin.min(MAX_VIEWPORT_DIMENSION);
        self.max_instances = self.max_instances.clamp(MIN_INSTANCES, MAX_INSTANCES);
        self.max_events = self.max_events.min(MAX_EVENTS);
        self
    }

    pub fn tuning(&self) -> MotionTuning {
        MotionTuning {
            max_speed: self.max_speed,
            jump_impulse: self.jump_impulse,
            gravity: self.gravity,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_ground_margin(self.ground_margin)
    }

    pub fn frame_cycle(&self) -> FrameCycle {
        FrameCycle::new(self.frame_count, self.frame_offset)
    }
}

/// The rover game: motion controller, viewport and host-facing bookkeeping.
pub struct Rover {
    config: GameConfig,
    viewport: Viewport,
    controller: MotionController,
    frames: FrameCycle,
    debug: bool,
    /// Events produced during the current display tick.
    events: Vec<GameEvent>,
}

impl Rover {
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        let viewport = config.viewport();
        let controller = MotionController::new(&viewport, config.simulation_rate, config.tuning());
        Self {
            frames: config.frame_cycle(),
            debug: config.debug,
            events: Vec::with_capacity(config.max_events),
            viewport,
            controller,
            config,
        }
    }

    /// Run one display tick: apply command keys, then advance motion.
    /// Returns true if a simulation step ran.
    pub fn update(&mut self, keys: &KeyState, display_rate: u32) -> bool {
        for command in self.config.bindings.commands(keys) {
            self.apply_command(command);
        }
        let input = self.config.bindings.snapshot(keys);
        let mut diagnostics = Diagnostics::new(self.debug, &mut self.events);
        self.controller
            .advance_observed(input, display_rate, &self.viewport, &mut diagnostics)
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::SpeedUp => self.change_rate(self.config.rate_step),
            Command::SlowDown => self.change_rate(-self.config.rate_step),
            Command::ToggleDebug => self.set_debug(!self.debug),
            Command::ToggleFullscreen => {
                self.events.push(GameEvent::new(EventKind::FullscreenRequested, 0.0, 0.0));
            }
            Command::Quit => {
                log::info!("rover: quit requested");
                self.events.push(GameEvent::new(EventKind::QuitRequested, 0.0, 0.0));
            }
        }
    }

    fn change_rate(&mut self, delta: i32) {
        let before = self.controller.simulation_rate();
        let rate = self.controller.adjust_rate(delta);
        if rate != before {
            log::info!("rover: simulation rate {} -> {}", before, rate);
            self.events.push(GameEvent::new(EventKind::RateChanged, rate as f32, 0.0));
        }
    }

    pub fn set_debug(&mut self, on: bool) {
        if self.debug == on {
            return;
        }
        self.debug = on;
        log::info!("rover: debug {}", if on { "on" } else { "off" });
        self.events.push(GameEvent::new(EventKind::DebugToggled, if on { 1.0 } else { 0.0 }, 0.0));
    }

    /// Apply a host resize. The ground moves on the next simulation step.
    pub fn resize(&mut self, width: u32, height: u32) {
        let mut resized = self.viewport;
        resized.resize(width, height);
        if resized == self.viewport {
            return;
        }
        self.viewport = resized;
        log::info!(
            "rover: viewport {}x{}, ground at {}",
            self.viewport.width(),
            self.viewport.height(),
            self.viewport.ground_level()
        );
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn frames(&self) -> &FrameCycle {
        &self.frames
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Sprite id of the rover for the current animation counter.
    pub fn sprite_frame(&self) -> u32 {
        self.frames.sprite_for(self.controller.frame())
    }
}
