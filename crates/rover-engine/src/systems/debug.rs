//! Debug diagnostics: opt-in jump tracing and an on-screen text overlay.
//!
//! The motion core never logs. [`Diagnostics`] observes it, turning jump
//! milestones into game events and, when verbose, into `log::debug!` lines.

use glam::IVec2;

use crate::api::game::Rover;
use crate::api::types::{EventKind, GameEvent};
use crate::core::kinematics::ArcSample;
use crate::core::motion::MotionObserver;

/// Motion observer owned by the game for the duration of one display tick.
pub struct Diagnostics<'a> {
    verbose: bool,
    events: &'a mut Vec<GameEvent>,
}

impl<'a> Diagnostics<'a> {
    pub fn new(verbose: bool, events: &'a mut Vec<GameEvent>) -> Self {
        Self { verbose, events }
    }
}

impl MotionObserver for Diagnostics<'_> {
    fn jump_started(&mut self, position: IVec2) {
        if self.verbose {
            log::debug!("starting jump at ({}, {})", position.x, position.y);
        }
        self.events.push(GameEvent::new(
            EventKind::JumpStarted,
            position.x as f32,
            position.y as f32,
        ));
    }

    fn integrated(&mut self, sample: &ArcSample) {
        if self.verbose {
            log::debug!(
                "y0 = {:.6}, v0 = {:.6}, yt = {:.6}, vt = {:.6}, time = {}",
                sample.y0,
                sample.v0,
                sample.yt,
                sample.vt,
                sample.t
            );
        }
    }

    fn landed(&mut self, position: IVec2) {
        if self.verbose {
            log::debug!("stopping jump at ({}, {})", position.x, position.y);
        }
        self.events.push(GameEvent::new(
            EventKind::Landed,
            position.x as f32,
            position.y as f32,
        ));
    }
}

/// Text lines for the host's debug overlay. Empty when debug is off.
pub fn overlay_lines(rover: &Rover) -> Vec<String> {
    if !rover.debug() {
        return Vec::new();
    }
    let controller = rover.controller();
    let pos = controller.position();
    vec![
        format!("jump time: {}", controller.jump_ticks()),
        format!("jumping {}", controller.state().is_jumping()),
        format!("game speed {}", controller.simulation_rate()),
        format!("x, y {}, {}", pos.x, pos.y),
        format!("ground {}", rover.viewport().ground_level()),
        format!("frame {}", rover.sprite_frame()),
    ]
}
