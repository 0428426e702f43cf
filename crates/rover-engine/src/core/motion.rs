//! Motion controller: the single authoritative rover trajectory.
//!
//! `advance` is called once per display refresh. Input is folded into
//! velocity on every call, but position only integrates when the
//! [`RateThrottle`] lets a simulation step through. Vertical motion follows
//! a closed-form arc evaluated from the launch state (see [`Launch`]).

use glam::{DVec2, IVec2};

use crate::api::types::Facing;
use crate::core::kinematics::{ArcSample, Launch};
use crate::core::time::RateThrottle;
use crate::core::viewport::Viewport;
use crate::input::keys::InputSnapshot;

pub const DEFAULT_MAX_SPEED: f64 = 15.0;
pub const DEFAULT_JUMP_IMPULSE: f64 = -15.0;
pub const DEFAULT_GRAVITY: f64 = 2.0;

/// Physics constants for one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTuning {
    /// Horizontal speed in units per step while a direction is held.
    pub max_speed: f64,
    /// Vertical velocity added at jump start. Negative is upward.
    pub jump_impulse: f64,
    /// Downward acceleration in units per step squared.
    pub gravity: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

/// Diagnostics hook. Every method defaults to a no-op.
pub trait MotionObserver {
    /// A jump was triggered at `position`.
    fn jump_started(&mut self, _position: IVec2) {}
    /// One airborne integration step was evaluated.
    fn integrated(&mut self, _sample: &ArcSample) {}
    /// The rover touched down and was snapped to the ground line.
    fn landed(&mut self, _position: IVec2) {}
}

impl MotionObserver for () {}

/// Everything that moves. Mutated only by [`MotionController::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    position: IVec2,
    velocity: DVec2,
    facing: Facing,
    jump_ticks: u32,
    frame: u64,
    launch: Option<Launch>,
}

impl MotionState {
    /// Resting on the ground at the horizontal center of the viewport.
    pub fn resting(viewport: &Viewport) -> Self {
        Self {
            position: IVec2::new(viewport.center_x(), viewport.ground_level()),
            velocity: DVec2::ZERO,
            facing: Facing::Right,
            jump_ticks: 0,
            frame: 0,
            launch: None,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Steps since the current arc began; zero when grounded.
    pub fn jump_ticks(&self) -> u32 {
        self.jump_ticks
    }

    /// Animation counter, bumped on every step that starts with nonzero velocity.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_ticks > 0
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != DVec2::ZERO
    }
}

/// Owns the motion state and the rate throttle.
#[derive(Debug, Clone)]
pub struct MotionController {
    state: MotionState,
    throttle: RateThrottle,
    tuning: MotionTuning,
}

impl MotionController {
    pub fn new(viewport: &Viewport, simulation_rate: i32, tuning: MotionTuning) -> Self {
        Self {
            state: MotionState::resting(viewport),
            throttle: RateThrottle::new(simulation_rate),
            tuning,
        }
    }

    /// Advance one display tick. Returns true if a simulation step ran.
    pub fn advance(&mut self, input: InputSnapshot, display_rate: u32, viewport: &Viewport) -> bool {
        self.advance_observed(input, display_rate, viewport, &mut ())
    }

    /// [`advance`](Self::advance) with a diagnostics observer.
    pub fn advance_observed<O: MotionObserver + ?Sized>(
        &mut self,
        input: InputSnapshot,
        display_rate: u32,
        viewport: &Viewport,
        observer: &mut O,
    ) -> bool {
        self.apply_intent(input);
        if input.jump {
            self.try_jump(observer);
        }
        if !self.throttle.tick(display_rate) {
            return false;
        }
        self.step(viewport.ground_level(), observer);
        true
    }

    /// Shift the simulation rate, clamped to `[0, 60]`. Returns the new rate.
    pub fn adjust_rate(&mut self, delta: i32) -> u32 {
        self.throttle.adjust(delta)
    }

    pub fn set_rate(&mut self, rate: i32) {
        self.throttle.set_rate(rate);
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.state.velocity
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn jump_ticks(&self) -> u32 {
        self.state.jump_ticks
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn simulation_rate(&self) -> u32 {
        self.throttle.rate()
    }

    /// Above the current ground line, whether or not an arc is active.
    pub fn is_airborne(&self, viewport: &Viewport) -> bool {
        self.state.is_jumping() || self.state.position.y < viewport.ground_level()
    }

    fn apply_intent(&mut self, input: InputSnapshot) {
        let state = &mut self.state;
        if input.move_left {
            state.velocity.x = -self.tuning.max_speed;
            state.facing = Facing::Left;
        } else if input.move_right {
            state.velocity.x = self.tuning.max_speed;
            state.facing = Facing::Right;
        } else {
            state.velocity.x = 0.0;
        }
    }

    fn try_jump<O: MotionObserver + ?Sized>(&mut self, observer: &mut O) {
        let state = &mut self.state;
        if state.is_jumping() {
            return;
        }
        state.jump_ticks = 1;
        state.velocity.y += self.tuning.jump_impulse;
        state.launch = Some(Launch::new(f64::from(state.position.y), state.velocity.y));
        observer.jump_started(state.position);
    }

    fn step<O: MotionObserver + ?Sized>(&mut self, ground: i32, observer: &mut O) {
        let state = &mut self.state;
        state.position.x = state.position.x.saturating_add(state.velocity.x.round() as i32);
        if state.is_moving() {
            state.frame = state.frame.wrapping_add(1);
        }

        if state.is_jumping() || state.position.y < ground {
            // Without an active arc this is a fall from rest: t starts at 0.
            let (y, vy) = (f64::from(state.position.y), state.velocity.y);
            let launch = *state.launch.get_or_insert_with(|| Launch::new(y, vy));
            let sample = launch.sample(state.jump_ticks, self.tuning.gravity);
            observer.integrated(&sample);

            state.position.y = sample.position();
            state.velocity.y = sample.vt;
            state.jump_ticks = state.jump_ticks.saturating_add(1);

            if state.position.y >= ground {
                state.jump_ticks = 0;
                state.velocity.y = 0.0;
                state.position.y = ground;
                state.launch = None;
                observer.landed(state.position);
            }
        } else if state.position.y > ground {
            state.position.y = ground;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot() -> impl Strategy<Value = InputSnapshot> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right, jump)| {
            InputSnapshot {
                move_left,
                move_right,
                jump,
            }
        })
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_input(
            inputs in prop::collection::vec(snapshot(), 1..300),
            rate in 0i32..=60,
        ) {
            let viewport = Viewport::new(800, 600);
            let mut c = MotionController::new(&viewport, rate, MotionTuning::default());
            let ground = viewport.ground_level();
            for input in inputs {
                let stepped = c.advance(input, 60, &viewport);
                let vx = c.velocity().x;
                prop_assert!(vx == 0.0 || vx == 15.0 || vx == -15.0);
                prop_assert!(c.position().y <= ground);
                if stepped && !c.state().is_jumping() {
                    prop_assert_eq!(c.position().y, ground);
                    prop_assert_eq!(c.velocity().y, 0.0);
                }
            }
        }

        #[test]
        fn ground_invariant_survives_resizes(
            ticks in prop::collection::vec((snapshot(), prop::option::of(100u32..1200)), 1..300),
            rate in 1i32..=60,
        ) {
            let mut viewport = Viewport::new(800, 600);
            let mut c = MotionController::new(&viewport, rate, MotionTuning::default());
            for (input, height) in ticks {
                if let Some(height) = height {
                    viewport.resize(800, height);
                }
                let stepped = c.advance(input, 60, &viewport);
                if stepped {
                    let ground = viewport.ground_level();
                    prop_assert!(c.position().y <= ground);
                    if !c.state().is_jumping() {
                        prop_assert_eq!(c.position().y, ground);
                        prop_assert_eq!(c.velocity().y, 0.0);
                    }
                }
            }
        }

        #[test]
        fn right_moves_exactly_speed_per_step(n in 0usize..200) {
            let viewport = Viewport::new(800, 600);
            let mut c = MotionController::new(&viewport, 60, MotionTuning::default());
            for _ in 0..n {
                c.advance(InputSnapshot::right(), 60, &viewport);
            }
            prop_assert_eq!(c.position().x, 400 + 15 * n as i32);
        }
    }
}
