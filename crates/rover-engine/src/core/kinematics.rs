//! Closed-form ballistic arc.
//!
//! Every sample is evaluated from the launch state, never from the previous
//! sample, so a trajectory is identical no matter how the steps are spaced.

/// Vertical state captured at the moment an arc begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    /// Vertical position at launch (screen units, y grows downward).
    pub y0: f64,
    /// Vertical velocity at launch (units per step, negative is upward).
    pub v0: f64,
}

/// One evaluation of the arc, handed to diagnostics observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    pub y0: f64,
    pub v0: f64,
    /// Unrounded position `y(t)`.
    pub yt: f64,
    /// Velocity `v(t)`.
    pub vt: f64,
    /// Whole steps since launch.
    pub t: u32,
}

impl ArcSample {
    /// Position snapped to the integer pixel grid.
    pub fn position(&self) -> i32 {
        self.yt.round() as i32
    }
}

impl Launch {
    pub fn new(y0: f64, v0: f64) -> Self {
        Self { y0, v0 }
    }

    /// Evaluate `y(t) = y0 + v0*t + (g/2)*t^2` and `v(t) = v0 + g*t`.
    pub fn sample(&self, t: u32, gravity: f64) -> ArcSample {
        let tf = f64::from(t);
        ArcSample {
            y0: self.y0,
            v0: self.v0,
            yt: self.y0 + self.v0 * tf + (gravity / 2.0) * tf * tf,
            vt: self.v0 + gravity * tf,
            t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_returns_launch_state() {
        let s = Launch::new(300.0, -15.0).sample(0, 2.0);
        assert_eq!(s.position(), 300);
        assert_eq!(s.vt, -15.0);
    }

    #[test]
    fn first_step_matches_closed_form() {
        let s = Launch::new(525.0, -15.0).sample(1, 2.0);
        assert_eq!(s.yt, 511.0);
        assert_eq!(s.vt, -13.0);
        assert_eq!(s.position(), 511);
    }

    #[test]
    fn apex_and_return() {
        let launch = Launch::new(525.0, -15.0);
        assert_eq!(launch.sample(7, 2.0).position(), 469);
        assert_eq!(launch.sample(8, 2.0).position(), 469);
        assert_eq!(launch.sample(15, 2.0).position(), 525);
        assert_eq!(launch.sample(16, 2.0).position(), 541);
    }

    #[test]
    fn fractional_gravity_rounds_half_away_from_zero() {
        // 100 + 0*1 + 0.5*1 = 100.5
        let s = Launch::new(100.0, 0.0).sample(1, 1.0);
        assert_eq!(s.yt, 100.5);
        assert_eq!(s.position(), 101);
    }

    #[test]
    fn sample_keeps_launch_fields() {
        let s = Launch::new(10.0, -4.0).sample(3, 2.0);
        assert_eq!(s.y0, 10.0);
        assert_eq!(s.v0, -4.0);
        assert_eq!(s.t, 3);
    }
}
