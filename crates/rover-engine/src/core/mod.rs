pub mod kinematics;
pub mod motion;
pub mod time;
pub mod viewport;

pub use kinematics::{ArcSample, Launch};
pub use motion::{MotionController, MotionObserver, MotionState, MotionTuning};
pub use time::RateThrottle;
pub use viewport::Viewport;
