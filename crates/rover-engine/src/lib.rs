pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, Rover};
pub use api::types::{EventKind, Facing, GameEvent};
pub use components::animation::FrameCycle;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, SpriteId};
pub use crate::core::kinematics::{ArcSample, Launch};
pub use crate::core::motion::{MotionController, MotionObserver, MotionState, MotionTuning};
pub use crate::core::time::{RateThrottle, MAX_SIMULATION_RATE, MIN_SIMULATION_RATE};
pub use crate::core::viewport::Viewport;
pub use renderer::instance::{Anchor, RenderBuffer, RenderInstance};
pub use input::queue::{InputEvent, InputQueue};
pub use input::keys::{Command, InputSnapshot, KeyBindings, KeyState};
pub use bridge::protocol::ProtocolLayout;
pub use systems::debug::{overlay_lines, Diagnostics};
pub use systems::render::build_render_buffer;
