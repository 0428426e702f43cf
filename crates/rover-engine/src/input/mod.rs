pub mod queue;
pub mod keys;

pub use queue::{InputEvent, InputQueue};
pub use keys::{Command, InputSnapshot, KeyBindings, KeyState};
