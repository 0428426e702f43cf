pub mod instance;

pub use instance::{Anchor, RenderBuffer, RenderInstance};
