pub mod animation;
pub mod layer;
pub mod sprite;

pub use animation::FrameCycle;
pub use layer::RenderLayer;
pub use sprite::{SpriteComponent, SpriteId};
