use crate::api::types::Facing;

/// Identifies a host-loaded image. The host maps ids to textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u32);

impl SpriteId {
    /// The tiled, horizontally scrolling background.
    pub const BACKGROUND: SpriteId = SpriteId(0);
}

/// Scale applied to the rover image relative to its source size.
pub const ROVER_SCALE: f32 = 0.5;

/// How the rover appears this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    pub sprite: SpriteId,
    /// Uniform scale; negative x mirrors the image.
    pub scale: f32,
    pub facing: Facing,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn new(sprite: SpriteId, facing: Facing) -> Self {
        Self {
            sprite,
            scale: ROVER_SCALE,
            facing,
            alpha: 1.0,
        }
    }

    /// Horizontal scale including the mirror for left-facing sprites.
    pub fn scale_x(&self) -> f32 {
        self.scale * self.facing.sign()
    }

    pub fn scale_y(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_facing_mirrors() {
        let s = SpriteComponent::new(SpriteId(2), Facing::Left);
        assert_eq!(s.scale_x(), -0.5);
        assert_eq!(s.scale_y(), 0.5);
    }

    #[test]
    fn right_facing_is_unmirrored() {
        let s = SpriteComponent::new(SpriteId(1), Facing::Right);
        assert_eq!(s.scale_x(), 0.5);
    }
}
