use bytemuck::{Pod, Zeroable};

/// Where an instance's (x, y) sits on its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Anchor {
    /// (x, y) is the image's top-left corner.
    TopLeft = 0,
    /// (x, y) is the image's center.
    Center = 1,
}

/// Per-instance render data written to the shared buffer for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// Background tiles carry their on-screen size in `scale_x`/`scale_y`;
/// the rover carries a scale factor relative to its source image.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in screen space.
    pub x: f32,
    /// Y position in screen space.
    pub y: f32,
    /// Horizontal scale; negative mirrors the image.
    pub scale_x: f32,
    /// Vertical scale.
    pub scale_y: f32,
    /// Sprite id (see `SpriteId`).
    pub sprite: f32,
    /// Render layer (see `RenderLayer`).
    pub layer: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Anchor (see `Anchor`).
    pub anchor: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sprite instances for one display tick,
/// in draw order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats().len(), 16);
    }

    #[test]
    fn floats_follow_field_order() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance {
            x: 1.0,
            y: 2.0,
            scale_x: 3.0,
            scale_y: 4.0,
            sprite: 5.0,
            layer: 6.0,
            alpha: 7.0,
            anchor: 8.0,
        });
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
