/// Render layer. Controls draw order.
///
/// Layers are drawn back-to-front: Background first, Overlay last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Actors = 1,
    Overlay = 2,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 3;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Actors),
            2 => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
