//! Step-driven sprite animation.
//!
//! The motion controller counts moving steps; this maps that counter onto a
//! small looping set of sprite frames.

/// Default number of frames in the rover walk cycle.
pub const DEFAULT_FRAME_COUNT: u32 = 4;
/// Sprite ids for the walk cycle start at this value.
pub const DEFAULT_FRAME_OFFSET: u32 = 1;

/// A looping frame sequence with ids `offset..offset + count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    count: u32,
    offset: u32,
}

impl FrameCycle {
    /// A cycle with at least one frame.
    pub fn new(count: u32, offset: u32) -> Self {
        Self {
            count: count.max(1),
            offset,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Position within the cycle, `0..count`.
    pub fn phase(&self, frame: u64) -> u32 {
        (frame % u64::from(self.count)) as u32
    }

    /// Sprite id to draw for an animation counter value.
    pub fn sprite_for(&self, frame: u64) -> u32 {
        self.phase(frame) + self.offset
    }
}

impl Default for FrameCycle {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT, DEFAULT_FRAME_OFFSET)
    }
}
