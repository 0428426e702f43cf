use bytemuck::{Pod, Zeroable};

/// Which way the rover sprite faces. Only affects mirroring, never physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal scale sign for sprite mirroring.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Kind tag for a `GameEvent`. The numeric value is part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EventKind {
    /// a = world x, b = launch y.
    JumpStarted = 1,
    /// a = world x, b = ground y.
    Landed = 2,
    /// a = new simulation rate.
    RateChanged = 3,
    /// a = 1.0 when debug turned on, 0.0 when off.
    DebugToggled = 4,
    /// The host should toggle fullscreen and report the new size.
    FullscreenRequested = 5,
    /// The host should stop the game loop.
    QuitRequested = 6,
}

impl EventKind {
    pub fn from_f32(value: f32) -> Option<Self> {
        match value as u32 {
            1 => Some(Self::JumpStarted),
            2 => Some(Self::Landed),
            3 => Some(Self::RateChanged),
            4 => Some(Self::DebugToggled),
            5 => Some(Self::FullscreenRequested),
            6 => Some(Self::QuitRequested),
            _ => None,
        }
    }
}

/// A game event communicated from Rust to the host via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: EventKind, a: f32, b: f32) -> Self {
        Self {
            kind: kind as u32 as f32,
            a,
            b,
            c: 0.0,
        }
    }

    /// Decode the kind tag.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_f32(self.kind)
    }
}
