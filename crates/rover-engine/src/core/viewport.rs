/// Default distance between the bottom of the viewport and the ground line.
pub const DEFAULT_GROUND_MARGIN: u32 = 75;

/// Largest accepted width, height or ground margin. Keeps every derived
/// screen coordinate inside `i32`.
pub const MAX_VIEWPORT_DIMENSION: u32 = 1 << 16;

/// Visible screen area supplied by the host.
/// The ground line is derived from the current height every time it is
/// asked for, so a resize moves the ground on the very next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    ground_margin: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.min(MAX_VIEWPORT_DIMENSION),
            height: height.min(MAX_VIEWPORT_DIMENSION),
            ground_margin: DEFAULT_GROUND_MARGIN,
        }
    }

    pub fn with_ground_margin(mut self, margin: u32) -> Self {
        self.ground_margin = margin.min(MAX_VIEWPORT_DIMENSION);
        self
    }

    /// Apply a host resize (window resize or fullscreen switch).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.min(MAX_VIEWPORT_DIMENSION);
        self.height = height.min(MAX_VIEWPORT_DIMENSION);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ground_margin(&self) -> u32 {
        self.ground_margin
    }

    /// Screen y of the ground line. May be negative for tiny viewports.
    pub fn ground_level(&self) -> i32 {
        self.height as i32 - self.ground_margin as i32
    }

    /// Horizontal screen position of the rover sprite.
    pub fn center_x(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Screen x of the left background tile for a given world x.
    /// Always in `(-width, 0]`; the second tile sits one width to the right.
    pub fn scroll_offset(&self, world_x: i32) -> i32 {
        if self.width == 0 {
            return 0;
        }
        -world_x.rem_euclid(self.width as i32)
    }
}
