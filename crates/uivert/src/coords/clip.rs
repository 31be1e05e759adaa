/// Homogeneous clip-space position handed to the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipPosition {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Position on the UI plane (`z = 0`, `w = 1`).
    #[inline]
    pub const fn on_ui_plane(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}
