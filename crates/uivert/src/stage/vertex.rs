use crate::coords::{ClipPosition, Vec2};
use crate::paint::{LinearRgba, SrgbVertexColor};

/// Per-vertex attributes read from the vertex buffer.
///
/// Slot order on the GPU side is position (0), uv (1), color (2).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexInput {
    /// Pixel-space position. May lie outside the screen; clipping happens later.
    pub position: Vec2,
    pub uv: Vec2,
    pub color: SrgbVertexColor,
}

impl VertexInput {
    #[inline]
    pub const fn new(position: Vec2, uv: Vec2, color: SrgbVertexColor) -> Self {
        Self { position, uv, color }
    }
}

/// Per-vertex results consumed by the rasterizer and fragment stage.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexOutput {
    pub clip_position: ClipPosition,
    pub color: LinearRgba,
    pub uv: Vec2,
}
