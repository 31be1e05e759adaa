use crate::coords::{ClipPosition, ScreenSize, Vec2};
use crate::error::StageError;

use super::{VertexInput, VertexOutput};

/// Maps a pixel-space position to clip space: `2 * p / s - 1`, `z = 0`, `w = 1`.
///
/// No validation. A zero screen component yields an infinite or NaN coordinate,
/// which is what the GPU stage would produce.
#[inline]
pub fn transform_position(position: Vec2, screen: ScreenSize) -> ClipPosition {
    let ndc = (position * 2.0).div_elem(screen.as_vec2()) - Vec2::splat(1.0);
    ClipPosition::on_ui_plane(ndc.x, ndc.y)
}

/// Runs the stage for a single vertex.
#[inline]
pub fn shade_vertex(screen: ScreenSize, vertex: &VertexInput) -> VertexOutput {
    VertexOutput {
        clip_position: transform_position(vertex.position, screen),
        color: vertex.color.to_linear(),
        uv: vertex.uv,
    }
}

/// [`shade_vertex`] with the screen-size precondition checked first.
///
/// # Errors
///
/// Returns [`StageError::InvalidScreenSize`] if `screen` is degenerate.
pub fn shade_vertex_checked(
    screen: ScreenSize,
    vertex: &VertexInput,
) -> Result<VertexOutput, StageError> {
    let screen = screen.validated()?;
    Ok(shade_vertex(screen, vertex))
}
