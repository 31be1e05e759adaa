//! Coordinate types consumed and produced by the vertex stage.
//!
//! Pixel space:
//! - Logical pixels, same basis as the per-draw `ScreenSize`
//! - `(0, 0)` maps to clip `(-1, -1)`, `screen_size` maps to `(1, 1)`
//!
//! Clip space is homogeneous; UI always lands at `z = 0`, `w = 1`.

mod clip;
mod screen_size;
mod vec2;

pub use clip::ClipPosition;
pub use screen_size::ScreenSize;
pub use vec2::Vec2;
