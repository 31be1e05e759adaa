//! The UI vertex stage.
//!
//! One pure function per vertex, `(ScreenSize, VertexInput) -> VertexOutput`, and a
//! draw-level driver that maps it over a vertex stream. Invocations share nothing
//! but the read-only screen size, so the driver is free to run them in parallel.

mod config;
mod draw;
mod transform;
mod vertex;

pub use config::{StageConfig, Validation};
pub use draw::{DrawCall, UiVertexStage};
pub use transform::{shade_vertex, shade_vertex_checked, transform_position};
pub use vertex::{VertexInput, VertexOutput};
