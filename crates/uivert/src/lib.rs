//! uivert: the vertex stage of a UI rendering pipeline.
//!
//! Maps pixel-space UI vertices to clip space and decodes their sRGB vertex colors
//! to linear light. The crate provides:
//! - a CPU reference of the stage (`stage`), usable for software rendering and tests
//! - the GPU interface contract and WGSL shader (`gpu`)
//! - supporting coordinate and color types (`coords`, `paint`)

pub mod coords;
pub mod error;
pub mod gpu;
pub mod logging;
pub mod paint;
pub mod stage;

pub use coords::{ClipPosition, ScreenSize, Vec2};
pub use error::StageError;
pub use paint::{LinearRgba, SrgbVertexColor};
pub use stage::{
    shade_vertex, shade_vertex_checked, transform_position, DrawCall, StageConfig, UiVertexStage,
    Validation, VertexInput, VertexOutput,
};
