//! GPU side of the stage's interface contract.
//!
//! Covers what the vertex-buffer producer and the pipeline builder must agree on:
//! - vertex layout (slot 0 position, slot 1 uv, slot 2 color)
//! - the per-draw screen-size uniform block (group 0, binding 0)
//! - the WGSL vertex entry point `vs_main`
//!
//! Pipeline, bind group and buffer creation live with the host renderer.

use bytemuck::{Pod, Zeroable};

use crate::coords::ScreenSize;
use crate::paint::SrgbVertexColor;
use crate::stage::VertexInput;

/// WGSL source of the vertex stage. Entry point: `vs_main`.
pub const VERTEX_SHADER_WGSL: &str = include_str!("shaders/ui_vertex.wgsl");

/// Entry point name inside [`VERTEX_SHADER_WGSL`].
pub const VERTEX_ENTRY_POINT: &str = "vs_main";

// ── screen-size uniform ───────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ScreenSizeUniform {
    pub screen_size: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ScreenSizeUniform {
    #[inline]
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen_size: screen.to_array(),
            _pad: [0.0; 2],
        }
    }
}

/// Minimum binding size for the screen-size uniform buffer.
///
/// Pipeline builders pass this as `min_binding_size` for binding 0.
pub fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ScreenSizeUniform>() as u64)
        .expect("ScreenSizeUniform has non-zero size by construction")
}

// ── vertex ────────────────────────────────────────────────────────────────

/// Vertex buffer element, laid out exactly as `vs_main` reads it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4], // rgb 0..255 sRGB, a 0..1
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<VertexInput> for GpuVertex {
    #[inline]
    fn from(v: VertexInput) -> Self {
        Self {
            position: v.position.to_array(),
            uv: v.uv.to_array(),
            color: v.color.to_array(),
        }
    }
}

impl From<GpuVertex> for VertexInput {
    #[inline]
    fn from(v: GpuVertex) -> Self {
        VertexInput::new(v.position.into(), v.uv.into(), SrgbVertexColor::from(v.color))
    }
}
