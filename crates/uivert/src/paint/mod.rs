//! Vertex color model.
//!
//! Scope:
//! - input color as it sits in the vertex buffer (sRGB RGB on a byte scale, linear alpha)
//! - output color handed to the rasterizer (linear RGB, alpha untouched)
//! - the byte-domain sRGB decode shared by both

pub mod color;
pub mod srgb;

pub use color::{LinearRgba, SrgbVertexColor};
pub use srgb::{linear_from_srgb, linear_from_srgb_byte};
