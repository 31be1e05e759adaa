//! JSON shape of an input draw and of its shaded output.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use uivert::{ScreenSize, SrgbVertexColor, Vec2, VertexInput, VertexOutput};

#[derive(Debug, Deserialize)]
pub struct DrawFile {
    pub screen_size: [f32; 2],
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
}

/// One input vertex. `color_bytes`, when present, wins over `color`.
#[derive(Debug, Deserialize)]
pub struct VertexRecord {
    pub position: [f32; 2],
    #[serde(default)]
    pub uv: [f32; 2],
    #[serde(default = "opaque_white")]
    pub color: [f32; 4],
    #[serde(default)]
    pub color_bytes: Option<[u8; 4]>,
}

fn opaque_white() -> [f32; 4] {
    SrgbVertexColor::opaque_white().to_array()
}

impl DrawFile {
    pub fn screen_size(&self) -> ScreenSize {
        let [width, height] = self.screen_size;
        ScreenSize::new(width, height)
    }

    pub fn vertex_inputs(&self) -> Vec<VertexInput> {
        self.vertices.iter().map(VertexRecord::to_input).collect()
    }
}

impl VertexRecord {
    fn to_input(&self) -> VertexInput {
        let color = match self.color_bytes {
            Some(bytes) => SrgbVertexColor::from_srgba_u8(bytes),
            None => SrgbVertexColor::from(self.color),
        };
        VertexInput::new(Vec2::from(self.position), Vec2::from(self.uv), color)
    }
}

#[derive(Debug, Serialize)]
pub struct ShadedFile {
    pub vertices: Vec<ShadedRecord>,
}

/// Shaded vertex. Non-finite components come out as `"inf"`, `"-inf"` or `"NaN"`;
/// plain JSON numbers cannot carry them.
#[derive(Debug, Serialize)]
pub struct ShadedRecord {
    #[serde(serialize_with = "tagged_floats")]
    pub clip_position: [f32; 4],
    #[serde(serialize_with = "tagged_floats")]
    pub color: [f32; 4],
    #[serde(serialize_with = "tagged_floats")]
    pub uv: [f32; 2],
}

fn tagged_floats<S, const N: usize>(values: &[f32; N], s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut tuple = s.serialize_tuple(N)?;
    for v in values {
        if v.is_finite() {
            tuple.serialize_element(v)?;
        } else if v.is_nan() {
            tuple.serialize_element("NaN")?;
        } else if v.is_sign_positive() {
            tuple.serialize_element("inf")?;
        } else {
            tuple.serialize_element("-inf")?;
        }
    }
    tuple.end()
}

impl From<&VertexOutput> for ShadedRecord {
    fn from(out: &VertexOutput) -> Self {
        Self {
            clip_position: out.clip_position.to_array(),
            color: out.color.to_array(),
            uv: out.uv.to_array(),
        }
    }
}

impl ShadedFile {
    pub fn new(outputs: &[VertexOutput]) -> Self {
        Self {
            vertices: outputs.iter().map(ShadedRecord::from).collect(),
        }
    }
}
