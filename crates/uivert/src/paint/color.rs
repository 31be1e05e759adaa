use super::srgb;

/// Vertex color as supplied by the vertex buffer.
///
/// Convention:
/// - `r`, `g`, `b` are sRGB-encoded on a `[0, 255]` scale (not normalized)
/// - `a` is linear, already in `[0, 1]`
///
/// Values outside the convention are not rejected; the decode extrapolates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SrgbVertexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SrgbVertexColor {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a vertex color from packed sRGBA bytes.
    ///
    /// RGB bytes keep their `[0, 255]` scale; the alpha byte is normalized to `[0, 1]`.
    #[inline]
    pub fn from_srgba_u8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r as f32, g as f32, b as f32, a as f32 / 255.0)
    }

    #[inline]
    pub const fn opaque_white() -> Self {
        Self::new(255.0, 255.0, 255.0, 1.0)
    }

    #[inline]
    pub const fn opaque_black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `true` when RGB lies in `[0, 255]` and alpha in `[0, 1]`.
    ///
    /// Diagnostics only. The stage decodes out-of-convention colors all the same.
    #[inline]
    pub fn is_in_convention(self) -> bool {
        let byte = 0.0..=255.0;
        byte.contains(&self.r)
            && byte.contains(&self.g)
            && byte.contains(&self.b)
            && (0.0..=1.0).contains(&self.a)
    }

    /// Decodes RGB to linear light. Alpha is copied unchanged.
    #[inline]
    pub fn to_linear(self) -> LinearRgba {
        let [r, g, b] = srgb::linear_from_srgb(self.rgb());
        LinearRgba::new(r, g, b, self.a)
    }
}

impl From<[f32; 4]> for SrgbVertexColor {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Linear RGBA color produced by the stage.
///
/// RGB is linear light, roughly `[0, 1]` for in-convention input. Alpha is whatever
/// the input carried, bit for bit.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_near(c: LinearRgba, expected: f32) {
        assert_abs_diff_eq!(c.r, expected, epsilon = 1e-3);
        assert_abs_diff_eq!(c.g, expected, epsilon = 1e-3);
        assert_abs_diff_eq!(c.b, expected, epsilon = 1e-3);
    }

    #[test]
    fn opaque_white_decodes_to_one() {
        let c = SrgbVertexColor::opaque_white().to_linear();
        assert_rgb_near(c, 1.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn opaque_black_decodes_to_exact_zero() {
        let c = SrgbVertexColor::opaque_black().to_linear();
        assert_eq!(c, LinearRgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn mid_gray_half_alpha() {
        let c = SrgbVertexColor::new(128.0, 128.0, 128.0, 0.5).to_linear();
        assert_rgb_near(c, 0.2158);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn alpha_is_bit_identical() {
        for a in [0.0_f32, 1e-7, 0.1, 0.333_333_34, 0.5, 0.999, 1.0] {
            let out = SrgbVertexColor::new(17.0, 200.0, 90.0, a).to_linear();
            assert_eq!(out.a.to_bits(), a.to_bits());
        }
    }

    #[test]
    fn channels_decode_independently() {
        // One channel on each side of the cutoff.
        let c = SrgbVertexColor::new(5.0, 200.0, 0.0, 1.0).to_linear();
        assert_eq!(c.r, srgb::linear_segment(5.0));
        assert_eq!(c.g, srgb::power_segment(200.0));
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn from_srgba_u8_keeps_byte_scale_and_normalizes_alpha() {
        let c = SrgbVertexColor::from_srgba_u8([255, 128, 0, 255]);
        assert_eq!(c, SrgbVertexColor::new(255.0, 128.0, 0.0, 1.0));

        let half = SrgbVertexColor::from_srgba_u8([0, 0, 0, 51]);
        assert_abs_diff_eq!(half.a, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn convention_check() {
        assert!(SrgbVertexColor::new(0.0, 255.0, 12.5, 0.0).is_in_convention());
        assert!(!SrgbVertexColor::new(256.0, 0.0, 0.0, 1.0).is_in_convention());
        assert!(!SrgbVertexColor::new(0.0, -1.0, 0.0, 1.0).is_in_convention());
        assert!(!SrgbVertexColor::new(0.0, 0.0, 0.0, 1.5).is_in_convention());
    }

    #[test]
    fn out_of_convention_extrapolates() {
        let over = SrgbVertexColor::new(300.0, 0.0, 0.0, 1.0).to_linear();
        assert!(over.r > 1.0);
        let under = SrgbVertexColor::new(-10.0, 0.0, 0.0, 1.0).to_linear();
        assert!(under.r < 0.0);
    }
}
