//! Byte-domain sRGB to linear decode.
//!
//! The constants are the standard sRGB transfer function pre-scaled to operate on
//! `[0, 255]` channel values:
//! - cutoff `0.04045 * 255`
//! - linear divisor `12.92 * 255`
//! - offset `0.055 * 255`, scale `1.055 * 255`
//!
//! They are kept as literals so output matches the GPU shader exactly rather than
//! the `[0, 1]` formulation, which rounds differently.

/// Channel values below this use the linear toe.
pub const SRGB_BYTE_CUTOFF: f32 = 10.31475;
pub const SRGB_BYTE_LINEAR_DIVISOR: f32 = 3294.6;
pub const SRGB_BYTE_OFFSET: f32 = 14.025;
pub const SRGB_BYTE_SCALE: f32 = 269.025;
pub const SRGB_GAMMA: f32 = 2.4;

/// Linear toe of the curve, valid below [`SRGB_BYTE_CUTOFF`].
#[inline]
pub fn linear_segment(c: f32) -> f32 {
    c / SRGB_BYTE_LINEAR_DIVISOR
}

/// Power-law part of the curve, valid at and above [`SRGB_BYTE_CUTOFF`].
#[inline]
pub fn power_segment(c: f32) -> f32 {
    ((c + SRGB_BYTE_OFFSET) / SRGB_BYTE_SCALE).powf(SRGB_GAMMA)
}

/// Decodes one sRGB channel on a `[0, 255]` scale to linear light.
///
/// Total over `f32`: out-of-range input extrapolates whichever segment it falls in,
/// and NaN propagates.
#[inline]
pub fn linear_from_srgb_byte(c: f32) -> f32 {
    if c < SRGB_BYTE_CUTOFF {
        linear_segment(c)
    } else {
        power_segment(c)
    }
}

/// Decodes an sRGB triple, selecting the segment per component.
#[inline]
pub fn linear_from_srgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(linear_from_srgb_byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn segments_meet_at_cutoff() {
        let below = linear_segment(SRGB_BYTE_CUTOFF);
        let above = power_segment(SRGB_BYTE_CUTOFF);
        assert_abs_diff_eq!(below, above, epsilon = 1e-3);
        // The halves actually agree to within 1e-7.
        assert_abs_diff_eq!(below, above, epsilon = 1e-7);
    }

    #[test]
    fn cutoff_selects_power_segment() {
        assert_eq!(linear_from_srgb_byte(SRGB_BYTE_CUTOFF), power_segment(SRGB_BYTE_CUTOFF));
        assert_eq!(linear_from_srgb_byte(10.0), linear_segment(10.0));
    }

    #[test]
    fn monotonic_over_byte_range() {
        let mut prev = linear_from_srgb_byte(0.0);
        // Quarter steps straddle the cutoff without landing on it.
        for i in 1..=(255 * 4) {
            let c = i as f32 * 0.25;
            let v = linear_from_srgb_byte(c);
            assert!(v >= prev, "decode({c}) = {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn endpoints() {
        assert_eq!(linear_from_srgb_byte(0.0), 0.0);
        assert_abs_diff_eq!(linear_from_srgb_byte(255.0), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn matches_unit_domain_formula_closely() {
        // Textbook [0, 1] formulation, for reference only.
        fn unit(c: f32) -> f32 {
            let s = c / 255.0;
            if s <= 0.04045 { s / 12.92 } else { ((s + 0.055) / 1.055).powf(2.4) }
        }
        for byte in 0..=255u8 {
            let c = byte as f32;
            assert_abs_diff_eq!(linear_from_srgb_byte(c), unit(c), epsilon = 1e-5);
        }
    }

    #[test]
    fn triple_decodes_per_component() {
        let out = linear_from_srgb([0.0, 128.0, 255.0]);
        assert_eq!(out[0], 0.0);
        assert_abs_diff_eq!(out[1], 0.2158, epsilon = 1e-3);
        assert_abs_diff_eq!(out[2], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn nan_propagates() {
        assert!(linear_from_srgb_byte(f32::NAN).is_nan());
    }
}
