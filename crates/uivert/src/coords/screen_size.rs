use crate::coords::Vec2;
use crate::error::StageError;

/// Per-draw screen size in logical pixels.
///
/// The host supplies this once per draw; every vertex of the draw reads the same
/// value. Both components must be finite and strictly positive for the position
/// transform to be defined.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    /// Unchecked constructor. Degenerate sizes are representable on purpose so the
    /// unchecked stage path can mirror GPU behavior.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validating constructor.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::InvalidScreenSize`] if either component is not finite
    /// or not greater than zero.
    pub fn try_new(width: f32, height: f32) -> Result<Self, StageError> {
        Self::new(width, height).validated()
    }

    /// Logical size of a window surface, or `None` while the surface has no area.
    ///
    /// Minimized windows report a zero physical size; hosts skip drawing entirely
    /// in that state instead of issuing a degenerate draw.
    pub fn from_physical(width: u32, height: u32, scale_factor: f32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return None;
        }
        let size = Self::new(width as f32 / scale_factor, height as f32 / scale_factor);
        size.is_valid().then_some(size)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns `self` if valid, otherwise the error naming the offending size.
    ///
    /// # Errors
    ///
    /// See [`ScreenSize::try_new`].
    #[inline]
    pub fn validated(self) -> Result<Self, StageError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(StageError::InvalidScreenSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    pub const fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_valid() {
        assert!(ScreenSize::new(800.0, 600.0).is_valid());
        assert_eq!(ScreenSize::try_new(800.0, 600.0), Ok(ScreenSize::new(800.0, 600.0)));
    }

    #[test]
    fn zero_or_negative_component_is_rejected() {
        for (w, h) in [(0.0, 600.0), (800.0, 0.0), (-1.0, 600.0), (800.0, -0.5)] {
            assert_eq!(
                ScreenSize::try_new(w, h),
                Err(StageError::InvalidScreenSize { width: w, height: h })
            );
        }
    }

    #[test]
    fn non_finite_component_is_rejected() {
        assert!(ScreenSize::try_new(f32::INFINITY, 600.0).is_err());
        assert!(ScreenSize::try_new(800.0, f32::NAN).is_err());
    }

    #[test]
    fn from_physical_zero_area_is_none() {
        assert_eq!(ScreenSize::from_physical(0, 600, 1.0), None);
        assert_eq!(ScreenSize::from_physical(800, 0, 1.0), None);
    }

    #[test]
    fn from_physical_bad_scale_is_none() {
        assert_eq!(ScreenSize::from_physical(800, 600, 0.0), None);
        assert_eq!(ScreenSize::from_physical(800, 600, f32::NAN), None);
    }

    #[test]
    fn from_physical_divides_by_scale_factor() {
        assert_eq!(
            ScreenSize::from_physical(1600, 1200, 2.0),
            Some(ScreenSize::new(800.0, 600.0))
        );
        assert_eq!(
            ScreenSize::from_physical(1920, 1080, 1.0),
            Some(ScreenSize::new(1920.0, 1080.0))
        );
    }
}
