/// How the draw driver treats the screen-size precondition.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Validation {
    /// Reject degenerate screen sizes before shading any vertex.
    #[default]
    Checked,
    /// Shade regardless, as the GPU stage does. Degenerate sizes produce
    /// non-finite clip coordinates.
    Unchecked,
}

/// Draw driver configuration.
///
/// Keep this small; it only covers host-side policy. The per-vertex math has no
/// knobs.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub validation: Validation,

    /// Draws with at least this many vertices are shaded on the rayon pool.
    ///
    /// Below it the fork/join overhead outweighs the work. `0` forces the
    /// parallel path, `usize::MAX` disables it.
    pub parallel_threshold: usize,

    /// Count vertices whose color is outside the `[0, 255]` / `[0, 1]` convention
    /// and log the count at debug level. They are shaded normally either way.
    pub report_out_of_convention_colors: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            validation: Validation::Checked,
            parallel_threshold: 4096,
            report_out_of_convention_colors: true,
        }
    }
}

impl StageConfig {
    #[inline]
    pub fn unchecked() -> Self {
        Self {
            validation: Validation::Unchecked,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
