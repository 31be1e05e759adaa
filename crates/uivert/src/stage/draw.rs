use rayon::prelude::*;

use crate::coords::ScreenSize;
use crate::error::StageError;

use super::config::{StageConfig, Validation};
use super::transform::shade_vertex;
use super::{VertexInput, VertexOutput};

/// One draw: a screen size shared by every vertex, plus the vertex stream.
#[derive(Debug, Copy, Clone)]
pub struct DrawCall<'a> {
    pub screen_size: ScreenSize,
    pub vertices: &'a [VertexInput],
}

impl<'a> DrawCall<'a> {
    #[inline]
    pub const fn new(screen_size: ScreenSize, vertices: &'a [VertexInput]) -> Self {
        Self { screen_size, vertices }
    }
}

/// CPU driver for the UI vertex stage.
///
/// Maps [`shade_vertex`] over a draw's vertices. Output order always matches input
/// order, and the sequential and parallel paths produce identical results.
#[derive(Debug, Clone, Default)]
pub struct UiVertexStage {
    config: StageConfig,
}

impl UiVertexStage {
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Shades every vertex of `draw` into a fresh vector.
    ///
    /// # Errors
    ///
    /// With [`Validation::Checked`], returns [`StageError::InvalidScreenSize`] for a
    /// degenerate screen size.
    pub fn run(&self, draw: &DrawCall<'_>) -> Result<Vec<VertexOutput>, StageError> {
        let mut out = Vec::with_capacity(draw.vertices.len());
        self.run_into(draw, &mut out)?;
        Ok(out)
    }

    /// Shades every vertex of `draw` into `out`, replacing its contents.
    ///
    /// `out` is cleared first and its allocation reused. On error it is left empty.
    ///
    /// # Errors
    ///
    /// See [`UiVertexStage::run`].
    pub fn run_into(
        &self,
        draw: &DrawCall<'_>,
        out: &mut Vec<VertexOutput>,
    ) -> Result<(), StageError> {
        out.clear();

        let screen = match self.config.validation {
            Validation::Checked => draw.screen_size.validated()?,
            Validation::Unchecked => draw.screen_size,
        };

        self.report_colors(draw.vertices);

        let vertices = draw.vertices;
        let parallel = vertices.len() >= self.config.parallel_threshold;
        log::trace!(
            "ui vertex stage: {} vertices at {}x{} ({})",
            vertices.len(),
            screen.width,
            screen.height,
            if parallel { "parallel" } else { "sequential" }
        );

        if parallel {
            vertices
                .par_iter()
                .map(|v| shade_vertex(screen, v))
                .collect_into_vec(out);
        } else {
            out.extend(vertices.iter().map(|v| shade_vertex(screen, v)));
        }
        Ok(())
    }

    fn report_colors(&self, vertices: &[VertexInput]) {
        if !self.config.report_out_of_convention_colors || !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let count = vertices.iter().filter(|v| !v.color.is_in_convention()).count();
        if count > 0 {
            log::debug!(
                "ui vertex stage: {count} of {} vertex colors outside [0, 255] rgb / [0, 1] alpha; extrapolating",
                vertices.len()
            );
        }
    }
}
