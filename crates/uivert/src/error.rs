use thiserror::Error;

/// Precondition failures detected by the checked stage paths.
///
/// The per-vertex functions themselves have no error channel; these errors only
/// come out of validating wrappers such as [`crate::stage::shade_vertex_checked`]
/// and [`crate::stage::UiVertexStage::run`].
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum StageError {
    /// Either screen-size component is not finite or not greater than zero.
    #[error("invalid screen size {width}x{height}: both components must be finite and > 0")]
    InvalidScreenSize { width: f32, height: f32 },
}
