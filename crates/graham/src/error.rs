use crate::hull::HullKind;

/// Errors reported by the hull builder and the point-cloud sampler.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HullError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Only raised when `HullCfg::reject_degenerate` is set.
    #[error("degenerate hull: {kind:?} with {vertices} vertices")]
    DegenerateHull { kind: HullKind, vertices: usize },

    #[error("coordinate ({x}, {y}) exceeds the supported magnitude {limit}")]
    OverflowRisk { x: i64, y: i64, limit: i64 },
}

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
