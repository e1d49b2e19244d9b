//! Error type for curve generation.

use thiserror::Error;

/// Errors reported by the curve generator and parameter parsing.
///
/// Every failure is synchronous: the generator never retries and never
/// stores a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Resolution was zero (or otherwise not a usable sample count).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A phase token did not parse, or a numeric parameter was not finite.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Values were requested before any successful generation.
    #[error("no figure has been generated yet")]
    NoFigureGenerated,
}

impl CurveError {
    pub(crate) fn parameter(msg: impl Into<String>) -> Self {
        CurveError::InvalidParameter(msg.into())
    }
}
