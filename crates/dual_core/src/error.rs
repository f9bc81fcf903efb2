use thiserror::Error;

/// Errors raised by the dual number algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DualError {
    /// The input could not be turned into a dual number.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),
    /// The exponent is outside the domain accepted by the power rule.
    #[error("invalid exponent: {0}")]
    InvalidExponent(String),
    /// A zero denominator (or a non-positive logarithm argument) was hit.
    #[error("{op} is undefined at x = {x}")]
    Undefined { op: &'static str, x: f64 },
}

impl DualError {
    pub(crate) fn construction(message: impl Into<String>) -> Self {
        Self::InvalidConstruction(message.into())
    }

    pub(crate) fn exponent(message: impl Into<String>) -> Self {
        Self::InvalidExponent(message.into())
    }

    pub(crate) fn undefined(op: &'static str, x: f64) -> Self {
        Self::Undefined { op, x }
    }
}
