use thiserror::Error;

/// Why a parameter vector was rejected.
///
/// Values are reported as received. Nothing is clamped or coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("expected {expected} parameters, got {got}")]
    Length { expected: usize, got: usize },
    #[error("expected at least {expected} parameters, got {got}")]
    TooShort { expected: usize, got: usize },
    #[error("parameter `{name}` must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },
    #[error("parameter `{name}` must be strictly positive (got {value})")]
    NotPositive { name: &'static str, value: f64 },
    /// Mixture weights may be zero but never negative.
    #[error("parameter `{name}` must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },
    #[error("parameter `{name}` must lie in the open interval (0, 1) (got {value})")]
    OutsideUnitInterval { name: &'static str, value: f64 },
    #[error("parameter `{name}` must be -1 or +1 (got {value})")]
    NotALabel { name: &'static str, value: f64 },
    #[error("component count must be an integer in 1..={max} (got {value})")]
    ComponentCount { value: f64, max: u32 },
    #[error("mixture weights must sum to one (sum is {sum})")]
    WeightsNotNormalized { sum: f64 },
}

impl ParameterError {
    /// Name of the offending parameter, when the defect is tied to one.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            ParameterError::NonFinite { name, .. }
            | ParameterError::NotPositive { name, .. }
            | ParameterError::Negative { name, .. }
            | ParameterError::OutsideUnitInterval { name, .. }
            | ParameterError::NotALabel { name, .. } => Some(*name),
            ParameterError::ComponentCount { .. } => Some("components"),
            ParameterError::WeightsNotNormalized { .. } => Some("weights"),
            ParameterError::Length { .. } | ParameterError::TooShort { .. } => None,
        }
    }
}
