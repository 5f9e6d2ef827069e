//! Error types for simulation configuration.
//!
//! The tick path itself never fails; only construction-time parameter
//! validation can reject input.

use std::fmt;

/// Errors produced when validating [`crate::Params`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A parameter that must be finite was NaN or infinite.
    NonFinite { name: &'static str },
    /// The bounding cube half-size must be positive.
    NonPositiveHalfExtent(f32),
    /// Restitution must lie in `[0, 1]`.
    RestitutionOutOfRange(f32),
    /// The radius range must be non-empty with a positive lower bound.
    EmptyRadiusRange { start: f32, end: f32 },
    /// A parameter that must be non-negative was negative.
    NegativeScalar { name: &'static str, value: f32 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NonFinite { name } => {
                write!(f, "Parameter `{}` must be finite", name)
            }
            ParamError::NonPositiveHalfExtent(v) => {
                write!(f, "Box half-extent must be positive, got {}", v)
            }
            ParamError::RestitutionOutOfRange(v) => {
                write!(f, "Restitution must be in [0, 1], got {}", v)
            }
            ParamError::EmptyRadiusRange { start, end } => {
                write!(
                    f,
                    "Radius range must be non-empty with a positive lower bound, got {}..{}",
                    start, end
                )
            }
            ParamError::NegativeScalar { name, value } => {
                write!(f, "Parameter `{}` must be non-negative, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ParamError {}
