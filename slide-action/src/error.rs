//! Configuration errors.

use thiserror::Error;

/// Errors raised when the widget is given configuration it cannot lay out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlideActionError {
    /// A fractional padding is NaN, infinite or outside `0.0..=1.0`.
    #[error("{edge} padding factor must be within 0.0..=1.0, got {value}")]
    InvalidPaddingFactor {
        /// `"left"` or `"right"`.
        edge: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The right edge factor lies left of the left edge factor.
    #[error("right padding factor {right} must not be less than left padding factor {left}")]
    PaddingFactorsInverted {
        /// Left fraction.
        left: f32,
        /// Right fraction.
        right: f32,
    },
    /// The density scale is not a finite positive number.
    #[error("density must be finite and positive, got {0}")]
    InvalidDensity(f64),
}

pub(crate) fn validate_padding_factors(
    left: Option<f32>,
    right: Option<f32>,
) -> Result<(), SlideActionError> {
    for (edge, factor) in [("left", left), ("right", right)] {
        if let Some(value) = factor
            && !(value.is_finite() && (0.0..=1.0).contains(&value))
        {
            return Err(SlideActionError::InvalidPaddingFactor { edge, value });
        }
    }
    if let (Some(left), Some(right)) = (left, right)
        && right < left
    {
        return Err(SlideActionError::PaddingFactorsInverted { left, right });
    }
    Ok(())
}
