//! Error types for leg valuation.

use swapval_core::CoreError;
use swapval_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for valuation operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Error types for valuation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A date or schedule error from the core calculators.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A curve lookup or interpolation error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Forward rate estimation for floating legs is not implemented.
    #[error("Floating legs are not supported: cannot project {index}")]
    UnsupportedFloatingLeg {
        /// The floating rate index the leg references.
        index: String,
    },

    /// Amount and payment date vectors of different lengths.
    #[error("Amount/date length mismatch: {amounts} amounts, {dates} payment dates")]
    AmountDateMismatch {
        /// Number of payment amounts.
        amounts: usize,
        /// Number of payment dates.
        dates: usize,
    },
}

impl PricingError {
    /// Creates an unsupported floating leg error.
    #[must_use]
    pub fn unsupported_floating_leg(index: impl Into<String>) -> Self {
        Self::UnsupportedFloatingLeg {
            index: index.into(),
        }
    }
}
