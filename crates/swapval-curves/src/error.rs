//! Error types for curve construction and lookup.

use swapval_core::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Requested date cannot be priced off the curve's pillars.
    #[error("Unable to extrapolate {date} on curve {curve} [{min}, {max}]")]
    Extrapolation {
        /// Name of the curve.
        curve: String,
        /// The requested date.
        date: Date,
        /// First pillar maturity.
        min: Date,
        /// Last pillar maturity.
        max: Date,
    },

    /// No curve mapping matched the requested index/tenor/currency.
    #[error("No {role} mapping for {key}")]
    MissingMapping {
        /// What was being resolved, e.g. `discount curve` or `fixings`.
        role: &'static str,
        /// The keys that were tried, innermost first.
        key: String,
    },

    /// A mapping resolved to a curve that was never loaded.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// Name of the missing curve.
        name: String,
    },

    /// Pillar vectors of different lengths.
    #[error("Pillar length mismatch on curve {curve}: {maturities} maturities, {rates} rates, {discount_factors} discount factors")]
    LengthMismatch {
        /// Name of the curve.
        curve: String,
        /// Number of maturity pillars.
        maturities: usize,
        /// Number of zero rates.
        rates: usize,
        /// Number of discount factors.
        discount_factors: usize,
    },

    /// A curve with no pillars.
    #[error("Curve {curve} has no pillars")]
    NoPillars {
        /// Name of the curve.
        curve: String,
    },

    /// Maturities are not strictly increasing.
    #[error("Non-monotonic maturities on curve {curve} at index {index}: {prev} >= {current}")]
    NonMonotonicMaturities {
        /// Name of the curve.
        curve: String,
        /// Index where the violation occurred.
        index: usize,
        /// Previous maturity.
        prev: Date,
        /// Offending maturity.
        current: Date,
    },
}

impl CurveError {
    /// Creates an extrapolation error.
    #[must_use]
    pub fn extrapolation(curve: impl Into<String>, date: Date, min: Date, max: Date) -> Self {
        Self::Extrapolation {
            curve: curve.into(),
            date,
            min,
            max,
        }
    }

    /// Creates a missing mapping error.
    #[must_use]
    pub fn missing_mapping(role: &'static str, key: impl Into<String>) -> Self {
        Self::MissingMapping {
            role,
            key: key.into(),
        }
    }

    /// Creates a curve not found error.
    #[must_use]
    pub fn curve_not_found(name: impl Into<String>) -> Self {
        Self::CurveNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolation_display() {
        let err = CurveError::extrapolation(
            "EUR_EONIA_EOD",
            Date::from_ymd(2011, 6, 1).unwrap(),
            Date::from_ymd(2011, 6, 20).unwrap(),
            Date::from_ymd(2022, 6, 15).unwrap(),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("extrapolate"));
        assert!(msg.contains("EUR_EONIA_EOD"));
        assert!(msg.contains("2011-06-01"));
    }

    #[test]
    fn test_missing_mapping_display() {
        let err = CurveError::missing_mapping("discount curve", "EUR-EURIBOR-Reuters 3M");
        let msg = format!("{}", err);
        assert!(msg.contains("discount curve"));
        assert!(msg.contains("EUR-EURIBOR-Reuters 3M"));
    }
}
