//! Business day conventions and date adjustment rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::date::Date;

/// FpML business day convention: how a date falling on a non-business day
/// is moved onto one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Move forward to the next business day.
    Following,
    /// Move forward unless that leaves the month, then move backward.
    ModifiedFollowing,
    /// Move backward to the previous business day.
    Preceding,
    /// Move backward unless that leaves the month, then move forward.
    ModifiedPreceding,
    /// Move to the nearest business day; Sunday and Monday go forward.
    Nearest,
    /// Leave the date alone.
    NoAdjust,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Following => "FOLLOWING",
            Self::ModifiedFollowing => "MODFOLLOWING",
            Self::Preceding => "PRECEDING",
            Self::ModifiedPreceding => "MODPRECEDING",
            Self::Nearest => "NEAREST",
            Self::NoAdjust => "NONE",
        };
        f.write_str(code)
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CoreError;

    /// Parses an FpML business day convention code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOLLOWING" => Ok(Self::Following),
            "MODFOLLOWING" => Ok(Self::ModifiedFollowing),
            "PRECEDING" => Ok(Self::Preceding),
            "MODPRECEDING" => Ok(Self::ModifiedPreceding),
            "NEAREST" => Ok(Self::Nearest),
            "NONE" | "NotApplicable" => Ok(Self::NoAdjust),
            _ => Err(CoreError::unknown_code("business day convention", s)),
        }
    }
}

/// A business day convention together with the business centres whose
/// holiday calendars it consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDayAdjustments {
    /// The convention to apply.
    pub convention: BusinessDayConvention,
    /// Business centre codes, e.g. `EUTA` or `GBLO`.
    pub centers: Vec<String>,
}

impl BusinessDayAdjustments {
    /// Creates an adjustment rule.
    #[must_use]
    pub fn new(
        convention: BusinessDayConvention,
        centers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            convention,
            centers: centers.into_iter().map(Into::into).collect(),
        }
    }

    /// An adjustment rule that leaves dates alone.
    #[must_use]
    pub fn none() -> Self {
        Self {
            convention: BusinessDayConvention::NoAdjust,
            centers: Vec::new(),
        }
    }
}

/// A date together with the adjustments that turn it into a good business
/// day when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustableDate {
    /// The unadjusted date.
    pub unadjusted: Date,
    /// Adjustments to apply.
    pub adjustments: BusinessDayAdjustments,
}

impl AdjustableDate {
    /// Creates an adjustable date.
    #[must_use]
    pub fn new(unadjusted: Date, adjustments: BusinessDayAdjustments) -> Self {
        Self {
            unadjusted,
            adjustments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for code in [
            "FOLLOWING",
            "MODFOLLOWING",
            "PRECEDING",
            "MODPRECEDING",
            "NEAREST",
            "NONE",
        ] {
            let conv: BusinessDayConvention = code.parse().unwrap();
            assert_eq!(conv.to_string(), code);
        }
        assert_eq!(
            "NotApplicable".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::NoAdjust
        );
        assert!("FRN".parse::<BusinessDayConvention>().is_err());
    }

    #[test]
    fn test_adjustments_none() {
        let adj = BusinessDayAdjustments::none();
        assert_eq!(adj.convention, BusinessDayConvention::NoAdjust);
        assert!(adj.centers.is_empty());
    }
}
