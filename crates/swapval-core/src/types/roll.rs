//! Roll conventions for calculation period schedules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::date::{Date, WEDNESDAY};

/// FpML roll convention: where within a month a stepped period date lands.
///
/// `DayOfMonth` carries the roll day (1-30); FpML expresses the 31st as
/// `EOM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollConvention {
    /// Roll to the last calendar day of the month.
    Eom,
    /// Roll to the third Wednesday of the month.
    Imm,
    /// Roll to a fixed day of the month, clamped to the month end.
    DayOfMonth(u8),
    /// No roll rule.
    None,
}

impl RollConvention {
    /// Whether `date` complies with this roll convention.
    ///
    /// A `DayOfMonth` roll of 29 or 30 also matches the last day of a
    /// shorter month, so 2012-02-29 complies with a roll day of 30.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnhandledConvention`] for [`RollConvention::None`],
    /// which defines no landing day to check against.
    pub fn matches(self, date: Date) -> CoreResult<bool> {
        match self {
            Self::Eom => Ok(date.add_days(1).month() != date.month()),
            Self::Imm => {
                if date.day_of_week() != WEDNESDAY {
                    return Ok(false);
                }
                let first = date - (date.day() as i32 - 1);
                let imm = first.add_days(14 + (11 - first.day_of_week() as i32).rem_euclid(7));
                Ok(imm == date)
            }
            Self::DayOfMonth(dom) => {
                if u32::from(dom) == date.day() {
                    Ok(true)
                } else if dom >= 29 {
                    // Roll days past the end of a short month match its last day.
                    Ok(date.add_days(1).month() != date.month())
                } else {
                    Ok(false)
                }
            }
            Self::None => Err(CoreError::unhandled_convention(
                "roll convention NONE in date matching",
            )),
        }
    }
}

impl fmt::Display for RollConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eom => write!(f, "EOM"),
            Self::Imm => write!(f, "IMM"),
            Self::DayOfMonth(dom) => write!(f, "{dom}"),
            Self::None => write!(f, "NONE"),
        }
    }
}

impl FromStr for RollConvention {
    type Err = CoreError;

    /// Parses an FpML roll convention code: `EOM`, `IMM`, `NONE`, or a roll
    /// day `1` through `30`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EOM" => Ok(Self::Eom),
            "IMM" => Ok(Self::Imm),
            "NONE" => Ok(Self::None),
            _ => match s.parse::<u8>() {
                Ok(dom) if (1..=30).contains(&dom) => Ok(Self::DayOfMonth(dom)),
                _ => Err(CoreError::unknown_code("roll convention", s)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_imm_matches_third_wednesday() {
        assert!(RollConvention::Imm.matches(ymd(2012, 1, 18)).unwrap());
        assert!(RollConvention::Imm.matches(ymd(2012, 2, 15)).unwrap());
        assert!(RollConvention::Imm.matches(ymd(2011, 12, 21)).unwrap());
        // A Wednesday, but the second of the month.
        assert!(!RollConvention::Imm.matches(ymd(2012, 1, 11)).unwrap());
        // Not a Wednesday.
        assert!(!RollConvention::Imm.matches(ymd(2012, 1, 17)).unwrap());
    }

    #[test]
    fn test_eom_matches_month_end_only() {
        assert!(RollConvention::Eom.matches(ymd(2012, 1, 31)).unwrap());
        assert!(RollConvention::Eom.matches(ymd(2012, 2, 29)).unwrap());
        assert!(RollConvention::Eom.matches(ymd(2011, 2, 28)).unwrap());
        assert!(!RollConvention::Eom.matches(ymd(2012, 1, 30)).unwrap());
        assert!(!RollConvention::Eom.matches(ymd(2011, 2, 27)).unwrap());
    }

    #[test]
    fn test_day_of_month_exact() {
        assert!(RollConvention::DayOfMonth(15).matches(ymd(2012, 1, 15)).unwrap());
        assert!(!RollConvention::DayOfMonth(15).matches(ymd(2012, 1, 16)).unwrap());
        assert!(!RollConvention::DayOfMonth(28).matches(ymd(2012, 2, 29)).unwrap());
    }

    #[test]
    fn test_day_of_month_short_month_extension() {
        // 29 and 30 both match the last day of February.
        assert!(RollConvention::DayOfMonth(29).matches(ymd(2012, 2, 29)).unwrap());
        assert!(RollConvention::DayOfMonth(30).matches(ymd(2012, 2, 29)).unwrap());
        assert!(RollConvention::DayOfMonth(28).matches(ymd(2011, 2, 28)).unwrap());
        assert!(RollConvention::DayOfMonth(29).matches(ymd(2011, 2, 28)).unwrap());
        assert!(RollConvention::DayOfMonth(30).matches(ymd(2011, 2, 28)).unwrap());
        // Not the last day, so only the exact day matches.
        assert!(!RollConvention::DayOfMonth(30).matches(ymd(2012, 2, 28)).unwrap());
    }

    #[test]
    fn test_none_errors() {
        assert!(RollConvention::None.matches(ymd(2012, 1, 15)).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("EOM".parse::<RollConvention>().unwrap(), RollConvention::Eom);
        assert_eq!("IMM".parse::<RollConvention>().unwrap(), RollConvention::Imm);
        assert_eq!("NONE".parse::<RollConvention>().unwrap(), RollConvention::None);
        assert_eq!(
            "15".parse::<RollConvention>().unwrap(),
            RollConvention::DayOfMonth(15)
        );
        assert_eq!(RollConvention::DayOfMonth(15).to_string(), "15");
        assert_eq!(RollConvention::Eom.to_string(), "EOM");
        assert!("31".parse::<RollConvention>().is_err());
        assert!("0".parse::<RollConvention>().is_err());
        assert!("FRN".parse::<RollConvention>().is_err());
    }
}
