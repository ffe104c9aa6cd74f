//! Period units, index tenors and calculation period frequencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::date::Date;
use crate::types::roll::RollConvention;

/// FpML period unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Calendar or business days, depending on context.
    Day,
    /// Weeks.
    Week,
    /// Months.
    Month,
    /// Years.
    Year,
    /// The whole life of the trade as a single period.
    Term,
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
            Self::Year => "Y",
            Self::Term => "T",
        };
        f.write_str(code)
    }
}

impl FromStr for PeriodUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Self::Day),
            "W" => Ok(Self::Week),
            "M" => Ok(Self::Month),
            "Y" => Ok(Self::Year),
            "T" => Ok(Self::Term),
            _ => Err(CoreError::unknown_code("period unit", s)),
        }
    }
}

/// A floating rate index tenor such as `3M` or `1Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Number of period units.
    pub multiplier: u32,
    /// The period unit.
    pub unit: PeriodUnit,
}

impl Tenor {
    /// Creates a tenor.
    #[must_use]
    pub const fn new(multiplier: u32, unit: PeriodUnit) -> Self {
        Self { multiplier, unit }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.multiplier, self.unit)
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.len().saturating_sub(1);
        let (digits, unit) = s.split_at(split);
        let multiplier = digits
            .parse::<u32>()
            .map_err(|_| CoreError::unknown_code("tenor", s))?;
        Ok(Self {
            multiplier,
            unit: unit.parse()?,
        })
    }
}

/// Frequency of calculation periods: a multiplier, a period unit and the
/// roll convention that places each stepped date within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationPeriodFrequency {
    /// Number of period units per calculation period.
    pub multiplier: i32,
    /// The period unit.
    pub unit: PeriodUnit,
    /// Roll convention applied when stepping by months or years.
    pub roll: RollConvention,
}

impl CalculationPeriodFrequency {
    /// Creates a frequency.
    #[must_use]
    pub const fn new(multiplier: i32, unit: PeriodUnit, roll: RollConvention) -> Self {
        Self {
            multiplier,
            unit,
            roll,
        }
    }

    /// Steps `date` forward by one period (or backward for `periods < 0`,
    /// or by several periods at once).
    ///
    /// Day and week periods are plain day arithmetic; month and year
    /// periods step through [`Date::add_months_rolled`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnhandledConvention`] for `Term` frequencies,
    /// which cannot be stepped, and for month or year steps with
    /// [`RollConvention::None`].
    pub fn step(&self, date: Date, periods: i32) -> CoreResult<Date> {
        let n = self.multiplier * periods;
        match self.unit {
            PeriodUnit::Day => Ok(date.add_days(n)),
            PeriodUnit::Week => Ok(date.add_days(7 * n)),
            PeriodUnit::Month => date.add_months_rolled(n, self.roll),
            PeriodUnit::Year => date.add_months_rolled(12 * n, self.roll),
            PeriodUnit::Term => Err(CoreError::unhandled_convention(
                "cannot step by a Term period",
            )),
        }
    }

    /// Steps `date` forward by one period.
    ///
    /// # Errors
    ///
    /// As for [`CalculationPeriodFrequency::step`].
    pub fn add_period(&self, date: Date) -> CoreResult<Date> {
        self.step(date, 1)
    }

    /// Number of months covered by one period.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSchedule`] unless the unit is months
    /// or years.
    pub fn months_per_period(&self) -> CoreResult<i32> {
        match self.unit {
            PeriodUnit::Month => Ok(self.multiplier),
            PeriodUnit::Year => Ok(12 * self.multiplier),
            _ => Err(CoreError::malformed_schedule(format!(
                "period unit {} has no whole number of months",
                self.unit
            ))),
        }
    }

    /// Number of regular periods per year, e.g. 2.0 for a `6M` frequency.
    ///
    /// # Errors
    ///
    /// As for [`CalculationPeriodFrequency::months_per_period`].
    pub fn periods_per_year(&self) -> CoreResult<f64> {
        Ok(12.0 / f64::from(self.months_per_period()?))
    }
}

impl fmt::Display for CalculationPeriodFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.multiplier, self.unit)
    }
}
