//! Day count fraction conventions and their period calculations.
//!
//! [`year_fractions`] turns a vector of period dates into one accrual
//! fraction per calculation period, under any of the FpML day count
//! conventions a vanilla swap stream can carry. Only ACT/ACT.ICMA needs
//! the extra schedule context (the regular period frequency and the stub
//! flags); the other conventions ignore it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::date::Date;
use crate::types::frequency::CalculationPeriodFrequency;

/// FpML day count fraction convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountFraction {
    /// `1/1`: every period counts as exactly one year.
    One,
    /// `ACT/ACT.ISDA`: actual days over 365 or 366, split at year ends.
    ActActIsda,
    /// `ACT/ACT.ICMA` (and `.ISMA`): actual days over the regular period
    /// length times periods per year.
    ActActIcma,
    /// `ACT/365.FIXED`: actual days over 365.
    Act365Fixed,
    /// `ACT/360`: actual days over 360.
    Act360,
    /// `30/360`: US bond basis day clamping.
    Thirty360,
    /// `30E/360`: Eurobond basis day clamping.
    ThirtyE360,
    /// `30E/360.ISDA`: Eurobond basis with the end-of-February rule.
    ThirtyE360Isda,
}

impl DayCountFraction {
    /// The FpML code for this convention.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::One => "1/1",
            Self::ActActIsda => "ACT/ACT.ISDA",
            Self::ActActIcma => "ACT/ACT.ICMA",
            Self::Act365Fixed => "ACT/365.FIXED",
            Self::Act360 => "ACT/360",
            Self::Thirty360 => "30/360",
            Self::ThirtyE360 => "30E/360",
            Self::ThirtyE360Isda => "30E/360.ISDA",
        }
    }

    /// All supported conventions.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::One,
            Self::ActActIsda,
            Self::ActActIcma,
            Self::Act365Fixed,
            Self::Act360,
            Self::Thirty360,
            Self::ThirtyE360,
            Self::ThirtyE360Isda,
        ]
    }
}

impl fmt::Display for DayCountFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayCountFraction {
    type Err = CoreError;

    /// Parses an FpML day count fraction code. `ACT/ACT.ISMA` is accepted
    /// as an alias for `ACT/ACT.ICMA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1/1" => Ok(Self::One),
            "ACT/ACT.ISDA" => Ok(Self::ActActIsda),
            "ACT/ACT.ICMA" | "ACT/ACT.ISMA" => Ok(Self::ActActIcma),
            "ACT/365.FIXED" => Ok(Self::Act365Fixed),
            "ACT/360" => Ok(Self::Act360),
            "30/360" => Ok(Self::Thirty360),
            "30E/360" => Ok(Self::ThirtyE360),
            "30E/360.ISDA" => Ok(Self::ThirtyE360Isda),
            _ => Err(CoreError::unknown_code("day count fraction", s)),
        }
    }
}

/// Calculates the accrual fraction of each calculation period in `dates`.
///
/// The result has one entry per period, so one fewer than `dates`. The
/// `frequency` and stub flags describe the regular schedule and are only
/// consulted by [`DayCountFraction::ActActIcma`].
///
/// # Errors
///
/// Returns [`CoreError::MalformedSchedule`] for fewer than two dates, or
/// for ACT/ACT.ICMA without a month- or year-based frequency, and
/// [`CoreError::UnhandledConvention`] when an ICMA stub walk cannot step
/// the frequency.
pub fn year_fractions(
    dates: &[Date],
    convention: DayCountFraction,
    frequency: Option<&CalculationPeriodFrequency>,
    has_initial_stub: bool,
    has_final_stub: bool,
) -> CoreResult<Vec<f64>> {
    if dates.len() < 2 {
        return Err(CoreError::malformed_schedule(format!(
            "need at least two period dates, got {}",
            dates.len()
        )));
    }
    let last = dates.len() - 2;
    let mut fractions = Vec::with_capacity(dates.len() - 1);
    for (i, window) in dates.windows(2).enumerate() {
        let (start, end) = (window[0], window[1]);
        let fraction = match convention {
            DayCountFraction::One => 1.0,
            DayCountFraction::Act360 => f64::from(end - start) / 360.0,
            DayCountFraction::Act365Fixed => f64::from(end - start) / 365.0,
            DayCountFraction::ActActIsda => act_act_isda(start, end),
            DayCountFraction::ActActIcma => {
                let frequency = frequency.ok_or_else(|| {
                    CoreError::malformed_schedule(
                        "ACT/ACT.ICMA requires the regular period frequency",
                    )
                })?;
                act_act_icma(
                    start,
                    end,
                    frequency,
                    has_initial_stub && i == 0,
                    has_final_stub && i == last,
                )?
            }
            DayCountFraction::Thirty360
            | DayCountFraction::ThirtyE360
            | DayCountFraction::ThirtyE360Isda => {
                thirty_360(start, end, convention, i == last)
            }
        };
        fractions.push(fraction);
    }
    Ok(fractions)
}

fn act_act_isda(start: Date, end: Date) -> f64 {
    let (start_year, end_year) = (start.year(), end.year());
    if start_year == end_year {
        return f64::from(end - start) / f64::from(Date::days_in_year(start_year));
    }
    // Split the interval at calendar year ends.
    let first_year_end = Date::from_ymd_unchecked(start_year + 1, 1, 1);
    let last_year_start = Date::from_ymd_unchecked(end_year, 1, 1);
    f64::from(first_year_end - start) / f64::from(Date::days_in_year(start_year))
        + f64::from(end_year - start_year - 1)
        + f64::from(end - last_year_start) / f64::from(Date::days_in_year(end_year))
}

fn act_act_icma(
    start: Date,
    end: Date,
    frequency: &CalculationPeriodFrequency,
    initial_stub: bool,
    final_stub: bool,
) -> CoreResult<f64> {
    let periods_per_year = frequency.periods_per_year()?;
    if initial_stub {
        // Walk whole periods backward from the period end until the stub
        // start is covered, counting each sub-period's overlap.
        let mut fraction = 0.0;
        let mut sub_end = end;
        while sub_end > start {
            let sub_start = frequency.step(sub_end, -1)?;
            let overlap = sub_end - sub_start.max(start);
            fraction +=
                f64::from(overlap) / (periods_per_year * f64::from(sub_end - sub_start));
            sub_end = sub_start;
        }
        Ok(fraction)
    } else if final_stub {
        let mut fraction = 0.0;
        let mut sub_start = start;
        while sub_start < end {
            let sub_end = frequency.step(sub_start, 1)?;
            let overlap = sub_end.min(end) - sub_start;
            fraction +=
                f64::from(overlap) / (periods_per_year * f64::from(sub_end - sub_start));
            sub_start = sub_end;
        }
        Ok(fraction)
    } else {
        Ok(1.0 / periods_per_year)
    }
}

fn thirty_360(start: Date, end: Date, convention: DayCountFraction, last_period: bool) -> f64 {
    let (y1, m1, mut d1) = start.ymd();
    let (y2, m2, mut d2) = end.ymd();
    match convention {
        DayCountFraction::Thirty360 => {
            if d1 == 31 {
                d1 = 30;
            }
            if d2 == 31 && d1 > 29 {
                d2 = 30;
            }
        }
        DayCountFraction::ThirtyE360 => {
            if d1 == 31 {
                d1 = 30;
            }
            if d2 == 31 {
                d2 = 30;
            }
        }
        _ => {
            // 30E/360.ISDA: month ends, including the last day of February,
            // count as the 30th; the termination date keeps its real day.
            let start_is_feb_end = m1 == 2 && d1 == Date::days_in_month(y1, 2);
            let end_is_feb_end = m2 == 2 && d2 == Date::days_in_month(y2, 2);
            if d1 == 31 || start_is_feb_end {
                d1 = 30;
            }
            if d2 == 31 || (end_is_feb_end && !last_period) {
                d2 = 30;
            }
        }
    }
    f64::from(360 * (y2 - y1) + 30 * (m2 as i32 - m1 as i32) + (d2 as i32 - d1 as i32)) / 360.0
}
