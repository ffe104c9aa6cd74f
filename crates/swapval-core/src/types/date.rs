//! Calendar date type used throughout the valuation engine.
//!
//! `Date` stores a single `i32`: the number of days since 1 March 0000 in
//! the proleptic Gregorian calendar. The closed-form conversions in both
//! directions make comparison, day arithmetic and weekday tests integer
//! operations, which matters when generating and adjusting tens of
//! thousands of schedule dates per portfolio.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};
use crate::types::roll::RollConvention;

/// A calendar date, stored as days since 1 March 0000 (proleptic Gregorian).
///
/// Ordering, equality and hashing all operate on the epoch day number.
/// All arithmetic returns a new `Date`; values are immutable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Day-of-week number for Sunday (see [`Date::day_of_week`]).
pub const SUNDAY: u32 = 1;
/// Day-of-week number for Wednesday (see [`Date::day_of_week`]).
pub const WEDNESDAY: u32 = 4;
/// Day-of-week number for Saturday (see [`Date::day_of_week`]).
pub const SATURDAY: u32 = 7;

fn epoch_from_ymd(year: i32, month: u32, day: u32) -> i32 {
    let m = (month as i32 + 9) % 12;
    let y = year - m / 10;
    365 * y + y / 4 - y / 100 + y / 400 + (m * 306 + 5) / 10 + (day as i32 - 1)
}

fn ymd_from_epoch(epoch: i32) -> (i32, u32, u32) {
    let mut y = ((10_000i64 * i64::from(epoch) + 14_780) / 3_652_425) as i32;
    let mut ddd = epoch - (365 * y + y / 4 - y / 100 + y / 400);
    if ddd < 0 {
        y -= 1;
        ddd = epoch - (365 * y + y / 4 - y / 100 + y / 400);
    }
    let mi = (52 + 100 * ddd) / 3060;
    let year = y + (mi + 2) / 12;
    let month = ((mi + 2) % 12 + 1) as u32;
    let day = (ddd - (mi * 306 + 5) / 10 + 1) as u32;
    (year, month, day)
}

impl Date {
    /// Creates a date from year, month and day components.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the components do not name a
    /// calendar date (month outside 1-12, day outside the month, or year
    /// outside 1-9999).
    ///
    /// # Example
    ///
    /// ```rust
    /// use swapval_core::types::Date;
    ///
    /// let date = Date::from_ymd(2012, 1, 18).unwrap();
    /// assert_eq!(date.to_string(), "2012-01-18");
    /// assert!(Date::from_ymd(2012, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        if year < 1
            || year > 9999
            || month < 1
            || month > 12
            || day < 1
            || day > Self::days_in_month(year, month)
        {
            return Err(CoreError::invalid_date(year, month, day));
        }
        Ok(Self(epoch_from_ymd(year, month, day)))
    }

    pub(crate) fn from_ymd_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self(epoch_from_ymd(year, month, day))
    }

    /// Creates a date directly from its epoch day number.
    #[must_use]
    pub const fn from_epoch_days(days: i32) -> Self {
        Self(days)
    }

    /// The epoch day number (days since 1 March 0000).
    #[must_use]
    pub const fn epoch_days(self) -> i32 {
        self.0
    }

    /// The year, month and day components.
    #[must_use]
    pub fn ymd(self) -> (i32, u32, u32) {
        ymd_from_epoch(self.0)
    }

    /// The year component.
    #[must_use]
    pub fn year(self) -> i32 {
        self.ymd().0
    }

    /// The month component (1-12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.ymd().1
    }

    /// The day-of-month component.
    #[must_use]
    pub fn day(self) -> u32 {
        self.ymd().2
    }

    /// Whether `year` is a leap year in the Gregorian calendar.
    #[must_use]
    pub const fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Number of days in `year` (365 or 366).
    #[must_use]
    pub const fn days_in_year(year: i32) -> u32 {
        if Self::is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Number of days in the given month of the given year.
    #[must_use]
    pub const fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Self::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }

    /// The last day of this date's month.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Self(epoch_from_ymd(y, m, Self::days_in_month(y, m)))
    }

    /// Day of week as a number: 1 = Sunday through 7 = Saturday.
    #[must_use]
    pub fn day_of_week(self) -> u32 {
        ((self.0 + 3).rem_euclid(7) + 1) as u32
    }

    /// Day of week as a `chrono` weekday.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self.day_of_week() {
            SUNDAY => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            WEDNESDAY => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Whether this date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(self) -> bool {
        matches!(self.day_of_week(), SUNDAY | SATURDAY)
    }

    /// Adds (or subtracts) a number of calendar days.
    #[must_use]
    pub const fn add_days(self, days: i32) -> Self {
        Self(self.0 + days)
    }

    /// Adds a number of months, clamping the day to the end of the target
    /// month when necessary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swapval_core::types::Date;
    ///
    /// let jan31 = Date::from_ymd(2012, 1, 31).unwrap();
    /// assert_eq!(jan31.add_months(1), Date::from_ymd(2012, 2, 29).unwrap());
    /// ```
    #[must_use]
    pub fn add_months(self, months: i32) -> Self {
        let (y, m, d) = self.ymd();
        let (ty, tm) = Self::shift_month(y, m, months);
        let td = d.min(Self::days_in_month(ty, tm));
        Self(epoch_from_ymd(ty, tm, td))
    }

    /// Adds a number of months and then places the day within the target
    /// month according to the roll convention: end of month for `Eom`, the
    /// third Wednesday for `Imm`, and the rolled day (clamped to the month
    /// end) for `DayOfMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnhandledConvention`] for [`RollConvention::None`],
    /// which gives no rule for placing the day.
    pub fn add_months_rolled(self, months: i32, roll: RollConvention) -> CoreResult<Self> {
        let (y, m, _) = self.ymd();
        let (ty, tm) = Self::shift_month(y, m, months);
        match roll {
            RollConvention::Eom => {
                Ok(Self(epoch_from_ymd(ty, tm, Self::days_in_month(ty, tm))))
            }
            RollConvention::Imm => {
                let first = Self(epoch_from_ymd(ty, tm, 1));
                Ok(first.add_days(14 + ((11 - first.day_of_week() as i32).rem_euclid(7))))
            }
            RollConvention::DayOfMonth(dom) => {
                let td = u32::from(dom).min(Self::days_in_month(ty, tm));
                Ok(Self(epoch_from_ymd(ty, tm, td)))
            }
            RollConvention::None => Err(CoreError::unhandled_convention(
                "roll convention NONE in month arithmetic",
            )),
        }
    }

    fn shift_month(year: i32, month: u32, months: i32) -> (i32, u32) {
        let months0 = year * 12 + (month as i32 - 1) + months;
        (months0.div_euclid(12), months0.rem_euclid(12) as u32 + 1)
    }

    /// Parses a date in ISO `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateString`] for malformed input and
    /// [`CoreError::InvalidDate`] for a well-formed string naming an
    /// impossible date.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let mut parts = input.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(CoreError::invalid_date_string(input)),
        };
        let year: i32 = y
            .parse()
            .map_err(|_| CoreError::invalid_date_string(input))?;
        let month: u32 = m
            .parse()
            .map_err(|_| CoreError::invalid_date_string(input))?;
        let day: u32 = d
            .parse()
            .map_err(|_| CoreError::invalid_date_string(input))?;
        Self::from_ymd(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add<i32> for Date {
    type Output = Date;

    fn add(self, days: i32) -> Date {
        self.add_days(days)
    }
}

impl Sub<i32> for Date {
    type Output = Date;

    fn sub(self, days: i32) -> Date {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i32;

    /// Number of days from `other` to `self`.
    fn sub(self, other: Date) -> i32 {
        self.0 - other.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(epoch_from_ymd(date.year(), date.month(), date.day()))
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = CoreError;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        let (y, m, d) = date.ymd();
        NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| CoreError::DateOutOfRange {
            date: date.to_string(),
        })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
