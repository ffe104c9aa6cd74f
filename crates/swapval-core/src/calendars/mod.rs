//! Holiday calendars and business day adjustment.
//!
//! A [`HolidayCalendar`] is one business centre's public holidays, stored
//! sorted for binary-search membership tests. A [`HolidayCalendarSet`]
//! holds many centres keyed by code, answers the union weekend-or-holiday
//! question, and applies business day conventions against that union.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::adjustments::{BusinessDayAdjustments, BusinessDayConvention};
use crate::types::date::{Date, SATURDAY, SUNDAY};

/// Public holidays of a single business centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    code: String,
    holidays: Vec<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from a centre code and its holiday dates.
    /// Duplicates are dropped and the dates are kept sorted.
    #[must_use]
    pub fn new(code: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        let mut holidays: Vec<Date> = holidays.into_iter().collect();
        holidays.sort_unstable();
        holidays.dedup();
        Self {
            code: code.into(),
            holidays,
        }
    }

    /// The business centre code, e.g. `GBLO`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The holiday dates, sorted ascending.
    #[must_use]
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }

    /// Whether `date` is a public holiday in this centre.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.binary_search(&date).is_ok()
    }
}

/// A collection of holiday calendars keyed by business centre code.
///
/// Built once during the load phase and then shared read-only; clones are
/// cheap because the per-centre calendars sit behind `Arc`s.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendarSet {
    calendars: BTreeMap<String, Arc<HolidayCalendar>>,
}

impl HolidayCalendarSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a calendar, replacing any previous calendar with the same code.
    pub fn insert(&mut self, calendar: HolidayCalendar) {
        self.calendars
            .insert(calendar.code().to_string(), Arc::new(calendar));
    }

    /// Looks up a calendar by centre code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Arc<HolidayCalendar>> {
        self.calendars.get(code)
    }

    /// Number of calendars in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Whether the set holds no calendars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    /// The subset of calendars for the given centre codes. Codes with no
    /// loaded calendar are skipped.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, codes: &[S]) -> Self {
        let mut subset = Self::new();
        for code in codes {
            if let Some(calendar) = self.calendars.get(code.as_ref()) {
                subset
                    .calendars
                    .insert(code.as_ref().to_string(), Arc::clone(calendar));
            }
        }
        subset
    }

    /// Whether `date` is a public holiday in any calendar of the set.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.calendars.values().any(|c| c.is_holiday(date))
    }

    /// Whether `date` is a weekend day or a public holiday.
    #[must_use]
    pub fn is_weekend_or_holiday(&self, date: Date) -> bool {
        date.is_weekend() || self.is_holiday(date)
    }

    /// Moves `date` onto a good business day according to `convention`,
    /// consulting every calendar in the set.
    ///
    /// A date already on a business day comes back unchanged, as does any
    /// date under [`BusinessDayConvention::NoAdjust`].
    #[must_use]
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::NoAdjust => date,
            BusinessDayConvention::Following => self.scan_forward(date),
            BusinessDayConvention::Preceding => self.scan_backward(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.scan_forward(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    self.scan_backward(date)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.scan_backward(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    self.scan_forward(date)
                }
            }
            BusinessDayConvention::Nearest => {
                if !self.is_weekend_or_holiday(date) {
                    date
                } else if matches!(date.day_of_week(), SUNDAY | 2) {
                    self.scan_forward(date)
                } else {
                    self.scan_backward(date)
                }
            }
        }
    }

    fn scan_forward(&self, mut date: Date) -> Date {
        while self.is_weekend_or_holiday(date) {
            date = date + if date.day_of_week() == SATURDAY { 2 } else { 1 };
        }
        date
    }

    fn scan_backward(&self, mut date: Date) -> Date {
        while self.is_weekend_or_holiday(date) {
            date = date - if date.day_of_week() == SUNDAY { 2 } else { 1 };
        }
        date
    }
}

impl FromIterator<HolidayCalendar> for HolidayCalendarSet {
    fn from_iter<I: IntoIterator<Item = HolidayCalendar>>(iter: I) -> Self {
        let mut set = Self::new();
        for calendar in iter {
            set.insert(calendar);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn london() -> HolidayCalendar {
        // 2012 new year holiday, observed on the Monday.
        HolidayCalendar::new("GBLO", [ymd(2012, 1, 2), ymd(2012, 4, 6), ymd(2012, 4, 9)])
    }

    #[test]
    fn test_holidays_sorted_and_deduped() {
        let cal = HolidayCalendar::new(
            "GBLO",
            [ymd(2012, 4, 9), ymd(2012, 1, 2), ymd(2012, 1, 2)],
        );
        assert_eq!(cal.holidays(), &[ymd(2012, 1, 2), ymd(2012, 4, 9)]);
        assert!(cal.is_holiday(ymd(2012, 1, 2)));
        assert!(!cal.is_holiday(ymd(2012, 1, 3)));
    }

    #[test]
    fn test_select_subset() {
        let mut set = HolidayCalendarSet::new();
        set.insert(london());
        set.insert(HolidayCalendar::new("EUTA", [ymd(2012, 5, 1)]));
        let subset = set.select(&["GBLO", "USNY"]);
        assert_eq!(subset.len(), 1);
        assert!(subset.get("GBLO").is_some());
        assert!(subset.get("EUTA").is_none());
        assert!(!subset.is_holiday(ymd(2012, 5, 1)));
    }

    #[test]
    fn test_weekend_or_holiday() {
        let set: HolidayCalendarSet = [london()].into_iter().collect();
        assert!(set.is_weekend_or_holiday(ymd(2012, 1, 7)));
        assert!(set.is_weekend_or_holiday(ymd(2012, 1, 2)));
        assert!(!set.is_weekend_or_holiday(ymd(2012, 1, 3)));
        assert!(HolidayCalendarSet::new().is_weekend_or_holiday(ymd(2012, 1, 8)));
    }

    #[test]
    fn test_adjust_business_day_unchanged() {
        let set: HolidayCalendarSet = [london()].into_iter().collect();
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Nearest,
            BusinessDayConvention::NoAdjust,
        ] {
            assert_eq!(set.adjust(ymd(2012, 1, 4), convention), ymd(2012, 1, 4));
        }
    }

    #[test]
    fn test_adjust_weekends() {
        let empty = HolidayCalendarSet::new();
        let saturday = ymd(2012, 1, 7);
        let sunday = ymd(2012, 1, 8);
        assert_eq!(
            empty.adjust(saturday, BusinessDayConvention::Following),
            ymd(2012, 1, 9)
        );
        assert_eq!(
            empty.adjust(sunday, BusinessDayConvention::Following),
            ymd(2012, 1, 9)
        );
        assert_eq!(
            empty.adjust(saturday, BusinessDayConvention::Preceding),
            ymd(2012, 1, 6)
        );
        assert_eq!(
            empty.adjust(sunday, BusinessDayConvention::Preceding),
            ymd(2012, 1, 6)
        );
        assert_eq!(
            empty.adjust(saturday, BusinessDayConvention::NoAdjust),
            saturday
        );
    }

    #[test]
    fn test_adjust_over_holidays() {
        // 2012-01-02 is a Monday holiday, so the scan from New Year's Eve
        // weekend runs through to Tuesday.
        let set: HolidayCalendarSet = [london()].into_iter().collect();
        assert_eq!(
            set.adjust(ymd(2011, 12, 31), BusinessDayConvention::Following),
            ymd(2012, 1, 3)
        );
        // Good Friday and Easter Monday bracket the weekend.
        assert_eq!(
            set.adjust(ymd(2012, 4, 6), BusinessDayConvention::Following),
            ymd(2012, 4, 10)
        );
        assert_eq!(
            set.adjust(ymd(2012, 4, 9), BusinessDayConvention::Preceding),
            ymd(2012, 4, 5)
        );
    }

    #[test]
    fn test_modified_following_stays_in_month() {
        let empty = HolidayCalendarSet::new();
        // 2012-06-30 is a Saturday; following would cross into July.
        assert_eq!(
            empty.adjust(ymd(2012, 6, 30), BusinessDayConvention::ModifiedFollowing),
            ymd(2012, 6, 29)
        );
        // Mid-month it behaves exactly like FOLLOWING.
        assert_eq!(
            empty.adjust(ymd(2012, 1, 7), BusinessDayConvention::ModifiedFollowing),
            ymd(2012, 1, 9)
        );
        let set: HolidayCalendarSet = [london()].into_iter().collect();
        assert_eq!(
            set.adjust(ymd(2011, 12, 31), BusinessDayConvention::ModifiedFollowing),
            ymd(2011, 12, 30)
        );
    }

    #[test]
    fn test_modified_preceding_stays_in_month() {
        let empty = HolidayCalendarSet::new();
        // 2012-04-01 is a Sunday; preceding would cross into March.
        assert_eq!(
            empty.adjust(ymd(2012, 4, 1), BusinessDayConvention::ModifiedPreceding),
            ymd(2012, 4, 2)
        );
        assert_eq!(
            empty.adjust(ymd(2012, 1, 8), BusinessDayConvention::ModifiedPreceding),
            ymd(2012, 1, 6)
        );
    }

    #[test]
    fn test_nearest_splits_the_weekend() {
        let empty = HolidayCalendarSet::new();
        assert_eq!(
            empty.adjust(ymd(2012, 1, 7), BusinessDayConvention::Nearest),
            ymd(2012, 1, 6)
        );
        assert_eq!(
            empty.adjust(ymd(2012, 1, 8), BusinessDayConvention::Nearest),
            ymd(2012, 1, 9)
        );
        // A Monday holiday also moves forward.
        let set: HolidayCalendarSet = [london()].into_iter().collect();
        assert_eq!(
            set.adjust(ymd(2012, 1, 2), BusinessDayConvention::Nearest),
            ymd(2012, 1, 3)
        );
    }
}
