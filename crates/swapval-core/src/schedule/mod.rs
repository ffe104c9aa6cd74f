//! Calculation period, payment and fixing date generation.
//!
//! These calculators take the date rules of a swap stream (effective and
//! termination dates, period frequency, payment and reset rules) and
//! produce the concrete date vectors a valuation needs: unadjusted period
//! dates, their business-day-adjusted counterparts, one payment date per
//! period and one fixing date per reset.

use crate::calendars::HolidayCalendarSet;
use crate::error::{CoreError, CoreResult};
use crate::types::adjustments::{BusinessDayAdjustments, BusinessDayConvention};
use crate::types::date::Date;
use crate::types::frequency::{CalculationPeriodFrequency, PeriodUnit};
use crate::types::offset::{DayType, Offset, PaymentDates, ResetDates, ResetRelativeTo};

/// Generates the unadjusted calculation period dates of a stream, from the
/// effective date through the termination date inclusive.
///
/// A `Term` frequency produces the two boundary dates only. Otherwise the
/// schedule steps one frequency period at a time through the regular
/// window: from `first_regular_start` (when given, with the piece before it
/// forming an initial stub) up to `last_regular_end` (when given, with the
/// piece after it forming a final stub).
///
/// # Errors
///
/// Returns [`CoreError::UnhandledConvention`] when stepping is impossible,
/// e.g. a month frequency with [`RollConvention::None`].
///
/// [`RollConvention::None`]: crate::types::RollConvention::None
pub fn unadjusted_period_dates(
    effective: Date,
    first_regular_start: Option<Date>,
    last_regular_end: Option<Date>,
    termination: Date,
    frequency: &CalculationPeriodFrequency,
) -> CoreResult<Vec<Date>> {
    let mut dates = vec![effective];
    if frequency.unit != PeriodUnit::Term {
        let mut current = effective;
        if let Some(first) = first_regular_start {
            if first < termination {
                dates.push(first);
                current = first;
            }
        }
        let window_end = last_regular_end.unwrap_or(termination);
        while current < window_end {
            current = frequency.add_period(current)?;
            if current < window_end {
                dates.push(current);
            }
        }
        if let Some(last) = last_regular_end {
            if last > effective {
                dates.push(last);
            }
        }
    }
    dates.push(termination);
    Ok(dates)
}

/// Whether the first calculation period is an initial stub: its start date
/// is off the roll cycle, or one regular period from the start does not
/// land on the first period end.
///
/// # Errors
///
/// Returns [`CoreError::UnhandledConvention`] when the roll convention
/// cannot be matched or stepped.
pub fn has_initial_stub(
    period_start: Date,
    period_end: Date,
    frequency: &CalculationPeriodFrequency,
) -> CoreResult<bool> {
    if !frequency.roll.matches(period_start)? {
        return Ok(true);
    }
    Ok(frequency.add_period(period_start)? != period_end)
}

/// Whether the last calculation period is a final stub: its end date is off
/// the roll cycle, or one regular period from the start overshoots or
/// undershoots it.
///
/// # Errors
///
/// As for [`has_initial_stub`].
pub fn has_final_stub(
    period_start: Date,
    period_end: Date,
    frequency: &CalculationPeriodFrequency,
) -> CoreResult<bool> {
    if !frequency.roll.matches(period_end)? {
        return Ok(true);
    }
    Ok(frequency.add_period(period_start)? != period_end)
}

/// Adjusts each unadjusted period date onto a good business day. The first
/// date uses the effective date's own adjustments, the last the termination
/// date's, and every interior date the calculation period adjustments.
#[must_use]
pub fn adjusted_period_dates(
    unadjusted: &[Date],
    effective_adjustments: &BusinessDayAdjustments,
    period_adjustments: &BusinessDayAdjustments,
    termination_adjustments: &BusinessDayAdjustments,
    calendars: &HolidayCalendarSet,
) -> Vec<Date> {
    let effective_calendars = calendars.select(&effective_adjustments.centers);
    let period_calendars = calendars.select(&period_adjustments.centers);
    let termination_calendars = calendars.select(&termination_adjustments.centers);
    let last = unadjusted.len().saturating_sub(1);
    unadjusted
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            if i == 0 {
                effective_calendars.adjust(date, effective_adjustments.convention)
            } else if i == last {
                termination_calendars.adjust(date, termination_adjustments.convention)
            } else {
                period_calendars.adjust(date, period_adjustments.convention)
            }
        })
        .collect()
}

/// Calculates one payment date per calculation period from the unadjusted
/// period dates: the period end dates when paying in arrears, the period
/// start dates when paying in advance, each adjusted under the payment
/// rule's own adjustments and then moved by the payment days offset when
/// one is given.
///
/// The result holds one date per period, so one fewer than `unadjusted`.
///
/// # Errors
///
/// Returns [`CoreError::MalformedSchedule`] for fewer than two period
/// dates, and [`CoreError::UnhandledConvention`] from an unusable payment
/// days offset.
pub fn payment_dates(
    unadjusted: &[Date],
    rule: &PaymentDates,
    calendars: &HolidayCalendarSet,
) -> CoreResult<Vec<Date>> {
    if unadjusted.len() < 2 {
        return Err(CoreError::malformed_schedule(format!(
            "need at least two period dates, got {}",
            unadjusted.len()
        )));
    }
    let payment_calendars = calendars.select(&rule.adjustments.centers);
    let periods = if rule.pays_in_arrears() {
        &unadjusted[1..]
    } else {
        &unadjusted[..unadjusted.len() - 1]
    };
    let mut result = Vec::with_capacity(periods.len());
    for &date in periods {
        let mut payment = payment_calendars.adjust(date, rule.adjustments.convention);
        if let Some(offset) = &rule.payment_days_offset {
            payment = shift(
                payment,
                offset,
                rule.adjustments.convention,
                &payment_calendars,
            )?;
        }
        result.push(payment);
    }
    Ok(result)
}

/// Calculates one fixing date per calculation period for a floating
/// stream: the adjusted reset anchor (period start or end, per the reset
/// rule) moved by the fixing date offset, typically minus two business
/// days. The initial fixing offset, when given, applies to the first
/// period.
///
/// # Errors
///
/// Returns [`CoreError::MalformedSchedule`] for fewer than two period
/// dates, and [`CoreError::UnhandledConvention`] from an unusable fixing
/// offset.
pub fn fixing_dates(
    adjusted: &[Date],
    rule: &ResetDates,
    calendars: &HolidayCalendarSet,
) -> CoreResult<Vec<Date>> {
    if adjusted.len() < 2 {
        return Err(CoreError::malformed_schedule(format!(
            "need at least two period dates, got {}",
            adjusted.len()
        )));
    }
    let reset_calendars = calendars.select(&rule.adjustments.centers);
    let anchors = match rule.reset_relative_to {
        ResetRelativeTo::CalculationPeriodStartDate => &adjusted[..adjusted.len() - 1],
        ResetRelativeTo::CalculationPeriodEndDate => &adjusted[1..],
    };
    let mut result = Vec::with_capacity(anchors.len());
    for (i, &anchor) in anchors.iter().enumerate() {
        let reset = reset_calendars.adjust(anchor, rule.adjustments.convention);
        let offset = match (i, &rule.initial_fixing_date) {
            (0, Some(initial)) => initial,
            _ => &rule.fixing_dates,
        };
        let fixing_calendars = calendars.select(&offset.adjustments.centers);
        result.push(shift(
            reset,
            &offset.offset,
            offset.adjustments.convention,
            &fixing_calendars,
        )?);
    }
    Ok(result)
}

/// Moves a date by a day offset. Business day offsets step one day at a
/// time, landing on a good business day after every step; calendar day
/// offsets add all days at once and then apply `convention`.
///
/// # Errors
///
/// Returns [`CoreError::UnhandledConvention`] for non-day offsets and for
/// offsets without a day type.
pub fn shift(
    date: Date,
    offset: &Offset,
    convention: BusinessDayConvention,
    calendars: &HolidayCalendarSet,
) -> CoreResult<Date> {
    if offset.unit != PeriodUnit::Day {
        return Err(CoreError::unhandled_convention(format!(
            "offset period {}, expected D",
            offset.unit
        )));
    }
    match offset.day_type {
        Some(DayType::Business) => {
            let step = offset.multiplier.signum();
            let towards = if step < 0 {
                BusinessDayConvention::Preceding
            } else {
                BusinessDayConvention::Following
            };
            let mut result = date;
            for _ in 0..offset.multiplier.abs() {
                result = calendars.adjust(result.add_days(step), towards);
            }
            Ok(result)
        }
        Some(DayType::Calendar) => {
            Ok(calendars.adjust(date.add_days(offset.multiplier), convention))
        }
        None => Err(CoreError::unhandled_convention(
            "day offset without a day type",
        )),
    }
}
