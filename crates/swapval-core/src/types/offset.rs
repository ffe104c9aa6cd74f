//! Date offsets and the payment / reset date rules that use them.

use serde::{Deserialize, Serialize};

use crate::types::adjustments::BusinessDayAdjustments;
use crate::types::frequency::PeriodUnit;

/// Whether an offset counts business days or calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Count only good business days.
    Business,
    /// Count every calendar day.
    Calendar,
}

/// A signed offset from some anchor date, e.g. minus two business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Number of periods to move by, negative to move backward.
    pub multiplier: i32,
    /// The period unit; only `Day` offsets can be applied.
    pub unit: PeriodUnit,
    /// How day offsets are counted, when stated.
    pub day_type: Option<DayType>,
}

impl Offset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(multiplier: i32, unit: PeriodUnit, day_type: Option<DayType>) -> Self {
        Self {
            multiplier,
            unit,
            day_type,
        }
    }

    /// An offset of `n` business days.
    #[must_use]
    pub const fn business_days(n: i32) -> Self {
        Self::new(n, PeriodUnit::Day, Some(DayType::Business))
    }

    /// An offset of `n` calendar days.
    #[must_use]
    pub const fn calendar_days(n: i32) -> Self {
        Self::new(n, PeriodUnit::Day, Some(DayType::Calendar))
    }
}

/// An offset carrying its own business day adjustments, used for fixing
/// dates relative to reset dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDateOffset {
    /// The offset itself.
    pub offset: Offset,
    /// Adjustments applied while and after moving.
    pub adjustments: BusinessDayAdjustments,
}

impl RelativeDateOffset {
    /// Creates a relative date offset.
    #[must_use]
    pub fn new(offset: Offset, adjustments: BusinessDayAdjustments) -> Self {
        Self {
            offset,
            adjustments,
        }
    }
}

/// Which end of a calculation period a payment attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayRelativeTo {
    /// Payment in advance, on the period start date.
    CalculationPeriodStartDate,
    /// Payment in arrears, on the period end date.
    CalculationPeriodEndDate,
}

/// The payment date rule of a swap stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDates {
    /// Which period date payments attach to.
    pub pay_relative_to: PayRelativeTo,
    /// Optional extra offset from the period date, rarely present.
    pub payment_days_offset: Option<Offset>,
    /// Adjustments applied to each payment date.
    pub adjustments: BusinessDayAdjustments,
}

impl PaymentDates {
    /// Creates a payment date rule.
    #[must_use]
    pub fn new(
        pay_relative_to: PayRelativeTo,
        payment_days_offset: Option<Offset>,
        adjustments: BusinessDayAdjustments,
    ) -> Self {
        Self {
            pay_relative_to,
            payment_days_offset,
            adjustments,
        }
    }

    /// Whether this rule pays in arrears (on period end dates).
    #[must_use]
    pub fn pays_in_arrears(&self) -> bool {
        self.pay_relative_to == PayRelativeTo::CalculationPeriodEndDate
    }
}

/// Which end of a calculation period a floating rate reset observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetRelativeTo {
    /// Reset against the period start date (the usual case).
    CalculationPeriodStartDate,
    /// Reset against the period end date (reset in arrears).
    CalculationPeriodEndDate,
}

/// The reset date rule of a floating swap stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetDates {
    /// Which period date resets attach to.
    pub reset_relative_to: ResetRelativeTo,
    /// Offset of the initial fixing date, when it differs from the rest.
    pub initial_fixing_date: Option<RelativeDateOffset>,
    /// Offset from each reset date to its fixing date, typically minus two
    /// business days.
    pub fixing_dates: RelativeDateOffset,
    /// Adjustments applied to each reset date.
    pub adjustments: BusinessDayAdjustments,
}

impl ResetDates {
    /// Creates a reset date rule.
    #[must_use]
    pub fn new(
        reset_relative_to: ResetRelativeTo,
        initial_fixing_date: Option<RelativeDateOffset>,
        fixing_dates: RelativeDateOffset,
        adjustments: BusinessDayAdjustments,
    ) -> Self {
        Self {
            reset_relative_to,
            initial_fixing_date,
            fixing_dates,
            adjustments,
        }
    }
}
