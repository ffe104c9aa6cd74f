//! The swap leg data model.
//!
//! A [`SwapLeg`] collects the FpML-style date rules, notional terms and
//! rate side of one stream of a swap. It is plain data: the valuer in
//! [`crate::valuer`] reads these fields and drives the core calculators
//! with them.

use serde::{Deserialize, Serialize};
use swapval_core::daycounts::DayCountFraction;
use swapval_core::types::{
    AdjustableDate, BusinessDayAdjustments, CalculationPeriodFrequency, Date, PaymentDates,
    ResetDates, Tenor,
};

/// How compounded coupons combine spread and index rate. Modelled for
/// completeness of the trade representation; no valuation consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingMethod {
    /// Spread excluded from compounding after the first sub-period.
    Flat,
    /// Spread compounded together with the index rate.
    Straight,
    /// Spread excluded from compounding entirely.
    SpreadExclusive,
}

/// The rate side of a leg: a fixed coupon or a floating index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LegRate {
    /// A fixed rate, as a decimal fraction (2.5% is `0.025`).
    Fixed {
        /// The fixed rate.
        rate: f64,
    },
    /// A floating rate index observation plus spread.
    Floating {
        /// Index name, e.g. `EUR-EURIBOR-Reuters`.
        index: String,
        /// Designated maturity of the index, e.g. `6M`.
        tenor: Tenor,
        /// Spread over the index, as a decimal fraction.
        spread: f64,
        /// Known rate for the first period, when already fixed.
        initial_rate: Option<f64>,
    },
}

/// One stream of a swap: date rules, notional terms and the rate side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapLeg {
    /// The start of the first calculation period.
    pub effective_date: AdjustableDate,
    /// The end of the last calculation period.
    pub termination_date: AdjustableDate,
    /// Adjustments applied to interior calculation period dates.
    pub calculation_period_adjustments: BusinessDayAdjustments,
    /// Calculation period frequency and roll convention.
    pub frequency: CalculationPeriodFrequency,
    /// Start of the regular periods, when the leg has an initial stub.
    pub first_regular_period_start: Option<Date>,
    /// End of the regular periods, when the leg has a final stub.
    pub last_regular_period_end: Option<Date>,
    /// The payment date rule.
    pub payment_dates: PaymentDates,
    /// The reset date rule; present on floating legs only.
    pub reset_dates: Option<ResetDates>,
    /// Notional amount in `currency`.
    pub notional: f64,
    /// ISO currency code of the notional, e.g. `EUR`.
    pub currency: String,
    /// Day count convention for accrual fractions.
    pub day_count: DayCountFraction,
    /// Compounding method, when payment and calculation frequencies differ.
    pub compounding: Option<CompoundingMethod>,
    /// The rate side.
    pub rate: LegRate,
}

impl SwapLeg {
    /// The floating index name, for floating legs.
    #[must_use]
    pub fn floating_index(&self) -> Option<&str> {
        match &self.rate {
            LegRate::Fixed { .. } => None,
            LegRate::Floating { index, .. } => Some(index),
        }
    }
}
