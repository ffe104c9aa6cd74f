//! Fixed leg payment amounts and present value.

use log::debug;
use swapval_core::calendars::HolidayCalendarSet;
use swapval_core::daycounts::{self, DayCountFraction};
use swapval_core::schedule;
use swapval_core::types::Date;
use swapval_curves::{CurveRepository, CurveRole, ZeroCurve};

use crate::error::{PricingError, PricingResult};
use crate::model::{LegRate, SwapLeg};

/// Calculates the payment amount of each calculation period of a fixed
/// stream: `notional x rate x fraction`.
#[must_use]
pub fn fixed_payment_amounts(notional: f64, rate: f64, fractions: &[f64]) -> Vec<f64> {
    fractions
        .iter()
        .map(|fraction| notional * rate * fraction)
        .collect()
}

/// Discounts payment amounts to the curve's close date.
///
/// Payments falling before the curve's first pillar cannot be discounted
/// and are dropped, so the result can be shorter than the input. The
/// remaining amounts are multiplied by the discount factor at their
/// payment date.
///
/// # Errors
///
/// Returns [`PricingError::AmountDateMismatch`] when the vectors differ in
/// length, and propagates [`CurveError::Extrapolation`] for payments past
/// the last pillar.
///
/// [`CurveError::Extrapolation`]: swapval_curves::CurveError::Extrapolation
pub fn discounted_payment_amounts(
    amounts: &[f64],
    payment_dates: &[Date],
    curve: &ZeroCurve,
) -> PricingResult<Vec<f64>> {
    if amounts.len() != payment_dates.len() {
        return Err(PricingError::AmountDateMismatch {
            amounts: amounts.len(),
            dates: payment_dates.len(),
        });
    }
    let first_maturity = curve.first_maturity();
    let from = payment_dates.partition_point(|&date| date < first_maturity);
    if from > 0 {
        debug!(
            "dropping {from} payments before the first pillar {first_maturity} of {}",
            curve.name()
        );
    }
    let mut discounted = Vec::with_capacity(amounts.len() - from);
    for (amount, &date) in amounts[from..].iter().zip(&payment_dates[from..]) {
        discounted.push(amount * curve.discount_factor(date)?);
    }
    Ok(discounted)
}

/// Present value of a fixed stream: the sum of its discounted payment
/// amounts.
///
/// # Errors
///
/// As for [`discounted_payment_amounts`].
pub fn value_fixed_side(
    notional: f64,
    rate: f64,
    fractions: &[f64],
    payment_dates: &[Date],
    curve: &ZeroCurve,
) -> PricingResult<f64> {
    let amounts = fixed_payment_amounts(notional, rate, fractions);
    let discounted = discounted_payment_amounts(&amounts, payment_dates, curve)?;
    Ok(discounted.iter().sum())
}

/// Everything derived while valuing a leg, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct LegValuation {
    /// Unadjusted calculation period dates, boundaries included.
    pub unadjusted_dates: Vec<Date>,
    /// Business-day-adjusted calculation period dates.
    pub adjusted_dates: Vec<Date>,
    /// One payment date per calculation period.
    pub payment_dates: Vec<Date>,
    /// Accrual fraction of each calculation period.
    pub fractions: Vec<f64>,
    /// Undiscounted payment amount of each period.
    pub payment_amounts: Vec<f64>,
    /// Discounted amounts of the payments the curve covers.
    pub discounted_amounts: Vec<f64>,
    /// Payments dropped because they fall before the curve's first pillar.
    pub dropped_payments: usize,
    /// Sum of the discounted amounts.
    pub present_value: f64,
}

/// Values a fixed leg end to end: period dates, payment dates, accrual
/// fractions, payment amounts and their discounted sum.
///
/// The discount curve is resolved from the repository by the leg's
/// currency. Accrual fractions are measured between the adjusted period
/// dates; stub periods are detected from the leg's roll cycle when the
/// day count needs them.
///
/// # Errors
///
/// Returns [`PricingError::UnsupportedFloatingLeg`] for floating legs, and
/// propagates schedule, day count and curve errors.
pub fn value_fixed_leg(
    leg: &SwapLeg,
    calendars: &HolidayCalendarSet,
    repository: &CurveRepository,
) -> PricingResult<LegValuation> {
    let rate = match &leg.rate {
        LegRate::Fixed { rate } => *rate,
        LegRate::Floating { index, .. } => {
            return Err(PricingError::unsupported_floating_leg(index));
        }
    };

    let unadjusted_dates = schedule::unadjusted_period_dates(
        leg.effective_date.unadjusted,
        leg.first_regular_period_start,
        leg.last_regular_period_end,
        leg.termination_date.unadjusted,
        &leg.frequency,
    )?;

    // Only ACT/ACT.ICMA distinguishes stub periods.
    let (initial_stub, final_stub) = if leg.day_count == DayCountFraction::ActActIcma {
        let last = unadjusted_dates.len() - 1;
        (
            schedule::has_initial_stub(unadjusted_dates[0], unadjusted_dates[1], &leg.frequency)?,
            schedule::has_final_stub(
                unadjusted_dates[last - 1],
                unadjusted_dates[last],
                &leg.frequency,
            )?,
        )
    } else {
        (false, false)
    };

    let adjusted_dates = schedule::adjusted_period_dates(
        &unadjusted_dates,
        &leg.effective_date.adjustments,
        &leg.calculation_period_adjustments,
        &leg.termination_date.adjustments,
        calendars,
    );
    let fractions = daycounts::year_fractions(
        &adjusted_dates,
        leg.day_count,
        Some(&leg.frequency),
        initial_stub,
        final_stub,
    )?;
    let payment_dates = schedule::payment_dates(&unadjusted_dates, &leg.payment_dates, calendars)?;

    let payment_amounts = fixed_payment_amounts(leg.notional, rate, &fractions);
    let curve = repository.resolve_curve(CurveRole::Discount, &leg.currency, None, None)?;
    let discounted_amounts = discounted_payment_amounts(&payment_amounts, &payment_dates, &curve)?;
    let dropped_payments = payment_amounts.len() - discounted_amounts.len();
    let present_value = discounted_amounts.iter().sum();
    debug!(
        "valued {} {} fixed leg: {} periods, {} discounted payments, pv {present_value:.2}",
        leg.currency,
        curve.name(),
        fractions.len(),
        discounted_amounts.len()
    );

    Ok(LegValuation {
        unadjusted_dates,
        adjusted_dates,
        payment_dates,
        fractions,
        payment_amounts,
        discounted_amounts,
        dropped_payments,
        present_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use swapval_core::types::{
        AdjustableDate, BusinessDayAdjustments, BusinessDayConvention,
        CalculationPeriodFrequency, PayRelativeTo, PaymentDates, PeriodUnit, RollConvention,
        Tenor,
    };

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_curve() -> ZeroCurve {
        ZeroCurve::new(
            "EUR_EONIA_EOD",
            ymd(2011, 6, 13),
            vec![ymd(2011, 6, 20), ymd(2011, 12, 15), ymd(2012, 6, 15)],
            vec![0.010_093_04, 0.011_277_4, 0.012_214_45],
            vec![0.999_806_453_6, 0.994_300_364_1, 0.987_760_670_7],
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_payment_amounts_are_elementwise() {
        let amounts = fixed_payment_amounts(1_000_000.0, 0.025, &[0.5, 0.505, 0.497]);
        assert_eq!(amounts.len(), 3);
        assert_relative_eq!(amounts[0], 12_500.0, epsilon = 1e-9);
        assert_relative_eq!(amounts[1], 12_625.0, epsilon = 1e-9);
        assert_relative_eq!(amounts[2], 12_425.0, epsilon = 1e-9);
        assert!(fixed_payment_amounts(1_000_000.0, 0.025, &[]).is_empty());
    }

    #[test]
    fn test_discounting_drops_payments_before_first_pillar() {
        let curve = sample_curve();
        let amounts = [10_000.0, 10_000.0, 10_000.0];
        let dates = [ymd(2011, 6, 15), ymd(2011, 12, 15), ymd(2012, 6, 15)];
        let discounted = discounted_payment_amounts(&amounts, &dates, &curve).unwrap();
        assert_eq!(discounted.len(), 2);
        assert_relative_eq!(discounted[0], 10_000.0 * 0.994_300_364_1);
        assert_relative_eq!(discounted[1], 10_000.0 * 0.987_760_670_7);
    }

    #[test]
    fn test_discounting_rejects_mismatched_lengths() {
        let curve = sample_curve();
        let err = discounted_payment_amounts(&[1.0, 2.0], &[ymd(2011, 12, 15)], &curve)
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::AmountDateMismatch {
                amounts: 2,
                dates: 1
            }
        );
    }

    #[test]
    fn test_discounting_fails_past_last_pillar() {
        let curve = sample_curve();
        let result = discounted_payment_amounts(&[1.0], &[ymd(2012, 6, 16)], &curve);
        assert!(matches!(result, Err(PricingError::Curve(_))));
    }

    #[test]
    fn test_value_fixed_side_sums_discounted_amounts() {
        let curve = sample_curve();
        let pv = value_fixed_side(
            1_000_000.0,
            0.025,
            &[0.5, 0.5],
            &[ymd(2011, 12, 15), ymd(2012, 6, 15)],
            &curve,
        )
        .unwrap();
        assert_relative_eq!(
            pv,
            12_500.0 * 0.994_300_364_1 + 12_500.0 * 0.987_760_670_7,
            epsilon = 1e-9
        );
    }

    fn one_year_leg() -> SwapLeg {
        let adjustments =
            BusinessDayAdjustments::new(BusinessDayConvention::ModifiedFollowing, ["EUTA"]);
        SwapLeg {
            effective_date: AdjustableDate::new(ymd(2011, 6, 15), adjustments.clone()),
            termination_date: AdjustableDate::new(ymd(2012, 6, 15), adjustments.clone()),
            calculation_period_adjustments: adjustments.clone(),
            frequency: CalculationPeriodFrequency::new(
                6,
                PeriodUnit::Month,
                RollConvention::DayOfMonth(15),
            ),
            first_regular_period_start: None,
            last_regular_period_end: None,
            payment_dates: PaymentDates::new(
                PayRelativeTo::CalculationPeriodEndDate,
                None,
                adjustments,
            ),
            reset_dates: None,
            notional: 1_000_000.0,
            currency: "EUR".to_string(),
            day_count: DayCountFraction::Act360,
            compounding: None,
            rate: LegRate::Fixed { rate: 0.025 },
        }
    }

    fn sample_repository() -> CurveRepository {
        let mut repo = CurveRepository::new();
        repo.insert_mapping(CurveRole::Discount, "EUR", "EUR_EONIA_EOD");
        repo.insert_curve(sample_curve());
        repo
    }

    #[test]
    fn test_value_fixed_leg_one_year() {
        let valuation =
            value_fixed_leg(&one_year_leg(), &HolidayCalendarSet::default(), &sample_repository())
                .unwrap();
        // 2011-12-15 is a Thursday and 2012-06-15 a Friday, so no date moves.
        assert_eq!(
            valuation.unadjusted_dates,
            vec![ymd(2011, 6, 15), ymd(2011, 12, 15), ymd(2012, 6, 15)]
        );
        assert_eq!(valuation.adjusted_dates, valuation.unadjusted_dates);
        assert_eq!(
            valuation.payment_dates,
            vec![ymd(2011, 12, 15), ymd(2012, 6, 15)]
        );
        assert_relative_eq!(valuation.fractions[0], 183.0 / 360.0);
        assert_relative_eq!(valuation.fractions[1], 183.0 / 360.0);
        assert_eq!(valuation.dropped_payments, 0);
        let coupon = 1_000_000.0 * 0.025 * 183.0 / 360.0;
        assert_relative_eq!(
            valuation.present_value,
            coupon * (0.994_300_364_1 + 0.987_760_670_7),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_value_fixed_leg_rejects_floating_rate() {
        let mut leg = one_year_leg();
        leg.rate = LegRate::Floating {
            index: "EUR-EURIBOR-Reuters".to_string(),
            tenor: Tenor::new(6, PeriodUnit::Month),
            spread: 0.0,
            initial_rate: None,
        };
        let err = value_fixed_leg(&leg, &HolidayCalendarSet::default(), &sample_repository())
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::unsupported_floating_leg("EUR-EURIBOR-Reuters")
        );
    }

    #[test]
    fn test_value_fixed_leg_needs_a_discount_mapping() {
        let mut leg = one_year_leg();
        leg.currency = "GBP".to_string();
        let err = value_fixed_leg(&leg, &HolidayCalendarSet::default(), &sample_repository())
            .unwrap_err();
        assert!(matches!(err, PricingError::Curve(_)));
    }
}
