//! Zero curves and discount factor interpolation.

use serde::{Deserialize, Serialize};
use swapval_core::Date;

use crate::error::{CurveError, CurveResult};

/// A zero curve: continuously compounded zero rates and discount factors
/// at a set of maturity pillars, relative to a close-of-business date.
///
/// Discount factors for non-pillar dates come from linear interpolation of
/// the zero rate by day distance. Dates outside the pillar range are never
/// extrapolated. Built once during the load phase and then read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroCurve {
    name: String,
    close_date: Date,
    maturities: Vec<Date>,
    zero_rates: Vec<f64>,
    discount_factors: Vec<f64>,
}

impl ZeroCurve {
    /// Creates a curve from parallel pillar vectors.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::LengthMismatch`] when the vectors differ in
    /// length, [`CurveError::NoPillars`] for empty input and
    /// [`CurveError::NonMonotonicMaturities`] unless maturities strictly
    /// increase.
    pub fn new(
        name: impl Into<String>,
        close_date: Date,
        maturities: Vec<Date>,
        zero_rates: Vec<f64>,
        discount_factors: Vec<f64>,
    ) -> CurveResult<Self> {
        let name = name.into();
        if maturities.len() != zero_rates.len() || maturities.len() != discount_factors.len() {
            return Err(CurveError::LengthMismatch {
                curve: name,
                maturities: maturities.len(),
                rates: zero_rates.len(),
                discount_factors: discount_factors.len(),
            });
        }
        if maturities.is_empty() {
            return Err(CurveError::NoPillars { curve: name });
        }
        for (index, pair) in maturities.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(CurveError::NonMonotonicMaturities {
                    curve: name,
                    index: index + 1,
                    prev: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(Self {
            name,
            close_date,
            maturities,
            zero_rates,
            discount_factors,
        })
    }

    /// The curve's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The close-of-business date the zero rates are measured from.
    #[must_use]
    pub fn close_date(&self) -> Date {
        self.close_date
    }

    /// The maturity pillars, strictly increasing.
    #[must_use]
    pub fn maturities(&self) -> &[Date] {
        &self.maturities
    }

    /// The first pillar maturity.
    #[must_use]
    pub fn first_maturity(&self) -> Date {
        self.maturities[0]
    }

    /// The last pillar maturity.
    #[must_use]
    pub fn last_maturity(&self) -> Date {
        self.maturities[self.maturities.len() - 1]
    }

    /// The discount factor for `date`.
    ///
    /// A date matching a pillar returns the stored factor, except at the
    /// first pillar, which reports extrapolation: curve inputs quote the
    /// first pillar as the settlement boundary rather than a usable point,
    /// and payments there belong to the past. Between pillars the zero
    /// rate is interpolated linearly in days and converted with
    /// `exp(-rate * days / 365)`, days measured from the close date.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Extrapolation`] for dates on the first
    /// pillar, before it, or after the last pillar.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        match self.maturities.binary_search(&date) {
            Ok(0) => Err(self.extrapolation(date)),
            Ok(found) => Ok(self.discount_factors[found]),
            Err(insert) if insert == 0 || insert == self.maturities.len() => {
                Err(self.extrapolation(date))
            }
            Err(insert) => {
                let (d1, d2) = (self.maturities[insert - 1], self.maturities[insert]);
                let (r1, r2) = (self.zero_rates[insert - 1], self.zero_rates[insert]);
                let rate = r1 + f64::from(date - d1) * (r2 - r1) / f64::from(d2 - d1);
                Ok((-rate * f64::from(date - self.close_date) / 365.0).exp())
            }
        }
    }

    fn extrapolation(&self, date: Date) -> CurveError {
        CurveError::extrapolation(&self.name, date, self.first_maturity(), self.last_maturity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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
    fn test_constructor_validation() {
        let curve = ZeroCurve::new(
            "BAD",
            ymd(2011, 6, 13),
            vec![ymd(2011, 6, 20), ymd(2011, 12, 15)],
            vec![0.01],
            vec![0.99, 0.98],
        );
        assert!(matches!(curve, Err(CurveError::LengthMismatch { .. })));
        let curve = ZeroCurve::new("EMPTY", ymd(2011, 6, 13), vec![], vec![], vec![]);
        assert!(matches!(curve, Err(CurveError::NoPillars { .. })));
        let curve = ZeroCurve::new(
            "BACKWARDS",
            ymd(2011, 6, 13),
            vec![ymd(2011, 12, 15), ymd(2011, 6, 20)],
            vec![0.01, 0.011],
            vec![0.99, 0.98],
        );
        assert!(matches!(
            curve,
            Err(CurveError::NonMonotonicMaturities { index: 1, .. })
        ));
    }

    #[test]
    fn test_stored_factor_at_interior_and_last_pillars() {
        let curve = sample_curve();
        assert_relative_eq!(
            curve.discount_factor(ymd(2011, 12, 15)).unwrap(),
            0.994_300_364_1
        );
        assert_relative_eq!(
            curve.discount_factor(ymd(2012, 6, 15)).unwrap(),
            0.987_760_670_7
        );
    }

    #[test]
    fn test_first_pillar_reports_extrapolation() {
        let curve = sample_curve();
        let err = curve.discount_factor(ymd(2011, 6, 20)).unwrap_err();
        assert!(matches!(err, CurveError::Extrapolation { .. }));
    }

    #[test]
    fn test_out_of_range_reports_extrapolation() {
        let curve = sample_curve();
        assert!(curve.discount_factor(ymd(2011, 6, 1)).is_err());
        assert!(curve.discount_factor(ymd(2011, 6, 19)).is_err());
        assert!(curve.discount_factor(ymd(2012, 6, 16)).is_err());
        assert!(curve.discount_factor(ymd(2030, 1, 1)).is_err());
    }

    #[test]
    fn test_interpolated_discount_factor() {
        let curve = sample_curve();
        // Zero rate interpolated between the December and June pillars.
        assert_relative_eq!(
            curve.discount_factor(ymd(2012, 3, 15)).unwrap(),
            0.991_159_395_825_099_5,
            epsilon = 1e-12
        );
        // One day past the first pillar interpolates rather than erroring.
        assert!(curve.discount_factor(ymd(2011, 6, 21)).is_ok());
    }

    #[test]
    fn test_discount_factors_decrease_for_positive_rates() {
        let curve = sample_curve();
        let mut previous = 1.0;
        for days in 1..=360 {
            let date = ymd(2011, 6, 20).add_days(days);
            let df = curve.discount_factor(date).unwrap();
            assert!(df < previous, "df not decreasing at {date}");
            previous = df;
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let curve = sample_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let back: ZeroCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }
}
