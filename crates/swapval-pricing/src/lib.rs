//! # Swapval Pricing
//!
//! The swap leg model and fixed leg valuation.
//!
//! - **Model**: [`SwapLeg`] carries the date rules, notional terms and
//!   rate side of one stream of a swap
//! - **Valuer**: [`value_fixed_leg`] derives period, payment and accrual
//!   data for a leg and discounts its payments on a curve resolved from a
//!   [`CurveRepository`]
//!
//! Floating legs are modelled but not valued: forward rate projection is
//! out of scope and [`value_fixed_leg`] reports
//! [`PricingError::UnsupportedFloatingLeg`] for them.
//!
//! ## Example
//!
//! ```rust
//! use swapval_pricing::{fixed_payment_amounts, value_fixed_side};
//! use swapval_core::Date;
//! use swapval_curves::ZeroCurve;
//!
//! let curve = ZeroCurve::new(
//!     "EUR_EONIA_EOD",
//!     Date::from_ymd(2011, 6, 13)?,
//!     vec![Date::from_ymd(2011, 6, 20)?, Date::from_ymd(2011, 12, 15)?],
//!     vec![0.0101, 0.0113],
//!     vec![0.9998, 0.9943],
//! )?;
//! let pv = value_fixed_side(
//!     1_000_000.0,
//!     0.025,
//!     &[0.5],
//!     &[Date::from_ymd(2011, 12, 15)?],
//!     &curve,
//! )?;
//! assert!((pv - 12_500.0 * 0.9943).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`CurveRepository`]: swapval_curves::CurveRepository

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod valuer;

pub use error::{PricingError, PricingResult};
pub use model::{CompoundingMethod, LegRate, SwapLeg};
pub use valuer::{
    discounted_payment_amounts, fixed_payment_amounts, value_fixed_leg, value_fixed_side,
    LegValuation,
};
