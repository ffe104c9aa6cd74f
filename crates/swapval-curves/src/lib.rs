//! # Swapval Curves
//!
//! Zero curves and curve lookup for swap valuation.
//!
//! - **Curves**: [`ZeroCurve`] holds zero rates and discount factors at
//!   maturity pillars and interpolates discount factors between them
//! - **Repository**: [`CurveRepository`] resolves the right curve for a
//!   trade by index, tenor and currency, and serves historic fixings
//!
//! ## Example
//!
//! ```rust
//! use swapval_core::Date;
//! use swapval_curves::{CurveRepository, CurveRole, ZeroCurve};
//!
//! let mut repository = CurveRepository::new();
//! repository.insert_curve(ZeroCurve::new(
//!     "EUR_EONIA_EOD",
//!     Date::from_ymd(2011, 6, 13)?,
//!     vec![Date::from_ymd(2011, 6, 20)?, Date::from_ymd(2011, 12, 15)?],
//!     vec![0.0101, 0.0113],
//!     vec![0.9998, 0.9943],
//! )?);
//! repository.insert_mapping(CurveRole::Discount, "EUR", "EUR_EONIA_EOD");
//!
//! let curve = repository.resolve_curve(CurveRole::Discount, "EUR", None, None)?;
//! assert_eq!(curve.name(), "EUR_EONIA_EOD");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

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

pub mod curve;
pub mod error;
pub mod repository;

pub use curve::ZeroCurve;
pub use error::{CurveError, CurveResult};
pub use repository::{CurveRepository, CurveRole};
