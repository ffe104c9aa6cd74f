//! # Swapval Core
//!
//! Dates, conventions, calendars, schedule generation and day count
//! fractions for interest rate swap valuation.
//!
//! This crate provides the date machinery the valuation crates build on:
//!
//! - **Dates**: an epoch-based [`types::Date`] with closed-form calendar
//!   conversion, month arithmetic and roll conventions
//! - **Calendars**: holiday calendars per business centre and business day
//!   adjustment over any combination of them
//! - **Schedules**: unadjusted and adjusted calculation period dates,
//!   payment dates and fixing dates from FpML-style date rules
//! - **Day Counts**: accrual fractions for the vanilla swap conventions,
//!   including the ACT/ACT.ICMA stub treatment
//!
//! ## Example
//!
//! ```rust
//! use swapval_core::prelude::*;
//!
//! let frequency = CalculationPeriodFrequency::new(
//!     6,
//!     PeriodUnit::Month,
//!     RollConvention::DayOfMonth(15),
//! );
//! let dates = schedule::unadjusted_period_dates(
//!     Date::from_ymd(2011, 6, 15)?,
//!     None,
//!     None,
//!     Date::from_ymd(2013, 6, 15)?,
//!     &frequency,
//! )?;
//! assert_eq!(dates.len(), 5);
//! # Ok::<(), swapval_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::if_not_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{HolidayCalendar, HolidayCalendarSet};
    pub use crate::daycounts::DayCountFraction;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule;
    pub use crate::types::{
        AdjustableDate, BusinessDayAdjustments, BusinessDayConvention,
        CalculationPeriodFrequency, Date, DayType, Offset, PayRelativeTo, PaymentDates,
        PeriodUnit, RelativeDateOffset, ResetDates, ResetRelativeTo, RollConvention, Tenor,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Tenor};
