//! Core value types: dates, conventions, frequencies and date rules.

pub mod adjustments;
pub mod date;
pub mod frequency;
pub mod offset;
pub mod roll;

pub use adjustments::{AdjustableDate, BusinessDayAdjustments, BusinessDayConvention};
pub use date::Date;
pub use frequency::{CalculationPeriodFrequency, PeriodUnit, Tenor};
pub use offset::{
    DayType, Offset, PayRelativeTo, PaymentDates, RelativeDateOffset, ResetDates, ResetRelativeTo,
};
pub use roll::RollConvention;
