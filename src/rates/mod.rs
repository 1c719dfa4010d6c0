//! Fixed-income primitives: calendars, day counts, schedules, curves, and
//! index conventions.

pub mod calendar;
pub mod day_count;
pub mod ibor;
pub mod schedule;
pub mod zero_curve;

pub use calendar::{
    add_business_days, adjust_business_day, subtract_business_days, BusinessDayConvention,
    Calendar,
};
pub use day_count::{year_fraction, DayCountConvention};
pub use ibor::IborIndex;
pub use schedule::{ObservationFrequency, ObservationSchedule};
pub use zero_curve::ZeroCurve;
