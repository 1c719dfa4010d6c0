//! Observation schedules for corridor-style coupons.

use chrono::{Datelike, Duration, NaiveDate};

use crate::core::PricingError;
use crate::rates::calendar::{adjust_business_day, BusinessDayConvention, Calendar};

/// Spacing of corridor observation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ObservationFrequency {
    /// Every business day.
    Daily,
    /// Every seventh calendar day, rolled by the business-day convention.
    Weekly,
    /// Monthly anniversaries, rolled by the business-day convention.
    Monthly,
}

/// Ordered observation dates over an accrual period.
///
/// Invariants, checked at construction:
///
/// - dates are strictly increasing;
/// - the first date is the (adjusted) period start and the last date the
///   (adjusted) period end.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ObservationSchedule {
    dates: Vec<NaiveDate>,
}

impl ObservationSchedule {
    /// Builds a schedule over every business day in `[start, end]`.
    pub fn daily(
        start: NaiveDate,
        end: NaiveDate,
        calendar: Calendar,
        convention: BusinessDayConvention,
    ) -> Result<Self, PricingError> {
        Self::generate(start, end, ObservationFrequency::Daily, calendar, convention)
    }

    /// Builds a schedule at the requested frequency, endpoints included.
    pub fn generate(
        start: NaiveDate,
        end: NaiveDate,
        frequency: ObservationFrequency,
        calendar: Calendar,
        convention: BusinessDayConvention,
    ) -> Result<Self, PricingError> {
        if end <= start {
            return Err(PricingError::InvalidInput(format!(
                "observation period end {end} must be after start {start}"
            )));
        }

        let first = adjust_business_day(start, convention, calendar);
        let last = adjust_business_day(end, convention, calendar);

        let mut dates = vec![first];
        match frequency {
            ObservationFrequency::Daily => {
                let mut d = first + Duration::days(1);
                while d < last {
                    if calendar.is_business_day(d) {
                        dates.push(d);
                    }
                    d += Duration::days(1);
                }
            }
            ObservationFrequency::Weekly => {
                let mut anchor = start + Duration::days(7);
                while anchor < end {
                    push_unique(&mut dates, adjust_business_day(anchor, convention, calendar));
                    anchor += Duration::days(7);
                }
            }
            ObservationFrequency::Monthly => {
                let mut months = 1;
                let mut anchor = add_months(start, months);
                while anchor < end {
                    push_unique(&mut dates, adjust_business_day(anchor, convention, calendar));
                    months += 1;
                    anchor = add_months(start, months);
                }
            }
        }
        push_unique(&mut dates, last);

        if dates.len() < 2 {
            return Err(PricingError::InvalidInput(format!(
                "observation period {start}..{end} contains no distinct business days"
            )));
        }
        if dates.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PricingError::NumericalError(
                "observation dates are not strictly increasing".to_string(),
            ));
        }

        Ok(Self { dates })
    }

    /// All schedule dates, endpoints included.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Period start (first schedule date).
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Period end (last schedule date).
    pub fn end(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Observation dates proper: every schedule date except the period end.
    ///
    /// Each observation day opens one accrual day; the period end closes the
    /// last one without opening another.
    pub fn observation_dates(&self) -> &[NaiveDate] {
        &self.dates[..self.dates.len() - 1]
    }
}

fn push_unique(dates: &mut Vec<NaiveDate>, date: NaiveDate) {
    if dates.last().copied() != Some(date) {
        dates.push(date);
    }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("month arithmetic stays in range")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("invalid month"),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
