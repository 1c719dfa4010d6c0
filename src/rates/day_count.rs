//! Day-count conventions for accrual and curve time measurement.

use chrono::{Datelike, NaiveDate};

/// Supported day-count conventions.
///
/// Conventions follow standard market definitions used in coupon accrual and
/// curve construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DayCountConvention {
    /// Actual day count over a 360-day year.
    Act360,
    /// Actual day count over a 365-day year.
    Act365Fixed,
    /// 30/360 US (bond basis).
    Thirty360,
}

/// Computes the year fraction between two dates under a day-count convention.
///
/// Edge cases:
/// - If `start == end`, returns `0.0`.
/// - If `start > end`, the result is negative and antisymmetric.
pub fn year_fraction(start: NaiveDate, end: NaiveDate, convention: DayCountConvention) -> f64 {
    if start == end {
        return 0.0;
    }
    if start > end {
        return -year_fraction(end, start, convention);
    }

    match convention {
        DayCountConvention::Act360 => (end - start).num_days() as f64 / 360.0,
        DayCountConvention::Act365Fixed => (end - start).num_days() as f64 / 365.0,
        DayCountConvention::Thirty360 => year_fraction_thirty_360(start, end),
    }
}

fn year_fraction_thirty_360(start: NaiveDate, end: NaiveDate) -> f64 {
    let d1 = start.day().min(30) as i64;
    let mut d2 = end.day() as i64;
    if d2 == 31 && d1 == 30 {
        d2 = 30;
    }

    let days = 360 * (end.year() - start.year()) as i64
        + 30 * (end.month() as i64 - start.month() as i64)
        + (d2 - d1);
    days as f64 / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn act360_half_year() {
        // 2017-03-06 to 2017-09-06 spans 184 calendar days.
        let yf = year_fraction(ymd(2017, 3, 6), ymd(2017, 9, 6), DayCountConvention::Act360);
        assert_relative_eq!(yf, 184.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn act365_full_year() {
        let yf = year_fraction(
            ymd(2025, 1, 1),
            ymd(2026, 1, 1),
            DayCountConvention::Act365Fixed,
        );
        assert_relative_eq!(yf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn thirty_360_regular_period() {
        let yf = year_fraction(ymd(2025, 1, 30), ymd(2025, 7, 30), DayCountConvention::Thirty360);
        assert_relative_eq!(yf, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn antisymmetric() {
        let s = ymd(2025, 3, 1);
        let e = ymd(2025, 3, 15);
        assert_eq!(
            year_fraction(s, e, DayCountConvention::Act365Fixed),
            -year_fraction(e, s, DayCountConvention::Act365Fixed)
        );
        assert_eq!(year_fraction(s, s, DayCountConvention::Act360), 0.0);
    }
}
