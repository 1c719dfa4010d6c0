//! Business-day calendars and date-roll conventions.
//!
//! Holiday rules cover the two calendars the coupon machinery needs: a
//! weekends-only fallback and TARGET (the euro-area settlement calendar
//! driving EUR money-market fixings).

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Business-day adjustment rule.
///
/// Let `d` be an unadjusted date:
///
/// - `Following`: first business day `>= d`
/// - `ModifiedFollowing`: following unless the month changes, then preceding
/// - `Preceding`: last business day `<= d`
/// - `Unadjusted`: leave `d` unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    Following,
    ModifiedFollowing,
    Preceding,
}

/// Holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Calendar {
    /// Saturday/Sunday weekends, no further holidays.
    WeekendsOnly,
    /// TARGET: euro-area settlement days.
    Target,
}

impl Calendar {
    /// Returns true when `date` is neither a weekend nor a holiday.
    pub fn is_business_day(self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        match self {
            Self::WeekendsOnly => true,
            Self::Target => !is_target_holiday(date),
        }
    }

    /// Returns true when `date` is a weekday holiday.
    pub fn is_holiday(self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_business_day(date)
    }
}

/// Adjusts a date according to a business-day convention under `calendar`.
pub fn adjust_business_day(
    date: NaiveDate,
    convention: BusinessDayConvention,
    calendar: Calendar,
) -> NaiveDate {
    match convention {
        BusinessDayConvention::Unadjusted => date,
        BusinessDayConvention::Following => next_business_day(date, calendar),
        BusinessDayConvention::Preceding => previous_business_day(date, calendar),
        BusinessDayConvention::ModifiedFollowing => {
            let following = next_business_day(date, calendar);
            if following.month() != date.month() {
                previous_business_day(date, calendar)
            } else {
                following
            }
        }
    }
}

/// Adds business days to a date.
///
/// Negative `days` moves backward.
pub fn add_business_days(date: NaiveDate, days: i32, calendar: Calendar) -> NaiveDate {
    if days == 0 {
        return date;
    }

    let step = if days > 0 { 1_i64 } else { -1_i64 };
    let mut left = days.abs();
    let mut current = date;

    while left > 0 {
        current += Duration::days(step);
        if calendar.is_business_day(current) {
            left -= 1;
        }
    }

    current
}

/// Subtracts business days from a date.
pub fn subtract_business_days(date: NaiveDate, days: i32, calendar: Calendar) -> NaiveDate {
    add_business_days(date, -days, calendar)
}

fn next_business_day(date: NaiveDate, calendar: Calendar) -> NaiveDate {
    let mut d = date;
    while !calendar.is_business_day(d) {
        d += Duration::days(1);
    }
    d
}

fn previous_business_day(date: NaiveDate, calendar: Calendar) -> NaiveDate {
    let mut d = date;
    while !calendar.is_business_day(d) {
        d -= Duration::days(1);
    }
    d
}

fn is_target_holiday(date: NaiveDate) -> bool {
    let easter = easter_sunday(date.year());
    matches!(
        (date.month(), date.day()),
        (1, 1) | (5, 1) | (12, 25) | (12, 26)
    ) || date == easter - Duration::days(2)
        || date == easter + Duration::days(1)
}

fn easter_sunday(year: i32) -> NaiveDate {
    // Gregorian calendar (Meeus/Jones/Butcher algorithm).
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("easter date is always valid")
}
