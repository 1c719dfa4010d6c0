//! Interbank offered rate index conventions and forward projection.

use chrono::{Months, NaiveDate};

use crate::core::PricingError;
use crate::rates::calendar::{
    add_business_days, adjust_business_day, subtract_business_days, BusinessDayConvention,
    Calendar,
};
use crate::rates::day_count::DayCountConvention;
use crate::rates::zero_curve::ZeroCurve;

/// Money-market index definition: tenor, fixing lag, and market conventions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IborIndex {
    /// Display name, e.g. `"Euribor6M"`.
    pub name: String,
    /// Deposit tenor in whole months.
    pub tenor_months: u32,
    /// Business days between fixing and value date.
    pub fixing_days: i32,
    /// Fixing calendar.
    pub calendar: Calendar,
    /// Roll convention for value and maturity dates.
    pub convention: BusinessDayConvention,
    /// Accrual convention of the underlying deposit.
    pub day_count: DayCountConvention,
}

impl IborIndex {
    /// Euribor 6M: TARGET calendar, 2 fixing days, Act/360, modified following.
    pub fn euribor_6m() -> Self {
        Self {
            name: "Euribor6M".to_string(),
            tenor_months: 6,
            fixing_days: 2,
            calendar: Calendar::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            day_count: DayCountConvention::Act360,
        }
    }

    /// Fixing date for a given value date.
    pub fn fixing_date(&self, value_date: NaiveDate) -> NaiveDate {
        subtract_business_days(value_date, self.fixing_days, self.calendar)
    }

    /// Value date for a given fixing date.
    pub fn value_date(&self, fixing_date: NaiveDate) -> NaiveDate {
        add_business_days(fixing_date, self.fixing_days, self.calendar)
    }

    /// Deposit maturity for a given value date.
    pub fn maturity_date(&self, value_date: NaiveDate) -> NaiveDate {
        let unadjusted = value_date + Months::new(self.tenor_months);
        adjust_business_day(unadjusted, self.convention, self.calendar)
    }

    /// Projects the index fixing for `fixing_date` off the curve.
    ///
    /// Only forward-looking projection is supported: a fixing date on or
    /// before the curve reference date would require a historical fixing
    /// store, which this library does not carry.
    pub fn forecast_fixing(
        &self,
        fixing_date: NaiveDate,
        curve: &ZeroCurve,
    ) -> Result<f64, PricingError> {
        if fixing_date <= curve.reference_date() {
            return Err(PricingError::MarketDataMissing(format!(
                "{} fixing for {fixing_date} is not forward-looking (curve reference {})",
                self.name,
                curve.reference_date()
            )));
        }
        let value = self.value_date(fixing_date);
        let maturity = self.maturity_date(value);
        curve.forward_rate(value, maturity, self.day_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixing_and_value_dates_invert() {
        let index = IborIndex::euribor_6m();
        let value = ymd(2017, 3, 6); // Monday
        let fixing = index.fixing_date(value);
        assert_eq!(fixing, ymd(2017, 3, 2));
        assert_eq!(index.value_date(fixing), value);
    }

    #[test]
    fn maturity_rolls_forward_off_weekends() {
        let index = IborIndex::euribor_6m();
        // 2017-03-06 + 6M = 2017-09-06, a Wednesday.
        assert_eq!(index.maturity_date(ymd(2017, 3, 6)), ymd(2017, 9, 6));
        // 2017-06-30 + 6M = 2017-12-30, a Saturday; modified following pulls
        // back inside December past the TARGET Christmas holidays.
        assert_eq!(index.maturity_date(ymd(2017, 6, 30)), ymd(2017, 12, 29));
    }

    #[test]
    fn historical_fixings_are_refused() {
        let index = IborIndex::euribor_6m();
        let curve = ZeroCurve::new(
            ymd(2017, 3, 6),
            vec![(ymd(2017, 3, 6), 0.02), (ymd(2027, 3, 6), 0.03)],
        )
        .unwrap();
        let err = index.forecast_fixing(ymd(2017, 3, 6), &curve).unwrap_err();
        assert!(matches!(err, PricingError::MarketDataMissing(_)));
        assert!(index.forecast_fixing(ymd(2017, 3, 7), &curve).is_ok());
    }
}
