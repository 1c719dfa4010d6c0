//! Range-accrual floating coupon contract definition.
//!
//! A range-accrual coupon pays `gearing * fixing + spread` scaled by the
//! fraction of observation days on which the index fixing lies inside the
//! strike corridor `[lower_strike, upper_strike]`. The contract is plain
//! data: valuation lives in [`crate::pricing::range_accrual`].

use chrono::NaiveDate;

use crate::core::PricingError;
use crate::rates::day_count::{year_fraction, DayCountConvention};
use crate::rates::ibor::IborIndex;
use crate::rates::schedule::ObservationSchedule;
use crate::rates::zero_curve::ZeroCurve;

/// Range-accrual floating coupon.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeAccrualCoupon {
    /// Payment date, at or after the accrual period end.
    pub payment_date: NaiveDate,
    /// Notional amount.
    pub nominal: f64,
    /// Underlying money-market index.
    pub index: IborIndex,
    /// Accrual period start.
    pub accrual_start: NaiveDate,
    /// Accrual period end.
    pub accrual_end: NaiveDate,
    /// Accrual day-count convention.
    pub day_count: DayCountConvention,
    /// Multiplier on the index fixing.
    pub gearing: f64,
    /// Additive margin on the geared fixing.
    pub spread: f64,
    /// Corridor observation dates spanning the accrual period.
    pub observation_schedule: ObservationSchedule,
    /// Corridor lower bound.
    pub lower_strike: f64,
    /// Corridor upper bound.
    pub upper_strike: f64,
}

impl RangeAccrualCoupon {
    /// Creates a validated coupon.
    ///
    /// A zero-width corridor (`lower_strike == upper_strike`) is rejected:
    /// it has measure-zero accrual probability and makes the call-spread
    /// replication of the corridor digitals ill-posed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payment_date: NaiveDate,
        nominal: f64,
        index: IborIndex,
        accrual_start: NaiveDate,
        accrual_end: NaiveDate,
        day_count: DayCountConvention,
        gearing: f64,
        spread: f64,
        observation_schedule: ObservationSchedule,
        lower_strike: f64,
        upper_strike: f64,
    ) -> Result<Self, PricingError> {
        let coupon = Self {
            payment_date,
            nominal,
            index,
            accrual_start,
            accrual_end,
            day_count,
            gearing,
            spread,
            observation_schedule,
            lower_strike,
            upper_strike,
        };
        coupon.validate()?;
        Ok(coupon)
    }

    /// Checks the contract invariants.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.nominal.is_finite() || self.nominal <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "nominal must be finite and > 0, got {}",
                self.nominal
            )));
        }
        if !self.gearing.is_finite() || !self.spread.is_finite() {
            return Err(PricingError::InvalidInput(
                "gearing and spread must be finite".to_string(),
            ));
        }
        if self.accrual_start >= self.accrual_end {
            return Err(PricingError::InvalidInput(format!(
                "accrual start {} must precede accrual end {}",
                self.accrual_start, self.accrual_end
            )));
        }
        if self.payment_date < self.accrual_end {
            return Err(PricingError::InvalidInput(format!(
                "payment date {} precedes accrual end {}",
                self.payment_date, self.accrual_end
            )));
        }
        if !self.lower_strike.is_finite()
            || !self.upper_strike.is_finite()
            || self.lower_strike < 0.0
        {
            return Err(PricingError::InvalidInput(
                "corridor strikes must be finite and non-negative".to_string(),
            ));
        }
        if self.lower_strike >= self.upper_strike {
            return Err(PricingError::InvalidInput(format!(
                "corridor [{}, {}] is empty or zero-width",
                self.lower_strike, self.upper_strike
            )));
        }
        if self.observation_schedule.start() != self.accrual_start
            || self.observation_schedule.end() != self.accrual_end
        {
            return Err(PricingError::InvalidInput(format!(
                "observation schedule [{}, {}] does not span the accrual period [{}, {}]",
                self.observation_schedule.start(),
                self.observation_schedule.end(),
                self.accrual_start,
                self.accrual_end
            )));
        }
        Ok(())
    }

    /// Fixing date of the coupon's own index fixing.
    pub fn fixing_date(&self) -> NaiveDate {
        self.index.fixing_date(self.accrual_start)
    }

    /// Projected index fixing for the coupon period.
    pub fn forward_fixing(&self, curve: &ZeroCurve) -> Result<f64, PricingError> {
        self.index.forecast_fixing(self.fixing_date(), curve)
    }

    /// Accrual period year fraction under the coupon day count.
    pub fn accrual_period(&self) -> f64 {
        year_fraction(self.accrual_start, self.accrual_end, self.day_count)
    }

    /// Observation dates (schedule dates excluding the period end).
    pub fn observation_dates(&self) -> &[NaiveDate] {
        self.observation_schedule.observation_dates()
    }
}
