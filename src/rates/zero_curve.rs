//! Date-anchored zero-rate term structure.

use chrono::NaiveDate;

use crate::core::PricingError;
use crate::math::{ExtrapolationMode, LinearInterpolator};
use crate::rates::day_count::{year_fraction, DayCountConvention};

/// Continuously-compounded zero curve over dated nodes.
///
/// Zero rates are interpolated linearly in Act/365F time and extrapolated
/// flat beyond the node range.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroCurve {
    reference_date: NaiveDate,
    dates: Vec<NaiveDate>,
    rates: Vec<f64>,
    interpolator: LinearInterpolator,
}

impl ZeroCurve {
    /// Creates a curve from `(date, zero rate)` nodes.
    ///
    /// Nodes must be strictly increasing, start no earlier than
    /// `reference_date`, and carry finite rates.
    pub fn new(
        reference_date: NaiveDate,
        nodes: Vec<(NaiveDate, f64)>,
    ) -> Result<Self, PricingError> {
        if nodes.len() < 2 {
            return Err(PricingError::InvalidInput(
                "zero curve requires at least two nodes".to_string(),
            ));
        }
        if nodes[0].0 < reference_date {
            return Err(PricingError::InvalidInput(format!(
                "first curve node {} precedes reference date {reference_date}",
                nodes[0].0
            )));
        }
        if nodes.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(PricingError::InvalidInput(
                "curve node dates must be strictly increasing".to_string(),
            ));
        }
        if nodes.iter().any(|(_, r)| !r.is_finite()) {
            return Err(PricingError::InvalidInput(
                "curve zero rates must be finite".to_string(),
            ));
        }

        let (dates, rates): (Vec<_>, Vec<_>) = nodes.into_iter().unzip();
        let times: Vec<f64> = dates
            .iter()
            .map(|d| year_fraction(reference_date, *d, DayCountConvention::Act365Fixed))
            .collect();
        let interpolator =
            LinearInterpolator::new(times, rates.clone(), ExtrapolationMode::Flat).map_err(
                |e| PricingError::InvalidInput(format!("curve interpolation setup failed: {e:?}")),
            )?;

        Ok(Self {
            reference_date,
            dates,
            rates,
            interpolator,
        })
    }

    /// Curve anchor date; discounting is 1.0 on or before it.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Curve node dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Act/365F year fraction from the reference date to `date`.
    pub fn year_fraction_to(&self, date: NaiveDate) -> f64 {
        year_fraction(self.reference_date, date, DayCountConvention::Act365Fixed)
    }

    /// Continuously-compounded zero rate at `date`.
    pub fn zero_rate(&self, date: NaiveDate) -> f64 {
        let t = self.year_fraction_to(date).max(0.0);
        // Flat extrapolation cannot fail.
        self.interpolator.value(t).unwrap_or(self.rates[0])
    }

    /// Discount factor at `date`; 1.0 on or before the reference date.
    pub fn discount_factor(&self, date: NaiveDate) -> f64 {
        let t = self.year_fraction_to(date);
        if t <= 0.0 {
            return 1.0;
        }
        (-self.zero_rate(date) * t).exp()
    }

    /// Simply-compounded forward rate over `[start, end]` under `day_count`.
    pub fn forward_rate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        day_count: DayCountConvention,
    ) -> Result<f64, PricingError> {
        if end <= start {
            return Err(PricingError::InvalidInput(format!(
                "forward period end {end} must be after start {start}"
            )));
        }
        let accrual = year_fraction(start, end, day_count);
        let df_start = self.discount_factor(start);
        let df_end = self.discount_factor(end);
        if df_end <= 0.0 || !df_end.is_finite() {
            return Err(PricingError::NumericalError(format!(
                "degenerate discount factor {df_end} at {end}"
            )));
        }
        Ok((df_start / df_end - 1.0) / accrual)
    }
}
