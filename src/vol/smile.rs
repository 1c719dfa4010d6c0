//! Date-anchored volatility smile sections.
//!
//! A smile section maps strike to implied volatility at a fixed exercise
//! date. Two variants cover the corridor pricing needs: a flat section
//! (constant volatility) and an interpolated section (piecewise-linear over
//! a strike grid, flat wings).

use chrono::NaiveDate;

use crate::core::PricingError;
use crate::math::{ExtrapolationMode, LinearInterpolator};
use crate::rates::day_count::{year_fraction, DayCountConvention};

#[derive(Debug, Clone, PartialEq)]
enum SmileModel {
    Flat(f64),
    Interpolated(LinearInterpolator),
}

/// Implied-volatility-by-strike section anchored at an exercise date.
#[derive(Debug, Clone, PartialEq)]
pub struct SmileSection {
    exercise_date: NaiveDate,
    time_to_exercise: f64,
    model: SmileModel,
}

impl SmileSection {
    /// Flat section: `vol` at every strike.
    pub fn flat(
        exercise_date: NaiveDate,
        reference_date: NaiveDate,
        vol: f64,
        day_count: DayCountConvention,
    ) -> Result<Self, PricingError> {
        if !vol.is_finite() || vol <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "smile volatility must be positive, got {vol}"
            )));
        }
        Ok(Self {
            exercise_date,
            time_to_exercise: Self::checked_time(exercise_date, reference_date, day_count)?,
            model: SmileModel::Flat(vol),
        })
    }

    /// Interpolated section over `(strike, volatility)` nodes.
    ///
    /// Strikes must be strictly increasing and non-negative; wings
    /// extrapolate flat.
    pub fn interpolated(
        exercise_date: NaiveDate,
        reference_date: NaiveDate,
        strikes: Vec<f64>,
        vols: Vec<f64>,
        day_count: DayCountConvention,
    ) -> Result<Self, PricingError> {
        if strikes.first().is_some_and(|k| *k < 0.0) {
            return Err(PricingError::InvalidInput(
                "smile strikes must be non-negative".to_string(),
            ));
        }
        if vols.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(PricingError::InvalidInput(
                "smile volatilities must be positive".to_string(),
            ));
        }
        let interpolator = LinearInterpolator::new(strikes, vols, ExtrapolationMode::Flat)
            .map_err(|e| {
                PricingError::InvalidInput(format!("smile interpolation setup failed: {e:?}"))
            })?;
        Ok(Self {
            exercise_date,
            time_to_exercise: Self::checked_time(exercise_date, reference_date, day_count)?,
            model: SmileModel::Interpolated(interpolator),
        })
    }

    /// Interpolated section quoted as standard deviations (`vol * sqrt(t)`).
    pub fn from_std_devs(
        exercise_date: NaiveDate,
        reference_date: NaiveDate,
        strikes: Vec<f64>,
        std_devs: Vec<f64>,
        day_count: DayCountConvention,
    ) -> Result<Self, PricingError> {
        let time = Self::checked_time(exercise_date, reference_date, day_count)?;
        let sqrt_t = time.sqrt();
        let vols = std_devs.into_iter().map(|s| s / sqrt_t).collect();
        Self::interpolated(exercise_date, reference_date, strikes, vols, day_count)
    }

    fn checked_time(
        exercise_date: NaiveDate,
        reference_date: NaiveDate,
        day_count: DayCountConvention,
    ) -> Result<f64, PricingError> {
        let time = year_fraction(reference_date, exercise_date, day_count);
        if time <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "smile exercise date {exercise_date} is not after reference date {reference_date}"
            )));
        }
        Ok(time)
    }

    /// Implied volatility at `strike`.
    pub fn volatility(&self, strike: f64) -> f64 {
        match &self.model {
            SmileModel::Flat(vol) => *vol,
            // Flat extrapolation cannot fail.
            SmileModel::Interpolated(interp) => interp.value(strike).unwrap_or(f64::NAN),
        }
    }

    /// Standard deviation `volatility(strike) * sqrt(t)` at `strike`.
    pub fn std_dev(&self, strike: f64) -> f64 {
        self.volatility(strike) * self.time_to_exercise.sqrt()
    }

    /// Total variance `volatility(strike)^2 * t` at `strike`.
    pub fn variance(&self, strike: f64) -> f64 {
        let vol = self.volatility(strike);
        vol * vol * self.time_to_exercise
    }

    /// Lowest quoted strike (0 for flat sections).
    pub fn min_strike(&self) -> f64 {
        match &self.model {
            SmileModel::Flat(_) => 0.0,
            SmileModel::Interpolated(interp) => interp.x()[0],
        }
    }

    /// Highest quoted strike (unbounded for flat sections).
    pub fn max_strike(&self) -> f64 {
        match &self.model {
            SmileModel::Flat(_) => f64::INFINITY,
            SmileModel::Interpolated(interp) => interp.x()[interp.x().len() - 1],
        }
    }

    /// Anchor date of the section.
    pub fn exercise_date(&self) -> NaiveDate {
        self.exercise_date
    }

    /// Year fraction from the reference date to the exercise date.
    pub fn time_to_exercise(&self) -> f64 {
        self.time_to_exercise
    }
}
