//! Piecewise-linear interpolation used by curve and smile construction.

/// Extrapolation behavior outside the node range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrapolationMode {
    /// Keep the endpoint value constant.
    Flat,
    /// Return an error outside the node range.
    Error,
}

/// Errors returned by interpolators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    InvalidInput(&'static str),
    ExtrapolationDisabled,
}

/// Piecewise-linear interpolator over strictly increasing abscissas.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    extrapolation: ExtrapolationMode,
}

impl LinearInterpolator {
    /// Creates an interpolator; `x` must be strictly increasing and finite.
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        extrapolation: ExtrapolationMode,
    ) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::InvalidInput("x/y length mismatch"));
        }
        if x.len() < 2 {
            return Err(InterpolationError::InvalidInput("need at least two nodes"));
        }
        if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput("nodes must be finite"));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(InterpolationError::InvalidInput(
                "abscissas must be strictly increasing",
            ));
        }
        Ok(Self { x, y, extrapolation })
    }

    /// Returns the interpolated value `y(v)`.
    pub fn value(&self, v: f64) -> Result<f64, InterpolationError> {
        let n = self.x.len();
        if v < self.x[0] {
            return match self.extrapolation {
                ExtrapolationMode::Flat => Ok(self.y[0]),
                ExtrapolationMode::Error => Err(InterpolationError::ExtrapolationDisabled),
            };
        }
        if v > self.x[n - 1] {
            return match self.extrapolation {
                ExtrapolationMode::Flat => Ok(self.y[n - 1]),
                ExtrapolationMode::Error => Err(InterpolationError::ExtrapolationDisabled),
            };
        }

        let i = match self.x.binary_search_by(|node| node.total_cmp(&v)) {
            Ok(exact) => return Ok(self.y[exact]),
            Err(right) => right - 1,
        };
        let w = (v - self.x[i]) / (self.x[i + 1] - self.x[i]);
        Ok(self.y[i] + w * (self.y[i + 1] - self.y[i]))
    }

    /// Interpolation abscissas.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Interpolation ordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }
}
