use crate::error::{NumError, NumResult};
use crate::provider::{default_provider, NumericProvider};

use serde::Serialize;
use std::fmt;

/// Independent entries of the symmetric 2x2 covariance matrix of
/// (intercept, slope).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Covariance {
    /// var(intercept)
    pub c00: f64,
    /// cov(intercept, slope)
    pub c01: f64,
    /// var(slope)
    pub c11: f64,
}

/// y = intercept + slope * x, with the parameter covariance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    pub cov: Covariance,
}

impl LinearFit {
    pub fn from_val(intercept: f64, slope: f64, cov: Covariance) -> Self {
        Self { intercept, slope, cov }
    }

    /// Point value without the error estimate
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "y = {} + {} x, cov00: {}, cov01: {}, cov11: {}",
            self.intercept, self.slope, self.cov.c00, self.cov.c01, self.cov.c11
        )
    }
}

/// Fitted value and its standard deviation at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub y: f64,
    pub y_err: f64,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} +/- {}", self.y, self.y_err)
    }
}

/// Result of an ordinary least squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnweightedFit {
    #[serde(flatten)]
    pub line: LinearFit,
    /// Residual sum of squares
    pub sum_sq: f64,
}

/// Result of a weighted least squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedFit {
    #[serde(flatten)]
    pub line: LinearFit,
    /// Weighted residual sum of squares
    pub chi_sq: f64,
}

impl fmt::Display for UnweightedFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, sumsq: {}", self.line, self.sum_sq)
    }
}

impl fmt::Display for WeightedFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, chisq: {}", self.line, self.chi_sq)
    }
}

/// Anything carrying a fitted line can be evaluated at a new point.
pub trait LineModel {
    fn line(&self) -> &LinearFit;

    fn intercept(&self) -> f64 {
        self.line().intercept
    }
    fn slope(&self) -> f64 {
        self.line().slope
    }
    fn covariance(&self) -> Covariance {
        self.line().cov
    }

    /// Value of the line at `x` and its standard deviation, propagated
    /// through the covariance.
    fn value_at(&self, x: f64) -> NumResult<Estimate> {
        self.value_at_with(default_provider(), x)
    }

    fn value_at_with(&self, provider: &dyn NumericProvider, x: f64) -> NumResult<Estimate> {
        provider
            .fit_linear_est(x, self.line())
            .map_err(|code| NumError::from_status(provider, code))
    }
}

impl LineModel for LinearFit {
    fn line(&self) -> &LinearFit {
        self
    }
}

impl LineModel for UnweightedFit {
    fn line(&self) -> &LinearFit {
        &self.line
    }
}

impl LineModel for WeightedFit {
    fn line(&self) -> &LinearFit {
        &self.line
    }
}
