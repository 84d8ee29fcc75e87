use ep_types::ParameterError;

use crate::params::{exact_len, finite, positive};

/// Gaussian potential `N(y | s, sigma^2)` with parameters `[mean, variance]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPotential {
    mean: f64,
    variance: f64,
}

impl GaussianPotential {
    pub const NUM_PARAMS: usize = 2;

    pub fn new(mean: f64, variance: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            mean: finite("mean", mean)?,
            variance: positive("variance", variance)?,
        })
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        exact_len(params, Self::NUM_PARAMS)?;
        Self::new(params[0], params[1])
    }

    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub const fn variance(&self) -> f64 {
        self.variance
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[self.mean, self.variance]);
    }
}

impl Default for GaussianPotential {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }
}
