use ep_types::ParameterError;

use crate::params::{exact_len, positive};

/// One-sided exponential potential `rate * exp(-rate * s) I{s >= 0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialPotential {
    rate: f64,
}

impl ExponentialPotential {
    pub const NUM_PARAMS: usize = 1;

    pub fn new(rate: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            rate: positive("rate", rate)?,
        })
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        exact_len(params, Self::NUM_PARAMS)?;
        Self::new(params[0])
    }

    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.push(self.rate);
    }
}

impl Default for ExponentialPotential {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}
