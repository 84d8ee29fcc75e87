use ep_types::ParameterError;

use crate::params::{exact_len, positive};

/// Laplace (double exponential) potential `exp(-scale * |s|)`.
///
/// The only parameter is the scale, which must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaplacePotential {
    scale: f64,
}

impl LaplacePotential {
    pub const NUM_PARAMS: usize = 1;

    pub fn new(scale: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            scale: positive("scale", scale)?,
        })
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        exact_len(params, Self::NUM_PARAMS)?;
        Self::new(params[0])
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.push(self.scale);
    }
}

impl Default for LaplacePotential {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
