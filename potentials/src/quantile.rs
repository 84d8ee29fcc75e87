use ep_types::ParameterError;

use crate::params::{exact_len, finite, open_unit, positive};

/// Quantile regression (asymmetric Laplace / pinball) potential.
///
/// Parameter vector `[tau, target, scale]`. The quantile level `tau` is
/// construction-time metadata: it is fixed when the potential is built and
/// is the single construction parameter `create_default` requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileRegressionPotential {
    quantile: f64,
    target: f64,
    scale: f64,
}

impl QuantileRegressionPotential {
    pub const NUM_PARAMS: usize = 3;

    pub fn new(quantile: f64, target: f64, scale: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            quantile: open_unit("tau", quantile)?,
            target: finite("target", target)?,
            scale: positive("scale", scale)?,
        })
    }

    /// Default target `0` and unit scale at the given quantile level.
    pub fn with_quantile(quantile: f64) -> Result<Self, ParameterError> {
        Self::new(quantile, 0.0, 1.0)
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        exact_len(params, Self::NUM_PARAMS)?;
        Self::new(params[0], params[1], params[2])
    }

    #[must_use]
    pub const fn quantile(&self) -> f64 {
        self.quantile
    }

    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[self.quantile, self.target, self.scale]);
    }
}
