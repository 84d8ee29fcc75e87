use ep_types::ParameterError;

use crate::params::{exact_len, open_unit, positive};

/// Spike-and-slab prior `(1 - p) delta(s) + p N(s | 0, v)`.
///
/// Couples the coefficient with its slab precision, so it belongs to the
/// bivariate precision argument group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeSlabPotential {
    inclusion: f64,
    slab_variance: f64,
}

impl SpikeSlabPotential {
    pub const NUM_PARAMS: usize = 2;

    pub fn new(inclusion: f64, slab_variance: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            inclusion: open_unit("inclusion", inclusion)?,
            slab_variance: positive("slab_variance", slab_variance)?,
        })
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        exact_len(params, Self::NUM_PARAMS)?;
        Self::new(params[0], params[1])
    }

    #[must_use]
    pub const fn inclusion(&self) -> f64 {
        self.inclusion
    }

    #[must_use]
    pub const fn slab_variance(&self) -> f64 {
        self.slab_variance
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[self.inclusion, self.slab_variance]);
    }
}

impl Default for SpikeSlabPotential {
    fn default() -> Self {
        Self {
            inclusion: 0.5,
            slab_variance: 1.0,
        }
    }
}
