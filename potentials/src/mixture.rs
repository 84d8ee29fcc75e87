//! Gaussian mixture potential.
//!
//! The parameter vector is `[K, w_1..w_K, m_1..m_K, v_1..v_K]`: the component
//! count `K` followed by weights, means and variances. `K` is construction
//! metadata, so the vector length is `1 + 3K` and only known once `K` is.

use ep_types::ParameterError;

use crate::params::{
    MAX_COMPONENTS, SIMPLEX_TOLERANCE, component_count, exact_len, finite, non_negative, positive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GaussianMixturePotential {
    weights: Vec<f64>,
    means: Vec<f64>,
    variances: Vec<f64>,
}

impl GaussianMixturePotential {
    /// Largest component count accepted from a parameter vector or as
    /// construction metadata.
    pub const MAX_COMPONENTS: u32 = MAX_COMPONENTS;

    /// Components with uniform weights, zero means and unit variances.
    pub fn with_components(components: f64) -> Result<Self, ParameterError> {
        let count = component_count(components)?;
        Ok(Self {
            weights: vec![1.0 / count as f64; count],
            means: vec![0.0; count],
            variances: vec![1.0; count],
        })
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        let Some((&raw_count, rest)) = params.split_first() else {
            return Err(ParameterError::TooShort {
                expected: 1,
                got: 0,
            });
        };
        let count = component_count(raw_count)?;
        exact_len(rest, 3 * count).map_err(|_| ParameterError::Length {
            expected: 1 + 3 * count,
            got: params.len(),
        })?;

        let (weights, rest) = rest.split_at(count);
        let (means, variances) = rest.split_at(count);

        let weights = weights
            .iter()
            .map(|&w| non_negative("weight", w))
            .collect::<Result<Vec<_>, _>>()?;
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SIMPLEX_TOLERANCE * count as f64 {
            return Err(ParameterError::WeightsNotNormalized { sum });
        }
        let means = means
            .iter()
            .map(|&m| finite("mean", m))
            .collect::<Result<Vec<_>, _>>()?;
        let variances = variances
            .iter()
            .map(|&v| positive("variance", v))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            weights,
            means,
            variances,
        })
    }

    #[must_use]
    pub fn components(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    #[must_use]
    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    #[must_use]
    pub fn num_params(&self) -> usize {
        1 + 3 * self.components()
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.reserve(self.num_params());
        out.push(self.components() as f64);
        out.extend_from_slice(&self.weights);
        out.extend_from_slice(&self.means);
        out.extend_from_slice(&self.variances);
    }
}
