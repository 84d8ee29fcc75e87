//! Binary classification potentials.
//!
//! Probit and Heaviside share the parameter layout `[label, offset]` where
//! the label is `+1` or `-1` and the offset shifts the decision threshold.

use ep_types::ParameterError;

use crate::params::{exact_len, finite, label};

const NUM_PARAMS: usize = 2;

fn parse(params: &[f64]) -> Result<(f64, f64), ParameterError> {
    exact_len(params, NUM_PARAMS)?;
    Ok((label("label", params[0])?, finite("offset", params[1])?))
}

/// Probit likelihood `Phi(y * (s + offset))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbitPotential {
    label: f64,
    offset: f64,
}

impl ProbitPotential {
    pub const NUM_PARAMS: usize = NUM_PARAMS;

    pub fn new(label: f64, offset: f64) -> Result<Self, ParameterError> {
        Self::from_params(&[label, offset])
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        let (label, offset) = parse(params)?;
        Ok(Self { label, offset })
    }

    #[must_use]
    pub const fn label(&self) -> f64 {
        self.label
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[self.label, self.offset]);
    }
}

impl Default for ProbitPotential {
    fn default() -> Self {
        Self {
            label: 1.0,
            offset: 0.0,
        }
    }
}

/// Hard step `I{y * (s + offset) >= 0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeavisidePotential {
    label: f64,
    offset: f64,
}

impl HeavisidePotential {
    pub const NUM_PARAMS: usize = NUM_PARAMS;

    pub fn new(label: f64, offset: f64) -> Result<Self, ParameterError> {
        Self::from_params(&[label, offset])
    }

    pub fn from_params(params: &[f64]) -> Result<Self, ParameterError> {
        let (label, offset) = parse(params)?;
        Ok(Self { label, offset })
    }

    #[must_use]
    pub const fn label(&self) -> f64 {
        self.label
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[self.label, self.offset]);
    }
}

impl Default for HeavisidePotential {
    fn default() -> Self {
        Self {
            label: 1.0,
            offset: 0.0,
        }
    }
}
