//! Shared test fixtures
//!
//! Valid parameter vectors per kind and canned potential sequences.

#![allow(dead_code)]

use eptools::{EpPotential, PotentialKind, catalog};

/// A valid full parameter vector for every kind.
pub fn valid_params(kind: PotentialKind) -> Vec<f64> {
    match kind {
        PotentialKind::Gaussian => vec![0.0, 1.0],
        PotentialKind::Laplace => vec![1.5],
        PotentialKind::Probit | PotentialKind::Heaviside => vec![1.0, -0.5],
        PotentialKind::Exponential => vec![3.0],
        PotentialKind::QuantileRegression => vec![0.1, 2.0, 0.5],
        PotentialKind::GaussianMixture => vec![3.0, 0.2, 0.3, 0.5, -2.0, 0.0, 2.0, 1.0, 1.0, 1.0],
        PotentialKind::SpikeAndSlab => vec![0.05, 10.0],
    }
}

/// Construction parameters for kinds that need them.
pub fn construction_params(kind: PotentialKind) -> Vec<f64> {
    match kind {
        PotentialKind::QuantileRegression => vec![0.75],
        PotentialKind::GaussianMixture => vec![2.0],
        _ => Vec::new(),
    }
}

pub fn build(kind: PotentialKind) -> EpPotential {
    catalog::create_kind(kind, &valid_params(kind)).expect("fixture params are valid")
}

/// Three univariate potentials followed by two bivariate precision ones.
pub fn five_with_suffix() -> Vec<EpPotential> {
    vec![
        build(PotentialKind::Gaussian),
        build(PotentialKind::Probit),
        build(PotentialKind::GaussianMixture),
        build(PotentialKind::SpikeAndSlab),
        catalog::create_kind(PotentialKind::SpikeAndSlab, &[0.9, 0.1]).expect("valid"),
    ]
}

/// Same kinds as [`five_with_suffix`], with a bivariate precision potential at index 1.
pub fn five_interleaved() -> Vec<EpPotential> {
    vec![
        build(PotentialKind::Gaussian),
        build(PotentialKind::SpikeAndSlab),
        build(PotentialKind::Probit),
        build(PotentialKind::GaussianMixture),
        build(PotentialKind::SpikeAndSlab),
    ]
}
