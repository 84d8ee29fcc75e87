//! The closed sum type over all concrete potentials.

use ep_types::{ArgumentGroup, ParameterError, PotentialKind};

use crate::binary::{HeavisidePotential, ProbitPotential};
use crate::exponential::ExponentialPotential;
use crate::gaussian::GaussianPotential;
use crate::laplace::LaplacePotential;
use crate::mixture::GaussianMixturePotential;
use crate::quantile::QuantileRegressionPotential;
use crate::spike_slab::SpikeSlabPotential;

/// A potential instance. Immutable once built: there are no setters, a new
/// parameter vector means a new instance from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum EpPotential {
    Gaussian(GaussianPotential),
    Laplace(LaplacePotential),
    Probit(ProbitPotential),
    Heaviside(HeavisidePotential),
    Exponential(ExponentialPotential),
    QuantileRegression(QuantileRegressionPotential),
    GaussianMixture(GaussianMixturePotential),
    SpikeAndSlab(SpikeSlabPotential),
}

impl EpPotential {
    /// Rebuilds a potential of `kind` from its full parameter vector.
    ///
    /// This is the dispatch behind `catalog::create_kind`, without the
    /// catalog's creation event; managers that materialize stored vectors on
    /// every lookup call it directly.
    pub fn from_kind_params(kind: PotentialKind, params: &[f64]) -> Result<Self, ParameterError> {
        match kind {
            PotentialKind::Gaussian => GaussianPotential::from_params(params).map(Self::from),
            PotentialKind::Laplace => LaplacePotential::from_params(params).map(Self::from),
            PotentialKind::Probit => ProbitPotential::from_params(params).map(Self::from),
            PotentialKind::Heaviside => HeavisidePotential::from_params(params).map(Self::from),
            PotentialKind::Exponential => ExponentialPotential::from_params(params).map(Self::from),
            PotentialKind::QuantileRegression => {
                QuantileRegressionPotential::from_params(params).map(Self::from)
            }
            PotentialKind::GaussianMixture => {
                GaussianMixturePotential::from_params(params).map(Self::from)
            }
            PotentialKind::SpikeAndSlab => SpikeSlabPotential::from_params(params).map(Self::from),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PotentialKind {
        match self {
            EpPotential::Gaussian(_) => PotentialKind::Gaussian,
            EpPotential::Laplace(_) => PotentialKind::Laplace,
            EpPotential::Probit(_) => PotentialKind::Probit,
            EpPotential::Heaviside(_) => PotentialKind::Heaviside,
            EpPotential::Exponential(_) => PotentialKind::Exponential,
            EpPotential::QuantileRegression(_) => PotentialKind::QuantileRegression,
            EpPotential::GaussianMixture(_) => PotentialKind::GaussianMixture,
            EpPotential::SpikeAndSlab(_) => PotentialKind::SpikeAndSlab,
        }
    }

    #[must_use]
    pub const fn argument_group(&self) -> ArgumentGroup {
        self.kind().argument_group()
    }

    #[must_use]
    pub fn num_params(&self) -> usize {
        match self {
            EpPotential::GaussianMixture(pot) => pot.num_params(),
            other => other.kind().num_params().unwrap_or_default(),
        }
    }

    /// Full parameter vector, construction parameters first.
    ///
    /// Feeding this back into `catalog::create` with the same kind yields an
    /// equal instance.
    #[must_use]
    pub fn params(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.num_params());
        self.extend_params(&mut out);
        out
    }

    /// Appends the full parameter vector to `out`.
    pub fn extend_params(&self, out: &mut Vec<f64>) {
        match self {
            EpPotential::Gaussian(pot) => pot.extend_params(out),
            EpPotential::Laplace(pot) => pot.extend_params(out),
            EpPotential::Probit(pot) => pot.extend_params(out),
            EpPotential::Heaviside(pot) => pot.extend_params(out),
            EpPotential::Exponential(pot) => pot.extend_params(out),
            EpPotential::QuantileRegression(pot) => pot.extend_params(out),
            EpPotential::GaussianMixture(pot) => pot.extend_params(out),
            EpPotential::SpikeAndSlab(pot) => pot.extend_params(out),
        }
    }

    #[must_use]
    pub const fn is_log_concave(&self) -> bool {
        self.kind().is_log_concave()
    }
}

impl From<GaussianPotential> for EpPotential {
    fn from(pot: GaussianPotential) -> Self {
        EpPotential::Gaussian(pot)
    }
}

impl From<LaplacePotential> for EpPotential {
    fn from(pot: LaplacePotential) -> Self {
        EpPotential::Laplace(pot)
    }
}

impl From<ProbitPotential> for EpPotential {
    fn from(pot: ProbitPotential) -> Self {
        EpPotential::Probit(pot)
    }
}

impl From<HeavisidePotential> for EpPotential {
    fn from(pot: HeavisidePotential) -> Self {
        EpPotential::Heaviside(pot)
    }
}

impl From<ExponentialPotential> for EpPotential {
    fn from(pot: ExponentialPotential) -> Self {
        EpPotential::Exponential(pot)
    }
}

impl From<QuantileRegressionPotential> for EpPotential {
    fn from(pot: QuantileRegressionPotential) -> Self {
        EpPotential::QuantileRegression(pot)
    }
}

impl From<GaussianMixturePotential> for EpPotential {
    fn from(pot: GaussianMixturePotential) -> Self {
        EpPotential::GaussianMixture(pot)
    }
}

impl From<SpikeSlabPotential> for EpPotential {
    fn from(pot: SpikeSlabPotential) -> Self {
        EpPotential::SpikeAndSlab(pot)
    }
}
