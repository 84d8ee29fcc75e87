//! Factory for [`EpPotential`] instances.
//!
//! Every constructor is reached through one exhaustive `match` on
//! [`PotentialKind`]; adding a kind is a source change and the compiler points
//! at each dispatch site that needs a new arm. The catalog holds no state and
//! keeps nothing it creates, so it can be called from any thread.

use ep_types::{PotentialId, PotentialKind};

use crate::binary::{HeavisidePotential, ProbitPotential};
use crate::error::CatalogError;
use crate::exponential::ExponentialPotential;
use crate::gaussian::GaussianPotential;
use crate::laplace::LaplacePotential;
use crate::mixture::GaussianMixturePotential;
use crate::potential::EpPotential;
use crate::quantile::QuantileRegressionPotential;
use crate::spike_slab::SpikeSlabPotential;

/// True iff `id` names a kind in the catalog, i.e. lies in `[0, PotentialId::MAX]`.
#[must_use]
pub fn is_valid_kind(id: impl Into<PotentialId>) -> bool {
    id.into().is_valid()
}

/// Builds a potential of kind `id` from a full parameter vector.
pub fn create(id: impl Into<PotentialId>, params: &[f64]) -> Result<EpPotential, CatalogError> {
    let kind = PotentialKind::from_id(id.into())?;
    create_kind(kind, params)
}

/// Builds a potential of the given kind from a full parameter vector.
///
/// The vector layout is kind-specific; for kinds with construction
/// parameters those come first (`[tau, ..]`, `[K, ..]`).
pub fn create_kind(kind: PotentialKind, params: &[f64]) -> Result<EpPotential, CatalogError> {
    let potential =
        EpPotential::from_kind_params(kind, params).map_err(CatalogError::parameter(kind))?;

    tracing::trace!(kind = %kind, params = params.len(), "created potential");
    Ok(potential)
}

/// Builds a potential of kind `id` with default parameters.
///
/// Kinds with construction metadata read it from the front of
/// `construction`; other kinds ignore the argument entirely.
pub fn create_default(
    id: impl Into<PotentialId>,
    construction: &[f64],
) -> Result<EpPotential, CatalogError> {
    let kind = PotentialKind::from_id(id.into())?;
    create_default_kind(kind, construction)
}

pub fn create_default_kind(
    kind: PotentialKind,
    construction: &[f64],
) -> Result<EpPotential, CatalogError> {
    let arity = kind.construction_arity();
    if construction.len() < arity {
        return Err(CatalogError::MissingConstructionParameter {
            kind,
            expected: arity,
            got: construction.len(),
        });
    }

    let invalid = CatalogError::parameter(kind);
    let potential = match kind {
        PotentialKind::Gaussian => EpPotential::from(GaussianPotential::default()),
        PotentialKind::Laplace => EpPotential::from(LaplacePotential::default()),
        PotentialKind::Probit => EpPotential::from(ProbitPotential::default()),
        PotentialKind::Heaviside => EpPotential::from(HeavisidePotential::default()),
        PotentialKind::Exponential => EpPotential::from(ExponentialPotential::default()),
        PotentialKind::QuantileRegression => {
            QuantileRegressionPotential::with_quantile(construction[0])
                .map(EpPotential::from)
                .map_err(invalid)?
        }
        PotentialKind::GaussianMixture => {
            GaussianMixturePotential::with_components(construction[0])
                .map(EpPotential::from)
                .map_err(invalid)?
        }
        PotentialKind::SpikeAndSlab => EpPotential::from(SpikeSlabPotential::default()),
    };

    tracing::trace!(kind = %kind, "created default potential");
    Ok(potential)
}

/// [`create_kind`] keyed by the stable external name.
pub fn create_by_name(name: &str, params: &[f64]) -> Result<EpPotential, CatalogError> {
    create_kind(PotentialKind::from_name(name)?, params)
}

/// [`create_default_kind`] keyed by the stable external name.
pub fn create_default_by_name(
    name: &str,
    construction: &[f64],
) -> Result<EpPotential, CatalogError> {
    create_default_kind(PotentialKind::from_name(name)?, construction)
}
