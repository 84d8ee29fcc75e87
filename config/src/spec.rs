//! One potential entry of a model description.
//!
//! The raw TOML shape (`kind`, optional `params`, optional `construction`)
//! stays private; it is resolved into [`PotentialSpec`] at the parse
//! boundary, so a spec that exists names exactly one construction route.

use ep_potentials::{CatalogError, EpPotential, create_default_kind, create_kind};
use ep_types::PotentialKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PotentialSpecError {
    #[error("{kind}: give either `params` or `construction`, not both")]
    ConflictingParameters { kind: PotentialKind },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPotentialSpec {
    kind: PotentialKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    construction: Option<Vec<f64>>,
}

/// How to build one potential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPotentialSpec", into = "RawPotentialSpec")]
pub enum PotentialSpec {
    /// Full parameter vector, passed to `create`.
    Explicit { kind: PotentialKind, params: Vec<f64> },
    /// Defaults, with construction parameters where the kind needs them.
    Default {
        kind: PotentialKind,
        construction: Vec<f64>,
    },
}

impl TryFrom<RawPotentialSpec> for PotentialSpec {
    type Error = PotentialSpecError;

    fn try_from(raw: RawPotentialSpec) -> Result<Self, Self::Error> {
        match (raw.params, raw.construction) {
            (Some(_), Some(_)) => Err(PotentialSpecError::ConflictingParameters { kind: raw.kind }),
            (Some(params), None) => Ok(PotentialSpec::Explicit {
                kind: raw.kind,
                params,
            }),
            (None, construction) => Ok(PotentialSpec::Default {
                kind: raw.kind,
                construction: construction.unwrap_or_default(),
            }),
        }
    }
}

impl From<PotentialSpec> for RawPotentialSpec {
    fn from(spec: PotentialSpec) -> Self {
        match spec {
            PotentialSpec::Explicit { kind, params } => Self {
                kind,
                params: Some(params),
                construction: None,
            },
            PotentialSpec::Default { kind, construction } => Self {
                kind,
                params: None,
                construction: (!construction.is_empty()).then_some(construction),
            },
        }
    }
}

impl PotentialSpec {
    /// Spec that rebuilds `potential` exactly.
    #[must_use]
    pub fn from_potential(potential: &EpPotential) -> Self {
        PotentialSpec::Explicit {
            kind: potential.kind(),
            params: potential.params(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PotentialKind {
        match self {
            PotentialSpec::Explicit { kind, .. } | PotentialSpec::Default { kind, .. } => *kind,
        }
    }

    pub fn build(&self) -> Result<EpPotential, CatalogError> {
        match self {
            PotentialSpec::Explicit { kind, params } => create_kind(*kind, params),
            PotentialSpec::Default { kind, construction } => {
                create_default_kind(*kind, construction)
            }
        }
    }
}
