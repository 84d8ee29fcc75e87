//! The closed catalog of potential kinds.
//!
//! Two tables live here. [`KIND_NAMES`] maps the public external name of each
//! kind; it is append-only and its strings never change. The mapping from a
//! kind to its numeric slot is private to [`PotentialKind::id`] and
//! [`PotentialKind::from_id`] and may be renumbered freely.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::group::ArgumentGroup;
use crate::ids::{KindIdError, PotentialId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PotentialKind {
    Gaussian,
    Laplace,
    Probit,
    Heaviside,
    Exponential,
    QuantileRegression,
    GaussianMixture,
    SpikeAndSlab,
}

/// Stable external names. Published strings must never be renamed.
pub const KIND_NAMES: &[(&str, PotentialKind)] = &[
    ("Gaussian", PotentialKind::Gaussian),
    ("Laplace", PotentialKind::Laplace),
    ("Probit", PotentialKind::Probit),
    ("Heaviside", PotentialKind::Heaviside),
    ("Exponential", PotentialKind::Exponential),
    ("QuantRegress", PotentialKind::QuantileRegression),
    ("GaussMixture", PotentialKind::GaussianMixture),
    ("SpikeSlab", PotentialKind::SpikeAndSlab),
];

// `name` indexes this table by declaration order.
const _: () = {
    let mut i = 0;
    while i < KIND_NAMES.len() {
        assert!(KIND_NAMES[i].1 as usize == i, "KIND_NAMES must follow declaration order");
        i += 1;
    }
};

static EXPECTED_NAMES: [&str; KIND_NAMES.len()] = {
    let mut names = [""; KIND_NAMES.len()];
    let mut i = 0;
    while i < KIND_NAMES.len() {
        names[i] = KIND_NAMES[i].0;
        i += 1;
    }
    names
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown potential name '{raw}'; expected one of: {expected:?}")]
pub struct KindNameError {
    raw: String,
    expected: &'static [&'static str],
}

impl KindNameError {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            expected: &EXPECTED_NAMES,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl PotentialKind {
    #[must_use]
    pub const fn all() -> &'static [PotentialKind] {
        &[
            PotentialKind::Gaussian,
            PotentialKind::Laplace,
            PotentialKind::Probit,
            PotentialKind::Heaviside,
            PotentialKind::Exponential,
            PotentialKind::QuantileRegression,
            PotentialKind::GaussianMixture,
            PotentialKind::SpikeAndSlab,
        ]
    }

    /// External name, part of the public contract.
    #[must_use]
    pub const fn name(self) -> &'static str {
        KIND_NAMES[self as usize].0
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PotentialKind::Gaussian => "Gaussian",
            PotentialKind::Laplace => "Laplace",
            PotentialKind::Probit => "Probit",
            PotentialKind::Heaviside => "Heaviside step",
            PotentialKind::Exponential => "Exponential",
            PotentialKind::QuantileRegression => "Quantile regression",
            PotentialKind::GaussianMixture => "Gaussian mixture",
            PotentialKind::SpikeAndSlab => "Spike and slab",
        }
    }

    /// Looks up a kind by its external name. Matching is exact.
    pub fn from_name(raw: &str) -> Result<Self, KindNameError> {
        KIND_NAMES
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| KindNameError::new(raw))
    }

    #[must_use]
    pub const fn id(self) -> PotentialId {
        let slot = match self {
            PotentialKind::Gaussian => 0,
            PotentialKind::Laplace => 1,
            PotentialKind::Probit => 2,
            PotentialKind::Heaviside => 3,
            PotentialKind::Exponential => 4,
            PotentialKind::QuantileRegression => 5,
            PotentialKind::GaussianMixture => 6,
            PotentialKind::SpikeAndSlab => 7,
        };
        PotentialId::new(slot)
    }

    pub const fn from_id(id: PotentialId) -> Result<Self, KindIdError> {
        match id.value() {
            0 => Ok(PotentialKind::Gaussian),
            1 => Ok(PotentialKind::Laplace),
            2 => Ok(PotentialKind::Probit),
            3 => Ok(PotentialKind::Heaviside),
            4 => Ok(PotentialKind::Exponential),
            5 => Ok(PotentialKind::QuantileRegression),
            6 => Ok(PotentialKind::GaussianMixture),
            7 => Ok(PotentialKind::SpikeAndSlab),
            _ => Err(KindIdError::new(id)),
        }
    }

    #[must_use]
    pub const fn argument_group(self) -> ArgumentGroup {
        match self {
            PotentialKind::SpikeAndSlab => ArgumentGroup::BivariatePrecision,
            PotentialKind::Gaussian
            | PotentialKind::Laplace
            | PotentialKind::Probit
            | PotentialKind::Heaviside
            | PotentialKind::Exponential
            | PotentialKind::QuantileRegression
            | PotentialKind::GaussianMixture => ArgumentGroup::Univariate,
        }
    }

    /// Number of leading construction parameters `create_default` needs.
    #[must_use]
    pub const fn construction_arity(self) -> usize {
        match self {
            PotentialKind::QuantileRegression | PotentialKind::GaussianMixture => 1,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn requires_construction_params(self) -> bool {
        self.construction_arity() > 0
    }

    /// Fixed parameter vector length, or `None` when the length depends on
    /// the construction parameters (mixtures).
    #[must_use]
    pub const fn num_params(self) -> Option<usize> {
        match self {
            PotentialKind::Laplace | PotentialKind::Exponential => Some(1),
            PotentialKind::Gaussian
            | PotentialKind::Probit
            | PotentialKind::Heaviside
            | PotentialKind::SpikeAndSlab => Some(2),
            PotentialKind::QuantileRegression => Some(3),
            PotentialKind::GaussianMixture => None,
        }
    }

    #[must_use]
    pub const fn is_log_concave(self) -> bool {
        !matches!(
            self,
            PotentialKind::GaussianMixture | PotentialKind::SpikeAndSlab
        )
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PotentialKind> for &'static str {
    fn from(kind: PotentialKind) -> Self {
        kind.name()
    }
}

impl TryFrom<String> for PotentialKind {
    type Error = KindNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl TryFrom<&str> for PotentialKind {
    type Error = KindNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl TryFrom<PotentialId> for PotentialKind {
    type Error = KindIdError;

    fn try_from(id: PotentialId) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}
