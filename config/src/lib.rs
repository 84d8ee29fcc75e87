//! Model descriptions: which potentials to build, by stable external name.
//!
//! ```toml
//! [model]
//! ordering = "grouped"
//!
//! [[potential]]
//! kind = "Gaussian"
//! params = [0.0, 1.0]
//!
//! [[potential]]
//! kind = "QuantRegress"
//! construction = [0.5]
//! ```
//!
//! Kinds are referenced by name only, so files stay valid when internal ids
//! are renumbered.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod spec;

use std::path::{Path, PathBuf};
use std::{fs, io};

use ep_manager::{ManagerError, PotentialList, StagedPotentialManager};
use ep_potentials::{CatalogError, EpPotential};
use ep_types::PotentialKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use spec::{PotentialSpec, PotentialSpecError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read model config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse model config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("potential {index} ({kind}) cannot be built: {source}")]
    Potential {
        index: usize,
        kind: PotentialKind,
        source: CatalogError,
    },
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

/// How assemblers treat the declared order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyOrder {
    /// Keep the file order; interleaved groups are an error.
    #[default]
    Strict,
    /// Stable-move bivariate precision potentials to the end.
    Grouped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSection {
    #[serde(default)]
    pub ordering: AssemblyOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub model: ModelSection,
    #[serde(default, rename = "potential")]
    pub potentials: Vec<PotentialSpec>,
}

impl ModelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read model config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse model config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::info!(
            path = %path.display(),
            potentials = config.potentials.len(),
            ordering = ?config.model.ordering,
            "loaded model config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Describes existing potentials so they can be written back out.
    #[must_use]
    pub fn from_potentials<'a, I>(potentials: I, ordering: AssemblyOrder) -> Self
    where
        I: IntoIterator<Item = &'a EpPotential>,
    {
        Self {
            model: ModelSection { ordering },
            potentials: potentials
                .into_iter()
                .map(PotentialSpec::from_potential)
                .collect(),
        }
    }

    /// Builds every potential in file order.
    pub fn build_potentials(&self) -> Result<Vec<EpPotential>, ConfigError> {
        self.potentials
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build().map_err(|source| {
                    tracing::warn!(index, kind = %spec.kind(), %source, "rejected potential");
                    ConfigError::Potential {
                        index,
                        kind: spec.kind(),
                        source,
                    }
                })
            })
            .collect()
    }

    pub fn build_list(&self) -> Result<PotentialList, ConfigError> {
        let potentials = self.build_potentials()?;
        let list = match self.model.ordering {
            AssemblyOrder::Strict => PotentialList::new(potentials)?,
            AssemblyOrder::Grouped => PotentialList::grouped(potentials)?,
        };
        Ok(list)
    }

    pub fn build_staged(&self) -> Result<StagedPotentialManager, ConfigError> {
        let potentials = self.build_potentials()?;
        let staged = match self.model.ordering {
            AssemblyOrder::Strict => StagedPotentialManager::new(&potentials)?,
            AssemblyOrder::Grouped => StagedPotentialManager::grouped(&potentials)?,
        };
        Ok(staged)
    }
}
