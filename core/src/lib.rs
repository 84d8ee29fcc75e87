//! Potential objects for Expectation Propagation.
//!
//! This crate re-exports the pieces the inference loop and model assembly
//! need: the kind catalog, the potential managers, and model descriptions.
//!
//! ```text
//! ModelConfig ──build──► EpPotential* ──assemble──► PotentialManager ──► sweep
//!                ▲
//!          catalog::create / create_default
//! ```

pub use ep_config::{
    AssemblyOrder, ConfigError, ModelConfig, ModelSection, PotentialSpec, PotentialSpecError,
};
pub use ep_manager::{
    GroupCounts, ManagerError, PotentialList, PotentialManager, PotentialView,
    StagedPotentialManager, check_bivariate_suffix,
};
pub use ep_potentials::{
    CatalogError, EpPotential, ExponentialPotential, GaussianMixturePotential, GaussianPotential,
    HeavisidePotential, LaplacePotential, ProbitPotential, QuantileRegressionPotential,
    SpikeSlabPotential, catalog,
};
pub use ep_types::{
    ArgumentGroup, KIND_NAMES, KindIdError, KindNameError, ParameterError, PotentialId,
    PotentialKind,
};
