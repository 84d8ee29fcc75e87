//! EP scalar potentials and the catalog that builds them.
//!
//! ```text
//! catalog::create(id, params) ──► EpPotential ──► owned by the caller
//!            │
//!            └─ one match over PotentialKind, one validated struct per kind
//! ```
//!
//! Moment computation and EP updates live with the inference loop; this
//! crate only owns construction, validation and the parameter layout.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod binary;
pub mod catalog;
mod error;
mod exponential;
mod gaussian;
mod laplace;
mod mixture;
mod params;
mod potential;
mod quantile;
mod spike_slab;

pub use binary::{HeavisidePotential, ProbitPotential};
pub use catalog::{
    create, create_by_name, create_default, create_default_by_name, create_default_kind,
    create_kind, is_valid_kind,
};
pub use error::CatalogError;
pub use exponential::ExponentialPotential;
pub use gaussian::GaussianPotential;
pub use laplace::LaplacePotential;
pub use mixture::GaussianMixturePotential;
pub use potential::EpPotential;
pub use quantile::QuantileRegressionPotential;
pub use spike_slab::SpikeSlabPotential;
