//! Core domain types for eptools potentials.
//!
//! This crate contains the closed set of potential kinds, their stable
//! external names, internal numeric ids and argument groups. No IO, no
//! numerics beyond parameter validation errors.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod group;
mod ids;
mod kind;
mod params;

pub use group::ArgumentGroup;
pub use ids::{KindIdError, PotentialId};
pub use kind::{KIND_NAMES, KindNameError, PotentialKind};
pub use params::ParameterError;
