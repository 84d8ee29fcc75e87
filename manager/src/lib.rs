//! Potential managers: the indexed view the EP loop sweeps over.
//!
//! # Architecture
//!
//! ```text
//! PotentialManager (trait)
//! ├── PotentialList           Vec<EpPotential>, views borrow elements
//! └── StagedPotentialManager  kinds + flat arena, views borrow a staging slot
//!
//! PotentialView<'_> (borrowed from &mut manager, gone before the next call)
//! ```
//!
//! Both assemblers run [`check_bivariate_suffix`] when built, so every
//! manager that exists satisfies the contiguous-suffix invariant.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod invariant;
mod list;
mod manager;
mod staged;
mod view;

pub use error::ManagerError;
pub use invariant::{GroupCounts, check_bivariate_suffix};
pub use list::PotentialList;
pub use manager::PotentialManager;
pub use staged::StagedPotentialManager;
pub use view::PotentialView;
