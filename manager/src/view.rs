use std::ops::Deref;

use ep_potentials::EpPotential;
use ep_types::{ArgumentGroup, PotentialKind};

/// Read-only access to the potential at one index.
///
/// The view borrows its manager mutably for `'a`, so it is gone before the
/// next `potential` call can happen; managers are free to hand out a staging
/// slot they overwrite on every call. [`EpPotential`] has no setters, so
/// nothing can be mutated through the view.
///
/// Copy out what must outlive the call:
///
/// ```
/// use ep_manager::{PotentialList, PotentialManager};
/// use ep_potentials::{EpPotential, GaussianPotential, LaplacePotential};
///
/// let potentials: Vec<EpPotential> = vec![
///     GaussianPotential::default().into(),
///     LaplacePotential::default().into(),
/// ];
/// let mut list = PotentialList::new(potentials).unwrap();
/// let first = list.potential(0).unwrap().to_owned_potential();
/// let second = list.potential(1).unwrap();
/// assert_ne!(first.kind(), second.kind());
/// ```
///
/// Holding a view across the next lookup does not compile:
///
/// ```compile_fail,E0499
/// use ep_manager::{PotentialList, PotentialManager};
/// use ep_potentials::{EpPotential, GaussianPotential, LaplacePotential};
///
/// let potentials: Vec<EpPotential> = vec![
///     GaussianPotential::default().into(),
///     LaplacePotential::default().into(),
/// ];
/// let mut list = PotentialList::new(potentials).unwrap();
/// let first = list.potential(0).unwrap();
/// let second = list.potential(1).unwrap();
/// assert_ne!(first.kind(), second.kind());
/// ```
///
/// Nor can a view outlive its manager:
///
/// ```compile_fail,E0515
/// use ep_manager::{PotentialList, PotentialManager, PotentialView};
/// use ep_potentials::GaussianPotential;
///
/// fn first_view() -> PotentialView<'static> {
///     let mut list = PotentialList::new(vec![GaussianPotential::default().into()]).unwrap();
///     list.potential(0).unwrap()
/// }
/// ```
///
/// Nor can the potential be written through it:
///
/// ```compile_fail,E0596
/// use ep_manager::{PotentialList, PotentialManager};
/// use ep_potentials::{EpPotential, GaussianPotential};
///
/// let mut list = PotentialList::new(vec![GaussianPotential::default().into()]).unwrap();
/// let view = list.potential(0).unwrap();
/// let pot: &mut EpPotential = &mut *view;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PotentialView<'a> {
    index: usize,
    potential: &'a EpPotential,
}

impl<'a> PotentialView<'a> {
    pub(crate) fn new(index: usize, potential: &'a EpPotential) -> Self {
        Self { index, potential }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn kind(&self) -> PotentialKind {
        self.potential.kind()
    }

    #[must_use]
    pub const fn argument_group(&self) -> ArgumentGroup {
        self.potential.argument_group()
    }

    #[must_use]
    pub const fn potential(&self) -> &'a EpPotential {
        self.potential
    }

    /// Copies the potential out so it can outlive the view.
    #[must_use]
    pub fn to_owned_potential(&self) -> EpPotential {
        self.potential.clone()
    }
}

impl Deref for PotentialView<'_> {
    type Target = EpPotential;

    fn deref(&self) -> &Self::Target {
        self.potential
    }
}
