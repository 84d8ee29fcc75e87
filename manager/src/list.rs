use ep_potentials::EpPotential;
use ep_types::ArgumentGroup;

use crate::error::ManagerError;
use crate::invariant::{GroupCounts, check_bivariate_suffix};
use crate::manager::PotentialManager;
use crate::view::PotentialView;

/// Manager owning its potentials in a `Vec`.
///
/// Views borrow the stored element directly; no staging copy is made.
#[derive(Debug, Clone)]
pub struct PotentialList {
    potentials: Vec<EpPotential>,
    counts: GroupCounts,
}

impl PotentialList {
    /// Takes the potentials in the given order and checks the suffix invariant.
    pub fn new(potentials: Vec<EpPotential>) -> Result<Self, ManagerError> {
        let counts = check_bivariate_suffix(potentials.iter().map(EpPotential::argument_group))?;
        tracing::debug!(
            size = potentials.len(),
            bivariate = counts.get(ArgumentGroup::BivariatePrecision),
            "assembled potential list"
        );
        Ok(Self { potentials, counts })
    }

    /// Moves bivariate precision potentials to the end, keeping the relative
    /// order within each group, then assembles.
    pub fn grouped(mut potentials: Vec<EpPotential>) -> Result<Self, ManagerError> {
        potentials.sort_by_key(|pot| pot.argument_group().is_bivariate_precision());
        Self::new(potentials)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.potentials.is_empty()
    }

    /// Hands the potentials back to the assembler.
    #[must_use]
    pub fn into_inner(self) -> Vec<EpPotential> {
        self.potentials
    }
}

impl PotentialManager for PotentialList {
    fn size(&self) -> usize {
        self.potentials.len()
    }

    fn count_in_group(&self, group: ArgumentGroup) -> usize {
        self.counts.get(group)
    }

    fn potential(&mut self, index: usize) -> Result<PotentialView<'_>, ManagerError> {
        let size = self.potentials.len();
        self.potentials
            .get(index)
            .map(|pot| PotentialView::new(index, pot))
            .ok_or_else(|| ManagerError::out_of_range(index, size))
    }

    fn group_counts(&self) -> GroupCounts {
        self.counts
    }
}
