use ep_potentials::EpPotential;
use ep_types::{ArgumentGroup, PotentialKind};

use crate::error::ManagerError;
use crate::invariant::{GroupCounts, check_bivariate_suffix};
use crate::manager::PotentialManager;
use crate::view::PotentialView;

/// Manager storing potentials as a kind table plus one flat parameter arena.
///
/// Each `potential` call rebuilds the requested entry into a single staging
/// slot and lends it out, overwriting whatever the previous call produced.
/// Rebuilds bypass the catalog, so a sweep emits no per-entry creation events.
#[derive(Debug, Clone)]
pub struct StagedPotentialManager {
    kinds: Vec<PotentialKind>,
    // offsets[i]..offsets[i + 1] is the parameter range of potential i
    offsets: Vec<usize>,
    arena: Vec<f64>,
    counts: GroupCounts,
    staging: Option<EpPotential>,
}

impl StagedPotentialManager {
    pub fn new(potentials: &[EpPotential]) -> Result<Self, ManagerError> {
        let counts = check_bivariate_suffix(potentials.iter().map(EpPotential::argument_group))?;

        let mut kinds = Vec::with_capacity(potentials.len());
        let mut offsets = Vec::with_capacity(potentials.len() + 1);
        let mut arena = Vec::with_capacity(potentials.iter().map(EpPotential::num_params).sum());
        offsets.push(0);
        for pot in potentials {
            kinds.push(pot.kind());
            pot.extend_params(&mut arena);
            offsets.push(arena.len());
        }

        tracing::debug!(
            size = kinds.len(),
            arena = arena.len(),
            bivariate = counts.get(ArgumentGroup::BivariatePrecision),
            "assembled staged potential manager"
        );
        Ok(Self {
            kinds,
            offsets,
            arena,
            counts,
            staging: None,
        })
    }

    /// Like [`StagedPotentialManager::new`] after moving bivariate precision
    /// potentials to the end in stable order.
    pub fn grouped(potentials: &[EpPotential]) -> Result<Self, ManagerError> {
        let (univariate, bivariate): (Vec<&EpPotential>, Vec<&EpPotential>) = potentials
            .iter()
            .partition(|pot| !pot.argument_group().is_bivariate_precision());
        let ordered: Vec<EpPotential> = univariate
            .into_iter()
            .chain(bivariate)
            .cloned()
            .collect();
        Self::new(&ordered)
    }

    #[must_use]
    pub fn kind_at(&self, index: usize) -> Option<PotentialKind> {
        self.kinds.get(index).copied()
    }

    /// Raw parameters of potential `index` without materializing it.
    #[must_use]
    pub fn params_at(&self, index: usize) -> Option<&[f64]> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        self.arena.get(start..end)
    }
}

impl PotentialManager for StagedPotentialManager {
    fn size(&self) -> usize {
        self.kinds.len()
    }

    fn count_in_group(&self, group: ArgumentGroup) -> usize {
        self.counts.get(group)
    }

    fn potential(&mut self, index: usize) -> Result<PotentialView<'_>, ManagerError> {
        let (Some(kind), Some(params)) = (self.kind_at(index), self.params_at(index)) else {
            return Err(ManagerError::out_of_range(index, self.size()));
        };
        let rebuilt = EpPotential::from_kind_params(kind, params).map_err(|source| {
            ManagerError::Materialize {
                index,
                kind,
                source,
            }
        })?;
        let staged = self.staging.insert(rebuilt);
        Ok(PotentialView::new(index, staged))
    }

    fn group_counts(&self) -> GroupCounts {
        self.counts
    }
}
