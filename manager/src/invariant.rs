//! The contiguous-suffix invariant shared by every assembler.
//!
//! The inference loop treats `[0, start)` and `[start, size)` as two
//! homogeneous slices where `start = size - count(BivariatePrecision)`. That
//! only holds if no bivariate precision potential precedes another group.

use ep_types::ArgumentGroup;

use crate::error::ManagerError;

/// Per-group potential counts of one manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounts {
    univariate: usize,
    bivariate_precision: usize,
}

impl GroupCounts {
    #[must_use]
    pub const fn get(&self, group: ArgumentGroup) -> usize {
        match group {
            ArgumentGroup::Univariate => self.univariate,
            ArgumentGroup::BivariatePrecision => self.bivariate_precision,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.univariate + self.bivariate_precision
    }

    /// Index of the first bivariate precision potential (or `total()` if none).
    #[must_use]
    pub const fn bivariate_start(&self) -> usize {
        self.univariate
    }

    pub(crate) fn add(&mut self, group: ArgumentGroup, count: usize) {
        match group {
            ArgumentGroup::Univariate => self.univariate += count,
            ArgumentGroup::BivariatePrecision => self.bivariate_precision += count,
        }
    }
}

/// Validates the group sequence of a manager in index order.
///
/// Returns the per-group counts when bivariate precision potentials form a
/// contiguous suffix, otherwise `InvariantViolation` naming the first
/// bivariate precision index and the first later index outside the group.
pub fn check_bivariate_suffix<I>(groups: I) -> Result<GroupCounts, ManagerError>
where
    I: IntoIterator<Item = ArgumentGroup>,
{
    let mut counts = GroupCounts::default();
    let mut suffix_start = None;

    for (index, group) in groups.into_iter().enumerate() {
        match (group.is_bivariate_precision(), suffix_start) {
            (true, None) => suffix_start = Some(index),
            (false, Some(start)) => {
                return Err(ManagerError::InvariantViolation {
                    group: ArgumentGroup::BivariatePrecision,
                    index: start,
                    offender: index,
                });
            }
            _ => {}
        }
        counts.add(group, 1);
    }

    Ok(counts)
}
