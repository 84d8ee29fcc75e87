use ep_types::ArgumentGroup;

use crate::error::ManagerError;
use crate::invariant::GroupCounts;
use crate::view::PotentialView;

/// An ordered, fixed-size, read-only collection of potentials.
///
/// Implementations must keep bivariate precision potentials as a contiguous
/// suffix starting at [`PotentialManager::bivariate_start`], and must check
/// that when they are assembled.
///
/// Not thread-safe: `potential` takes `&mut self` because implementations may
/// reuse one staging slot. Give each worker its own manager, or wrap one in a
/// lock outside this crate.
pub trait PotentialManager {
    /// Number of potentials. Constant for the manager's lifetime.
    fn size(&self) -> usize;

    fn count_in_group(&self, group: ArgumentGroup) -> usize;

    /// The potential at `index`, valid until the next call on this manager.
    fn potential(&mut self, index: usize) -> Result<PotentialView<'_>, ManagerError>;

    /// Signed-index entry point; negative indices are out of range.
    fn potential_at(&mut self, index: i64) -> Result<PotentialView<'_>, ManagerError> {
        let Ok(unsigned) = usize::try_from(index) else {
            return Err(ManagerError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        };
        self.potential(unsigned)
    }

    /// First index of the bivariate precision block.
    fn bivariate_start(&self) -> usize {
        self.size() - self.count_in_group(ArgumentGroup::BivariatePrecision)
    }

    fn group_counts(&self) -> GroupCounts {
        let mut counts = GroupCounts::default();
        for group in ArgumentGroup::all() {
            counts.add(*group, self.count_in_group(*group));
        }
        counts
    }

    /// Visits every potential in index order: one inference sweep.
    fn for_each_potential<F>(&mut self, mut visit: F) -> Result<(), ManagerError>
    where
        Self: Sized,
        F: FnMut(&PotentialView<'_>),
    {
        for index in 0..self.size() {
            let view = self.potential(index)?;
            visit(&view);
        }
        Ok(())
    }
}
