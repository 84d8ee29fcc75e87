use ep_types::{ArgumentGroup, ParameterError, PotentialKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManagerError {
    #[error("potential index {index} out of range for manager of size {size}")]
    IndexOutOfRange { index: i64, size: usize },
    /// A bivariate precision potential sits before a potential of another
    /// group. Raised while assembling, never by a built manager.
    #[error(
        "{group} potential at index {index} precedes a non-{group} potential at index {offender}; \
         bivariate precision potentials must form a contiguous suffix"
    )]
    InvariantViolation {
        group: ArgumentGroup,
        index: usize,
        offender: usize,
    },
    /// Staged entries are validated when assembled; rebuilding one can only
    /// fail if the arena was corrupted.
    #[error("staged {kind} potential {index} failed to materialize: {source}")]
    Materialize {
        index: usize,
        kind: PotentialKind,
        #[source]
        source: ParameterError,
    },
}

impl ManagerError {
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        ManagerError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            size,
        }
    }
}
