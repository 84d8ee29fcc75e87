use ep_types::{KindIdError, KindNameError, ParameterError, PotentialKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The requested kind is not in the catalog.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] KindIdError),
    /// Name lookups fail the same way an unknown id does.
    #[error("invalid argument: {0}")]
    UnknownName(#[from] KindNameError),
    #[error("invalid {kind} parameters: {source}")]
    InvalidParameter {
        kind: PotentialKind,
        #[source]
        source: ParameterError,
    },
    #[error("{kind} requires {expected} construction parameter(s), got {got}")]
    MissingConstructionParameter {
        kind: PotentialKind,
        expected: usize,
        got: usize,
    },
}

impl CatalogError {
    pub(crate) fn parameter(kind: PotentialKind) -> impl FnOnce(ParameterError) -> Self {
        move |source| CatalogError::InvalidParameter { kind, source }
    }

    /// True for both flavours of unknown-kind failure.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidArgument(_) | CatalogError::UnknownName(_)
        )
    }
}
