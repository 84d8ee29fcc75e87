use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Internal numeric id of a potential kind.
///
/// Ids are contiguous and zero-based, bounded by [`PotentialId::MAX`]. They
/// may be renumbered between releases; anything persisted should refer to a
/// kind by its external name instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PotentialId(i32);

impl PotentialId {
    pub const MAX: i32 = 7;

    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// True iff the id lies in `[0, MAX]`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0 && self.0 <= Self::MAX
    }
}

impl From<i32> for PotentialId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PotentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown potential id {id}; valid ids are 0..={max}", max = PotentialId::MAX)]
pub struct KindIdError {
    id: PotentialId,
}

impl KindIdError {
    #[must_use]
    pub const fn new(id: PotentialId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> PotentialId {
        self.id
    }
}
