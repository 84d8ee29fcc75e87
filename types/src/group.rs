use std::fmt;

use serde::{Deserialize, Serialize};

/// How many latent variables a potential couples, and in which role.
///
/// Univariate potentials act on a single linear projection `s_j`.
/// Bivariate precision potentials act on a pair `(s_j, tau_j)` where `tau_j`
/// is a precision-like latent. Managers keep the latter as a contiguous
/// suffix so the inference loop can slice without per-element dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentGroup {
    Univariate,
    BivariatePrecision,
}

impl ArgumentGroup {
    #[must_use]
    pub const fn all() -> &'static [ArgumentGroup] {
        &[ArgumentGroup::Univariate, ArgumentGroup::BivariatePrecision]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ArgumentGroup::Univariate => "univariate",
            ArgumentGroup::BivariatePrecision => "bivariate_precision",
        }
    }

    #[must_use]
    pub const fn is_bivariate_precision(self) -> bool {
        matches!(self, ArgumentGroup::BivariatePrecision)
    }
}

impl fmt::Display for ArgumentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
