//! Aside (callout) kinds usable in MDX content.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Kind of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsideKind {
    Note,
    Tip,
    Caution,
    Danger,
}

/// Available asides, in declaration order.
pub const ASIDE_TYPES: [AsideKind; 4] = [
    AsideKind::Note,
    AsideKind::Tip,
    AsideKind::Caution,
    AsideKind::Danger,
];

impl AsideKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for AsideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsideKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        ASIDE_TYPES
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAside(s.to_string()))
    }
}
