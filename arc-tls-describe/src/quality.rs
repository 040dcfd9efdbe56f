#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Security quality tiers and their display colors.

use std::fmt;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Security quality tier assigned to a protocol version or cipher suite.
///
/// Tiers are ordered: `Insecure < Acceptable < Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Broken or deprecated; should not be negotiated
    Insecure,
    /// Still safe in practice but not recommended
    Acceptable,
    /// Modern, recommended configuration
    Good,
}

impl Quality {
    /// All tiers, lowest first
    pub const ALL: [Quality; 3] = [Quality::Insecure, Quality::Acceptable, Quality::Good];

    /// The lowest tier, used for anything that cannot be classified.
    #[must_use]
    pub const fn lowest() -> Self {
        Quality::Insecure
    }

    /// Numeric rank of the tier (0 = insecure).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Quality::Insecure => 0,
            Quality::Acceptable => 1,
            Quality::Good => 2,
        }
    }

    /// Tier for a numeric rank, if one exists.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Quality::Insecure),
            1 => Some(Quality::Acceptable),
            2 => Some(Quality::Good),
            _ => None,
        }
    }

    /// Machine-friendly label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Quality::Insecure => "insecure",
            Quality::Acceptable => "acceptable",
            Quality::Good => "good",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static QUALITY_COLORS: [(Quality, Color); 3] = [
    (Quality::Insecure, Color::Red),
    (Quality::Acceptable, Color::Yellow),
    (Quality::Good, Color::Green),
];

/// Terminal color used to render a name of the given tier.
///
/// Returns `None` for a tier with no color assigned; callers render such
/// names without styling.
#[must_use]
pub fn color_for(quality: Quality) -> Option<Color> {
    QUALITY_COLORS.iter().find(|(q, _)| *q == quality).map(|(_, color)| *color)
}
