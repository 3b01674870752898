use std::fmt;

use serde::{Deserialize, Serialize};

/// Which context dimensions participate in key computation and refinement.
///
/// Ordered by increasing specificity. Opaque statements ignore the strategy and
/// always use their own pre-computed identity (the implicit default strategy).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStrategy {
    /// Grounding only.
    #[default]
    Grounding,
    /// Grounding plus geographic location.
    GroundingLocation,
    /// Grounding plus location plus time interval.
    GroundingLocationTime,
}

impl MatchingStrategy {
    /// All strategies, least specific first.
    pub const ALL: [MatchingStrategy; 3] = [
        Self::Grounding,
        Self::GroundingLocation,
        Self::GroundingLocationTime,
    ];

    /// Whether location participates in matching.
    pub fn uses_location(self) -> bool {
        matches!(self, Self::GroundingLocation | Self::GroundingLocationTime)
    }

    /// Whether time participates in matching.
    pub fn uses_time(self) -> bool {
        matches!(self, Self::GroundingLocationTime)
    }

    /// Stable name matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grounding => "grounding",
            Self::GroundingLocation => "grounding_location",
            Self::GroundingLocationTime => "grounding_location_time",
        }
    }
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
