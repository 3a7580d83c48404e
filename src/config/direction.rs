/*!
Heuristics to choose which value of a decision atom to try first.

For details, see [procedures::direction](crate::procedures::direction).
*/

use std::str::FromStr;

/// Supported direction heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum DirectionHeuristic {
    /// Prefer the literal with more occurrences.
    KCNFS = 0,

    /// Prefer the value whose look-ahead reduced the formula the least.
    ///
    /// So, the value opposite to the higher scoring side of the look-ahead is tried first.
    MARCH,

    /// Prefer the literal with the smaller weight.
    POSIT,

    /// Always try true first.
    FIXED,
}

impl DirectionHeuristic {
    /// The minimum DirectionHeuristic type.
    pub const MIN: DirectionHeuristic = DirectionHeuristic::KCNFS;

    /// The maximum DirectionHeuristic type.
    pub const MAX: DirectionHeuristic = DirectionHeuristic::FIXED;

    /// Whether literal occurrence counts are required to apply the heuristic.
    pub fn requires_counts(&self) -> bool {
        matches!(self, Self::KCNFS)
    }

    /// Whether literal weights are required to apply the heuristic.
    pub fn requires_weights(&self) -> bool {
        matches!(self, Self::POSIT)
    }
}

impl std::fmt::Display for DirectionHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KCNFS => write!(f, "KCNFS"),
            Self::MARCH => write!(f, "MARCH"),
            Self::POSIT => write!(f, "POSIT"),
            Self::FIXED => write!(f, "FIXED"),
        }
    }
}

impl FromStr for DirectionHeuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KCNFS" | "kcnfs" => Ok(Self::KCNFS),

            "MARCH" | "march" => Ok(Self::MARCH),

            "POSIT" | "posit" => Ok(Self::POSIT),

            "FIXED" | "fixed" => Ok(Self::FIXED),

            _unkown_string => Err(()),
        }
    }
}
