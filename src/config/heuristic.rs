/*!
Heuristics to score a candidate atom during a [look-ahead](crate::procedures::look_ahead).

Each heuristic scores an instance obtained by tentatively propagating some literal, relative to the instance before propagation.
Only clauses reduced in size by the propagation are examined, and some heuristics further restrict attention to those reduced to binary clauses.

The score of a candidate atom is the product of the scores of its two literals.

For details of the computations, see [procedures::heuristics](crate::procedures::heuristics).
*/

use std::str::FromStr;

/// Supported look-ahead heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum LookAheadHeuristic {
    /// Clause reduction: the sum of the coefficients of each reduced clause.
    CRH = 0,

    /// Weighted binaries: the sum of the weights of the negated literals of each new binary clause.
    WBH,

    /// Backbone search: the sum of the products of the weights of the negated literals of each new binary clause.
    BSH,

    /// Backbone search, renormalised: as BSH, though with weights normalised by the average negated weight over reduced clauses.
    BSRH,
}

impl LookAheadHeuristic {
    /// The minimum LookAheadHeuristic type.
    pub const MIN: LookAheadHeuristic = LookAheadHeuristic::CRH;

    /// The maximum LookAheadHeuristic type.
    pub const MAX: LookAheadHeuristic = LookAheadHeuristic::BSRH;

    /// Whether literal weights are required to compute the heuristic.
    pub fn requires_weights(&self) -> bool {
        !matches!(self, Self::CRH)
    }
}

impl std::fmt::Display for LookAheadHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CRH => write!(f, "CRH"),
            Self::WBH => write!(f, "WBH"),
            Self::BSH => write!(f, "BSH"),
            Self::BSRH => write!(f, "BSRH"),
        }
    }
}

impl FromStr for LookAheadHeuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRH" | "crh" => Ok(Self::CRH),

            "WBH" | "wbh" => Ok(Self::WBH),

            "BSH" | "bsh" => Ok(Self::BSH),

            "BSRH" | "bsrh" => Ok(Self::BSRH),

            _unkown_string => Err(()),
        }
    }
}
