/*!
Policies for the atoms examined during a [look-ahead](crate::procedures::look_ahead).

For details, see [procedures::preselect](crate::procedures::preselect).
*/

use std::str::FromStr;

/// Supported preselection policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Preselection {
    /// Every unassigned atom.
    All = 0,

    /// Past a few decisions, atoms occurring in binary clauses with both polarities.
    Propz,

    /// On larger formulas, atoms with the largest clause reduction approximation.
    Cra,
}

impl Preselection {
    /// The minimum Preselection type.
    pub const MIN: Preselection = Preselection::All;

    /// The maximum Preselection type.
    pub const MAX: Preselection = Preselection::Cra;

    /// Whether literal occurrence counts are required to apply the policy.
    pub fn requires_counts(&self) -> bool {
        matches!(self, Self::Cra)
    }
}

impl std::fmt::Display for Preselection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Propz => write!(f, "Propz"),
            Self::Cra => write!(f, "Cra"),
        }
    }
}

impl FromStr for Preselection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" | "all" => Ok(Self::All),

            "Propz" | "propz" => Ok(Self::Propz),

            "Cra" | "cra" => Ok(Self::Cra),

            _unkown_string => Err(()),
        }
    }
}
