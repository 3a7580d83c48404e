use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Counters {
    /// A count of every decision made, where a decision is a branch on some atom.
    pub decisions: usize,

    /// A count of every atom examined during a look-ahead.
    pub look_aheads: usize,

    /// A count of failed literals found during look-aheads.
    pub failed_literals: usize,

    /// A count of calls to propagate, whether tentative or not.
    pub propagations: usize,

    /// The deepest decision level reached.
    pub deepest_level: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
