/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [look-ahead](crate::procedures::look_ahead)
    pub const LOOK_AHEAD: &str = "look_ahead";

    /// Logs related to [preselection](crate::procedures::preselect)
    pub const PRESELECTION: &str = "preselection";

    /// Logs related to the [search](crate::procedures::solve)
    pub const SEARCH: &str = "search";

    /// Logs related to building the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";
}
