//! Configuration of databases, typically derived from the configuration of a context.

/// Configuration for the literal database.
///
/// Statistics which are not maintained are absent from the database, rather than stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiteralDBConfig {
    /// Maintain a count of the occurrences of each literal in unsatisfied clauses.
    pub counts: bool,

    /// Maintain the sum of the coefficients of the unsatisfied clauses each literal occurs in.
    pub weights: bool,
}

/// Configuration for an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstanceConfig {
    /// Configuration of the literal database.
    pub literal_db: LiteralDBConfig,

    /// Record atoms implied by binary clauses which were reduced during the same propagation.
    pub local_learning: bool,
}
