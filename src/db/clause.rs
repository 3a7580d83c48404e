/*!
A database of clauses which are not binary.

The database holds:
- Active clauses, as a map from clause keys to the literals of the clause which do not (yet) have a value.
  Most active clauses contain three or more literals, though unit clauses are also active, whether read from a formula or left with a single literal during propagation.
- The keys of satisfied clauses.
  Once satisfied, nothing but the key of a clause is kept.
- The total count of clauses in the formula, including binary clauses stored in the [binary index](crate::db::binary).

As nothing is removed from the satisfied keys, satisfaction of the formula is checked by comparing the count of satisfied keys to the total count of clauses.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{db::ClauseKey, structures::clause::CClause};

/// The clause database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClauseDB {
    /// Active clauses, by key.
    active: BTreeMap<ClauseKey, CClause>,

    /// Keys of satisfied clauses.
    satisfied: BTreeSet<ClauseKey>,

    /// The count of clauses in the formula.
    total: usize,
}

impl ClauseDB {
    /// An empty database for a formula of `total` clauses.
    pub fn new(total: usize) -> Self {
        ClauseDB {
            total,
            ..Default::default()
        }
    }

    /// Stores an active clause.
    pub fn store(&mut self, key: ClauseKey, clause: CClause) {
        self.active.insert(key, clause);
    }

    /// The active clause with the given key, if the clause is active.
    pub fn get(&self, key: ClauseKey) -> Option<&CClause> {
        self.active.get(&key)
    }

    /// The active clause with the given key, mutably, if the clause is active.
    pub fn get_mut(&mut self, key: ClauseKey) -> Option<&mut CClause> {
        self.active.get_mut(&key)
    }

    /// Removes a clause from the active clauses, returning the clause if it was active.
    pub fn remove(&mut self, key: ClauseKey) -> Option<CClause> {
        self.active.remove(&key)
    }

    /// Notes the clause with the given key is satisfied.
    pub fn note_satisfied(&mut self, key: ClauseKey) {
        self.satisfied.insert(key);
    }

    /// Whether the clause with the given key is satisfied.
    pub fn is_satisfied(&self, key: ClauseKey) -> bool {
        self.satisfied.contains(&key)
    }

    /// An iterator over all active clauses, in order of key.
    pub fn active(&self) -> impl Iterator<Item = (&ClauseKey, &CClause)> {
        self.active.iter()
    }

    /// A count of active clauses.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// The keys of satisfied clauses.
    pub fn satisfied(&self) -> &BTreeSet<ClauseKey> {
        &self.satisfied
    }

    /// The count of clauses in the formula.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether every clause of the formula is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.satisfied.len() == self.total
    }
}
