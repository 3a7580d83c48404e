//! Bookkeeping of the most recent propagation in an instance.
//!
//! Each call to [propagate](crate::instance::Instance::propagate) begins by clearing the record, so after a call the record describes exactly that call.
//! The record is read by the [look-ahead heuristics](crate::procedures::heuristics) to score a tentative propagation.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    db::ClauseKey,
    structures::{atom::Atom, literal::CLiteral},
};

/// The transient record of a propagation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transient {
    /// Clauses which lost some literal and were not satisfied.
    pub reduced: BTreeSet<ClauseKey>,

    /// Reduced clauses which were demoted to the binary index, with their remaining literals.
    ///
    /// The literals are kept here, as the binary index is keyed by literal rather than by clause.
    pub new_binary: BTreeMap<ClauseKey, [CLiteral; 2]>,

    /// Atoms given a value through a binary clause reduced during the propagation.
    ///
    /// Only recorded when local learning is enabled.
    pub implicated: BTreeSet<Atom>,
}

impl Transient {
    /// Clears the record.
    pub fn clear(&mut self) {
        self.reduced.clear();
        self.new_binary.clear();
        self.implicated.clear();
    }

    /// Removes a (satisfied) clause from the record.
    pub fn forget(&mut self, key: ClauseKey) {
        self.reduced.remove(&key);
        self.new_binary.remove(&key);
    }
}
