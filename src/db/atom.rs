/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current (often partial) valuation, indexed by atoms.
- The set of atoms without a value.
- For each atom, the keys of the long clauses in which the atom occurs (with either polarity).

Membership is by key, so an atom never owns a clause, nor a clause an atom.
*/

use std::collections::BTreeSet;

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The atom database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtomDB {
    /// The current valuation, with index `0` unused.
    valuation: Vec<Option<bool>>,

    /// Atoms without a value.
    unassigned: BTreeSet<Atom>,

    /// The keys of long clauses each atom occurs in, with index `0` unused.
    occurrences: Vec<BTreeSet<ClauseKey>>,
}

/// The status of the valuation of an atom, relative to some literal.
#[derive(Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom has no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom differs from the polarity of the literal.
    Different,
}

impl AtomDB {
    /// A database of `atom_count` atoms, none of which have a value.
    pub fn new(atom_count: Atom) -> Self {
        AtomDB {
            valuation: vec![None; atom_count as usize + 1],
            unassigned: (1..=atom_count).collect(),
            occurrences: vec![BTreeSet::default(); atom_count as usize + 1],
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len() - 1
    }

    /// The value of an atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The status of the atom of `literal` relative to the polarity of `literal`.
    pub fn check(&self, literal: CLiteral) -> AtomValue {
        match self.value_of(literal.atom()) {
            None => AtomValue::NotSet,
            Some(value) if value == literal.polarity() => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Sets the value of an atom.
    ///
    /// The atom remains among the unassigned atoms until [settle](AtomDB::settle) is called.
    pub fn set_value(&mut self, atom: Atom, value: bool) {
        debug_assert!(self.valuation[atom as usize].is_none());
        self.valuation[atom as usize] = Some(value);
    }

    /// Removes an atom from the unassigned atoms, after its consequences have been examined.
    pub fn settle(&mut self, atom: Atom) {
        self.unassigned.remove(&atom);
    }

    /// The atoms which have no value, in ascending order.
    pub fn unassigned(&self) -> &BTreeSet<Atom> {
        &self.unassigned
    }

    /// The valuation, indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The keys of long clauses in which an atom occurs.
    pub fn occurrences(&self, atom: Atom) -> &BTreeSet<ClauseKey> {
        &self.occurrences[atom as usize]
    }

    /// Notes `key` as a long clause in which `atom` occurs.
    pub fn note_occurrence(&mut self, atom: Atom, key: ClauseKey) {
        self.occurrences[atom as usize].insert(key);
    }

    /// Removes `key` from the long clauses in which `atom` occurs.
    pub fn detach(&mut self, atom: Atom, key: ClauseKey) {
        self.occurrences[atom as usize].remove(&key);
    }

    /// Takes the keys of every long clause in which `atom` occurs, leaving the atom with no occurrences.
    pub fn take_occurrences(&mut self, atom: Atom) -> BTreeSet<ClauseKey> {
        std::mem::take(&mut self.occurrences[atom as usize])
    }
}
