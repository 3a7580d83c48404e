/*!
The state of a formula relative to some partial valuation.

An instance bundles together the [databases](crate::db) of a formula, and is the structure mutated by [propagation](crate::procedures::propagate) and inspected by the [look-ahead](crate::procedures::look_ahead).

Backtracking is by duplication.
Before some atom is given a value, the instance is cloned, and if the value leads to a conflict the clone is used to try the other value.
A clone is independent of the original in all respects, excepting the [coefficient table](crate::structures::coefficients), which is read-only and shared.

# Clauses

Each clause of the formula is given a key, and at any point outside of a propagation each key is in exactly one of:
- The active clauses of the [clause database](crate::db::clause).
- The [binary index](crate::db::binary).
- The satisfied keys of the clause database.

A clause moves from active to binary when propagation leaves the clause with exactly two literals, and from either to satisfied when some literal of the clause is made true.
Nothing leaves the satisfied keys.

# Example

```rust
# use std::rc::Rc;
# use lookahead_sat::config::dbs::InstanceConfig;
# use lookahead_sat::instance::Instance;
# use lookahead_sat::structures::coefficients::Coefficients;
let clauses = vec![vec![1, 2, 3], vec![-1, 2], vec![3]];
let coefficients = Rc::new(Coefficients::new(3, 0.2));
let instance = Instance::from_formula(3, &clauses, InstanceConfig::default(), coefficients);

assert_eq!(instance.clause_db.active_count(), 2);
assert!(instance.binary_db.partners(-1).contains(&(2, 1)));
assert!(instance.partition_holds());
assert!(!instance.is_satisfied());
```
*/

pub mod transient;
use transient::Transient;

use std::{collections::BTreeSet, rc::Rc};

use crate::{
    config::dbs::InstanceConfig,
    db::{atom::AtomDB, binary::BinaryIndex, clause::ClauseDB, literal::LiteralDB, ClauseKey},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        coefficients::Coefficients,
        literal::{CLiteral, Literal},
    },
    misc::log::targets::{self},
};

/// An instance of a formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    /// The configuration of the instance.
    pub config: InstanceConfig,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The binary index.
    /// See [db::binary](crate::db::binary) for details.
    pub binary_db: BinaryIndex,

    /// The literal database.
    /// See [db::literal](crate::db::literal) for details.
    pub literal_db: LiteralDB,

    /// A record of the most recent propagation.
    pub transient: Transient,
}

impl Instance {
    /// Builds an instance from the clauses of a formula, with each clause keyed by its position.
    ///
    /// Clauses are expected to be free of duplicate literals, though duplicates are removed if present.
    /// The atom count is extended to include every atom of every clause.
    pub fn from_formula(
        atom_count: Atom,
        clauses: &[CClause],
        config: InstanceConfig,
        coefficients: Rc<Coefficients>,
    ) -> Self {
        let atom_count = clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .fold(atom_count, Atom::max);

        let mut instance = Instance {
            config,
            atom_db: AtomDB::new(atom_count),
            clause_db: ClauseDB::new(clauses.len()),
            binary_db: BinaryIndex::new(atom_count),
            literal_db: LiteralDB::new(atom_count, config.literal_db, coefficients),
            transient: Transient::default(),
        };

        for (index, clause) in clauses.iter().enumerate() {
            let key = index as ClauseKey;

            let mut clause = clause.clone();
            clause.sort_unstable();
            clause.dedup();

            instance.literal_db.note_clause(&clause);

            match clause[..] {
                [a, b] => instance.binary_db.insert(a, b, key),

                _ => {
                    for atom in clause.atoms() {
                        instance.atom_db.note_occurrence(atom, key);
                    }
                    instance.clause_db.store(key, clause);
                }
            }
        }

        log::trace!(target: targets::CLAUSE_DB,
            "Instance of {atom_count} atoms and {} clauses, {} not binary.",
            clauses.len(),
            instance.clause_db.active_count()
        );

        instance
    }

    /// Whether every clause of the formula is satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.clause_db.all_satisfied()
    }

    /// The value of an atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// Whether every clause key is in exactly one of the active clauses, the binary index, or the satisfied keys.
    pub fn partition_holds(&self) -> bool {
        let active: BTreeSet<ClauseKey> = self.clause_db.active().map(|(key, _)| *key).collect();
        let binary = self.binary_db.keys();
        let satisfied = self.clause_db.satisfied();

        if !active.is_disjoint(&binary)
            || !active.is_disjoint(satisfied)
            || !binary.is_disjoint(satisfied)
        {
            return false;
        }

        let total = self.clause_db.total();
        active.len() + binary.len() + satisfied.len() == total
            && active
                .iter()
                .chain(binary.iter())
                .chain(satisfied.iter())
                .all(|key| (*key as usize) < total)
    }

    /// Whether each active clause is noted as an occurrence of each of its atoms, and each binary clause has both entries in the binary index.
    pub fn memberships_hold(&self) -> bool {
        let active_ok = self.clause_db.active().all(|(key, clause)| {
            clause
                .atoms()
                .all(|atom| self.atom_db.occurrences(atom).contains(key))
        });

        let binary_ok = self.atom_db.unassigned().iter().all(|atom| {
            [true, false].into_iter().all(|polarity| {
                let literal = CLiteral::new(*atom, polarity);
                self.binary_db
                    .partners(literal)
                    .iter()
                    .all(|(partner, key)| self.binary_db.partners(*partner).contains(&(literal, *key)))
            })
        });

        active_ok && binary_ok
    }
}
