/*!
Propagation of a value given to an atom, through the clauses of an instance.

See [Instance::propagate] for the relevant instance method.

# Overview

Propagation works through a stack of assignments, seeded with the given atom and value.
Values are set as assignments are pushed to the stack, and so the consequences of an assignment are visible to any clause examined before the assignment is popped.

For each popped assignment, and for each active clause the atom occurs in:
- If the clause contains the literal made true, the clause is satisfied and retired.
- Otherwise, the literal made false is removed from the clause, and the clause is noted as reduced.
  Then, by the count of remaining literals:
  + None, and the clause is in conflict with the valuation.
  + One, and the remaining literal is forced.
  + Two, and the clause is demoted to the [binary index](crate::db::binary).
  + More, and the clause remains active.

After long clauses, binary clauses are examined:
- Each binary clause containing the literal made true is retired.
- Each binary clause containing the literal made false forces the other literal of the clause.

Propagation ends when the stack is empty, or on the first conflict.
On a conflict the instance is left part way through the propagation, and should be discarded.

# Statistics

As clauses shrink and are retired, the [literal database](crate::db::literal) is updated:
- A removed literal loses one occurrence, and the coefficient of the clause it was removed from (by the size of the clause before the removal).
- Each literal of a retired clause loses one occurrence, and the coefficient of the clause (by current size).

# Example

```rust
# use std::rc::Rc;
# use lookahead_sat::config::dbs::InstanceConfig;
# use lookahead_sat::instance::Instance;
# use lookahead_sat::structures::coefficients::Coefficients;
let clauses = vec![vec![1, 2, 3], vec![-3, 2], vec![-2, -1]];
let coefficients = Rc::new(Coefficients::new(3, 0.2));
let mut instance = Instance::from_formula(3, &clauses, InstanceConfig::default(), coefficients);

assert!(instance.propagate(1, true).is_ok());
assert_eq!(instance.value_of(2), Some(false));
assert_eq!(instance.value_of(3), Some(false));
assert!(instance.is_satisfied());

let clauses = vec![vec![-1, 2], vec![-1, -2]];
let coefficients = Rc::new(Coefficients::new(2, 0.2));
let mut instance = Instance::from_formula(2, &clauses, InstanceConfig::default(), coefficients);
assert!(instance.propagate(1, true).is_err());
```
*/

use crate::{
    db::{atom::AtomValue, ClauseKey},
    instance::Instance,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl Instance {
    /// For documentation, see [procedures::propagate](crate::procedures::propagate).
    ///
    /// The atom is expected to be without a value.
    pub fn propagate(&mut self, atom: Atom, value: bool) -> Result<(), err::PropagationError> {
        self.transient.clear();

        self.atom_db.set_value(atom, value);
        let mut stack: Vec<CLiteral> = vec![CLiteral::new(atom, value)];

        while let Some(literal) = stack.pop() {
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}.");
            self.atom_db.settle(literal.atom());

            // Long clause block.
            for key in self.atom_db.take_occurrences(literal.atom()) {
                let satisfied = match self.clause_db.get(key) {
                    Some(clause) => clause.contains(&literal),
                    None => continue,
                };

                if satisfied {
                    self.retire_active(key);
                    continue;
                }

                self.remove_literal(key, literal.negate(), &mut stack)?;
            }

            // Binary clause block.
            {
                let satisfied: Vec<_> = self.binary_db.partners(literal).iter().copied().collect();
                for (partner, key) in satisfied {
                    self.retire_binary(literal, partner, key);
                }

                let implications: Vec<_> = self
                    .binary_db
                    .partners(literal.negate())
                    .iter()
                    .copied()
                    .collect();

                for (partner, key) in implications {
                    match self.atom_db.check(partner) {
                        AtomValue::NotSet => {
                            if self.config.local_learning && self.transient.reduced.contains(&key) {
                                self.transient.implicated.insert(partner.atom());
                            }
                            self.atom_db.set_value(partner.atom(), partner.polarity());
                            stack.push(partner);
                        }

                        AtomValue::Same => {}

                        AtomValue::Different => {
                            log::trace!(target: targets::PROPAGATION, "Conflict in binary clause {key}.");
                            return Err(err::PropagationError::Conflict(key));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Propagates the literal of each unit clause of the instance, returning a count of calls to [propagate](Instance::propagate).
    ///
    /// A unit clause whose literal is already true is skipped.
    pub fn propagate_units(&mut self) -> Result<usize, err::PropagationError> {
        let units: Vec<(ClauseKey, CLiteral)> = self
            .clause_db
            .active()
            .filter_map(|(key, clause)| match clause[..] {
                [literal] => Some((*key, literal)),
                _ => None,
            })
            .collect();

        let mut propagations = 0;
        for (key, literal) in units {
            match self.atom_db.check(literal) {
                AtomValue::NotSet => {
                    propagations += 1;
                    self.propagate(literal.atom(), literal.polarity())?;
                }

                AtomValue::Same => {}

                AtomValue::Different => return Err(err::PropagationError::Conflict(key)),
            }
        }

        Ok(propagations)
    }

    /// Removes a false literal from an active clause, and updates the clause by the count of remaining literals.
    fn remove_literal(
        &mut self,
        key: ClauseKey,
        falsum: CLiteral,
        stack: &mut Vec<CLiteral>,
    ) -> Result<(), err::PropagationError> {
        let Some(clause) = self.clause_db.get_mut(key) else {
            return Ok(());
        };

        let size = clause.len();
        clause.retain(|literal| *literal != falsum);
        self.literal_db.note_removal(falsum, size);
        self.transient.reduced.insert(key);

        match clause.len() {
            0 => {
                log::trace!(target: targets::PROPAGATION, "Conflict in clause {key}.");
                Err(err::PropagationError::Conflict(key))
            }

            1 => {
                let forced = clause[0];
                match self.atom_db.check(forced) {
                    AtomValue::NotSet => {
                        self.atom_db.set_value(forced.atom(), forced.polarity());
                        stack.push(forced);
                        Ok(())
                    }

                    AtomValue::Same => Ok(()),

                    AtomValue::Different => {
                        log::trace!(target: targets::PROPAGATION, "Conflict in unit clause {key}.");
                        Err(err::PropagationError::Conflict(key))
                    }
                }
            }

            2 => {
                let (a, b) = (clause[0], clause[1]);
                self.clause_db.remove(key);
                self.atom_db.detach(a.atom(), key);
                self.atom_db.detach(b.atom(), key);
                self.binary_db.insert(a, b, key);
                self.transient.new_binary.insert(key, [a, b]);
                Ok(())
            }

            _ => Ok(()),
        }
    }

    /// Retires an active clause as satisfied.
    fn retire_active(&mut self, key: ClauseKey) {
        let Some(clause) = self.clause_db.remove(key) else {
            return;
        };

        let size = clause.len();
        for literal in clause {
            self.literal_db.note_removal(literal, size);
            self.atom_db.detach(literal.atom(), key);
        }

        self.transient.forget(key);
        self.clause_db.note_satisfied(key);
    }

    /// Retires a binary clause as satisfied.
    fn retire_binary(&mut self, a: CLiteral, b: CLiteral, key: ClauseKey) {
        self.binary_db.remove(a, b, key);
        self.literal_db.note_removal(a, 2);
        self.literal_db.note_removal(b, 2);

        self.transient.forget(key);
        self.clause_db.note_satisfied(key);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        config::dbs::{InstanceConfig, LiteralDBConfig},
        structures::{clause::CClause, coefficients::Coefficients},
    };

    use super::*;

    fn instance(atom_count: Atom, clauses: &[CClause], local_learning: bool) -> Instance {
        let config = InstanceConfig {
            literal_db: LiteralDBConfig {
                counts: true,
                weights: true,
            },
            local_learning,
        };
        let coefficients = Rc::new(Coefficients::new(4, 0.2));
        Instance::from_formula(atom_count, clauses, config, coefficients)
    }

    #[test]
    fn contradictory_units() {
        let mut the_instance = instance(1, &[vec![1], vec![-1]], false);
        assert_eq!(
            the_instance.propagate(1, true),
            Err(err::PropagationError::Conflict(1))
        );

        let mut the_instance = instance(1, &[vec![1], vec![-1]], false);
        assert_eq!(
            the_instance.propagate(1, false),
            Err(err::PropagationError::Conflict(0))
        );
    }

    #[test]
    fn ternary_lifecycle() {
        let mut the_instance = instance(3, &[vec![1, 2, 3]], false);

        assert!(the_instance.propagate(1, false).is_ok());
        assert!(the_instance.clause_db.get(0).is_none());
        assert!(the_instance.binary_db.partners(2).contains(&(3, 0)));
        assert!(the_instance.transient.reduced.contains(&0));
        assert_eq!(the_instance.transient.new_binary.get(&0), Some(&[2, 3]));
        assert!(the_instance.partition_holds());

        assert!(the_instance.propagate(2, false).is_ok());
        assert_eq!(the_instance.value_of(3), Some(true));
        assert!(the_instance.binary_db.partners(3).is_empty());
        assert!(the_instance.clause_db.is_satisfied(0));
        assert!(the_instance.is_satisfied());
        assert!(the_instance.partition_holds());
    }

    #[test]
    fn reduced_but_active() {
        let mut the_instance = instance(4, &[vec![1, 2, 3], vec![3, 4, -1, 2]], false);

        assert!(the_instance.propagate(1, true).is_ok());
        assert!(the_instance.clause_db.is_satisfied(0));
        assert_eq!(the_instance.clause_db.get(1), Some(&vec![2, 3, 4]));
        assert!(the_instance.transient.reduced.contains(&1));
        assert!(the_instance.transient.new_binary.is_empty());
        assert!(the_instance.partition_holds());
        assert!(the_instance.memberships_hold());
    }

    #[test]
    fn demotion_to_binary() {
        let mut the_instance = instance(4, &[vec![1, 2, 3, 4]], false);

        assert!(the_instance.propagate(1, false).is_ok());
        assert!(the_instance.propagate(2, false).is_ok());

        assert!(the_instance.clause_db.get(0).is_none());
        assert!(the_instance.binary_db.partners(3).contains(&(4, 0)));
        assert!(the_instance.binary_db.partners(4).contains(&(3, 0)));
        assert_eq!(the_instance.transient.new_binary.get(&0), Some(&[3, 4]));
        assert!(the_instance.atom_db.occurrences(3).is_empty());
        assert!(the_instance.partition_holds());
        assert!(the_instance.memberships_hold());

        assert!(the_instance.propagate(3, false).is_ok());
        assert_eq!(the_instance.value_of(4), Some(true));
        assert!(the_instance.is_satisfied());
        assert!(the_instance.partition_holds());
    }

    #[test]
    fn binary_retirement_is_symmetric() {
        let mut the_instance = instance(3, &[vec![1, 2], vec![2, 3, -1]], false);

        assert_eq!(the_instance.literal_db.count(2), 2);
        assert!(the_instance.propagate(2, true).is_ok());

        assert!(the_instance.binary_db.partners(1).is_empty());
        assert!(the_instance.binary_db.partners(2).is_empty());
        assert_eq!(the_instance.literal_db.count(1), 0);
        assert_eq!(the_instance.literal_db.count(2), 0);
        assert!(the_instance.literal_db.weight(1).abs() < 1e-12);
        assert!(the_instance.is_satisfied());
    }

    #[test]
    fn binary_implication_chain() {
        let mut the_instance = instance(4, &[vec![-1, 2], vec![-2, 3], vec![-3, 4]], false);

        assert!(the_instance.propagate(1, true).is_ok());
        assert_eq!(the_instance.value_of(4), Some(true));
        assert!(the_instance.atom_db.unassigned().is_empty());
        assert!(the_instance.is_satisfied());
    }

    #[test]
    fn binary_conflict() {
        let mut the_instance = instance(2, &[vec![-1, 2], vec![-1, -2]], false);
        assert!(the_instance.propagate(1, true).is_err());
    }

    #[test]
    fn local_learning_records_implications() {
        let clauses = vec![vec![1, 2, 3], vec![1, -2]];

        let mut the_instance = instance(3, &clauses, true);
        assert!(the_instance.propagate(1, false).is_ok());
        assert!(the_instance.transient.implicated.contains(&3));
        assert!(!the_instance.transient.implicated.contains(&2));
        assert!(the_instance.is_satisfied());

        let mut the_instance = instance(3, &clauses, false);
        assert!(the_instance.propagate(1, false).is_ok());
        assert!(the_instance.transient.implicated.is_empty());
    }

    #[test]
    fn unit_clauses() {
        let mut the_instance = instance(3, &[vec![1], vec![-1, 2], vec![-2, -3, 1], vec![3]], false);
        assert_eq!(the_instance.propagate_units(), Ok(2));
        assert_eq!(the_instance.value_of(2), Some(true));
        assert!(the_instance.is_satisfied());

        let mut the_instance = instance(2, &[vec![1], vec![-1, 2], vec![-2]], false);
        assert!(the_instance.propagate_units().is_err());
    }

    #[test]
    fn transient_record_is_fresh() {
        let mut the_instance = instance(5, &[vec![1, 2, 3], vec![3, 4, 5]], false);

        assert!(the_instance.propagate(1, false).is_ok());
        assert!(the_instance.transient.reduced.contains(&0));

        assert!(the_instance.propagate(4, false).is_ok());
        assert!(!the_instance.transient.reduced.contains(&0));
        assert!(the_instance.transient.reduced.contains(&1));
    }
}
