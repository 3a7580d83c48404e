/*!
Preselection of the atoms examined during a [look-ahead](crate::procedures::look_ahead).

See [Instance::preselect] for the relevant instance method, and [Preselection] for the policies.

- All: every atom without a value.
- Propz: every atom without a value, unless some decisions have been made and many atoms are without a value.
  In which case, the atoms occurring in binary clauses with both polarities, padded with other atoms (in order) to ten atoms.
- Cra: every atom without a value, unless many atoms are without a value.
  In which case, the atoms with the highest clause reduction approximation, of which at least twenty, or a tenth of the atoms without a value, are taken.

The clause reduction approximation of an atom *a* is the product of a positive and negative sum.
The positive sum is, for each binary clause *a* ∨ *p*, a count of the clauses (other than binary clauses) containing ¬*p*.
That is, a count of the clauses reduced by the binary implication of *p* from ¬*a*.
And, likewise for the negative sum with ¬*a* in place of *a*.

Preselection returns an ordered set, and so candidates are visited in order of atom.
*/

use std::collections::BTreeSet;

use crate::{
    config::Preselection,
    instance::Instance,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Below this decision level Propz selects every atom.
pub const PROPZ_LEVEL: usize = 5;

/// The count of atoms selected by Propz, when selecting.
pub const PROPZ_COUNT: usize = 10;

/// The minimum count of atoms selected by Cra, when selecting.
pub const CRA_COUNT: usize = 20;

impl Instance {
    /// The candidate atoms of a look-ahead at the given decision level.
    pub fn preselect(&self, policy: Preselection, level: usize) -> BTreeSet<Atom> {
        let unassigned = self.atom_db.unassigned();

        let candidates = match policy {
            Preselection::All => unassigned.clone(),

            Preselection::Propz => {
                if level < PROPZ_LEVEL || unassigned.len() <= PROPZ_COUNT {
                    unassigned.clone()
                } else {
                    self.preselect_propz()
                }
            }

            Preselection::Cra => {
                if unassigned.len() < CRA_COUNT {
                    unassigned.clone()
                } else {
                    self.preselect_cra()
                }
            }
        };

        log::trace!(target: targets::PRESELECTION, "{policy} selected {} of {} atoms.", candidates.len(), unassigned.len());

        candidates
    }

    fn preselect_propz(&self) -> BTreeSet<Atom> {
        let unassigned = self.atom_db.unassigned();

        let mut selection: BTreeSet<Atom> = unassigned
            .iter()
            .copied()
            .filter(|atom| {
                self.binary_db.count(CLiteral::new(*atom, true)) > 0
                    && self.binary_db.count(CLiteral::new(*atom, false)) > 0
            })
            .collect();

        for atom in unassigned {
            if selection.len() >= PROPZ_COUNT {
                break;
            }
            selection.insert(*atom);
        }

        selection
    }

    fn preselect_cra(&self) -> BTreeSet<Atom> {
        let unassigned = self.atom_db.unassigned();

        let mut scores: Vec<(isize, Atom)> = unassigned
            .iter()
            .map(|atom| {
                let positive = self.reduction_approximation(CLiteral::new(*atom, true));
                let negative = self.reduction_approximation(CLiteral::new(*atom, false));
                (positive.saturating_mul(negative), *atom)
            })
            .collect();

        // Highest score first, ties broken by lowest atom.
        scores.sort_unstable_by(|(score_a, atom_a), (score_b, atom_b)| {
            score_b.cmp(score_a).then(atom_a.cmp(atom_b))
        });

        let count = CRA_COUNT.max(unassigned.len() / 10);
        scores.into_iter().take(count).map(|(_, atom)| atom).collect()
    }

    /// For each binary clause `literal` ∨ *p*, the count of occurrences of ¬*p* in clauses which are not binary.
    fn reduction_approximation(&self, literal: CLiteral) -> isize {
        self.binary_db
            .partners(literal)
            .iter()
            .map(|(partner, _)| {
                let negation = partner.negate();
                self.literal_db.count(negation) - self.binary_db.count(negation) as isize
            })
            .sum()
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

    fn instance(atom_count: Atom, clauses: &[CClause]) -> Instance {
        let config = InstanceConfig {
            literal_db: LiteralDBConfig {
                counts: true,
                weights: false,
            },
            local_learning: false,
        };
        let coefficients = Rc::new(Coefficients::new(3, 0.2));
        Instance::from_formula(atom_count, clauses, config, coefficients)
    }

    #[test]
    fn all() {
        let mut the_instance = instance(4, &[vec![1, 2, 3, 4]]);
        assert!(the_instance.propagate(2, false).is_ok());

        let candidates = the_instance.preselect(Preselection::All, 0);
        assert_eq!(candidates.into_iter().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn propz_small_or_shallow() {
        let the_instance = instance(12, &[vec![1, 2, 3, 12]]);

        assert_eq!(the_instance.preselect(Preselection::Propz, 0).len(), 12);
        assert_eq!(the_instance.preselect(Preselection::Propz, 4).len(), 12);
    }

    #[test]
    fn propz_pads_to_ten() {
        // Atom 12 occurs in binary clauses with both polarities.
        let the_instance = instance(12, &[vec![12, 1], vec![-12, 2]]);

        let candidates = the_instance.preselect(Preselection::Propz, 5);
        assert_eq!(candidates.len(), 10);
        assert!(candidates.contains(&12));
        assert!(candidates.contains(&1));
        assert!(!candidates.contains(&10));
    }

    #[test]
    fn cra_small() {
        let the_instance = instance(19, &[vec![1, 2, 19]]);
        assert_eq!(the_instance.preselect(Preselection::Cra, 0).len(), 19);
    }

    #[test]
    fn cra_prefers_reductions() {
        // 30 atoms, of which atom 25 implies reductions with both polarities.
        let clauses = vec![
            vec![25, 1],
            vec![-1, 2, 3],
            vec![-25, 4],
            vec![-4, 5, 6],
            vec![-4, 7, 8],
        ];
        let the_instance = instance(30, &clauses);

        let candidates = the_instance.preselect(Preselection::Cra, 0);
        assert_eq!(candidates.len(), 20);
        assert!(candidates.contains(&25));
        // The remaining candidates are the lowest atoms, all with score zero.
        assert!(candidates.contains(&19));
        assert!(!candidates.contains(&20));
    }
}
