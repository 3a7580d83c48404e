/*!
Heuristics to score a tentative propagation during a [look-ahead](crate::procedures::look_ahead).

Each heuristic is applied to a 'child' instance, the result of propagating some value of a candidate atom through a clone of some 'parent' instance.
The [transient record](crate::instance::transient) of the child describes the clauses reduced by the propagation, and of those, the clauses demoted to binary clauses.

- CRH, clause reduction: the sum of the coefficients of the reduced clauses (by current size).
- WBH, weighted binaries: for each new binary clause *a* ∨ *b*, the weight of ¬*a* plus the weight of ¬*b*.
- BSH, binary products: for each new binary clause *a* ∨ *b*, the weight of ¬*a* times the weight of ¬*b*.
- BSRH, binary ratios: as BSH, though with each weight normalised by the mean weight of the negations of the literals of reduced clauses, and each product scaled by the coefficient of a binary clause.

Before WBH, BSH, or BSRH is applied, the weights of the child are [recounted](Instance::recount) to reflect the reduced clauses.

A score which is not finite is treated as zero.
*/

use crate::{
    config::LookAheadHeuristic,
    db::ClauseKey,
    instance::Instance,
    structures::{
        coefficients::Coefficient,
        literal::{CLiteral, Literal},
    },
};

impl Instance {
    /// The score of the child instance `self`, relative to `parent`, on the given heuristic.
    pub fn score(&mut self, parent: &Instance, heuristic: LookAheadHeuristic) -> Coefficient {
        let score = match heuristic {
            LookAheadHeuristic::CRH => self.clause_reduction(),

            LookAheadHeuristic::WBH => {
                self.recount(parent);
                self.weighted_binaries()
            }

            LookAheadHeuristic::BSH => {
                self.recount(parent);
                self.binary_products()
            }

            LookAheadHeuristic::BSRH => {
                self.recount(parent);
                self.binary_ratios()
            }
        };

        match score.is_finite() {
            true => score,
            false => 0.0,
        }
    }

    /// The literals of a reduced clause, whether active or new binary.
    fn reduced_literals(&self, key: ClauseKey) -> &[CLiteral] {
        if let Some(pair) = self.transient.new_binary.get(&key) {
            return pair;
        }
        match self.clause_db.get(key) {
            Some(clause) => clause,
            None => &[],
        }
    }

    /// Sum of the coefficients of reduced clauses, by current size.
    ///
    /// New binary clauses count for one.
    pub fn clause_reduction(&self) -> Coefficient {
        let coefficients = self.literal_db.coefficients();
        self.transient
            .reduced
            .iter()
            .map(|key| match self.transient.new_binary.contains_key(key) {
                true => 1.0,
                false => match self.clause_db.get(*key) {
                    Some(clause) => coefficients.get(clause.len()),
                    None => 0.0,
                },
            })
            .sum()
    }

    /// Revises the weights of the literals of each reduced clause by the difference between the coefficient of the clause at its current size and the coefficient of the clause in `parent`.
    pub fn recount(&mut self, parent: &Instance) {
        let mut revisions: Vec<(CLiteral, Coefficient)> = Vec::default();

        for key in &self.transient.reduced {
            let Some(previous) = parent.clause_db.get(*key) else {
                continue;
            };
            let literals = self.reduced_literals(*key);

            let coefficients = self.literal_db.coefficients();
            let delta = coefficients.get(literals.len()) - coefficients.get(previous.len());

            revisions.extend(literals.iter().map(|literal| (*literal, delta)));
        }

        for (literal, delta) in revisions {
            self.literal_db.add_weight(literal, delta);
        }
    }

    /// For each new binary clause, the weight of the negation of each literal, summed.
    pub fn weighted_binaries(&self) -> Coefficient {
        self.transient
            .new_binary
            .values()
            .map(|[a, b]| {
                self.literal_db.weight(a.negate()) + self.literal_db.weight(b.negate())
            })
            .sum()
    }

    /// For each new binary clause, the weight of the negation of each literal, multiplied, and summed.
    pub fn binary_products(&self) -> Coefficient {
        self.transient
            .new_binary
            .values()
            .map(|[a, b]| {
                self.literal_db.weight(a.negate()) * self.literal_db.weight(b.negate())
            })
            .sum()
    }

    /// For each new binary clause, the normalised weight of the negation of each literal, multiplied, scaled, and summed.
    pub fn binary_ratios(&self) -> Coefficient {
        let normalisation = self.normalisation();
        let binary_coefficient = self.literal_db.coefficients().get(2);

        self.transient
            .new_binary
            .values()
            .map(|[a, b]| {
                binary_coefficient
                    * (self.literal_db.weight(a.negate()) / normalisation)
                    * (self.literal_db.weight(b.negate()) / normalisation)
            })
            .sum()
    }

    /// The mean weight of the negation of the literals of reduced clauses, or one if the mean is undefined or zero.
    fn normalisation(&self) -> Coefficient {
        let mut total_weight = 0.0;
        let mut occurrences = 0;

        for key in &self.transient.reduced {
            for literal in self.reduced_literals(*key) {
                total_weight += self.literal_db.weight(literal.negate());
                occurrences += 1;
            }
        }

        match occurrences {
            0 => 1.0,
            _ => {
                let mean = total_weight / occurrences as Coefficient;
                match mean == 0.0 || !mean.is_finite() {
                    true => 1.0,
                    false => mean,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        config::dbs::{InstanceConfig, LiteralDBConfig},
        structures::{atom::Atom, clause::CClause, coefficients::Coefficients},
    };

    use super::*;

    fn instance(atom_count: Atom, clauses: &[CClause]) -> Instance {
        let config = InstanceConfig {
            literal_db: LiteralDBConfig {
                counts: true,
                weights: true,
            },
            local_learning: false,
        };
        let coefficients = Rc::new(Coefficients::new(4, 0.2));
        Instance::from_formula(atom_count, clauses, config, coefficients)
    }

    #[test]
    fn clause_reduction() {
        let parent = instance(5, &[vec![1, 2, 3], vec![1, 3, 4, 5]]);
        let mut child = parent.clone();

        assert!(child.propagate(1, false).is_ok());
        // One new binary (1), and one ternary (0.2).
        assert!((child.score(&parent, LookAheadHeuristic::CRH) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn satisfied_clauses_do_not_count() {
        let parent = instance(4, &[vec![1, 2, 3], vec![1, 3, 4]]);
        let mut child = parent.clone();

        assert!(child.propagate(1, true).is_ok());
        assert!(child.transient.reduced.is_empty());
        assert_eq!(child.score(&parent, LookAheadHeuristic::CRH), 0.0);
        assert_eq!(child.score(&parent, LookAheadHeuristic::WBH), 0.0);
        assert_eq!(child.score(&parent, LookAheadHeuristic::BSH), 0.0);
        assert_eq!(child.score(&parent, LookAheadHeuristic::BSRH), 0.0);
    }

    #[test]
    fn recount_updates_child_only() {
        let parent = instance(3, &[vec![1, 2, 3]]);
        let mut child = parent.clone();

        assert!(child.propagate(1, false).is_ok());
        assert!((child.literal_db.weight(2) - 0.2).abs() < 1e-12);

        child.recount(&parent);
        // From a ternary coefficient to a binary coefficient.
        assert!((child.literal_db.weight(2) - 1.0).abs() < 1e-12);
        assert!((parent.literal_db.weight(2) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn binary_heuristics() {
        // The negations of 2 and 3 occur in a binary clause each.
        let parent = instance(4, &[vec![1, 2, 3], vec![-2, 4], vec![-3, -4]]);

        let mut child = parent.clone();
        assert!(child.propagate(1, false).is_ok());
        assert!(child.transient.new_binary.contains_key(&0));

        let wbh = child.clone().score(&parent, LookAheadHeuristic::WBH);
        assert!((wbh - 2.0).abs() < 1e-12);

        let bsh = child.clone().score(&parent, LookAheadHeuristic::BSH);
        assert!((bsh - 1.0).abs() < 1e-12);

        // The mean of the weights of -2 and -3 is 1, so the ratio is the product.
        let bsrh = child.clone().score(&parent, LookAheadHeuristic::BSRH);
        assert!((bsrh - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_normalisation() {
        let parent = instance(3, &[vec![1, 2, 3]]);
        let mut child = parent.clone();

        assert!(child.propagate(1, false).is_ok());
        assert_eq!(child.score(&parent, LookAheadHeuristic::BSRH), 0.0);
    }
}
