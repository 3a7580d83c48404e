/*!
A database of literal statistics.

Two statistics may be maintained for each literal:
- A count of the unsatisfied clauses the literal occurs in.
- A weight, the sum of the [coefficients](crate::structures::coefficients) of the unsatisfied clauses the literal occurs in, by the size of each clause when noted.

Which statistics are maintained is fixed by a [LiteralDBConfig], and a statistic which is not maintained reads as zero.

Statistics are updated as clauses shrink or are satisfied during [propagation](crate::procedures::propagate), and weights are further revised by the [look-ahead heuristics](crate::procedures::heuristics) on tentative instances.
*/

use std::rc::Rc;

use crate::{
    config::dbs::LiteralDBConfig,
    structures::{
        atom::Atom,
        coefficients::{Coefficient, Coefficients},
        literal::{literal_slots, CLiteral, Literal},
    },
};

/// The literal database.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralDB {
    /// Occurrence counts, indexed by [Literal::index], if maintained.
    counts: Option<Vec<isize>>,

    /// Weights, indexed by [Literal::index], if maintained.
    weights: Option<Vec<Coefficient>>,

    /// The coefficient table, shared by every instance derived from the same formula.
    coefficients: Rc<Coefficients>,
}

impl LiteralDB {
    /// A database for `atom_count` atoms, with every maintained statistic at zero.
    pub fn new(atom_count: Atom, config: LiteralDBConfig, coefficients: Rc<Coefficients>) -> Self {
        let slots = literal_slots(atom_count);
        LiteralDB {
            counts: config.counts.then(|| vec![0; slots]),
            weights: config.weights.then(|| vec![0.0; slots]),
            coefficients,
        }
    }

    /// The coefficient table.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Whether occurrence counts are maintained.
    pub fn maintains_counts(&self) -> bool {
        self.counts.is_some()
    }

    /// Whether weights are maintained.
    pub fn maintains_weights(&self) -> bool {
        self.weights.is_some()
    }

    /// Notes the occurrence of each literal of a clause.
    pub fn note_clause(&mut self, clause: &[CLiteral]) {
        let coefficient = self.coefficients.get(clause.len());
        for literal in clause {
            self.adjust(*literal, 1, coefficient);
        }
    }

    /// Removes an occurrence of `literal` from a clause of size `size`, taken before the removal.
    pub fn note_removal(&mut self, literal: CLiteral, size: usize) {
        let coefficient = self.coefficients.get(size);
        self.adjust(literal, -1, -coefficient);
    }

    /// Adds `delta` to the weight of `literal`, leaving the count unchanged.
    pub fn add_weight(&mut self, literal: CLiteral, delta: Coefficient) {
        if let Some(weights) = &mut self.weights {
            weights[literal.index()] += delta;
        }
    }

    fn adjust(&mut self, literal: CLiteral, count: isize, weight: Coefficient) {
        if let Some(counts) = &mut self.counts {
            counts[literal.index()] += count;
        }
        if let Some(weights) = &mut self.weights {
            weights[literal.index()] += weight;
        }
    }

    /// The occurrence count of `literal`, or zero if counts are not maintained.
    pub fn count(&self, literal: CLiteral) -> isize {
        match &self.counts {
            Some(counts) => counts[literal.index()],
            None => 0,
        }
    }

    /// The weight of `literal`, or zero if weights are not maintained.
    pub fn weight(&self, literal: CLiteral) -> Coefficient {
        match &self.weights {
            Some(weights) => weights[literal.index()],
            None => 0.0,
        }
    }
}
