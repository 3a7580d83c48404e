//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](crate::context::Context::solve) builds an [instance](crate::instance) of the formula, propagates the literal of each unit clause, and then applies [dpll](crate::context::Context::dpll) to the instance.
//!
//! dpll is a recursive search, with each step:
//! - Returning *satisfiable*, if every clause of the instance is satisfied.
//! - Otherwise, making a [look-ahead](crate::procedures::look_ahead):
//!   + If the look-ahead finds the instance is unsatisfiable, returning *unsatisfiable*.
//!   + If the look-ahead finds only failed literals, repeating the step on the (revised) instance.
//!   + If the look-ahead returns some atom to branch on, cloning the instance and valuing the atom in the original with the [direction](crate::procedures::direction) heuristic.
//!     If propagation of the value succeeds, and a recursive application of dpll to the result is *satisfiable*, returning *satisfiable*.
//!     Otherwise, the atom is given the other value in the clone, and the result of propagating that value and a recursive application of dpll is returned.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                        +------------+
//!   +------------------->| look-ahead |----------> unsatisfiable
//!   |                    +------------+
//!   |        no branch      |      |
//!   +-----------------------+      | branch on a
//!   ⌃                              ⌄
//!   |                     +----------------+
//!   +---------------------| a, or else ¬a |
//!          recursion      +----------------+
//! ```
//!
//! Each branch increases the decision level by one, and the decision level is used by some [preselection](crate::procedures::preselect) policies.
//!
//! # Example
//!
//! ```rust
//! # use lookahead_sat::config::{Config, DirectionHeuristic};
//! # use lookahead_sat::context::Context;
//! # use lookahead_sat::reports::Report;
//! let mut config = Config::default();
//! config.direction.value = DirectionHeuristic::MARCH;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.add_clause(vec![1, 2, 3]).is_ok());
//! assert!(the_context.add_clause(vec![-1, -2]).is_ok());
//! assert!(the_context.add_clause(vec![-2, -3]).is_ok());
//! assert!(the_context.add_clause(vec![-1, -3]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! // Solving again gives the same result.
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```

use std::time::Instant;

use crate::{
    context::{Context, ContextState},
    instance::Instance,
    misc::log::targets::{self},
    procedures::look_ahead::LookAhead,
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// If satisfiability is already known, the known report is returned.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            ContextState::Solving => {
                return Err(err::ErrorKind::from(err::StateError::SolveComplete));
            }
        }

        let start = Instant::now();
        self.state = ContextState::Solving;

        let mut instance = self.instance();

        let satisfiable = match instance.propagate_units() {
            Ok(count) => {
                self.counters.propagations += count;
                self.dpll(&mut instance, 0)
            }

            Err(err::PropagationError::Conflict(key)) => {
                log::info!(target: targets::SEARCH, "Conflict from unit clauses, in clause {key}.");
                false
            }
        };

        self.counters.time = start.elapsed();
        self.state = match satisfiable {
            true => ContextState::Satisfiable,
            false => ContextState::Unsatisfiable,
        };

        log::info!(target: targets::SEARCH, "Solve complete: {}", self.state);

        Ok(self.report())
    }

    /// For documentation, see [procedures::solve](crate::procedures::solve).
    ///
    /// Returns whether the formula of `instance` is satisfiable, having made decisions at `level` levels above the instance given to [solve](Context::solve).
    ///
    /// If satisfiable, `instance` is left with every clause satisfied by the values given to atoms.
    /// Otherwise, `instance` should be discarded.
    pub fn dpll(&mut self, instance: &mut Instance, level: usize) -> bool {
        self.counters.deepest_level = self.counters.deepest_level.max(level);

        loop {
            if instance.is_satisfied() {
                return true;
            }

            match self.look_ahead(instance, level) {
                LookAhead::Unsatisfiable => return false,

                LookAhead::NoBranch => continue,

                LookAhead::Branch {
                    atom,
                    true_is_better,
                } => {
                    self.counters.decisions += 1;

                    let polarity =
                        instance.first_polarity(atom, self.config.direction.value, true_is_better);

                    log::trace!(target: targets::SEARCH, "Decision {atom} = {polarity} at level {}.", level + 1);

                    let mut alternative = instance.clone();

                    self.counters.propagations += 1;
                    if instance.propagate(atom, polarity).is_ok() && self.dpll(instance, level + 1) {
                        return true;
                    }

                    log::trace!(target: targets::SEARCH, "Alternative {atom} = {} at level {}.", !polarity, level + 1);

                    self.counters.propagations += 1;
                    if alternative.propagate(atom, !polarity).is_ok()
                        && self.dpll(&mut alternative, level + 1)
                    {
                        *instance = alternative;
                        return true;
                    }

                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DirectionHeuristic, LookAheadHeuristic, Preselection};

    use super::*;

    fn context(config: Config, clauses: &[Vec<i32>]) -> Context {
        let mut the_context = Context::from_config(config);
        for clause in clauses {
            assert!(the_context.add_clause(clause.clone()).is_ok());
        }
        the_context
    }

    #[test]
    fn contradictory_units() {
        let mut the_context = context(Config::default(), &[vec![1], vec![-1]]);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn all_positive_long_clauses() {
        let mut config = Config::default();
        config.direction.value = DirectionHeuristic::FIXED;

        let clauses = [vec![1, 2, 3], vec![1, 4, 5, 6], vec![1, 2, 5]];
        let mut the_context = context(config, &clauses);

        let mut instance = the_context.instance();
        assert!(the_context.dpll(&mut instance, 0));
        assert!(instance.is_satisfied());
        assert_eq!(instance.value_of(1), Some(true));
        assert_eq!(the_context.counters.decisions, 1);
    }

    #[test]
    fn first_decision_retires_without_binaries() {
        let clauses = [vec![1, 2, 3], vec![1, 4, 5, 6], vec![1, 2, 5]];
        let the_context = context(Config::default(), &clauses);

        let mut instance = the_context.instance();
        assert!(instance.propagate(1, true).is_ok());
        assert!(instance.transient.new_binary.is_empty());
        assert!(instance.is_satisfied());
    }

    #[test]
    fn pigeonhole_three_into_two() {
        // p_ij: pigeon i in hole j, as atom 2(i - 1) + j.
        let mut clauses = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        for hole in [1, 2] {
            let pigeons = [hole, 2 + hole, 4 + hole];
            for a in 0..3 {
                for b in (a + 1)..3 {
                    clauses.push(vec![-pigeons[a], -pigeons[b]]);
                }
            }
        }

        for heuristic in [LookAheadHeuristic::CRH, LookAheadHeuristic::BSRH] {
            for preselection in [Preselection::All, Preselection::Propz, Preselection::Cra] {
                let mut config = Config::default();
                config.look_ahead.value = heuristic;
                config.preselection.value = preselection;

                let mut the_context = context(config, &clauses);
                assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
            }
        }
    }

    #[test]
    fn counters_are_updated() {
        let clauses = [
            vec![1, 2, 3],
            vec![-1, -2, 3],
            vec![1, -2, -3],
            vec![-1, 2, -3],
        ];
        let mut the_context = context(Config::default(), &clauses);

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(the_context.counters.look_aheads > 0);
        assert!(the_context.counters.propagations >= 2 * the_context.counters.look_aheads);
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.counters.decisions, 0);
    }
}
