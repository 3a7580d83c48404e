/*!
A look-ahead, to choose an atom to branch on.

See [Context::look_ahead] for the relevant context method.

# Overview

A look-ahead examines each [preselected](crate::procedures::preselect) atom in turn, skipping any atom given a value while the look-ahead is underway.
For each examined atom, two clones of the instance are made, and the atom is valued true in one and false in the other.
Then:
- If both propagations conflict, the instance is unsatisfiable.
- If one propagation conflicts, the atom is a 'failed literal' and must take the other value.
  The clone with the other value replaces the instance, and the look-ahead continues on the replacement.
- Otherwise, each clone is [scored](crate::procedures::heuristics) against the instance, and the atom is recorded if the product of the two scores is greater than that of any atom recorded before.

The result of a look-ahead is a [LookAhead]:
- Unsatisfiable, if some atom conflicts on both values, or there are no atoms to examine and some clause is not satisfied.
- Branch, if some atom was recorded and remains without a value.
- NoBranch, otherwise.
  In this case either some failed literal has been found, and the instance is different to the instance given, or the instance is satisfied.

# Example

```rust
# use lookahead_sat::config::Config;
# use lookahead_sat::context::Context;
# use lookahead_sat::procedures::look_ahead::LookAhead;
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1, 2]).is_ok());
assert!(the_context.add_clause(vec![1, -2, 3]).is_ok());

let mut instance = the_context.instance();

// Valuing 2 false conflicts, and so 2 is made true.
assert_ne!(the_context.look_ahead(&mut instance, 0), LookAhead::Unsatisfiable);
assert_eq!(instance.value_of(2), Some(true));
```
*/

use crate::{
    context::Context,
    instance::Instance,
    misc::log::targets::{self},
    structures::{atom::Atom, coefficients::Coefficient},
};

/// The result of a look-ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookAhead {
    /// The instance is unsatisfiable.
    Unsatisfiable,

    /// Failed literals were found, and no atom is to be branched on.
    NoBranch,

    /// Branch on the given atom.
    Branch {
        /// The atom to branch on.
        atom: Atom,

        /// Whether the score of the atom was higher when valued true.
        true_is_better: bool,
    },
}

impl Context {
    /// For documentation, see [procedures::look_ahead](crate::procedures::look_ahead).
    pub fn look_ahead(&mut self, instance: &mut Instance, level: usize) -> LookAhead {
        let candidates = instance.preselect(self.config.preselection.value, level);

        if candidates.is_empty() {
            log::trace!(target: targets::LOOK_AHEAD, "No candidates at level {level}.");
            return match instance.is_satisfied() {
                true => LookAhead::NoBranch,
                false => LookAhead::Unsatisfiable,
            };
        }

        let heuristic = self.config.look_ahead.value;

        let mut best: Option<(Atom, bool)> = None;
        let mut best_score: Coefficient = Coefficient::NEG_INFINITY;

        for atom in candidates {
            if instance.value_of(atom).is_some() {
                continue;
            }

            self.counters.look_aheads += 1;
            self.counters.propagations += 2;

            let mut true_instance = instance.clone();
            let true_ok = true_instance.propagate(atom, true).is_ok();

            let mut false_instance = instance.clone();
            let false_ok = false_instance.propagate(atom, false).is_ok();

            match (true_ok, false_ok) {
                (false, false) => {
                    log::trace!(target: targets::LOOK_AHEAD, "Both values of {atom} conflict.");
                    return LookAhead::Unsatisfiable;
                }

                (true, false) => {
                    log::trace!(target: targets::LOOK_AHEAD, "Failed literal -{atom}.");
                    self.counters.failed_literals += 1;
                    *instance = true_instance;
                }

                (false, true) => {
                    log::trace!(target: targets::LOOK_AHEAD, "Failed literal {atom}.");
                    self.counters.failed_literals += 1;
                    *instance = false_instance;
                }

                (true, true) => {
                    let true_score = true_instance.score(instance, heuristic);
                    let false_score = false_instance.score(instance, heuristic);
                    let score = true_score * false_score;

                    if score > best_score {
                        best_score = score;
                        best = Some((atom, true_score > false_score));
                    }
                }
            }
        }

        match best {
            Some((atom, true_is_better)) if instance.value_of(atom).is_none() => {
                log::trace!(target: targets::LOOK_AHEAD, "Branch on {atom}, with score {best_score}.");
                LookAhead::Branch {
                    atom,
                    true_is_better,
                }
            }

            _ => LookAhead::NoBranch,
        }
    }
}
