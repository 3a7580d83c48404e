/*!
The value to try first, when branching on some atom.

See [Instance::first_polarity] for the relevant instance method, and [DirectionHeuristic] for the available heuristics.

- KCNFS: true, if the positive literal occurs in more unsatisfied clauses than the negative literal.
- MARCH: the opposite of whichever value gave the higher look-ahead score, so the branch with less reduction is explored first.
- POSIT: true, if the weight of the positive literal is less than the weight of the negative literal.
- FIXED: always true.
*/

use crate::{
    config::DirectionHeuristic,
    instance::Instance,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

impl Instance {
    /// The value to try first for `atom`.
    ///
    /// `true_is_better` is whether the look-ahead score of the atom was higher when valued true.
    pub fn first_polarity(
        &self,
        atom: Atom,
        direction: DirectionHeuristic,
        true_is_better: bool,
    ) -> bool {
        let positive = CLiteral::new(atom, true);
        let negative = CLiteral::new(atom, false);

        match direction {
            DirectionHeuristic::KCNFS => {
                self.literal_db.count(positive) > self.literal_db.count(negative)
            }

            DirectionHeuristic::MARCH => !true_is_better,

            DirectionHeuristic::POSIT => {
                self.literal_db.weight(positive) < self.literal_db.weight(negative)
            }

            DirectionHeuristic::FIXED => true,
        }
    }
}
