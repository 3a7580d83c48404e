//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use lookahead_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//!
//! let mut some_valuation = vec![Some(true); 42];
//! assert!(clause.satisfied_on(&some_valuation));
//!
//! some_valuation[23] = Some(false);
//! some_valuation[15] = Some(false);
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[41] = None;
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[4] = Some(false);
//! assert!(clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether some literal of the clause is true on the given valuation, indexed by atom.
    ///
    /// Atoms outside of the valuation, or without a value, do not satisfy the clause.
    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.literals().any(|literal| {
            valuation
                .get(literal.atom() as usize)
                .is_some_and(|value| *value == Some(literal.polarity()))
        })
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            let the_represenetation = match literal.polarity() {
                true => format!(" {} ", literal.atom()),
                false => format!("-{} ", literal.atom()),
            };
            the_string.push_str(the_represenetation.as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        let the_represenetation = match self.polarity() {
            true => format!(" {}", self.atom()),
            false => format!("-{}", self.atom()),
        };
        match zero {
            true => format!("{the_represenetation} 0"),
            false => the_represenetation,
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
