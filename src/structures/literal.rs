//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is a signed integer, where the absolute value of the integer is the atom and the sign of the integer is the polarity.
//!
//! ```rust
//! # use lookahead_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), -79);
//! assert!(!literal.negate().polarity());
//! ```
//!
//! Literals are also used to index structures with an entry for each literal, such as the [binary index](crate::db::binary).
//! For this, [index](Literal::index) maps the literals of atom *a* to 2*a* (negative) and 2*a* + 1 (positive).

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The position of the literal in a structure with an entry for each literal.
    fn index(&self) -> usize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self) -> usize {
        2 * (self.atom() as usize) + (self.polarity() as usize)
    }
}

/// The number of entries required to index every literal of every atom up to and including `atom`.
pub fn literal_slots(atom: Atom) -> usize {
    2 * (atom as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_and_negation() {
        for atom in 1..42 {
            let positive = CLiteral::new(atom, true);
            let negative = CLiteral::new(atom, false);

            assert_eq!(positive.atom(), atom);
            assert_eq!(negative.atom(), atom);
            assert!(positive.polarity());
            assert!(!negative.polarity());
            assert_eq!(positive.negate(), negative);
        }
    }

    #[test]
    fn indicies_are_distinct() {
        let slots = literal_slots(4);
        let mut seen = vec![false; slots];
        for atom in 1..=4 {
            for polarity in [true, false] {
                let index = CLiteral::new(atom, polarity).index();
                assert!(index < slots);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
    }
}
