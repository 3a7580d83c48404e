//! Abstract structures used throughout the library.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), atoms paired with a polarity.
//! - [Clauses](clause), disjunctions of literals.
//! - [Coefficients](coefficients), weights of clauses by size, used by heuristics.

pub mod atom;
pub mod clause;
pub mod coefficients;
pub mod literal;
