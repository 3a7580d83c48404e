//! Databases for holding the state of an [instance](crate::instance).
//!
//! - [The atom database](crate::db::atom)
//!   + The (partial) valuation, the atoms without a value, and the long clauses each atom occurs in.
//! - [The clause database](crate::db::clause)
//!   + Long (and unit) clauses, indexed by clause key, together with the keys of satisfied clauses.
//! - [The binary index](crate::db::binary)
//!   + Binary clauses, indexed by each of their literals.
//! - [The literal database](crate::db::literal)
//!   + Occurrence counts and weights for each literal, maintained only when some heuristic requires them.
//!
//! Every clause of a formula is in exactly one of the clause database, the binary index, or the satisfied keys of the clause database.

pub mod atom;
pub mod binary;
pub mod clause;
pub mod literal;

/// A key to access a clause.
///
/// Keys are given to clauses as they are added to a context, in order, and are never reused.
pub type ClauseKey = u32;
