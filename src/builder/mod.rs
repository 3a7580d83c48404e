/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

Alternatively, a formula may be read from its DIMACS representation using [read_dimacs](crate::context::Context::read_dimacs).

Atoms of a context always form a contiguous block, from `1` to the count of atoms.
So, adding a clause containing some atom ensures every smaller atom is part of the context, whether or not it occurs in some clause.

# Examples

A clause built using basic methods.

```rust
# use lookahead_sat::context::Context;
# use lookahead_sat::config::Config;
# use lookahead_sat::reports::Report;
# use lookahead_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

Tautologies are accepted, though not stored.

```rust
# use lookahead_sat::context::Context;
# use lookahead_sat::config::Config;
# use lookahead_sat::builder::ClauseOk;
let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.add_clause(vec![1, -2, -1]), Ok(ClauseOk::Tautology));
assert_eq!(the_context.add_clause(vec![1, -2, 1]), Ok(ClauseOk::Added));
assert_eq!(the_context.clauses().len(), 1);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

mod preprocess;
use preprocess::{preprocess_clause, PreprocessingOk};

use crate::{
    context::{Context, ContextState},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl Context {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](Context::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        match self.atom_count.checked_add(1) {
            Some(atom) if atom <= ATOM_MAX => {
                self.atom_count = atom;
                Ok(atom)
            }
            _ => Err(err::AtomDBError::AtomsExhausted),
        }
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](Context::fresh_atom), by defaulting to the maximum limit of an atom.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(err::AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// Returns a fresh literal with value true.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::AtomDBError> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// Ensure `atom` is present in the context, by introducing as many atoms as required to ensure atoms form a contiguous block: [1..=`atom`].
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        match atom <= ATOM_MAX {
            true => {
                self.atom_count = self.atom_count.max(atom);
                Ok(())
            }
            false => Err(err::AtomDBError::AtomsExhausted),
        }
    }

    /// Adds a clause to the context.
    ///
    /// Duplicate literals are removed, and tautologies are skipped.
    /// An empty clause is not stored, though marks the context as unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Solving | ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Err(err::ErrorKind::from(err::StateError::SolveComplete));
            }
        }

        let mut clause = clause.canonical();

        match preprocess_clause(&mut clause) {
            Ok(PreprocessingOk::Tautology) => {
                log::trace!(target: targets::CLAUSE_DB, "Skipped tautology {}.", clause.as_dimacs(false));
                return Ok(ClauseOk::Tautology);
            }

            Ok(PreprocessingOk::Clause) => {}

            Err(e) => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added.");
                self.state = ContextState::Unsatisfiable;
                return Err(err::ErrorKind::from(e));
            }
        }

        if self.clauses.len() > ClauseKey::MAX as usize {
            return Err(err::ErrorKind::from(err::ClauseDBError::StorageExhausted));
        }

        for atom in clause.atoms() {
            self.ensure_atom(atom)?;
        }

        log::trace!(target: targets::CLAUSE_DB, "Clause {}: {}", self.clauses.len(), clause.as_dimacs(false));
        self.clauses.push(clause);

        Ok(ClauseOk::Added)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, reports::Report};

    use super::*;

    #[test]
    fn fresh_atoms_are_contiguous() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.fresh_atom(), Ok(1));
        assert!(the_context.add_clause(vec![5, -3]).is_ok());
        assert_eq!(the_context.atom_count(), 5);
        assert_eq!(the_context.fresh_atom(), Ok(6));
        assert_eq!(the_context.fresh_literal(), Ok(CLiteral::new(7, true)));
        assert_eq!(the_context.atom_count(), 7);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause(Vec::<CLiteral>::new()),
            Err(err::ErrorKind::from(err::ClauseDBError::EmptyClause))
        );
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn no_clauses_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(
            the_context.add_clause(vec![-1]),
            Err(err::ErrorKind::from(err::StateError::SolveComplete))
        );
    }

    #[test]
    fn unit_literal_as_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.add_clause(-4), Ok(ClauseOk::Added));
        assert_eq!(the_context.clauses(), &[vec![-4]]);
        assert_eq!(the_context.atom_count(), 4);
    }
}
