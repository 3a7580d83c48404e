/*!
The context --- to which formulas are added and within which solves take place, etc.

A context holds a formula as a list of clauses, together with a configuration and counters for a solve.
The clauses are only examined when solving, at which point an [instance](crate::instance) of the formula is built.

# Example
```rust
# use lookahead_sat::context::Context;
# use lookahead_sat::config::Config;
# use lookahead_sat::reports::Report;
# use lookahead_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

mod counters;
pub use counters::Counters;

use std::rc::Rc;

use crate::{
    config::Config,
    instance::Instance,
    reports::Report,
    structures::{atom::Atom, clause::CClause, coefficients::Coefficients},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the formula is unknown, and a solve is underway.
    Solving,

    /// The formula is known to be satisfiable.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// A count of atoms in the context, with atoms ranging from `1` to the count inclusive.
    pub(crate) atom_count: Atom,

    /// The clauses of the formula, with the key of each clause its position.
    pub(crate) clauses: Vec<CClause>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            state: ContextState::Input,
            atom_count: 0,
            clauses: Vec::default(),
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of atoms in the context.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The clauses of the context, in order of key.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// An instance of the formula of the context, with no atom valued.
    ///
    /// The coefficient table is built from the longest clause of the formula.
    pub fn instance(&self) -> Instance {
        let max_size = self.clauses.iter().map(|clause| clause.len()).max().unwrap_or(0);
        let coefficients = Rc::new(Coefficients::new(
            max_size,
            self.config.ternary_coefficient.value,
        ));

        Instance::from_formula(
            self.atom_count,
            &self.clauses,
            self.config.instance(),
            coefficients,
        )
    }
}
