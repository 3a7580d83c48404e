//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! lookahead_sat decides satisfiability by exhaustive DPLL search, where each decision is chosen by a look-ahead over candidate atoms.
//! Before a branch is made, both values of each candidate atom are tentatively propagated, failed literals are used to simplify the formula, and the surviving candidates are scored by one of a handful of reduction heuristics.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context is built from a [configuration](crate::config), after which clauses may be added either [programatically](crate::context::Context::add_clause) or through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula.
//!
//! When solving, the clauses of a context are used to build an [instance](crate::instance), which is the state of a formula relative to some partial valuation.
//! An instance is made of a handful of databases:
//! - An [atom database](crate::db::atom), holding the valuation and the long clauses each atom occurs in.
//! - A [clause database](crate::db::clause), holding long clauses and the keys of satisfied clauses.
//! - A [binary index](crate::db::binary), holding binary clauses indexed by literal.
//! - A [literal database](crate::db::literal), holding occurrence counts and weights used by heuristics.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the search.
//! - The [look-ahead procedure](crate::procedures::look_ahead) to inspect how decisions are made.
//! - The [propagation procedure](crate::procedures::propagate) to inspect how an instance is updated.
//!
//! # Examples
//!
//! ```rust
//! # use lookahead_sat::config::Config;
//! # use lookahead_sat::context::Context;
//! # use lookahead_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause(vec![1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![1, -2]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use lookahead_sat::context::Context;
//! # use lookahead_sat::config::Config;
//! # use lookahead_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library, and logs are only built in debug profiles.
//!
//! For example, with the cli built using the `log` feature:
//!
//! ```sh
//! RUST_LOG=look_ahead=trace lookahead_cli formula.cnf
//! ```

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod instance;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
