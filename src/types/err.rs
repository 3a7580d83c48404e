//! Error types used in the library.
//!
//! - Most of these are external, and arise when building a context --- e.g. a malformed DIMACS file, or an empty clause.
//! - One is internally expected --- a [PropagationError] is used to control the flow of a solve, and never escapes the search.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database: {e:?}"),
            Self::Parse(e) => write!(f, "Parse: {e:?}"),
            Self::State(e) => write!(f, "State: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when adding a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    ///
    /// The formula of the context is unsatisfiable.
    EmptyClause,

    /// All possible keys have been used.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not a literal, at a specific line.
    Literal(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors due to the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// The context has been solved, and the formula is fixed.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Noted errors during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// A conflict was found in the clause with the given key.
    /// This is expected from time to time, and leads to a backtrack.
    Conflict(ClauseKey),
}
