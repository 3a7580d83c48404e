use crate::{
    structures::{clause::CClause, literal::Literal},
    types::err::{self},
};

/// Primarily to distinguish a tautology from a clause to be stored.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any clause.
    Clause,
}

/// Preprocess a clause to remove duplicate literals and identify tautologies.
pub(super) fn preprocess_clause(
    clause: &mut CClause,
) -> Result<PreprocessingOk, err::ClauseDBError> {
    clause.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
    clause.dedup();

    if clause
        .windows(2)
        .any(|pair| pair[0].atom() == pair[1].atom())
    {
        return Ok(PreprocessingOk::Tautology);
    }

    match clause.is_empty() {
        false => Ok(PreprocessingOk::Clause),
        true => Err(err::ClauseDBError::EmptyClause),
    }
}
