use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use std::io::BufRead;

/// Details of a parse, for reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms stated in the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses stated in the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms added to the context by the parse.
    pub added_atoms: usize,

    /// The count of clauses read, including tautologies which were skipped.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// Atoms are read as given, so the atom of a literal `-7` is `7`.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use lookahead_sat::context::Context;
    /// # use lookahead_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A comment.
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2
    ///             0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.added_clauses, 7);
    /// assert!(the_context.solve().is_ok());
    /// ```
    #[allow(unused_labels)]
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        //
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_count as usize;

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('c') | None => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    match problem_details.nth(1) {
                        Some("cnf") => {}
                        _ => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                        }
                    }

                    let atom_count: usize = match problem_details.next() {
                        Some(string) => match string.parse() {
                            Ok(count) => count,
                            Err(_) => {
                                return Err(err::ErrorKind::from(
                                    err::ParseError::ProblemSpecification,
                                ))
                            }
                        },
                        None => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                        }
                    };

                    let clause_count: usize = match problem_details.next() {
                        Some(string) => match string.parse() {
                            Ok(count) => count,
                            Err(_) => {
                                return Err(err::ErrorKind::from(
                                    err::ParseError::ProblemSpecification,
                                ))
                            }
                        },
                        None => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                        }
                    };

                    log::info!(target: targets::CLAUSE_DB, "Expecting {atom_count} atoms and {clause_count} clauses.");

                    info.expected_atoms = Some(atom_count);
                    info.expected_clauses = Some(clause_count);

                    buffer.clear();
                    break;
                }

                // The formula begins without a problem line, and the buffer is kept for the next phase.
                _ => break,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            if buffer.is_empty() {
                match reader.read_line(&mut buffer) {
                    Ok(0) => break,
                    Ok(_) => line_counter += 1,
                    Err(_) => {
                        return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)))
                    }
                }
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,

                Some('c') => {}

                Some('p') => {
                    return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => {
                                let parsed_int = match item.parse::<i64>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(
                                            err::ParseError::Literal(line_counter),
                                        ))
                                    }
                                };

                                let atom: Atom = match parsed_int.unsigned_abs().try_into() {
                                    Ok(atom) if atom > 0 => atom,
                                    _ => {
                                        return Err(err::ErrorKind::from(
                                            err::ParseError::Literal(line_counter),
                                        ))
                                    }
                                };

                                self.ensure_atom(atom)?;
                                clause_buffer.push(CLiteral::new(atom, parsed_int.is_positive()));
                            }
                        }
                    }
                }
            }

            buffer.clear();
        }

        // A final clause without a terminating zero.
        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_count as usize - initial_atoms;

        log::info!(target: targets::CLAUSE_DB, "Read {} atoms and {} clauses over {line_counter} lines.", info.added_atoms, info.added_clauses);

        Ok(info)
    }
}
