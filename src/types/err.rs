//! Error types used in the library.
//!
//! - Errors only arise at the boundary of the library, when reading a formula or adding a clause.
//! - The procedures of a solve do not fail, as they operate on clauses which have already been checked.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseDB(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

/// Errors when adding a clause to a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The integer `0` was given as a literal.
    ZeroLiteral,

    /// A literal whose atom exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    AtomsExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral => write!(f, "0 is not a literal"),
            Self::AtomsExhausted => write!(f, "atom out of range"),
        }
    }
}

/// Errors during parsing.
///
/// Each error notes the (one-indexed) line at which the error was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification(usize),

    /// Some unspecific problem at a specific line, e.g. a failure to read the line.
    Line(usize),

    /// A second problem specification.
    MisplacedProblem(usize),

    /// A token which is not an integer.
    Literal(usize),

    /// A literal whose atom exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    AtomsExhausted(usize),

    /// The input ended without a `0` to terminate the last clause.
    UnterminatedClause(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification(line) => {
                write!(f, "line {line}: expected 'p cnf <atoms> <clauses>'")
            }
            Self::Line(line) => write!(f, "line {line}: failed to read"),
            Self::MisplacedProblem(line) => write!(f, "line {line}: second problem specification"),
            Self::Literal(line) => write!(f, "line {line}: token is not a literal"),
            Self::AtomsExhausted(line) => write!(f, "line {line}: atom out of range"),
            Self::UnterminatedClause(line) => {
                write!(f, "line {line}: clause not terminated by 0")
            }
        }
    }
}
