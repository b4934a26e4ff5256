use std::{collections::HashSet, io::BufRead};

use crate::{
    context::Context,
    db::formula::Formula,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Information about a formula read from DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared in the preamble, if a preamble was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses declared in the preamble, if a preamble was found.
    pub expected_clauses: Option<usize>,

    /// The count of distinct atoms read.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

/// Reads a formula in DIMACS form.
///
/// - Blank lines are skipped, as are comments (lines beginning `c`).
/// - A preamble `p cnf <atoms> <clauses>` is optional, and may appear at most once.
///   The counts are noted, though a formula which does not match its preamble is read all the same.
/// - A line beginning `%` ends the input.
/// - Otherwise, a line is a sequence of integers, with each `0` terminating a clause.
///   A clause may span multiple lines, and a `0` alone is the empty clause.
///
/// On error no formula is returned.
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<(Formula, ParserInfo), err::ErrorKind> {
    let mut info = ParserInfo::default();
    let mut formula = Formula::default();

    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: Vec<CLiteral> = Vec::default();
    let mut atoms = HashSet::new();

    let mut line_counter = 0;

    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
        }

        let line = buffer.trim_start();

        match line.chars().next() {
            None => {}

            Some('c') => {
                log::trace!(target: targets::PARSER, "Comment: {}", line.trim_end());
            }

            Some('p') => {
                if info.expected_atoms.is_some() {
                    return Err(err::ParseError::MisplacedProblem(line_counter).into());
                }

                let (atom_count, clause_count) = match problem_specification(line) {
                    Some(counts) => counts,
                    None => {
                        return Err(err::ParseError::ProblemSpecification(line_counter).into())
                    }
                };

                log::info!(target: targets::PARSER, "Expected {atom_count} atoms and {clause_count} clauses");
                info.expected_atoms = Some(atom_count);
                info.expected_clauses = Some(clause_count);
            }

            Some('%') => break 'formula_loop,

            Some(_) => {
                for item in line.split_whitespace() {
                    match item.parse::<CLiteral>() {
                        Ok(0) => {
                            formula.push(std::mem::take(&mut clause_buffer));
                            info.added_clauses += 1;
                        }

                        Ok(literal) if literal == CLiteral::MIN => {
                            return Err(err::ParseError::AtomsExhausted(line_counter).into());
                        }

                        Ok(literal) => {
                            atoms.insert(literal.atom());
                            clause_buffer.push(literal);
                        }

                        Err(_) => {
                            log::error!(target: targets::PARSER, "Failed to parse '{item}' on line {line_counter}");
                            return Err(err::ParseError::Literal(line_counter).into());
                        }
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        return Err(err::ParseError::UnterminatedClause(line_counter).into());
    }

    info.added_atoms = atoms.len();

    if let Some(expected) = info.expected_atoms {
        if expected < info.added_atoms {
            log::warn!(target: targets::PARSER, "Read {} atoms, though {expected} were expected", info.added_atoms);
        }
    }
    if let Some(expected) = info.expected_clauses {
        if expected != info.added_clauses {
            log::warn!(target: targets::PARSER, "Read {} clauses, though {expected} were expected", info.added_clauses);
        }
    }

    Ok((formula, info))
}

/// The counts of atoms and clauses of a problem specification, if the specification is well formed.
fn problem_specification(line: &str) -> Option<(usize, usize)> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return None,
    }

    let atom_count = problem_details.next()?.parse().ok()?;
    let clause_count = problem_details.next()?.parse().ok()?;

    match problem_details.next() {
        None => Some((atom_count, clause_count)),
        Some(_) => None,
    }
}

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// See [parse_dimacs] for details on the format.
    /// On error, the formula of the context is unchanged.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Report::Unsatisfiable);
    /// ```
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let (formula, info) = parse_dimacs(reader)?;
        self.append_formula(formula);
        Ok(info)
    }
}
