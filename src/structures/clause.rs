//! Clauses, aka. a sequence of literals, interpreted as the disjunction of those literals.
//!
//! A clause is a sequence rather than a set.
//! Literals are removed by position, and the order of the remaining literals is preserved.
//!
//! ```rust
//! # use dpll_sat::structures::clause::Clause;
//! let mut clause = Clause::from(vec![23, -41, -3, 15]);
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.find_literal_index(-3), Some(2));
//!
//! clause.remove_literal_at(1);
//! assert_eq!(clause.literals(), &[23, -3, 15]);
//! assert_eq!(clause.as_dimacs(true), "23 -3 15 0");
//! ```
//!
//! - The empty clause is always false (never true), and so marks a conflict.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// A clause, as a vector of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<CLiteral>,
}

impl Clause {
    /// The literals of the clause, in order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// An iterator over the atoms of the clause, in the order of the literals of the clause.
    ///
    /// An atom is repeated if it occurs in multiple literals.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause contains no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literal of the clause, if the clause is a unit clause.
    pub fn unit(&self) -> Option<CLiteral> {
        match self.literals.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        }
    }

    /// Whether the clause contains the given literal.
    pub fn contains(&self, literal: CLiteral) -> bool {
        self.literals.contains(&literal)
    }

    /// The position of the first occurrence of the given literal, if the literal occurs in the clause.
    pub fn find_literal_index(&self, literal: CLiteral) -> Option<usize> {
        self.literals.iter().position(|l| *l == literal)
    }

    /// Removes the literal at the given position, preserving the order of the remaining literals.
    ///
    /// # Panics
    /// If the index is out of bounds.
    pub fn remove_literal_at(&mut self, index: usize) -> CLiteral {
        self.literals.remove(index)
    }

    /// Removes every occurrence of the given literal from the clause and returns the count of literals removed.
    pub fn remove_literal(&mut self, literal: CLiteral) -> usize {
        let mut count = 0;
        while let Some(index) = self.find_literal_index(literal) {
            self.remove_literal_at(index);
            count += 1;
        }
        count
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();

        for literal in &self.literals {
            the_string.push_str(format!("{literal} ").as_str());
        }

        match zero {
            true => the_string += "0",
            false => {
                the_string.pop();
            }
        }

        the_string
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs(true))
    }
}

impl From<Vec<CLiteral>> for Clause {
    fn from(literals: Vec<CLiteral>) -> Self {
        Clause { literals }
    }
}

impl<const N: usize> From<[CLiteral; N]> for Clause {
    fn from(literals: [CLiteral; N]) -> Self {
        Clause {
            literals: literals.to_vec(),
        }
    }
}

impl From<CLiteral> for Clause {
    fn from(literal: CLiteral) -> Self {
        Clause {
            literals: vec![literal],
        }
    }
}
