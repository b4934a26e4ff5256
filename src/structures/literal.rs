//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical implementation of the literal trait is a signed integer, with the sign of the integer indicating the polarity of the literal.
//! This matches the representation of literals in the DIMACS format.
//!
//! ```rust
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```
//!
//! The integer `0` is never a literal.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
