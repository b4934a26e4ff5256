//! Procedures which make up a solve.
//!
//! - [unit] propagation and [pure] literal elimination simplify a formula in place.
//! - [choice] picks an atom to branch on, when simplification is exhausted.
//! - [solve] ties these together in a recursive search.
//!
//! The simplification procedures and the choice of an atom are free functions over a [formula](crate::db::formula::Formula), while the search is a method of a [context](crate::context).

pub mod choice;
pub mod pure;
pub mod solve;
pub mod unit;
