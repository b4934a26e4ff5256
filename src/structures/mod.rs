//! Key structures, such as literals and clauses.
//!
//! # Other structures
//!
//! ## Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! As a formula is mutated throughout a solve, it is stored in a [database](crate::db::formula) rather than given as a plain structure.
//!
//! ## (Boolean) values
//!
//! Only a verdict is given by a solve, and so values are never recorded.
//! Instead, a value is fixed by adding a unit clause to a (copy of a) formula.

pub mod atom;
pub mod clause;
pub mod literal;
