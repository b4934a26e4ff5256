//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat decides satisfiability by the Davis–Putnam–Logemann–Loveland (DPLL) procedure.
//! That is, a complete backtracking search interleaved with two simplification rules (unit propagation and pure literal elimination), with a heuristic to choose which atom to split the search on.
//!
//! Only a verdict is given.
//! No model is returned, and there is no clause learning, no restarts, and no support for incremental solves.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and holds a formula.
//! Clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Internally:
//! - Clauses are [sequences of integer literals](crate::structures::clause).
//! - A formula is an [arena of clauses](crate::db::formula), linked in order, so a clause can be removed through its [key](crate::db::ClauseKey) without a search.
//! - The search is factored into a collection of [procedures]:
//!   + [unit propagation](crate::procedures::unit),
//!   + [pure literal elimination](crate::procedures::pure),
//!   + [choice of a branching atom](crate::procedures::choice), and
//!   + the [solve](crate::procedures::solve) which ties these together.
//!
//! Each branch of the search owns a private copy of the formula, so there is no undo log and nothing is shared between branches.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use dpll_sat::context::Context;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! ```
//!
//! + Build a formula directly.
//!
//! ```rust
//! # use dpll_sat::context::Context;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause(vec![1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![-1]).is_ok());
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log] to help narrow output to relevant parts of the library.
//! No log implementation is provided by the library.
//! The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, so, for example:
//! - Logs related to unit propagation can be found with `RUST_LOG=propagation …`
//! - Logs of the branching choices alone can be found with `RUST_LOG=choice=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
