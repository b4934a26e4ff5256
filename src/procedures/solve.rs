//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! The solve is a recursive, depth-first, search.
//! Each step of the search owns a formula, and:
//!
//! ```none
//!              +-------------------+
//! formula ---->| unit propagation  |
//!              +-------------------+
//!                        |
//!                        ⌄
//!              +-------------------+
//!              | pure elimination  |
//!              +-------------------+
//!                        |
//!                        +-----> satisfiable, if no clause remains
//!                        |
//!                        +-----> unsatisfiable, if some clause is empty
//!                        |
//!                        ⌄
//!              +-------------------+
//!              | choose atom a     |
//!              +-------------------+
//!                   |          |
//!          copy + { a}     copy + {-a}
//!                   |          |
//!                   ⌄          ⌄
//!                 step  ---> step, if the first step was not satisfiable
//! ```
//!
//! Each branch is made on a deep copy of the simplified formula with a unit clause fixing the value of the chosen atom.
//! So, no branch observes the mutations of another and there is nothing to undo when a branch fails.
//!
//! As the unit clause added to a branch is propagated at the start of the next step, each branch fixes the value of at least one atom, and the depth of the search is bounded by the count of atoms in the formula.
//!
//! # Termination
//!
//! At the start of each step the [terminate callback](crate::context::callbacks) and the [time limit](crate::config::Config::time_limit) are checked.
//! If either calls for termination, the search unwinds and the solve reports [Unknown](Report::Unknown).
//!
//! # Example
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause(vec![1, 2, -3]).is_ok());
//! assert!(the_context.add_clause(vec![1, -2]).is_ok());
//! assert!(the_context.add_clause(vec![-1]).is_ok());
//! assert!(the_context.add_clause(vec![2, 3]).is_ok());
//!
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! assert_eq!(the_context.counters.total_decisions, 0);
//! ```

use std::time::Instant;

use crate::{
    context::{ContextState, Context},
    db::formula::Formula,
    misc::log::targets::{self},
    procedures::{choice, pure, unit},
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

impl Context {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// The formula of the context is unchanged, as the search is made on a copy.
    /// Counters are reset at the start of each solve.
    pub fn solve(&mut self) -> Report {
        self.counters = Default::default();
        self.state = ContextState::Solving;

        let start = Instant::now();
        let limit = match self.config.time_limit.value.is_zero() {
            true => None,
            false => Some(self.config.time_limit.value),
        };
        let deadline = limit.and_then(|limit| start.checked_add(limit));

        let report = self.search(self.formula.deep_copy(), 0, deadline);

        self.counters.time = start.elapsed();
        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Solving,
        };

        log::info!(target: targets::SEARCH, "Solve finished: {report} in {:.2?}", self.counters.time);
        report
    }

    /// A step of the search, on a formula owned by the step.
    fn search(&mut self, mut formula: Formula, depth: usize, deadline: Option<Instant>) -> Report {
        self.counters.total_calls += 1;
        self.counters.max_depth = self.counters.max_depth.max(depth);

        if self.check_callback_terminate() {
            log::info!(target: targets::SEARCH, "Terminated by callback at depth {depth}");
            return Report::Unknown;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            log::info!(target: targets::SEARCH, "Time limit reached at depth {depth}");
            return Report::Unknown;
        }

        self.counters.total_propagations += unit::propagate(&mut formula);
        if self.config.pure_literal.value {
            self.counters.total_pure_eliminations += pure::eliminate_pure(&mut formula);
        }

        if formula.is_empty() {
            log::trace!(target: targets::SEARCH, "Satisfiable at depth {depth}");
            return Report::Satisfiable;
        }

        if formula.has_empty_clause() {
            log::trace!(target: targets::SEARCH, "Conflict at depth {depth}");
            self.counters.total_conflicts += 1;
            return Report::Unsatisfiable;
        }

        let atom = match choice::branch_atom(&formula, self.config.tie_break.value, &mut self.rng) {
            Some(atom) => atom,
            None => {
                // Unreachable, as the formula has some clause and no clause is empty.
                log::error!(target: targets::SEARCH, "No atom to branch on at depth {depth}");
                return Report::Unknown;
            }
        };

        let first = CLiteral::new(atom, self.config.polarity.value);

        for literal in [first, first.negate()] {
            log::debug!(target: targets::SEARCH, "Branch on {literal} at depth {depth}");
            self.counters.total_decisions += 1;

            let mut branch = formula.deep_copy();
            branch.push(literal);

            match self.search(branch, depth + 1, deadline) {
                Report::Unsatisfiable => continue,
                report => return report,
            }
        }

        Report::Unsatisfiable
    }
}
