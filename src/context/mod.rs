/*!
The context --- to which formulas are added and within which solves take place, etc.

A context bundles a [configuration](crate::config), a [formula](crate::db::formula), [counters](Counters) for a solve, a source of rng, and an optional callback to terminate a solve.

# Example
```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(-1).is_ok());
assert_eq!(the_context.report(), Report::Unknown);

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.report(), Report::Satisfiable);

assert!(the_context.add_clause(-2).is_ok());
assert_eq!(the_context.solve(), Report::Unsatisfiable);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use rand::SeedableRng;

use crate::{
    config::Config,
    db::{formula::Formula, ClauseKey},
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    reports::Report,
    structures::{clause::Clause, literal::CLiteral},
    types::err::{self},
};

use callbacks::CallbackTerminate;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context has received some input.
    Input,

    /// The formula of the context is known to be satisfiable.
    Satisfiable,

    /// The formula of the context is known to be unsatisfiable.
    Unsatisfiable,

    /// The satisfiability of the formula is unknown, e.g. as a solve was terminated early.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}

/// A context, within which a formula is built and solved.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula of the context.
    ///
    /// A solve works on copies of the formula, so the formula is unchanged by a solve.
    pub formula: Formula,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: MinimalPCG32,

    /// Terminates a solve, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: MinimalPCG32::from_seed(config.seed.value.to_le_bytes()),
            config,

            counters: Counters::default(),
            formula: Formula::default(),
            state: ContextState::Configuration,

            callback_terminate: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Adds a clause to the formula of the context.
    ///
    /// Any literal may be repeated, and any clause may be a tautology, as neither affects satisfiability.
    /// Still, the integer `0` is not a literal.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::types::err::{ClauseDBError, ErrorKind};
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.add_clause(vec![1, -2, 1]).is_ok());
    /// assert!(the_context.add_clause(Vec::new()).is_ok());
    /// assert_eq!(
    ///     the_context.add_clause(vec![3, 0]),
    ///     Err(ErrorKind::ClauseDB(ClauseDBError::ZeroLiteral))
    /// );
    /// assert_eq!(the_context.formula.len(), 2);
    /// ```
    pub fn add_clause(&mut self, clause: impl Into<Clause>) -> Result<ClauseKey, err::ErrorKind> {
        let clause = clause.into();

        for literal in clause.literals() {
            match *literal {
                0 => {
                    log::error!(target: targets::FORMULA, "0 given as a literal in: {clause:?}");
                    return Err(err::ClauseDBError::ZeroLiteral.into());
                }
                l if l == CLiteral::MIN => return Err(err::ClauseDBError::AtomsExhausted.into()),
                _ => {}
            }
        }

        self.state = ContextState::Input;
        Ok(self.formula.push(clause))
    }

    /// Adds every clause of the given formula to the formula of the context, in order.
    pub(crate) fn append_formula(&mut self, formula: Formula) {
        if formula.is_empty() {
            return;
        }
        for clause in formula.clauses() {
            self.formula.push(clause.clone());
        }
        self.state = ContextState::Input;
    }
}
