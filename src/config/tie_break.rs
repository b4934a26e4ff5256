/*!
Ways to choose between literals which are equally good candidates for a branch.

Satisfiability is unaffected by the way a tie is broken, though the size of a search may be.
*/

/// Supported ways to break a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TieBreak {
    /// Choose the literal with the least atom, and the positive literal over the negative.\
    /// The result is independent of the order of clauses in the formula.
    Lowest,

    /// Choose uniformly at random between the tied literals, using the [rng](crate::context::Context::rng) of the context.
    Random,
}

impl TieBreak {
    pub const MIN: TieBreak = TieBreak::Lowest;
    pub const MAX: TieBreak = TieBreak::Random;
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lowest => write!(f, "lowest"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for TieBreak {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowest" => Ok(Self::Lowest),
            "random" => Ok(Self::Random),
            _ => Err(()),
        }
    }
}
