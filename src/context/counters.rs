use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every call to the recursive search, including the first.
    pub total_calls: usize,

    /// A count of all decisions made, i.e. of every branch explored.
    pub total_decisions: usize,

    /// A count of every unit literal propagated.
    pub total_propagations: usize,

    /// A count of every clause removed by pure literal elimination.
    pub total_pure_eliminations: usize,

    /// A count of every branch closed by an empty clause.
    pub total_conflicts: usize,

    /// The deepest level of recursion reached.
    pub max_depth: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c Calls:             {}", self.total_calls)?;
        writeln!(f, "c Decisions:         {}", self.total_decisions)?;
        writeln!(f, "c Propagations:      {}", self.total_propagations)?;
        writeln!(f, "c Pure eliminations: {}", self.total_pure_eliminations)?;
        writeln!(f, "c Conflicts:         {}", self.total_conflicts)?;
        writeln!(f, "c Maximum depth:     {}", self.max_depth)?;
        write!(f, "c Time:              {:.2?}", self.time)
    }
}
