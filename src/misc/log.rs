/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::unit)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [pure literal elimination](crate::procedures::pure)
    pub const PURE: &str = "pure";

    /// Logs related to the [choice](crate::procedures::choice) of a branching atom
    pub const CHOICE: &str = "choice";

    /// Logs related to the [search](crate::procedures::solve)
    pub const SEARCH: &str = "search";

    /// Logs related to the [formula database](crate::db::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to reading [DIMACS](crate::builder)
    pub const PARSER: &str = "parser";
}
