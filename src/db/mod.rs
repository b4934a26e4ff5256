/*!
Databases for holding information relevant to a solve.

For the moment, this is limited to the [formula] database.

Clauses in the formula database are accessed through a [ClauseKey].
A key is stable for the lifetime of the clause it was issued for, and is never reused for some other clause of the same formula.
So, a key to a deleted clause is stale and any attempt to access the clause with the key returns [None].
*/

pub mod formula;

slotmap::new_key_type! {
    /// A key to access a clause stored in a [formula](formula::Formula).
    pub struct ClauseKey;
}
