/*!
Pure literal elimination, aka. the affirmative-negative rule.

If an atom occurs in the formula with only one polarity, the literal of that polarity is 'pure'.
Any valuation which satisfies the formula may be revised to make each pure literal true without falsifying some clause, and so every clause containing a pure literal may be removed.

[eliminate_pure] makes a single pass over the formula.
Removing clauses may make other literals pure, though these are left for the next step of the search.

```rust
# use dpll_sat::db::formula::Formula;
# use dpll_sat::procedures::pure::eliminate_pure;
let mut formula = Formula::from_iter([vec![1, 2], vec![-1, 2], vec![3, 4], vec![-3, -4]]);

assert_eq!(eliminate_pure(&mut formula), 2);
assert_eq!(formula.to_string(), "3 4 0\n-3 -4 0\n");
```
*/

use std::collections::{BTreeSet, HashSet};

use crate::{
    db::formula::Formula,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an interator over clauses returns a pair of vectors of the atoms of pure literals relative to those clauses.
///
/// The first vector contains all the atoms which occur only with negative polarity and the second vector contains all the atoms which occur only with positive polarity.
/// Atoms which do not occur in any clause are in neither.
pub fn pure_literals<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l CLiteral>>,
) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    clauses.for_each(|literals| {
        for literal in literals {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    });

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// Removes every clause which contains a pure literal, and returns the count of clauses removed.
pub fn eliminate_pure(formula: &mut Formula) -> usize {
    let (pure_false, pure_true) = pure_literals(formula.clauses().map(|clause| clause.literals().iter()));

    if pure_false.is_empty() && pure_true.is_empty() {
        return 0;
    }

    let pure: HashSet<CLiteral> = pure_false
        .into_iter()
        .map(|atom| CLiteral::new(atom, false))
        .chain(pure_true.into_iter().map(|atom| CLiteral::new(atom, true)))
        .collect();

    log::trace!(target: targets::PURE, "Pure literals: {pure:?}");

    let mut count = 0;
    let mut cursor = formula.first();
    while let Some(key) = cursor {
        cursor = formula.next(key);

        let has_pure = formula
            .get(key)
            .is_some_and(|clause| clause.literals().iter().any(|literal| pure.contains(literal)));

        if has_pure {
            formula.delete(key);
            count += 1;
        }
    }

    count
}
