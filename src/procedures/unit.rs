/*!
Unit propagation, aka. the one-literal rule.

A clause containing exactly one literal *l* is satisfied only if *l* is true.
So, on any valuation which satisfies the formula:
- Every clause containing *l* is satisfied, and may be removed.
- The negation of *l* is false, and may be removed from every clause containing it.

[propagate] applies the rule until no unit clause remains.
On each pass the first unit clause (in the order of the formula) is taken, and as removals may create fresh unit clauses the formula is scanned again from the start.

An empty clause may result from removing the negation of *l*.
This is not an error here, and the propagation continues regardless.
Instead, the empty clause is found when [checking for a conflict](crate::db::formula::Formula::has_empty_clause).

```rust
# use dpll_sat::db::formula::Formula;
# use dpll_sat::procedures::unit::propagate;
let mut formula = Formula::from_iter([vec![1, 2, -3], vec![1, -2], vec![-1], vec![2, 3]]);

assert_eq!(propagate(&mut formula), 3);
assert_eq!(formula.len(), 1);
assert!(formula.has_empty_clause());
```
*/

use crate::{
    db::formula::Formula,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// The first unit clause of the formula, if one exists.
pub fn first_unit(formula: &Formula) -> Option<CLiteral> {
    formula.clauses().find_map(|clause| clause.unit())
}

/// Applies the consequences of a literal being true to the formula.
///
/// Every clause containing the literal is removed, and the negation of the literal is removed from every remaining clause.
pub fn assert_literal(formula: &mut Formula, literal: CLiteral) {
    let negation = literal.negate();

    let mut cursor = formula.first();
    while let Some(key) = cursor {
        cursor = formula.next(key);

        let Some(clause) = formula.get_mut(key) else {
            continue;
        };

        if clause.contains(literal) {
            formula.delete(key);
        } else {
            clause.remove_literal(negation);
        }
    }
}

/// Applies unit propagation to a fixpoint, and returns the count of literals propagated.
pub fn propagate(formula: &mut Formula) -> usize {
    let mut count = 0;

    while let Some(literal) = first_unit(formula) {
        log::trace!(target: targets::PROPAGATION, "Propagating {literal}");
        assert_literal(formula, literal);
        count += 1;
    }

    count
}
