/*!
The choice of an atom to branch on.

The heuristic aims to choose the atom which leads to the most simplification, by favouring atoms which occur often in the shortest clauses of the formula.
Roughly, as a short clause is close to a unit clause, branching on an atom in a short clause is likely to lead to propagation.

In detail:
1. The size of the shortest (non-empty) clause is found.
2. For each literal, the occurrences of the literal in clauses of that size are counted.
   The polarities of an atom are counted independently.
3. The atom of a literal with the greatest count is chosen, with ties broken in accordance with the [configured](crate::config::Config::tie_break) [TieBreak].

```rust
# use dpll_sat::config::TieBreak;
# use dpll_sat::db::formula::Formula;
# use dpll_sat::generic::minimal_pcg::MinimalPCG32;
# use dpll_sat::procedures::choice::branch_atom;
# use rand::SeedableRng;
let formula = Formula::from_iter([vec![1, 2], vec![5, 4], vec![3, -5], vec![5, -6]]);
let mut rng = MinimalPCG32::from_seed(0u64.to_le_bytes());

assert_eq!(branch_atom(&formula, TieBreak::Lowest, &mut rng), Some(5));
```

Only the atom is chosen.
The polarity of the first branch is a matter of [configuration](crate::config::Config::polarity).
*/

use std::collections::HashMap;

use rand::Rng;

use crate::{
    config::TieBreak,
    db::formula::Formula,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The size of the shortest non-empty clause of the formula, if the formula has some non-empty clause.
pub fn shortest_clause_size(formula: &Formula) -> Option<usize> {
    formula
        .clauses()
        .map(|clause| clause.size())
        .filter(|size| *size > 0)
        .min()
}

/// A count of the occurrences of each literal in clauses of the given size.
pub fn literal_counts(formula: &Formula, size: usize) -> HashMap<CLiteral, usize> {
    let mut counts: HashMap<CLiteral, usize> = HashMap::default();

    for clause in formula.clauses().filter(|clause| clause.size() == size) {
        for literal in clause.literals() {
            *counts.entry(*literal).or_default() += 1;
        }
    }

    counts
}

/// The atom to branch on, if the formula has some non-empty clause.
pub fn branch_atom(formula: &Formula, tie_break: TieBreak, rng: &mut impl Rng) -> Option<Atom> {
    let size = shortest_clause_size(formula)?;
    let counts = literal_counts(formula, size);
    let max = *counts.values().max()?;

    let mut tied: Vec<CLiteral> = counts
        .into_iter()
        .filter_map(|(literal, count)| (count == max).then_some(literal))
        .collect();

    let choice = match tie_break {
        TieBreak::Lowest => tied
            .into_iter()
            .min_by_key(|literal| (literal.atom(), !literal.polarity())),

        TieBreak::Random => {
            // As the counts are hashed the order of tied literals is arbitrary, so sort for a reproducible choice.
            tied.sort_unstable();
            let index = rng.gen_range(0..tied.len());
            tied.get(index).copied()
        }
    };

    if let Some(literal) = choice {
        log::debug!(target: targets::CHOICE, "Chose {} with {max} occurrences in clauses of size {size}", literal.atom());
    }

    choice.map(|literal| literal.atom())
}
