/*!
A formula, as a database of clauses.

Clauses are stored in an arena (a [SlotMap]) and linked in order through the keys of neighbouring clauses.
So:
- A clause is appended to the end of the formula in (amortised) constant time.
- A clause is removed given its [key](ClauseKey) in constant time, by unlinking it from its neighbours, regardless of whether the clause is first, last, the only clause, or somewhere in between.
- Iteration follows the links, and so respects the order in which clauses were added.

As removal of a clause only touches the neighbours of the clause, the formula may be mutated while walking the clauses, so long as the key to the next clause is read before the current clause is removed.
For example, this is the pattern used by [unit propagation](crate::procedures::unit):

```rust
# use dpll_sat::db::formula::Formula;
let mut formula = Formula::default();
formula.push(vec![1, 2]);
formula.push(vec![-1]);
formula.push(vec![1, 3]);

let mut cursor = formula.first();
while let Some(key) = cursor {
    cursor = formula.next(key);
    if formula.get(key).is_some_and(|clause| clause.contains(1)) {
        formula.delete(key);
    }
}

assert_eq!(formula.len(), 1);
assert_eq!(formula.to_string(), "-1 0\n");
```

A branch of a solve owns a [deep copy](Formula::deep_copy) of the formula.
*/

use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::Clause},
};

/// A clause of a formula, together with the keys of its neighbours.
#[derive(Debug)]
struct ClauseNode {
    clause: Clause,
    prev: Option<ClauseKey>,
    next: Option<ClauseKey>,
}

/// An ordered collection of clauses, interpreted as their conjunction.
#[derive(Debug, Default)]
pub struct Formula {
    nodes: SlotMap<ClauseKey, ClauseNode>,
    head: Option<ClauseKey>,
    tail: Option<ClauseKey>,
}

impl Formula {
    /// Appends a clause to the end of the formula.
    ///
    /// No check is made on the literals of the clause.
    /// Though, in debug builds the clause may not contain the integer `0`.
    pub fn push(&mut self, clause: impl Into<Clause>) -> ClauseKey {
        let clause = clause.into();
        debug_assert!(
            !clause.literals().contains(&0),
            "0 stored as a literal: {clause:?}"
        );
        log::trace!(target: targets::FORMULA, "Push: {clause}");

        let prev = self.tail;
        let key = self.nodes.insert(ClauseNode {
            clause,
            prev,
            next: None,
        });

        match prev {
            Some(tail) => {
                if let Some(tail_node) = self.nodes.get_mut(tail) {
                    tail_node.next = Some(key);
                }
            }
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        key
    }

    /// Removes the clause with the given key from the formula, returning the clause.
    ///
    /// Returns [None] if the key is stale (i.e. the clause has already been removed).
    pub fn delete(&mut self, key: ClauseKey) -> Option<Clause> {
        let ClauseNode { clause, prev, next } = self.nodes.remove(key)?;
        log::trace!(target: targets::FORMULA, "Delete: {clause}");

        match prev {
            Some(prev_key) => {
                if let Some(prev_node) = self.nodes.get_mut(prev_key) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_key) => {
                if let Some(next_node) = self.nodes.get_mut(next_key) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        Some(clause)
    }

    /// The clause with the given key, if the key is not stale.
    pub fn get(&self, key: ClauseKey) -> Option<&Clause> {
        self.nodes.get(key).map(|node| &node.clause)
    }

    /// A mutable borrow of the clause with the given key, if the key is not stale.
    pub fn get_mut(&mut self, key: ClauseKey) -> Option<&mut Clause> {
        self.nodes.get_mut(key).map(|node| &mut node.clause)
    }

    /// The key to the first clause of the formula, if the formula has some clause.
    pub fn first(&self) -> Option<ClauseKey> {
        self.head
    }

    /// The key to the last clause of the formula, if the formula has some clause.
    pub fn last(&self) -> Option<ClauseKey> {
        self.tail
    }

    /// The key to the clause following the clause with the given key, if there is such a clause.
    pub fn next(&self, key: ClauseKey) -> Option<ClauseKey> {
        self.nodes.get(key).and_then(|node| node.next)
    }

    /// The key to the clause preceding the clause with the given key, if there is such a clause.
    pub fn prev(&self, key: ClauseKey) -> Option<ClauseKey> {
        self.nodes.get(key).and_then(|node| node.prev)
    }

    /// The count of clauses in the formula.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the formula contains no clauses, and so is trivially satisfiable.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// An iterator over the keys of the formula, in order.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            formula: self,
            cursor: self.head,
        }
    }

    /// An iterator over the clauses of the formula, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.keys().filter_map(|key| self.get(key))
    }

    /// An iterator over (key, clause) pairs of the formula, in order.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &Clause)> + '_ {
        self.keys()
            .filter_map(|key| self.get(key).map(|clause| (key, clause)))
    }

    /// The (ordered) set of atoms which occur in some clause of the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses().flat_map(|clause| clause.atoms()).collect()
    }

    /// Whether some clause of the formula contains no literals.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses().any(|clause| clause.is_empty())
    }

    /// A copy of the formula, with each clause copied in order.
    ///
    /// The copy shares no storage with the formula, and keys to the formula are not keys to the copy.
    pub fn deep_copy(&self) -> Formula {
        let mut copy = Formula {
            nodes: SlotMap::with_capacity_and_key(self.len() + 1),
            head: None,
            tail: None,
        };
        for clause in self.clauses() {
            copy.push(clause.clone());
        }
        copy
    }
}

/// An iterator over the keys of a formula, following the links between clauses.
pub struct Keys<'f> {
    formula: &'f Formula,
    cursor: Option<ClauseKey>,
}

impl Iterator for Keys<'_> {
    type Item = ClauseKey;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.formula.next(key);
        Some(key)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in self.clauses() {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl<C: Into<Clause>> FromIterator<C> for Formula {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut formula = Formula::default();
        for clause in iter {
            formula.push(clause);
        }
        formula
    }
}
