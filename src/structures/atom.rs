/*!
An atom (aka. a 'variable').

Each atom is a strictly positive u32.
The atom `0` does not exist, as in DIMACS `0` terminates a clause.

```rust
# use dpll_sat::structures::atom::Atom;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let atom: Atom = 97;
let literal = CLiteral::new(atom, false);
assert_eq!(literal, -97);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// As literals are signed integers, the maximum atom is the maximum absolute value of a literal.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
