/*!
Tools for building a context.

# Basic methods

A formula may be added to a context:
- Programatically, a clause at a time, with [add_clause](crate::context::Context::add_clause).
- From the DIMACS representation of a formula, with [read_dimacs](crate::context::Context::read_dimacs).

Clauses are made of integer literals, with the sign of the integer indicating polarity, and so there is no need to declare atoms before use.

# Examples

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let (p, q) = (1, 2);

assert!(the_context.add_clause(vec![p, -q]).is_ok());
assert!(the_context.add_clause(vec![-p, q]).is_ok());
assert_eq!(the_context.solve(), Report::Satisfiable);
```

A formula may also be parsed without a context, e.g. to inspect it before a solve.

```rust
# use dpll_sat::builder::parse_dimacs;
let (formula, info) = parse_dimacs("p cnf 2 2\n1 -2 0\n-1 2 0\n".as_bytes()).unwrap();

assert_eq!(formula.len(), 2);
assert_eq!(info.expected_clauses, Some(2));
assert_eq!(info.added_atoms, 2);
```
*/

mod dimacs;
pub use dimacs::{parse_dimacs, ParserInfo};
