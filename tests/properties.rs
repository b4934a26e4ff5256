use dpll_sat::{
    config::{Config, TieBreak},
    context::Context,
    db::formula::Formula,
    generic::minimal_pcg::MinimalPCG32,
    procedures::{pure, unit},
    reports::Report,
};

use rand::{Rng, SeedableRng};

/// A random formula over the atoms 1..=atoms, with clauses of one to three literals.
fn random_formula(rng: &mut MinimalPCG32, atoms: i32, clauses: usize) -> Vec<Vec<i32>> {
    (0..clauses)
        .map(|_| {
            let size = rng.gen_range(1..=3);
            (0..size)
                .map(|_| {
                    let atom = rng.gen_range(1..=atoms);
                    match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

/// Satisfiability by a check of every valuation.
fn brute_force(clauses: &[Vec<i32>], atoms: i32) -> bool {
    (0_u32..(1 << atoms)).any(|valuation| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = valuation & (1 << (literal.unsigned_abs() - 1)) != 0;
                value == literal.is_positive()
            })
        })
    })
}

fn solve_with(config: Config, clauses: &[Vec<i32>]) -> Report {
    let mut ctx = Context::from_config(config);
    for clause in clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    ctx.solve()
}

fn expected(clauses: &[Vec<i32>], atoms: i32) -> Report {
    match brute_force(clauses, atoms) {
        true => Report::Satisfiable,
        false => Report::Unsatisfiable,
    }
}

mod verdicts {
    use super::*;

    #[test]
    fn agree_with_brute_force() {
        let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..200 {
            let atoms = rng.gen_range(1..=6);
            let clause_count = rng.gen_range(0..=18);
            let clauses = random_formula(&mut rng, atoms, clause_count);

            assert_eq!(
                solve_with(Config::default(), &clauses),
                expected(&clauses, atoms),
                "{clauses:?}"
            );
        }
    }

    #[test]
    fn independent_of_configuration() {
        let mut rng = MinimalPCG32::from_seed(11_u64.to_le_bytes());

        for round in 0..100 {
            let atoms = rng.gen_range(2..=6);
            let clause_count = rng.gen_range(4..=20);
            let clauses = random_formula(&mut rng, atoms, clause_count);
            let verdict = expected(&clauses, atoms);

            let mut config = Config::default();
            assert!(config.pure_literal.set(round % 2 == 0));
            assert!(config.polarity.set(round % 3 == 0));
            assert!(config.tie_break.set(TieBreak::Random));
            assert!(config.seed.set(round));

            assert_eq!(solve_with(config, &clauses), verdict, "{clauses:?}");
        }
    }

    #[test]
    fn independent_of_clause_order() {
        let mut rng = MinimalPCG32::from_seed(13_u64.to_le_bytes());

        for _ in 0..100 {
            let atoms = rng.gen_range(2..=6);
            let clause_count = rng.gen_range(4..=20);
            let clauses = random_formula(&mut rng, atoms, clause_count);

            let forward = solve_with(Config::default(), &clauses);

            let mut reversed = clauses.clone();
            reversed.reverse();
            assert_eq!(solve_with(Config::default(), &reversed), forward);

            let mut rotated = clauses.clone();
            rotated.rotate_left(clause_count / 2);
            assert_eq!(solve_with(Config::default(), &rotated), forward);
        }
    }
}

mod simplification {
    use super::*;

    #[test]
    fn propagation_idempotent() {
        let mut rng = MinimalPCG32::from_seed(17_u64.to_le_bytes());

        for _ in 0..100 {
            let atoms = rng.gen_range(2..=8);
            let clause_count = rng.gen_range(1..=16);
            let mut formula = Formula::from_iter(random_formula(&mut rng, atoms, clause_count));

            unit::propagate(&mut formula);
            let fixpoint = formula.to_string();

            assert_eq!(unit::first_unit(&formula), None);
            assert_eq!(unit::propagate(&mut formula), 0);
            assert_eq!(formula.to_string(), fixpoint);
        }
    }

    #[test]
    fn pure_keeps_impure_clauses() {
        let mut rng = MinimalPCG32::from_seed(19_u64.to_le_bytes());

        for _ in 0..100 {
            let atoms = rng.gen_range(2..=8);
            let clause_count = rng.gen_range(1..=16);
            let clauses = random_formula(&mut rng, atoms, clause_count);

            let (pure_false, pure_true) = pure::pure_literals(clauses.iter().map(|clause| clause.iter()));
            let is_pure = |literal: &i32| match literal.is_positive() {
                true => pure_true.contains(&literal.unsigned_abs()),
                false => pure_false.contains(&literal.unsigned_abs()),
            };

            let kept: Vec<String> = clauses
                .iter()
                .filter(|clause| !clause.iter().any(|literal| is_pure(literal)))
                .map(|clause| Formula::from_iter([clause.clone()]).to_string())
                .collect();

            let mut formula = Formula::from_iter(clauses.clone());
            let removed = pure::eliminate_pure(&mut formula);

            assert_eq!(removed, clauses.len() - kept.len());
            assert_eq!(formula.to_string(), kept.concat());
        }
    }

    #[test]
    fn deep_copy_independent() {
        let mut formula = Formula::from_iter([vec![2, -3], vec![-2], vec![3, 2]]);
        let copy = formula.deep_copy();

        assert_eq!(copy.to_string(), formula.to_string());

        unit::propagate(&mut formula);
        assert_eq!(copy.to_string(), "2 -3 0\n-2 0\n3 2 0\n");
        assert_ne!(copy.to_string(), formula.to_string());
    }
}
