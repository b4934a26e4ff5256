use dpll_sat::{config::Config, context::Context, reports::Report};

mod basic {

    use dpll_sat::types::err::{ClauseDBError, ErrorKind};

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(1).is_ok());
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());
        let (p, q) = (1, 2);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(matches!(ctx.report(), Report::Unsatisfiable))
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());
        let (p, q) = (1, 2);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    #[test]
    fn contradictory_units() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(3).is_ok());
        assert!(ctx.add_clause(-3).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(Vec::new()).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, 1, 2, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, -1]).is_ok());
        assert!(ctx.add_clause(vec![-2, 3, -2]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    #[test]
    fn tautology() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, -2, -1]).is_ok());
        assert!(ctx.add_clause(vec![2]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    #[test]
    fn zero_literal() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(vec![1, 0, 2]),
            Err(ErrorKind::ClauseDB(ClauseDBError::ZeroLiteral))
        );
        assert!(ctx.formula.is_empty());
    }

    #[test]
    fn solve_leaves_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1]).is_ok());
        let before = ctx.formula.to_string();

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.formula.to_string(), before);

        assert!(ctx.add_clause(vec![-2]).is_ok());
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }
}

mod configuration {
    use dpll_sat::config::TieBreak;

    use super::*;

    fn pigeonhole_three_two(config: Config) -> Report {
        // Three pigeons, two holes: atom 2 * p + h - 2 for pigeon p in hole h.
        let mut ctx = Context::from_config(config);
        for p in 1..=3 {
            assert!(ctx.add_clause(vec![2 * p - 1, 2 * p]).is_ok());
        }
        for h in 1..=2 {
            for p in 1..=3 {
                for q in (p + 1)..=3 {
                    assert!(ctx.add_clause(vec![-(2 * p + h - 2), -(2 * q + h - 2)]).is_ok());
                }
            }
        }
        ctx.solve()
    }

    #[test]
    fn without_pure() {
        let mut config = Config::default();
        assert!(config.pure_literal.set(false));

        let mut ctx = Context::from_config(config.clone());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, 2]).is_ok());
        assert!(ctx.add_clause(vec![3, 4]).is_ok());
        assert!(ctx.add_clause(vec![-3, -4]).is_ok());
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.counters.total_pure_eliminations, 0);

        assert_eq!(pigeonhole_three_two(config), Report::Unsatisfiable);
    }

    #[test]
    fn negative_first() {
        let mut config = Config::default();
        assert!(config.polarity.set(false));
        assert_eq!(pigeonhole_three_two(config), Report::Unsatisfiable);
    }

    #[test]
    fn random_tie_break() {
        for seed in 0..8 {
            let mut config = Config::default();
            assert!(config.tie_break.set(TieBreak::Random));
            assert!(config.seed.set(seed));
            assert_eq!(pigeonhole_three_two(config), Report::Unsatisfiable);
        }
    }

    #[test]
    fn counters() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.add_clause(vec![1, -2]).is_ok());
        assert!(ctx.add_clause(vec![-1, 2]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert_eq!(ctx.counters.total_decisions, 2);
        assert_eq!(ctx.counters.total_conflicts, 2);
        assert_eq!(ctx.counters.total_calls, 3);
        assert_eq!(ctx.counters.max_depth, 1);
    }
}

mod termination {
    use std::{
        cell::Cell,
        rc::Rc,
        time::Duration,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
    };

    use super::*;

    #[test]
    fn callback_before_solve() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());

        let abort = Arc::new(AtomicBool::new(true));
        let flag = abort.clone();
        ctx.set_callback_terminate(Box::new(move || flag.load(Ordering::Relaxed)));

        assert_eq!(ctx.solve(), Report::Unknown);
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.counters.total_decisions, 0);
    }

    #[test]
    fn callback_during_solve() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.add_clause(vec![1, -2]).is_ok());
        assert!(ctx.add_clause(vec![-1, 2]).is_ok());

        // Allow the first step, and terminate at the first branch.
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        ctx.set_callback_terminate(Box::new(move || {
            counter.set(counter.get() + 1);
            counter.get() > 1
        }));

        assert_eq!(ctx.solve(), Report::Unknown);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        assert!(config.time_limit.set(Duration::from_nanos(1)));

        let mut ctx = Context::from_config(config);
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1, -2]).is_ok());

        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(ctx.solve(), Report::Unknown);

        assert!(ctx.config.time_limit.set(Duration::ZERO));
        assert_eq!(ctx.solve(), Report::Satisfiable);
    }
}
