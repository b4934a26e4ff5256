use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use dpll_sat::{
    config::{Config, TieBreak},
    context::Context,
    reports::Report,
};

fn cnf_files(collection: &str) -> Vec<PathBuf> {
    let pattern = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cnf")
        .join(collection)
        .join("*.cnf");

    let paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .expect("bad pattern")
        .flatten()
        .collect();

    assert!(!paths.is_empty(), "no formulas in {collection}");
    paths
}

fn solve_file(path: &Path, config: Config) -> Report {
    let file = File::open(path).unwrap_or_else(|_| panic!("failed to open {}", path.display()));

    let mut the_context = Context::from_config(config);
    the_context
        .read_dimacs(BufReader::new(&file))
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    the_context.solve()
}

fn check_collection(collection: &str, config: Config, expected: Report) {
    for path in cnf_files(collection) {
        assert_eq!(solve_file(&path, config.clone()), expected, "{}", path.display());
    }
}

mod default {
    use super::*;

    #[test]
    fn sat() {
        check_collection("sat", Config::default(), Report::Satisfiable);
    }

    #[test]
    fn unsat() {
        check_collection("unsat", Config::default(), Report::Unsatisfiable);
    }
}

mod configured {
    use super::*;

    fn configs() -> Vec<Config> {
        let mut without_pure = Config::default();
        without_pure.pure_literal.value = false;

        let mut negative_first = Config::default();
        negative_first.polarity.value = false;

        let mut random = Config::default();
        random.tie_break.value = TieBreak::Random;
        random.seed.value = 2024;

        vec![without_pure, negative_first, random]
    }

    #[test]
    fn sat() {
        for config in configs() {
            check_collection("sat", config, Report::Satisfiable);
        }
    }

    #[test]
    fn unsat() {
        for config in configs() {
            check_collection("unsat", config, Report::Unsatisfiable);
        }
    }
}
