#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{path::Path, thread};

use dpll_sat::{config::Config, context::Context, reports::Report};

mod cli;
mod config;
mod read;

use config::{config_from_args, CliConfig};
use read::{examine_parser_info, read_dimacs, ReadError};

/// The stack size of the thread on which formulas are solved, as the depth of the search may be as great as the count of atoms.
const SOLVE_STACK_SIZE: usize = 512 * 1024 * 1024;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli::cli().get_matches();

    let config = match config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let cli_options = CliConfig::from_args(&matches);

    let solver = thread::Builder::new()
        .name("solve".to_owned())
        .stack_size(SOLVE_STACK_SIZE)
        .spawn(move || solve_all(config, cli_options));

    let outcome = match solver {
        Ok(handle) => handle.join(),
        Err(e) => {
            eprintln!("c Failed to start a solve: {e}");
            std::process::exit(1);
        }
    };

    match outcome {
        Ok(Ok(code)) => std::process::exit(code),
        Ok(Err(e)) => {
            eprintln!("c {e}");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("c The solve panicked");
            std::process::exit(1);
        }
    }
}

/// Solves each formula in turn, stopping at the first formula which cannot be read.
///
/// Returns the exit code of the process, which distinguishes the verdict when a single formula is solved.
fn solve_all(config: Config, cli_options: CliConfig) -> Result<i32, ReadError> {
    let paths: Vec<Option<&Path>> = match cli_options.paths.is_empty() {
        true => vec![None],
        false => cli_options.paths.iter().map(|path| Some(path.as_path())).collect(),
    };

    let mut last_report = Report::Unknown;

    for path in &paths {
        let mut ctx = Context::from_config(config.clone());

        let info = read_dimacs(*path, &mut ctx)?;
        if cli_options.stats {
            if let Some(path) = path {
                println!("c {}", path.display());
            }
            examine_parser_info(&info);
        }

        last_report = ctx.solve();

        if cli_options.stats {
            println!("{}", ctx.counters);
        }
        println!("{last_report}");
    }

    let code = match (paths.len(), last_report) {
        (1, Report::Satisfiable) => 10,
        (1, Report::Unsatisfiable) => 20,
        (1, Report::Unknown) => 30,
        _ => 0,
    };
    Ok(code)
}
