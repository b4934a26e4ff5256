use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use dpll_sat::config::TieBreak;

pub fn cli() -> Command {
    Command::new("dpll_cli")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to solve, one formula per file.")
            .long_help("The DIMACS form CNF files to solve, one formula per file.

If no file is given, a formula is read from standard input.
Files are solved in order and a verdict is written for each.
If some file cannot be read, or is not a DIMACS formula, no further files are solved."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Display stats on the formula and the solve, as comments."))

        .arg(Arg::new("no_pure")
            .long("no-pure")
            .action(ArgAction::SetTrue)
            .help("Skip pure literal elimination.")
            .long_help("Skip pure literal elimination.

The search remains complete, as pure literals are otherwise settled by branching."))

        .arg(Arg::new("negative_first")
            .long("negative-first")
            .action(ArgAction::SetTrue)
            .help("Branch on the negative literal of a chosen atom first."))

        .arg(Arg::new("tie_break")
            .long("tie-break")
            .value_name("METHOD")
            .value_parser(tie_break_parser)
            .required(false)
            .num_args(1)
            .help(format!("How to choose between equally good atoms to branch on.
Default: {}

lowest: The least atom, positive before negative.
random: Uniformly at random, reproducible with --seed.", TieBreak::Lowest)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed for random tie breaks."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for each solve, in seconds. Zero for no limit.")
            .long_help("Time limit for each solve, in seconds. Zero for no limit.

A solve which reaches the limit reports UNKNOWN."))
}

fn tie_break_parser(arg: &str) -> Result<TieBreak, std::io::Error> {
    arg.parse::<TieBreak>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown tie break method")
    })
}
