use std::path::PathBuf;

use clap::ArgMatches;

use dpll_sat::config::{Config, TieBreak};

/// A collection of configuration options relevant only to the CLI.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// The files to solve, where no files is standard input.
    pub paths: Vec<PathBuf>,

    /// Whether to display stats.
    pub stats: bool,
}

impl CliConfig {
    pub fn from_args(args: &ArgMatches) -> Self {
        CliConfig {
            paths: args
                .get_many::<PathBuf>("paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            stats: args.get_flag("stats"),
        }
    }
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parse CLI arguments to a [Config] struct.
///
/// If some value is outside the bounds of the relevant option an error is returned.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if args.get_flag("no_pure") && !cfg.pure_literal.set(false) {
        return Err(out_of_bounds(cfg.pure_literal.name));
    }

    if args.get_flag("negative_first") && !cfg.polarity.set(false) {
        return Err(out_of_bounds(cfg.polarity.name));
    }

    if let Ok(Some(method)) = args.try_get_one::<TieBreak>("tie_break") {
        if !cfg.tie_break.set(*method) {
            return Err(out_of_bounds(cfg.tie_break.name));
        }
    }

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        if !cfg.seed.set(*seed) {
            return Err(out_of_bounds(cfg.seed.name));
        }
    }

    if let Ok(Some(seconds)) = args.try_get_one::<u64>("time_limit") {
        if !cfg.time_limit.set(std::time::Duration::from_secs(*seconds)) {
            let (min, max) = cfg.time_limit.min_max();
            return Err(ConfigError::NonSpecific(format!(
                "time_limit requires a value between {} and {} seconds",
                min.as_secs(),
                max.as_secs()
            )));
        }
    }

    Ok(cfg)
}

fn out_of_bounds(name: &str) -> ConfigError {
    ConfigError::NonSpecific(format!("{name} was given a value out of bounds"))
}
