/*!
Configuration of a context.

All configuration for a context is contained within a [Config] struct.
Each option is a [ConfigOption], which bundles the value of the option with its name and bounds.

```rust
# use dpll_sat::config::{Config, TieBreak};
let mut config = Config::default();

assert!(config.tie_break.set(TieBreak::Random));
assert!(config.seed.set(73));
assert!(config.pure_literal.set(false));
assert!(!config.pure_literal.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod tie_break;
pub use tie_break::TieBreak;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Apply pure literal elimination at each step of a solve.
    pub pure_literal: ConfigOption<bool>,

    /// The polarity of the first branch on a chosen atom, with `true` for the positive literal.
    pub polarity: ConfigOption<bool>,

    /// How to break ties when choosing an atom to branch on.
    pub tie_break: ConfigOption<TieBreak>,

    /// The seed of the rng of a context.
    pub seed: ConfigOption<u64>,

    /// The time limit for a solve, with a limit of zero for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    /// The default configuration is deterministic.
    fn default() -> Self {
        Config {
            pure_literal: ConfigOption {
                name: "pure_literal",
                min: false,
                max: true,
                value: true,
            },

            polarity: ConfigOption {
                name: "polarity",
                min: false,
                max: true,
                value: true,
            },

            tie_break: ConfigOption {
                name: "tie_break",
                min: TieBreak::MIN,
                max: TieBreak::MAX,
                value: TieBreak::Lowest,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },
        }
    }
}
