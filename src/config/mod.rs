/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and is fixed once a solve begins.
Instances take a copy of the parts relevant to them, derived through [Config::instance].

# Example

```rust
# use lookahead_sat::config::{Config, DirectionHeuristic, LookAheadHeuristic};
let mut config = Config::default();
assert!(config.look_ahead.set(LookAheadHeuristic::CRH));
assert!(config.direction.set(DirectionHeuristic::KCNFS));

let instance_config = config.instance();
assert!(instance_config.literal_db.counts);
assert!(!instance_config.literal_db.weights);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{InstanceConfig, LiteralDBConfig};

mod direction;
pub use direction::DirectionHeuristic;

mod heuristic;
pub use heuristic::LookAheadHeuristic;

mod preselection;
pub use preselection::Preselection;

use crate::structures::coefficients::Coefficient;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The heuristic used to score candidate atoms during a look-ahead.
    pub look_ahead: ConfigOption<LookAheadHeuristic>,

    /// The heuristic used to choose which value of a decision atom to try first.
    pub direction: ConfigOption<DirectionHeuristic>,

    /// The policy for which atoms are examined during a look-ahead.
    pub preselection: ConfigOption<Preselection>,

    /// Maintain literal occurrence counts, regardless of whether some heuristic requires them.
    pub autarky: ConfigOption<bool>,

    /// Maintain a record of atoms implied by reduced binary clauses during propagation.
    ///
    /// The record is not used by any procedure.
    pub local_learning: ConfigOption<bool>,

    /// The coefficient of a clause of size three.
    pub ternary_coefficient: ConfigOption<Coefficient>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            look_ahead: ConfigOption {
                name: "heuristic",
                min: LookAheadHeuristic::MIN,
                max: LookAheadHeuristic::MAX,
                value: LookAheadHeuristic::WBH,
            },

            direction: ConfigOption {
                name: "direction",
                min: DirectionHeuristic::MIN,
                max: DirectionHeuristic::MAX,
                value: DirectionHeuristic::POSIT,
            },

            preselection: ConfigOption {
                name: "preselection",
                min: Preselection::MIN,
                max: Preselection::MAX,
                value: Preselection::All,
            },

            autarky: ConfigOption {
                name: "autarky",
                min: false,
                max: true,
                value: false,
            },

            local_learning: ConfigOption {
                name: "local_learning",
                min: false,
                max: true,
                value: false,
            },

            ternary_coefficient: ConfigOption {
                name: "ternary",
                min: 0.0,
                max: 1.0,
                value: 0.2,
            },
        }
    }
}

impl Config {
    /// The configuration of an instance, derived from the heuristics in use.
    pub fn instance(&self) -> InstanceConfig {
        let counts = self.autarky.value
            || self.direction.value.requires_counts()
            || self.preselection.value.requires_counts();

        let weights =
            self.look_ahead.value.requires_weights() || self.direction.value.requires_weights();

        InstanceConfig {
            literal_db: LiteralDBConfig { counts, weights },
            local_learning: self.local_learning.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_statistics() {
        let config = Config::default().instance();
        assert!(config.literal_db.weights);
        assert!(!config.literal_db.counts);
        assert!(!config.local_learning);
    }

    #[test]
    fn minimal_statistics() {
        let mut config = Config::default();
        config.look_ahead.value = LookAheadHeuristic::CRH;
        config.direction.value = DirectionHeuristic::FIXED;

        let instance_config = config.instance();
        assert!(!instance_config.literal_db.weights);
        assert!(!instance_config.literal_db.counts);

        config.autarky.value = true;
        assert!(config.instance().literal_db.counts);
    }

    #[test]
    fn bounded_options() {
        let mut config = Config::default();
        assert!(!config.ternary_coefficient.set(1.5));
        assert_eq!(config.ternary_coefficient.value, 0.2);
        assert!(config.ternary_coefficient.set(0.5));
        assert_eq!(config.ternary_coefficient.value, 0.5);
    }
}
