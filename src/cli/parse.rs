use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use lookahead_sat::config::{Config, DirectionHeuristic, LookAheadHeuristic, Preselection};

/// Options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// The DIMACS files to read, as a single formula.
    pub paths: Vec<PathBuf>,

    /// Whether to report counters after a solve.
    pub stats: bool,
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

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("lookahead_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by a look-ahead DPLL search")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to parse (as a single formula)."))

        .arg(Arg::new("heuristic")
            .long("heuristic")
            .value_name("HEURISTIC")
            .value_parser(clap::builder::ValueParser::new(heuristic_parser))
            .required(false)
            .num_args(1)
            .help(format!("The heuristic used to score atoms during a look-ahead.
Default: {}", defaults.look_ahead.value))
            .long_help(format!("The heuristic used to score atoms during a look-ahead.
Default: {}

  - CRH : Clause reduction, the weighted sum of clauses reduced in size.
  - WBH : Weighted binaries, over the negated literals of each new binary clause.
  - BSH : Backbone search, the product of negated literal weights of each new binary clause.
  - BSRH: Backbone search, with weights renormalised and recounted.", defaults.look_ahead.value)))

        .arg(Arg::new("direction")
            .long("direction")
            .value_name("DIRECTION")
            .value_parser(clap::builder::ValueParser::new(direction_parser))
            .required(false)
            .num_args(1)
            .help(format!("The heuristic used to choose which value of a decision to try first.
Default: {}", defaults.direction.value))
            .long_help(format!("The heuristic used to choose which value of a decision to try first.
Default: {}

  - KCNFS: Prefer the value whose literal occurs more often.
  - MARCH: Prefer the value opposite to the better look-ahead.
  - POSIT: Prefer the value whose literal has the lesser weight.
  - FIXED: Always try true first.", defaults.direction.value)))

        .arg(Arg::new("preselection")
            .long("preselection")
            .value_name("POLICY")
            .value_parser(clap::builder::ValueParser::new(preselection_parser))
            .required(false)
            .num_args(1)
            .help(format!("The policy for which atoms are examined during a look-ahead.
Default: {}", defaults.preselection.value))
            .long_help(format!("The policy for which atoms are examined during a look-ahead.
Default: {}

  - all  : Every unvalued atom.
  - propz: Atoms of binary clauses, with the tightest policy near the root.
  - cra  : The atoms with the greatest clause reduction approximation.", defaults.preselection.value)))

        .arg(Arg::new("autarky")
            .long("autarky")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Maintain literal occurrence counts, regardless of the heuristics in use."))

        .arg(Arg::new("local_learning")
            .long("local-learning")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Record atoms implied by reduced binary clauses during propagation."))

        .arg(Arg::new("ternary")
            .long("ternary")
            .value_name("COEFFICIENT")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The coefficient of a clause of size three, used by clause reduction.
Default: {}", defaults.ternary_coefficient.value)))

        .arg(Arg::new("stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display counts from the solve."))
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
pub fn config_from_args(args: &ArgMatches) -> Result<(Config, CliConfig), ConfigError> {
    let mut the_config = Config::default();
    let mut cli_options = CliConfig::default();

    if let Ok(Some(paths)) = args.try_get_many::<PathBuf>("paths") {
        cli_options.paths = paths.cloned().collect();
    }

    if let Ok(Some(heuristic)) = args.try_get_one::<LookAheadHeuristic>("heuristic") {
        if !the_config.look_ahead.set(*heuristic) {
            return Err(ConfigError::NonSpecific(format!("Unsupported heuristic: {heuristic}")));
        }
        println!("c heuristic set to: {heuristic}");
    }

    if let Ok(Some(direction)) = args.try_get_one::<DirectionHeuristic>("direction") {
        if !the_config.direction.set(*direction) {
            return Err(ConfigError::NonSpecific(format!("Unsupported direction: {direction}")));
        }
        println!("c direction set to: {direction}");
    }

    if let Ok(Some(preselection)) = args.try_get_one::<Preselection>("preselection") {
        if !the_config.preselection.set(*preselection) {
            return Err(ConfigError::NonSpecific(format!(
                "Unsupported preselection: {preselection}"
            )));
        }
        println!("c preselection set to: {preselection}");
    }

    if args.get_flag("autarky") {
        the_config.autarky.value = true;
        println!("c autarky set to: true");
    }

    if args.get_flag("local_learning") {
        the_config.local_learning.value = true;
        println!("c local_learning set to: true");
    }

    if let Ok(Some(coefficient)) = args.try_get_one::<f64>("ternary") {
        let (min, max) = the_config.ternary_coefficient.min_max();
        if !the_config.ternary_coefficient.set(*coefficient) {
            return Err(ConfigError::NonSpecific(format!(
                "ternary requires a value between {min} and {max}"
            )));
        }
        println!("c ternary set to: {coefficient}");
    }

    cli_options.stats = args.get_flag("stats");

    Ok((the_config, cli_options))
}

fn heuristic_parser(arg: &str) -> Result<LookAheadHeuristic, std::io::Error> {
    arg.parse::<LookAheadHeuristic>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown look-ahead heuristic")
    })
}

fn direction_parser(arg: &str) -> Result<DirectionHeuristic, std::io::Error> {
    arg.parse::<DirectionHeuristic>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown direction heuristic")
    })
}

fn preselection_parser(arg: &str) -> Result<Preselection, std::io::Error> {
    arg.parse::<Preselection>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown preselection policy")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let matches = cli().get_matches_from(["lookahead_cli", "formula.cnf"]);
        let Ok((config, cli_options)) = config_from_args(&matches) else {
            panic!("Default arguments rejected");
        };

        assert_eq!(config.look_ahead.value, LookAheadHeuristic::WBH);
        assert_eq!(cli_options.paths, vec![PathBuf::from("formula.cnf")]);
        assert!(!cli_options.stats);
    }

    #[test]
    fn options() {
        let matches = cli().get_matches_from([
            "lookahead_cli",
            "--heuristic",
            "BSRH",
            "--direction",
            "KCNFS",
            "--preselection",
            "cra",
            "--autarky",
            "--ternary",
            "0.5",
            "--stats",
            "formula.cnf",
        ]);
        let Ok((config, cli_options)) = config_from_args(&matches) else {
            panic!("Arguments rejected");
        };

        assert_eq!(config.look_ahead.value, LookAheadHeuristic::BSRH);
        assert_eq!(config.direction.value, DirectionHeuristic::KCNFS);
        assert_eq!(config.preselection.value, Preselection::Cra);
        assert!(config.autarky.value);
        assert!(!config.local_learning.value);
        assert_eq!(config.ternary_coefficient.value, 0.5);
        assert!(cli_options.stats);
    }

    #[test]
    fn ternary_out_of_bounds() {
        let matches = cli().get_matches_from(["lookahead_cli", "--ternary", "2.0"]);
        assert!(config_from_args(&matches).is_err());
    }

    #[test]
    fn unknown_heuristic() {
        let result = cli().try_get_matches_from(["lookahead_cli", "--heuristic", "VSIDS"]);
        assert!(result.is_err());
    }

    #[test]
    fn direction_help() {
        let help = cli().render_long_help().to_string();
        assert!(help.contains("KCNFS: Prefer the value whose literal occurs more often."));
        assert!(help.contains("POSIT: Prefer the value whose literal has the lesser weight."));
    }

    #[test]
    fn command_is_valid() {
        cli().debug_assert();
    }
}
