use lookahead_sat::{
    context::Context,
    reports::Report,
    types::err::{self},
};

mod parse;
mod read;

use read::{read_dimacs, ReadError};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let (config, cli_options) = match parse::config_from_args(&matches) {
        Ok(pair) => pair,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if cli_options.paths.is_empty() {
        println!("c Path to CNF required");
        std::process::exit(1);
    }

    let mut the_context = Context::from_config(config);

    for path in &cli_options.paths {
        match read_dimacs(path, &mut the_context) {
            Ok(()) => {}

            Err(ReadError::ParseError(err::ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))) => {
                println!("c An empty clause was read.");
                println!("s {}", Report::Unsatisfiable);
                std::process::exit(20);
            }

            Err(e) => {
                println!("c Error loading DIMACS: {e}");
                std::process::exit(1);
            }
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(1);
        }
    };

    if cli_options.stats {
        let counters = &the_context.counters;
        println!("c Decisions:       {}", counters.decisions);
        println!("c Look-aheads:     {}", counters.look_aheads);
        println!("c Failed literals: {}", counters.failed_literals);
        println!("c Propagations:    {}", counters.propagations);
        println!("c Deepest level:   {}", counters.deepest_level);
        println!("c Time:            {:.2?}", counters.time);
    }

    println!("s {report}");

    match report {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(0),
    }
}
