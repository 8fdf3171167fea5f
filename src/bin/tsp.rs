use std::io;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use tsp_metaheur::driver::{execute, RunConfig};
use tsp_metaheur::SearchError;

fn cli() -> Command {
    Command::new("tsp")
        .about("Solves random Euclidean TSP instances with local-search methods")
        .after_help(
            "TOKENS:\n  p<N>        problem size (default 5)\n  i<N>        iteration budget (default 500)\n  \
             -print      trace every iteration (default)\n  -noprint    no trace\n  \
             -problem    print the problem\n  -printSol   print each solution and its length\n  \
             t<N>        tabu list size (default 100)\n  --seed <N>  also accepted among the tokens\n  \
             fullSearch | randomProbe | hillClimbingRandomized | hillClimbingDeterministic | \
             simAnnealing | tabuSearch",
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the problem and all methods")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("tokens")
                .help("Run tokens, processed in order")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

/// Builds the run configuration from parsed arguments.
///
/// Once the first token is seen clap hands every later argument to
/// `tokens`, so a `--seed` there is read by the token grammar. A leading
/// `--seed` is parsed by clap and only applies when the tokens set none.
fn invocation(matches: &ArgMatches) -> Result<RunConfig, SearchError> {
    let tokens = matches
        .get_many::<String>("tokens")
        .unwrap_or_default()
        .map(String::as_str);
    let mut config = RunConfig::from_tokens(tokens)?;
    if config.seed.is_none() {
        if let Some(&seed) = matches.get_one::<u64>("seed") {
            config = config.with_seed(seed);
        }
    }
    Ok(config)
}

fn run() -> Result<(), SearchError> {
    let config = invocation(&cli().get_matches())?;

    let stdout = io::stdout();
    execute(&config, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunConfig, SearchError> {
        let matches = cli().try_get_matches_from(args).unwrap();
        invocation(&matches)
    }

    #[test]
    fn test_seed_after_tokens() {
        let config = parse(&[
            "tsp",
            "p10",
            "i2000",
            "-noprint",
            "hillClimbingRandomized",
            "simAnnealing",
            "-printSol",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.problem_size, 10);
        assert_eq!(config.iterations, 2000);
        assert!(!config.trace);
        assert!(config.print_solution);
        assert_eq!(config.methods.len(), 2);
    }

    #[test]
    fn test_seed_before_tokens() {
        let config = parse(&["tsp", "--seed", "1", "-noprint", "-problem", "p3", "randomProbe"])
            .unwrap();
        assert_eq!(config.seed, Some(1));
        assert!(config.print_problem);
        assert_eq!(config.problem_size, 3);
    }

    #[test]
    fn test_later_seed_wins() {
        let config = parse(&["tsp", "--seed", "1", "p3", "--seed=8"]).unwrap();
        assert_eq!(config.seed, Some(8));
    }

    #[test]
    fn test_no_tokens() {
        let config = parse(&["tsp"]).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_unknown_token_rejected() {
        assert!(matches!(
            parse(&["tsp", "p3", "--bogus"]),
            Err(SearchError::MalformedInvocation { .. })
        ));
    }
}
