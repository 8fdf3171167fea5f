use std::io;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use tsp_metaheur::driver::Method;
use tsp_metaheur::experiment::{Sweep, SweepConfig};
use tsp_metaheur::SearchError;

fn cli() -> Command {
    Command::new("tsp-sweep")
        .about("Repeats TSP runs over a range of sizes and prints mean length and time per size")
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .default_value("5")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .help("Largest problem size (inclusive)")
                .default_value("29")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("repeats")
                .long("repeats")
                .default_value("14")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("iterations")
                .long("iterations")
                .default_value("1000")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("tabu-size")
                .long("tabu-size")
                .default_value("20")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .help("Method token, repeatable (default: tabuSearch, hillClimbingRandomized)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Run units one at a time")
                .action(ArgAction::SetTrue),
        )
}

fn run() -> Result<(), SearchError> {
    let matches = cli().get_matches();

    let min = matches.get_one::<usize>("min-size").copied().unwrap_or(5);
    let max = matches.get_one::<usize>("max-size").copied().unwrap_or(29);

    let mut config = SweepConfig::default()
        .with_sizes(min..=max)
        .with_parallel(!matches.get_flag("sequential"));
    if let Some(&repeats) = matches.get_one::<usize>("repeats") {
        config = config.with_repeats(repeats);
    }
    if let Some(&iterations) = matches.get_one::<usize>("iterations") {
        config = config.with_iterations(iterations);
    }
    if let Some(&tabu_size) = matches.get_one::<usize>("tabu-size") {
        config = config.with_tabu_size(tabu_size);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if let Some(tokens) = matches.get_many::<String>("method") {
        let methods = tokens
            .map(|t| {
                Method::from_token(t).ok_or_else(|| SearchError::MalformedInvocation {
                    token: t.clone(),
                    reason: "unknown method".into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        config = config.with_methods(methods);
    }

    let summary = Sweep::run(&config)?;
    print!("{summary}");
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
