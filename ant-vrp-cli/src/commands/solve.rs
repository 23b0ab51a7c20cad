#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use ant_vrp_cli::core::prelude::*;
use ant_vrp_cli::core::utils::create_default_logger;
use ant_vrp_cli::extensions::solve::config::{Config, create_colony_config, read_config};
use ant_vrp_cli::extensions::solve::formats::{
    create_round_report, format_ant_summary, format_problem_details, format_problem_summary, write_round_report,
};
use ant_vrp_cli::extensions::solve::interruption::create_interruption_flag;
use ant_vrp_cli::scientific::tsplib::TsplibProblem;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::sync::Arc;
use std::sync::atomic::Ordering;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const ANTS_ARG_NAME: &str = "ants";
const ROUNDS_ARG_NAME: &str = "rounds";
const RANDOM_SEED_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const ROUNDED_ARG_NAME: &str = "round";
const LOG_ARG_NAME: &str = "log";
const VERBOSE_ARG_NAME: &str = "verbose";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves capacitated Vehicle Routing Problem defined in TSPLIB95 format")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ANTS_ARG_NAME)
                .help("Specifies amount of ants, overrides config")
                .short('a')
                .long(ANTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUNDS_ARG_NAME)
                .help("Specifies amount of rounds, overrides config")
                .short('n')
                .long(ROUNDS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior, overrides config")
                .long(RANDOM_SEED_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUNDED_ARG_NAME)
                .help("Specifies whether distances should be rounded to the nearest integer")
                .long(ROUNDED_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Specifies whether construction steps are logged, implies logging")
                .long(VERBOSE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let problem_file = open_file(problem_path, "problem")?;

    // optional
    let config = get_config(matches)?;
    let is_rounded = matches.get_flag(ROUNDED_ARG_NAME);
    let is_logging = matches.get_flag(LOG_ARG_NAME) || config.verbose.unwrap_or(false);
    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let (problem, info) = BufReader::new(problem_file)
        .read_tsplib_with_info(is_rounded)
        .map_err(|err| format!("cannot read problem: '{err}'"))?;
    let problem = Arc::new(problem);

    let environment = Arc::new(Environment {
        logger: if is_logging { create_default_logger() } else { Arc::new(|_| {}) },
        is_verbose: config.verbose.unwrap_or(false),
        ..Environment::new_with_seed(config.seed)
    });

    (environment.logger)(format_problem_summary(&info, &problem).as_str());
    if environment.is_verbose {
        format_problem_details(&info, &problem).iter().for_each(|line| (environment.logger)(line.as_str()));
    }

    let should_interrupt = create_interruption_flag().map_err(|err| err.to_string())?;
    let mut runner = ColonyRunner::new(&create_colony_config(&config), problem.clone(), environment.clone())
        .map_err(|err| format!("cannot create colony: '{err}'"))?;

    let mut report = create_round_report(0, &[], &problem);
    for round in 1..=config.rounds() {
        if should_interrupt.load(Ordering::Relaxed) {
            (environment.logger)("interrupted, stopping");
            break;
        }

        let results = runner.run_round().map_err(|err| err.to_string())?;
        results.iter().for_each(|(ant_id, result)| {
            (environment.logger)(format_ant_summary(round, *ant_id, result).as_str());
        });

        report = create_round_report(round, results.as_slice(), &problem);
    }

    runner.shutdown().map_err(|err| err.to_string())?;

    write_round_report(out_writer_func(out_result), &report).map_err(|err| err.to_string())
}

/// Reads config file if specified and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => Config::default(),
    };

    let ants = parse_int_value::<usize>(matches, ANTS_ARG_NAME, "ants")?;
    let rounds = parse_int_value::<usize>(matches, ROUNDS_ARG_NAME, "rounds")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_NAME, "seed")?;
    let verbose = if matches.get_flag(VERBOSE_ARG_NAME) { Some(true) } else { None };

    Ok(Config {
        ants: ants.or(config.ants),
        rounds: rounds.or(config.rounds),
        seed: seed.or(config.seed),
        verbose: verbose.or(config.verbose),
        ..config
    })
}
