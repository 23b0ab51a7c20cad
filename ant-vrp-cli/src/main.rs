//! A command line interface to *Vehicle Routing Problem* solver based on ant colony system.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Ant Colony VRP Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to ant colony Vehicle Routing Problem solver")
        .subcommand(get_solve_app())
        .get_matches();

    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer).unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        }),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
