//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use ant_vrp_core::prelude::{ColonyConfig, GenericError};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A default amount of rounds.
pub const DEFAULT_ROUNDS: usize = 10;

/// An algorithm configuration. Every field is optional, missing values are taken from defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Amount of ants. Default is number of cpus.
    pub ants: Option<usize>,
    /// A range to draw exploitation threshold from. Default is `[0.45, 0.98]`.
    pub q0_range: Option<(f64, f64)>,
    /// A heuristic exponent. Default is 2.
    pub beta: Option<f64>,
    /// A local pheromone decay rate. Default is 0.1.
    pub rho: Option<f64>,
    /// Amount of rounds to run. Default is 10.
    pub rounds: Option<usize>,
    /// A random seed to get repeatable results.
    pub seed: Option<u64>,
    /// Specifies whether construction steps are logged.
    pub verbose: Option<bool>,
}

impl Config {
    /// Returns amount of rounds to run.
    pub fn rounds(&self) -> usize {
        self.rounds.unwrap_or(DEFAULT_ROUNDS)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates colony parameters from config.
pub fn create_colony_config(config: &Config) -> ColonyConfig {
    let default = ColonyConfig::default();

    ColonyConfig {
        ants: config.ants.unwrap_or(default.ants),
        q0_range: config.q0_range.unwrap_or(default.q0_range),
        beta: config.beta.unwrap_or(default.beta),
        rho: config.rho.unwrap_or(default.rho),
    }
}
