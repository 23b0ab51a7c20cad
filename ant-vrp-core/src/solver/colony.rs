#[cfg(test)]
#[path = "../../tests/unit/solver/colony_test.rs"]
mod colony_test;

use super::{Ant, AntHandle};
use crate::construction::{AntError, AntParams, DEFAULT_BETA, DEFAULT_Q0_RANGE, DEFAULT_RHO};
use crate::models::Problem;
use crate::models::solution::AntSolution;
use crate::utils::{Environment, GenericError, GenericResult, Timer, get_cpus};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

/// A result of the round reported by an ant.
pub type AntResult = Result<AntSolution, AntError>;

/// A coordinator contract as seen by ants.
///
/// `update` is called by every ant from its own thread once its round is finished, so it must be
/// safe to call concurrently.
pub trait Colony: Send + Sync {
    /// Returns the problem to be solved in the next round.
    fn problem(&self) -> Arc<Problem>;

    /// Accepts the result of the ant's round.
    fn update(&self, ant_id: usize, result: AntResult);
}

/// Specifies colony parameters.
#[derive(Clone, Debug)]
pub struct ColonyConfig {
    /// Amount of ants.
    pub ants: usize,
    /// A range to draw exploitation threshold of every ant from.
    pub q0_range: (f64, f64),
    /// A heuristic exponent.
    pub beta: f64,
    /// A local pheromone decay rate.
    pub rho: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self { ants: get_cpus(), q0_range: DEFAULT_Q0_RANGE, beta: DEFAULT_BETA, rho: DEFAULT_RHO }
    }
}

struct ChannelColony {
    problem: Arc<Problem>,
    sender: Sender<(usize, AntResult)>,
}

impl Colony for ChannelColony {
    fn problem(&self) -> Arc<Problem> {
        self.problem.clone()
    }

    fn update(&self, ant_id: usize, result: AntResult) {
        // NOTE receiver is gone only when the runner is dropped, nobody is interested in the result
        let _ = self.sender.send((ant_id, result));
    }
}

/// Runs a fixed set of ants, each on its own thread, round by round.
///
/// Aggregation of round results (global pheromone update, best solution tracking) and the decision
/// when to stop are left to the caller.
pub struct ColonyRunner {
    ants: Vec<AntHandle>,
    receiver: Receiver<(usize, AntResult)>,
    environment: Arc<Environment>,
    round: usize,
}

impl ColonyRunner {
    /// Creates a colony and starts its ants. Every ant draws its exploitation threshold from the
    /// configured range using its own random generator.
    pub fn new(config: &ColonyConfig, problem: Arc<Problem>, environment: Arc<Environment>) -> GenericResult<Self> {
        validate_config(config)?;

        let (sender, receiver) = channel();
        let colony: Arc<dyn Colony> = Arc::new(ChannelColony { problem, sender });

        let ants = (0..config.ants)
            .map(|id| {
                let random = environment.random_for(id);
                let params = AntParams {
                    beta: config.beta,
                    rho: config.rho,
                    ..AntParams::new_random(config.q0_range, random.as_ref())
                };

                environment
                    .log_verbose(|| format!("ant {id}: q0={}, beta={}, rho={}", params.q0, params.beta, params.rho));

                Ant::new(id, params, random, environment.clone()).spawn(colony.clone())
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { ants, receiver, environment, round: 0 })
    }

    /// Returns amount of ants.
    pub fn size(&self) -> usize {
        self.ants.len()
    }

    /// Returns amount of started rounds.
    pub fn rounds(&self) -> usize {
        self.round
    }

    /// Starts a round on every ant and waits until all of them report. Results are ordered by ant id.
    pub fn run_round(&mut self) -> GenericResult<Vec<(usize, AntResult)>> {
        let timer = Timer::start();
        self.round += 1;

        self.ants.iter().for_each(|ant| ant.signal_start());

        let mut results = (0..self.ants.len())
            .map(|_| {
                self.receiver.recv().map_err(|err| GenericError::from(format!("cannot receive ant result: '{err}'")))
            })
            .collect::<GenericResult<Vec<_>>>()?;
        results.sort_by_key(|(ant_id, _)| *ant_id);

        let failed = results.iter().filter(|(_, result)| result.is_err()).count();
        (self.environment.logger)(
            format!(
                "round {} finished in {}ms: {} succeeded, {} failed",
                self.round,
                timer.elapsed_millis(),
                results.len() - failed,
                failed
            )
            .as_str(),
        );

        Ok(results)
    }

    /// Terminates all ants and waits until their threads exit.
    pub fn shutdown(self) -> GenericResult<()> {
        self.ants.iter().for_each(|ant| ant.terminate());

        self.ants.into_iter().try_for_each(|ant| ant.join())
    }
}

fn validate_config(config: &ColonyConfig) -> GenericResult<()> {
    let (min, max) = config.q0_range;

    if config.ants == 0 {
        return Err("colony should have at least one ant".into());
    }

    if !(0. ..=1.).contains(&min) || !(0. ..=1.).contains(&max) || min > max {
        return Err(format!("invalid q0 range: [{min}, {max}]").into());
    }

    if !config.beta.is_finite() {
        return Err(format!("invalid beta: {}", config.beta).into());
    }

    if !(0. ..=1.).contains(&config.rho) {
        return Err(format!("invalid rho: {}", config.rho).into());
    }

    Ok(())
}
