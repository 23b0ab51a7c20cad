#[cfg(test)]
#[path = "../../tests/unit/construction/transition_test.rs"]
mod transition_test;

use super::{AntError, ConstructionContext};
use crate::models::{PheromoneGuard, SharedGraph};
use crate::utils::Random;

/// Selects the next node using the state transition rule of Ant Colony System: with probability
/// `q0` the best edge is exploited, otherwise a node is explored with probability proportional
/// to its weight `tau * eta ^ beta`.
pub(crate) fn select_next_node(
    ctx: &ConstructionContext,
    pheromones: &PheromoneGuard,
    graph: &SharedGraph,
    current: usize,
    candidates: &[usize],
) -> Result<usize, AntError> {
    let q = ctx.random.uniform_real(0., 1.);
    let weights = get_weights(ctx.params.beta, pheromones, graph, current, candidates)?;

    if q < ctx.params.q0 {
        ctx.environment.log_verbose(|| format!("ant {}: exploitation at {current}", ctx.ant_id));
        exploit(weights.as_slice()).ok_or(AntError::NoCandidates { node: current })
    } else {
        ctx.environment.log_verbose(|| format!("ant {}: exploration at {current}", ctx.ant_id));
        explore(ctx.random, current, weights.as_slice())
    }
}

/// Returns normalized selection probabilities of candidates in their iteration order.
pub fn transition_probabilities(weights: &[(usize, f64)]) -> Vec<(usize, f64)> {
    let total = weights.iter().map(|(_, weight)| *weight).sum::<f64>();

    weights.iter().map(|&(node, weight)| (node, weight / total)).collect()
}

fn get_weights(
    beta: f64,
    pheromones: &PheromoneGuard,
    graph: &SharedGraph,
    current: usize,
    candidates: &[usize],
) -> Result<Vec<(usize, f64)>, AntError> {
    if candidates.is_empty() {
        return Err(AntError::NoCandidates { node: current });
    }

    candidates
        .iter()
        .map(|&node| {
            let tau = pheromones.pheromone(current, node);
            if tau == 0. {
                return Err(AntError::ZeroPheromone { from: current, to: node });
            }

            Ok((node, tau * graph.heuristic(current, node).powf(beta)))
        })
        .collect()
}

/// Picks the candidate with maximal weight, the first one wins ties.
fn exploit(weights: &[(usize, f64)]) -> Option<usize> {
    weights
        .iter()
        .fold((None, -1.), |(best, max), &(node, weight)| if weight > max { (Some(node), weight) } else { (best, max) })
        .0
}

/// Performs roulette wheel selection, falls back to the last candidate when accumulated
/// probability never reaches the drawn value.
fn explore(random: &dyn Random, current: usize, weights: &[(usize, f64)]) -> Result<usize, AntError> {
    let total = weights.iter().map(|(_, weight)| *weight).sum::<f64>();
    if total == 0. {
        return Err(AntError::ZeroWeight { node: current });
    }

    let r = random.uniform_real(0., 1.);
    let mut cumulative = 0.;

    for (node, probability) in transition_probabilities(weights) {
        cumulative += probability;
        if cumulative >= r {
            return Ok(node);
        }
    }

    weights.last().map(|(node, _)| *node).ok_or(AntError::NoCandidates { node: current })
}
