#[cfg(test)]
#[path = "../../tests/unit/refinement/two_opt_test.rs"]
mod two_opt_test;

use super::LocalOperator;
use crate::models::SharedGraph;
use crate::models::solution::Route;

/// A minimal cost decrease which is considered as an improvement.
const IMPROVEMENT_THRESHOLD: f64 = 1E-9;

/// Implements a classical TSP's two opt swap operation on a closed tour.
///
/// Each sweep scans all pairs of edges `(i, i + 1)` and `(j, j + 1)`, the last one wraps around to
/// the depot. For every `i`, the most improving `j` is searched and the segment between the edges is
/// reversed immediately. Sweeps are repeated until no improving move is found.
///
/// Cost deltas are exact only for symmetric distances, [`crate::models::GraphBuilder`] rejects other ones.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Default)]
pub struct ExchangeTwoOpt {}

impl LocalOperator for ExchangeTwoOpt {
    fn optimize(&self, route: Route, graph: &SharedGraph) -> Route {
        let mut route = route;
        let size = route.len();

        if size < 3 {
            return route;
        }

        let mut has_improvement = true;
        while has_improvement {
            has_improvement = false;

            for i in 0..size - 1 {
                let (best_j, _) = ((i + 1)..size).fold((i, -IMPROVEMENT_THRESHOLD), |(best_j, best_delta), j| {
                    let next_j = (j + 1) % size;
                    let delta = graph.distance(route[i], route[j]) + graph.distance(route[i + 1], route[next_j])
                        - graph.distance(route[i], route[i + 1])
                        - graph.distance(route[j], route[next_j]);

                    if delta < best_delta { (j, delta) } else { (best_j, best_delta) }
                });

                if best_j != i {
                    route[i + 1..=best_j].reverse();
                    has_improvement = true;
                }
            }
        }

        route
    }
}
