#[cfg(test)]
#[path = "../../tests/unit/construction/feasibility_test.rs"]
mod feasibility_test;

use super::state::ActiveRoute;
use crate::models::{Demand, SharedGraph};

/// Checks whether the node with given remaining demand can be appended to the route.
///
/// Distance: the route cost with the new edge and the edge back to depot should not exceed the
/// vehicle's limit. Capacity: the vehicle should have some capacity left, and the new load should
/// fit it unless the node's demand alone exceeds the capacity: such node is served partially.
pub(crate) fn is_feasible(graph: &SharedGraph, route: &ActiveRoute, node: usize, demand: Demand) -> bool {
    let distance = graph.distance(route.last(), node) + graph.distance(node, route.first());
    if route.cost + distance > route.vehicle.max_distance {
        return false;
    }

    let capacity = route.vehicle.max_capacity;
    if route.load >= capacity {
        return false;
    }

    let next_load = route.load as u64 + demand as u64;

    !(next_load > capacity as u64 && demand <= capacity)
}
