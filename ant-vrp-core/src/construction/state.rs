#[cfg(test)]
#[path = "../../tests/unit/construction/state_test.rs"]
mod state_test;

use super::feasibility::is_feasible;
use super::{AntError, ConstructedRoutes};
use crate::models::solution::{Route, UsedEdges};
use crate::models::{Demand, PheromoneGuard, Problem, SharedGraph, Vehicle, VehicleId};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// A route of the vehicle which is currently used by the ant.
pub(crate) struct ActiveRoute {
    pub vehicle: Vehicle,
    pub nodes: Route,
    pub visits: Vec<(usize, Demand)>,
    pub cost: f64,
    pub load: Demand,
}

impl ActiveRoute {
    /// Returns the first (depot) node of the route.
    pub fn first(&self) -> usize {
        self.nodes.first().copied().unwrap_or(self.vehicle.depot)
    }

    /// Returns the last node of the route.
    pub fn last(&self) -> usize {
        self.nodes.last().copied().unwrap_or(self.vehicle.depot)
    }

    fn remaining_capacity(&self) -> Demand {
        self.vehicle.max_capacity.saturating_sub(self.load)
    }
}

/// Keeps per-round construction state of the ant. It is rebuilt from the problem for every round.
pub(crate) struct ConstructionState<'a> {
    graph: &'a SharedGraph,
    vehicles: Vec<Vehicle>,
    demands: Vec<Demand>,
    unvisited: BTreeSet<usize>,
    routes: FxHashMap<VehicleId, Route>,
    visits: FxHashMap<VehicleId, Vec<(usize, Demand)>>,
    used_edges: UsedEdges,
    cost: f64,
    active: Option<ActiveRoute>,
}

impl<'a> ConstructionState<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        let graph = problem.graph.as_ref();
        let demands = problem.demands.clone();
        let unvisited = demands.iter().enumerate().filter(|(_, demand)| **demand > 0).map(|(node, _)| node).collect();

        // NOTE vehicles are taken from the back, keep the original order of usage
        let vehicles = problem.vehicles.iter().rev().cloned().collect();

        Self {
            graph,
            vehicles,
            demands,
            unvisited,
            routes: FxHashMap::default(),
            visits: FxHashMap::default(),
            used_edges: UsedEdges::new(graph.size()),
            cost: 0.,
            active: None,
        }
    }

    /// Returns true when demand of all nodes is served.
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Returns amount of nodes with remaining demand.
    pub fn unserved(&self) -> usize {
        self.unvisited.len()
    }

    /// Returns remaining demand of the node.
    pub fn remaining_demand(&self, node: usize) -> Demand {
        self.demands[node]
    }

    /// Returns the node where the active route ends.
    pub fn current_node(&self) -> Option<usize> {
        self.active.as_ref().map(|route| route.last())
    }

    /// Returns nodes of the active route.
    pub fn active_nodes(&self) -> &[usize] {
        self.active.as_ref().map_or(&[], |route| route.nodes.as_slice())
    }

    /// Returns candidates to visit from the current node: unvisited nodes from its candidate list,
    /// otherwise, any unvisited node except the current one, otherwise, the current node itself.
    pub fn candidates(&self, current: usize) -> Vec<usize> {
        let candidates = self
            .graph
            .candidates(current)
            .iter()
            .copied()
            .filter(|node| self.unvisited.contains(node))
            .collect::<Vec<_>>();

        if !candidates.is_empty() {
            return candidates;
        }

        let others = self.unvisited.iter().copied().filter(|&node| node != current).collect::<Vec<_>>();

        if others.is_empty() { self.unvisited.iter().copied().collect() } else { others }
    }

    /// Checks whether the node can be appended to the active route.
    pub fn is_feasible(&self, node: usize) -> bool {
        self.active.as_ref().is_some_and(|route| is_feasible(self.graph, route, node, self.demands[node]))
    }

    /// Activates the next vehicle and seeds its route at the vehicle's depot consuming as much of
    /// the depot's demand as capacity allows.
    pub fn start_vehicle(&mut self) -> Result<(), AntError> {
        if self.is_complete() {
            return Ok(());
        }

        let vehicle = self.vehicles.pop().ok_or(AntError::VehiclesExhausted { unserved: self.unserved() })?;
        let depot = vehicle.depot;

        let mut route =
            ActiveRoute { nodes: vec![depot], visits: Vec::default(), cost: 0., load: 0, vehicle };
        let consumed = self.consume_demand(depot, route.remaining_capacity());
        route.load += consumed;
        route.visits.push((depot, consumed));

        self.active = Some(route);

        Ok(())
    }

    /// Appends the node to the active route and applies local pheromone update on the traversed edge.
    pub fn insert_node(&mut self, node: usize, pheromones: &mut PheromoneGuard, rho: f64) {
        let Some(capacity) = self.active.as_ref().map(|route| route.remaining_capacity()) else {
            return;
        };

        let consumed = self.consume_demand(node, capacity);
        let tau0 = self.graph.base_pheromone();

        if let Some(route) = self.active.as_mut() {
            let last = route.last();

            route.cost += self.graph.distance(last, node);
            route.load += consumed;
            route.nodes.push(node);
            route.visits.push((node, consumed));
            self.used_edges.mark(last, node);

            apply_local_update(pheromones, tau0, rho, last, node);
        }
    }

    /// Closes the active route: applies local update on the edge back to depot and adds its distance.
    pub fn close_route(&mut self, pheromones: &mut PheromoneGuard, rho: f64) {
        if let Some(mut route) = self.active.take() {
            let (first, last) = (route.first(), route.last());

            apply_local_update(pheromones, self.graph.base_pheromone(), rho, last, first);

            route.cost += self.graph.distance(last, first);
            self.used_edges.mark(last, first);
            self.cost += route.cost;

            self.routes.insert(route.vehicle.id, route.nodes);
            self.visits.insert(route.vehicle.id, route.visits);
        }
    }

    pub fn into_routes(self) -> ConstructedRoutes {
        ConstructedRoutes { routes: self.routes, visits: self.visits, cost: self.cost, used_edges: self.used_edges }
    }

    fn consume_demand(&mut self, node: usize, capacity: Demand) -> Demand {
        let consumed = capacity.min(self.demands[node]);
        self.demands[node] -= consumed;

        if self.demands[node] == 0 {
            self.unvisited.remove(&node);
        }

        consumed
    }
}

/// Applies local updating rule on the edge: `(1 - rho) * tau + rho * tau0`.
pub fn apply_local_update(pheromones: &mut PheromoneGuard, tau0: f64, rho: f64, from: usize, to: usize) {
    let value = (1. - rho) * pheromones.pheromone(from, to) + rho * tau0;
    pheromones.set_pheromone(from, to, value);
}
