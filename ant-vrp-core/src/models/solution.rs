//! Contains types which describe a solution constructed by an ant.

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Demand, SharedGraph, VehicleId};
use rustc_hash::FxHashMap;

/// An ordered sequence of node indices which starts at the vehicle's depot. The tour returns to
/// the depot implicitly.
pub type Route = Vec<usize>;

/// A directed adjacency matrix which keeps track of edges used by routes.
#[derive(Clone, Debug, PartialEq)]
pub struct UsedEdges {
    size: usize,
    edges: Vec<bool>,
}

impl UsedEdges {
    /// Creates an empty matrix for the graph of given size.
    pub fn new(size: usize) -> Self {
        Self { size, edges: vec![false; size * size] }
    }

    /// Creates a matrix from closed tours.
    pub fn from_routes<'a>(size: usize, routes: impl Iterator<Item = &'a Route>) -> Self {
        routes.fold(Self::new(size), |mut used_edges, route| {
            route.windows(2).for_each(|edge| used_edges.mark(edge[0], edge[1]));
            if let (Some(&first), Some(&last)) = (route.first(), route.last()) {
                used_edges.mark(last, first);
            }

            used_edges
        })
    }

    /// Marks the edge as used.
    pub fn mark(&mut self, from: usize, to: usize) {
        self.edges[from * self.size + to] = true;
    }

    /// Checks whether the edge is used.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.edges[from * self.size + to]
    }

    /// Returns an iterator over used edges.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.edges.iter().enumerate().filter(|(_, used)| **used).map(move |(idx, _)| (idx / size, idx % size))
    }

    /// Returns amount of used edges.
    pub fn count(&self) -> usize {
        self.edges.iter().filter(|used| **used).count()
    }
}

/// A solution constructed by an ant within one round.
#[derive(Clone, Debug)]
pub struct AntSolution {
    /// An id of the ant which has constructed the solution.
    pub ant_id: usize,
    /// Routes per vehicle.
    pub routes: FxHashMap<VehicleId, Route>,
    /// Picked up load per visit in construction order.
    pub visits: FxHashMap<VehicleId, Vec<(usize, Demand)>>,
    /// Total cost of all routes.
    pub cost: f64,
    /// Edges used by routes.
    pub used_edges: UsedEdges,
}

impl AntSolution {
    /// Returns routes sorted by vehicle id.
    pub fn sorted_routes(&self) -> Vec<(VehicleId, &Route)> {
        let mut routes = self.routes.iter().map(|(&id, route)| (id, route)).collect::<Vec<_>>();
        routes.sort_by_key(|(id, _)| *id);

        routes
    }

    /// Returns total load picked up per node.
    pub fn served_demands(&self, size: usize) -> Vec<u64> {
        self.visits.values().flatten().fold(vec![0; size], |mut served, &(node, load)| {
            served[node] += load as u64;
            served
        })
    }
}

/// Returns the cost of the closed tour: the sum of consecutive edge distances plus the return edge.
pub fn route_cost(route: &[usize], graph: &SharedGraph) -> f64 {
    match (route.first(), route.last()) {
        (Some(&first), Some(&last)) => {
            route.windows(2).map(|edge| graph.distance(edge[0], edge[1])).sum::<f64>() + graph.distance(last, first)
        }
        _ => 0.,
    }
}
