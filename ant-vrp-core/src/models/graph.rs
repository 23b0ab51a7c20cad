#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::utils::{GenericResult, compare_floats, map_reduce, parallel_collect};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A default size of candidate neighbor list.
pub const DEFAULT_CANDIDATES_SIZE: usize = 10;

/// A minimal distance used to estimate heuristic desirability, keeps coincident nodes finite.
const MIN_DISTANCE: f64 = 1E-6;

/// A graph shared by all ants of the colony.
///
/// Distances, heuristic desirability and candidate lists are immutable once the graph is built.
/// Pheromone trails are mutated concurrently by ants and can be accessed only through the lock
/// returned by [`SharedGraph::lock`].
pub struct SharedGraph {
    size: usize,
    distances: Vec<f64>,
    heuristics: Vec<f64>,
    candidates: Vec<Vec<usize>>,
    tau0: f64,
    pheromones: Mutex<Vec<f64>>,
}

impl SharedGraph {
    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.size + to]
    }

    /// Returns heuristic desirability of the edge (inverse of its distance).
    pub fn heuristic(&self, from: usize, to: usize) -> f64 {
        self.heuristics[from * self.size + to]
    }

    /// Returns candidate neighbors of the node ordered from the nearest one.
    pub fn candidates(&self, node: usize) -> &[usize] {
        self.candidates[node].as_slice()
    }

    /// Returns a baseline pheromone level (tau0).
    pub fn base_pheromone(&self) -> f64 {
        self.tau0
    }

    /// Acquires an exclusive access to pheromone trails. The lock is released when the guard is dropped.
    pub fn lock(&self) -> PheromoneGuard<'_> {
        // NOTE every write is a single assignment of a float, so the data is consistent even when
        // another thread panicked while holding the lock.
        let values = self.pheromones.lock().unwrap_or_else(PoisonError::into_inner);

        PheromoneGuard { size: self.size, values }
    }

    /// Returns a copy of pheromone matrix (row-major).
    pub fn pheromone_snapshot(&self) -> Vec<f64> {
        self.lock().values.clone()
    }
}

/// Provides an exclusive access to pheromone trails of the graph.
pub struct PheromoneGuard<'a> {
    size: usize,
    values: MutexGuard<'a, Vec<f64>>,
}

impl PheromoneGuard<'_> {
    /// Returns pheromone level of the edge.
    pub fn pheromone(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Sets pheromone level of the edge.
    pub fn set_pheromone(&mut self, from: usize, to: usize, value: f64) {
        self.values[from * self.size + to] = value;
    }

    /// Sets the same pheromone level on all edges.
    pub fn reset(&mut self, value: f64) {
        self.values.iter_mut().for_each(|pheromone| *pheromone = value);
    }
}

/// Builds [`SharedGraph`] from coordinates or distance matrix.
pub struct GraphBuilder {
    size: usize,
    distances: Vec<f64>,
    candidates_size: usize,
    tau0: Option<f64>,
}

impl GraphBuilder {
    /// Creates a builder using euclidean distances between coordinates.
    pub fn from_coordinates(coordinates: &[(f64, f64)], is_rounded: bool) -> Self {
        let rows = parallel_collect(coordinates, |&(x1, y1)| {
            coordinates
                .iter()
                .map(|&(x2, y2)| {
                    let distance = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
                    if is_rounded { distance.round() } else { distance }
                })
                .collect::<Vec<_>>()
        });

        Self::from_distances(coordinates.len(), rows.into_iter().flatten().collect())
    }

    /// Creates a builder using a row-major distance matrix of `size * size` elements.
    pub fn from_distances(size: usize, distances: Vec<f64>) -> Self {
        Self { size, distances, candidates_size: DEFAULT_CANDIDATES_SIZE, tau0: None }
    }

    /// Sets size of candidate neighbor list.
    pub fn with_candidates_size(mut self, candidates_size: usize) -> Self {
        self.candidates_size = candidates_size;
        self
    }

    /// Overrides baseline pheromone level, by default it is estimated from nearest neighbor tour.
    pub fn with_base_pheromone(mut self, tau0: f64) -> Self {
        self.tau0 = Some(tau0);
        self
    }

    /// Builds a graph.
    pub fn build(self) -> GenericResult<SharedGraph> {
        let size = self.size;

        if size == 0 {
            return Err("graph should have at least one node".into());
        }

        if self.distances.len() != size * size {
            return Err(format!("expecting {} distances, got {}", size * size, self.distances.len()).into());
        }

        let is_valid = map_reduce(
            self.distances.as_slice(),
            |distance| distance.is_finite() && *distance >= 0.,
            || true,
            |a, b| a && b,
        );
        if !is_valid {
            return Err("distances should be finite non-negative values".into());
        }

        let distance = |from: usize, to: usize| self.distances[from * size + to];
        if let Some(node) = (0..size).find(|&node| distance(node, node) != 0.) {
            return Err(format!("distance from node {node} to itself should be zero").into());
        }

        let mut pairs = (0..size).flat_map(|from| (from + 1..size).map(move |to| (from, to)));
        if let Some((from, to)) = pairs.find(|&(from, to)| distance(from, to) != distance(to, from)) {
            return Err(format!("distances should be symmetric, got different values for ({from}, {to})").into());
        }

        if self.candidates_size == 0 {
            return Err("candidate list size should be positive".into());
        }

        let tau0 = self.tau0.unwrap_or_else(|| estimate_base_pheromone(size, self.distances.as_slice()));
        if !tau0.is_finite() || tau0 <= 0. {
            return Err(format!("base pheromone should be positive, got {tau0}").into());
        }

        let heuristics = self.distances.iter().map(|distance| 1. / distance.max(MIN_DISTANCE)).collect();
        let candidates = create_candidates(size, self.distances.as_slice(), self.candidates_size);

        Ok(SharedGraph {
            size,
            distances: self.distances,
            heuristics,
            candidates,
            tau0,
            pheromones: Mutex::new(vec![tau0; size * size]),
        })
    }
}

fn create_candidates(size: usize, distances: &[f64], candidates_size: usize) -> Vec<Vec<usize>> {
    let nodes = (0..size).collect::<Vec<_>>();

    parallel_collect(nodes.as_slice(), |&node| {
        let row = &distances[node * size..(node + 1) * size];
        let mut neighbors = (0..size).filter(|&other| other != node).collect::<Vec<_>>();
        neighbors.sort_by(|&a, &b| compare_floats(row[a], row[b]).then(a.cmp(&b)));
        neighbors.truncate(candidates_size);

        neighbors
    })
}

/// Estimates tau0 as `1 / (n * L)` where `L` is the length of the nearest neighbor tour from the first node.
fn estimate_base_pheromone(size: usize, distances: &[f64]) -> f64 {
    let mut visited = vec![false; size];
    let mut current = 0;
    let mut length = 0.;
    visited[current] = true;

    for _ in 1..size {
        let next = (0..size)
            .filter(|&node| !visited[node])
            .min_by(|&a, &b| compare_floats(distances[current * size + a], distances[current * size + b]));

        if let Some(next) = next {
            length += distances[current * size + next];
            visited[next] = true;
            current = next;
        }
    }

    length += distances[current * size];

    if length > 0. { 1. / (size as f64 * length) } else { 1. }
}
