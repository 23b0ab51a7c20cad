#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{SharedGraph, Vehicle};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A demand type.
pub type Demand = u32;

/// Defines a routing problem solved by the colony.
pub struct Problem {
    /// A graph shared by all ants.
    pub graph: Arc<SharedGraph>,
    /// Available vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Demand per node, its length equals to graph size.
    pub demands: Vec<Demand>,
}

impl Problem {
    /// Creates a new instance of `Problem` checking that its parts are consistent.
    pub fn new(graph: Arc<SharedGraph>, vehicles: Vec<Vehicle>, demands: Vec<Demand>) -> GenericResult<Self> {
        if demands.len() != graph.size() {
            return Err(format!("expecting {} demands, got {}", graph.size(), demands.len()).into());
        }

        let mut ids = FxHashSet::default();
        for vehicle in vehicles.iter() {
            if !ids.insert(vehicle.id) {
                return Err(format!("duplicate vehicle id: {}", vehicle.id).into());
            }

            if vehicle.depot >= graph.size() {
                return Err(format!("vehicle {} has unknown depot: {}", vehicle.id, vehicle.depot).into());
            }

            if vehicle.max_distance.is_nan() || vehicle.max_distance < 0. {
                return Err(format!("vehicle {} has invalid max distance", vehicle.id).into());
            }
        }

        Ok(Self { graph, vehicles, demands })
    }

    /// Returns total demand of all nodes.
    pub fn total_demand(&self) -> u64 {
        self.demands.iter().map(|&demand| demand as u64).sum()
    }
}
