//! Core crate contains the building blocks of an ***Ant Colony System*** which solves a capacitated
//! ***Vehicle Routing Problem*** with route length limits.
//!
//! Every ant is a worker running on its own thread. A colony coordinator starts a round on all ants,
//! each ant constructs a complete multi-vehicle solution while sharing the pheromone trails with its
//! siblings, refines every route with 2-opt and hands the result back to the coordinator.
//!
//! # Example
//!
//! ```
//! use ant_vrp_core::prelude::*;
//! use std::sync::Arc;
//!
//! let graph = GraphBuilder::from_coordinates(&[(0., 0.), (0., 3.), (4., 3.), (4., 0.)], false)
//!     .build()
//!     .expect("cannot build graph");
//! let vehicles = vec![Vehicle { id: 0, depot: 0, max_distance: 100., max_capacity: 10 }];
//! let problem = Problem::new(Arc::new(graph), vehicles, vec![0, 3, 4, 2]).expect("invalid problem");
//!
//! let environment = Arc::new(Environment::new_with_seed(Some(42)));
//! let ant = Ant::new(0, AntParams::default(), environment.random_for(0), environment);
//!
//! let solution = ant.run_round(&problem).expect("round has failed");
//! assert_eq!(solution.routes.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/integration/round_properties_test.rs"]
mod round_properties_test;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod refinement;
pub mod solver;
pub mod utils;
