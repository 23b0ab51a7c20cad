//! A collection of models to represent a problem and its solution.

mod fleet;
pub use self::fleet::{Vehicle, VehicleId};

mod graph;
pub use self::graph::*;

mod problem;
pub use self::problem::{Demand, Problem};

pub mod solution;
