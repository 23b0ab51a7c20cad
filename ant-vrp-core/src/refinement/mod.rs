//! Contains route refinement logic applied to constructed routes.

use crate::models::SharedGraph;
use crate::models::solution::Route;

mod two_opt;
pub use self::two_opt::ExchangeTwoOpt;

/// A local search operator which improves a single route.
pub trait LocalOperator {
    /// Returns a route which costs no more than the given one. The first (depot) node keeps its position.
    fn optimize(&self, route: Route, graph: &SharedGraph) -> Route;
}
