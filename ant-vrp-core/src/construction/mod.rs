//! Contains the route construction algorithm of a single ant: state transition rule, feasibility
//! checks and local pheromone updating.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

mod feasibility;
mod state;
mod transition;

pub(crate) use self::state::ConstructionState;
pub use self::state::apply_local_update;
pub use self::transition::transition_probabilities;

use crate::models::solution::{Route, UsedEdges};
use crate::models::{Demand, Problem, VehicleId};
use crate::utils::{Environment, Random};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// A default range of exploitation threshold.
pub const DEFAULT_Q0_RANGE: (f64, f64) = (0.45, 0.98);

/// A default heuristic exponent.
pub const DEFAULT_BETA: f64 = 2.;

/// A default local pheromone decay rate.
pub const DEFAULT_RHO: f64 = 0.1;

/// Parameters of the ant's decision policy.
#[derive(Clone, Debug, PartialEq)]
pub struct AntParams {
    /// An exploitation threshold in (0, 1): a probability to pick the best edge deterministically.
    pub q0: f64,
    /// A heuristic exponent.
    pub beta: f64,
    /// A local pheromone decay rate.
    pub rho: f64,
}

impl AntParams {
    /// Creates parameters with exploitation threshold drawn from the range with 0.01 granularity.
    pub fn new_random(q0_range: (f64, f64), random: &dyn Random) -> Self {
        let (min, max) = q0_range;
        let percent = random.uniform_int((min * 100.).round() as i32, (max * 100.).round() as i32);

        Self { q0: percent as f64 / 100., ..Self::default() }
    }
}

impl Default for AntParams {
    fn default() -> Self {
        Self { q0: 0.9, beta: DEFAULT_BETA, rho: DEFAULT_RHO }
    }
}

/// Specifies the reason why an ant failed to construct a solution within the round.
#[derive(Clone, Debug, PartialEq)]
pub enum AntError {
    /// A candidate edge has no pheromone left.
    ZeroPheromone {
        /// An edge start.
        from: usize,
        /// An edge end.
        to: usize,
    },
    /// Total weight of all candidates is zero.
    ZeroWeight {
        /// A node where decision was made.
        node: usize,
    },
    /// No candidate is available to continue a route.
    NoCandidates {
        /// A node where decision was made.
        node: usize,
    },
    /// All vehicles are used while some demand is not served.
    VehiclesExhausted {
        /// Amount of nodes with remaining demand.
        unserved: usize,
    },
}

impl Display for AntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AntError::ZeroPheromone { from, to } => write!(f, "pheromone is zero on edge ({from}, {to})"),
            AntError::ZeroWeight { node } => write!(f, "total weight of candidates is zero at node {node}"),
            AntError::NoCandidates { node } => write!(f, "no candidates to visit from node {node}"),
            AntError::VehiclesExhausted { unserved } => {
                write!(f, "no vehicles left while {unserved} node(s) have unserved demand")
            }
        }
    }
}

impl std::error::Error for AntError {}

/// Keeps references needed by the ant to make its decisions.
pub struct ConstructionContext<'a> {
    /// An ant id used for logging.
    pub ant_id: usize,
    /// Decision policy parameters.
    pub params: &'a AntParams,
    /// A random generator of the ant.
    pub random: &'a dyn Random,
    /// An environment.
    pub environment: &'a Environment,
}

/// Routes constructed within one round.
pub struct ConstructedRoutes {
    /// Routes per vehicle.
    pub routes: FxHashMap<VehicleId, Route>,
    /// Picked up load per visit.
    pub visits: FxHashMap<VehicleId, Vec<(usize, Demand)>>,
    /// Total cost of constructed routes.
    pub cost: f64,
    /// Edges traversed during construction.
    pub used_edges: UsedEdges,
}

/// Constructs routes until demand of every node is served.
///
/// The pheromone lock is held only for a single decision: picking the next node and either inserting
/// it or closing the active route.
pub fn construct_routes(ctx: &ConstructionContext, problem: &Problem) -> Result<ConstructedRoutes, AntError> {
    let graph = problem.graph.as_ref();
    let rho = ctx.params.rho;
    let mut state = ConstructionState::new(problem);

    state.start_vehicle()?;

    while !state.is_complete() {
        let mut pheromones = graph.lock();

        let current = state.current_node().ok_or(AntError::VehiclesExhausted { unserved: state.unserved() })?;
        let candidates = state.candidates(current);
        let next = transition::select_next_node(ctx, &pheromones, graph, current, candidates.as_slice())?;

        if state.is_feasible(next) {
            state.insert_node(next, &mut pheromones, rho);
            ctx.environment.log_verbose(|| format!("[insert] ant {}: {:?}", ctx.ant_id, state.active_nodes()));
        } else {
            state.close_route(&mut pheromones, rho);
            state.start_vehicle()?;
            ctx.environment.log_verbose(|| format!("[vehicle] ant {}: {:?}", ctx.ant_id, state.active_nodes()));
        }
    }

    state.close_route(&mut graph.lock(), rho);

    Ok(state.into_routes())
}
