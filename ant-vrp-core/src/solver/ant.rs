#[cfg(test)]
#[path = "../../tests/unit/solver/ant_test.rs"]
mod ant_test;

use super::{Colony, StartSignal};
use crate::construction::{AntError, AntParams, ConstructionContext, construct_routes};
use crate::models::Problem;
use crate::models::solution::{AntSolution, UsedEdges, route_cost};
use crate::refinement::{ExchangeTwoOpt, LocalOperator};
use crate::utils::{Environment, GenericResult, Random};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// An ant agent: constructs a complete multi-vehicle solution once per round.
pub struct Ant {
    id: usize,
    params: AntParams,
    random: Arc<dyn Random + Send + Sync>,
    local_search: Arc<dyn LocalOperator + Send + Sync>,
    environment: Arc<Environment>,
}

impl Ant {
    /// Creates a new ant which refines its routes with 2-opt.
    pub fn new(
        id: usize,
        params: AntParams,
        random: Arc<dyn Random + Send + Sync>,
        environment: Arc<Environment>,
    ) -> Self {
        Self { id, params, random, local_search: Arc::new(ExchangeTwoOpt::default()), environment }
    }

    /// Sets a local search operator used to refine constructed routes.
    pub fn with_local_search(mut self, local_search: Arc<dyn LocalOperator + Send + Sync>) -> Self {
        self.local_search = local_search;
        self
    }

    /// Returns ant id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns decision policy parameters.
    pub fn params(&self) -> &AntParams {
        &self.params
    }

    /// Runs a single round: constructs routes, refines each of them and evaluates the result.
    /// Cost and used edges are recalculated from refined routes.
    pub fn run_round(&self, problem: &Problem) -> Result<AntSolution, AntError> {
        let graph = problem.graph.as_ref();
        let ctx = ConstructionContext {
            ant_id: self.id,
            params: &self.params,
            random: self.random.as_ref(),
            environment: self.environment.as_ref(),
        };

        let constructed = construct_routes(&ctx, problem)?;

        let routes = constructed
            .routes
            .into_iter()
            .map(|(vehicle_id, route)| (vehicle_id, self.local_search.optimize(route, graph)))
            .collect::<FxHashMap<_, _>>();

        let cost = routes.values().map(|route| route_cost(route, graph)).sum::<f64>();
        let used_edges = UsedEdges::from_routes(graph.size(), routes.values());

        self.environment.log_verbose(|| {
            format!("ant {}: {} route(s), cost {cost:.3} (constructed {:.3})", self.id, routes.len(), constructed.cost)
        });

        Ok(AntSolution { ant_id: self.id, routes, visits: constructed.visits, cost, used_edges })
    }

    /// Starts the ant on a dedicated thread. The ant waits for a round to be started by the
    /// returned handle, runs it and reports the result to the colony, until terminated.
    pub fn spawn(self, colony: Arc<dyn Colony>) -> GenericResult<AntHandle> {
        let id = self.id;
        let signal = Arc::new(StartSignal::default());

        let thread = thread::Builder::new().name(format!("ant-{id}")).spawn({
            let signal = signal.clone();
            move || self.run(signal.as_ref(), colony.as_ref())
        })?;

        Ok(AntHandle { id, signal, thread: Some(thread) })
    }

    fn run(self, signal: &StartSignal, colony: &dyn Colony) {
        loop {
            let problem = colony.problem();

            if !signal.wait_for_start() {
                break;
            }

            let result = self.run_round(problem.as_ref());

            signal.finish_round();
            colony.update(self.id, result);
        }

        self.environment.log_verbose(|| format!("ant {} terminated", self.id));
    }
}

/// A handle to control the ant running on its own thread.
pub struct AntHandle {
    id: usize,
    signal: Arc<StartSignal>,
    thread: Option<JoinHandle<()>>,
}

impl AntHandle {
    /// Returns ant id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Starts a new round. Does nothing if the ant is terminated.
    pub fn signal_start(&self) {
        self.signal.signal_start();
    }

    /// Requests the ant to terminate. A waiting ant exits immediately, a running one exits after
    /// finishing its current round.
    pub fn terminate(&self) {
        self.signal.terminate();
    }

    /// Checks whether termination was requested.
    pub fn is_terminated(&self) -> bool {
        self.signal.is_terminated()
    }

    /// Checks whether the ant's thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|thread| thread.is_finished())
    }

    /// Terminates the ant and waits until its thread exits.
    pub fn join(mut self) -> GenericResult<()> {
        self.terminate();
        self.join_thread()
    }

    fn join_thread(&mut self) -> GenericResult<()> {
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| format!("ant {} has panicked", self.id).into()),
            None => Ok(()),
        }
    }
}

impl Drop for AntHandle {
    fn drop(&mut self) {
        self.signal.terminate();
        let _ = self.join_thread();
    }
}
