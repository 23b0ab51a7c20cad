//! Output formats of the solve command.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use ant_vrp_core::models::Problem;
use ant_vrp_core::models::solution::{AntSolution, route_cost};
use ant_vrp_core::prelude::GenericError;
use ant_vrp_core::solver::AntResult;
use ant_vrp_scientific::tsplib::TsplibInfo;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Results of all ants within one round.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    /// A round number starting from 1, zero means that no round was run.
    pub round: usize,
    /// Results per ant ordered by ant id.
    pub ants: Vec<AntReport>,
}

/// A result of a single ant: either its routes or the reason of failure.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntReport {
    /// An ant id.
    pub ant_id: usize,
    /// A total cost of the solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Routes ordered by vehicle id.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteReport>,
    /// An error message when the ant has failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single vehicle route.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    /// A vehicle id.
    pub vehicle_id: usize,
    /// Visited nodes starting from the depot, the return to depot is implicit.
    pub nodes: Vec<usize>,
    /// A total load picked up on the route.
    pub load: u64,
    /// A route cost including the return to depot.
    pub cost: f64,
}

/// Creates a report from round results.
pub fn create_round_report(round: usize, results: &[(usize, AntResult)], problem: &Problem) -> RoundReport {
    let ants = results
        .iter()
        .map(|(ant_id, result)| match result {
            Ok(solution) => AntReport {
                ant_id: *ant_id,
                cost: Some(solution.cost),
                routes: create_route_reports(solution, problem),
                error: None,
            },
            Err(err) => AntReport { ant_id: *ant_id, cost: None, routes: vec![], error: Some(err.to_string()) },
        })
        .collect();

    RoundReport { round, ants }
}

/// Formats a one-line summary of the ant's round.
pub fn format_ant_summary(round: usize, ant_id: usize, result: &AntResult) -> String {
    match result {
        Ok(solution) => {
            format!("round {round}, ant {ant_id}: cost {:.3}, {} route(s)", solution.cost, solution.routes.len())
        }
        Err(err) => format!("round {round}, ant {ant_id}: failed: {err}"),
    }
}

/// Formats a one-line summary of the problem.
pub fn format_problem_summary(info: &TsplibInfo, problem: &Problem) -> String {
    let name = info.name.as_deref().unwrap_or("unnamed");
    let comment = info.comment.as_deref().map(|comment| format!(" {comment}")).unwrap_or_default();

    format!(
        "problem '{name}'{comment}: type CVRP, {} node(s), {} vehicle(s), total demand {}",
        problem.graph.size(),
        problem.vehicles.len(),
        problem.total_demand()
    )
}

/// Formats vehicles and nodes of the problem, one per line.
pub fn format_problem_details(info: &TsplibInfo, problem: &Problem) -> Vec<String> {
    let vehicles = problem.vehicles.iter().map(|vehicle| {
        format!(
            "vehicle {}: depot {}, capacity {}, max distance {}",
            vehicle.id, vehicle.depot, vehicle.max_capacity, vehicle.max_distance
        )
    });

    let nodes = info
        .coordinates
        .iter()
        .zip(problem.demands.iter())
        .enumerate()
        .map(|(node, ((x, y), demand))| format!("node {node}: ({x}, {y}), demand {demand}"));

    vehicles.chain(nodes).collect()
}

/// Writes the report as json.
pub fn write_round_report<W: Write>(writer: BufWriter<W>, report: &RoundReport) -> Result<(), GenericError> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, report).map_err(|err| format!("cannot write result: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

fn create_route_reports(solution: &AntSolution, problem: &Problem) -> Vec<RouteReport> {
    solution
        .sorted_routes()
        .into_iter()
        .map(|(vehicle_id, route)| RouteReport {
            vehicle_id,
            nodes: route.clone(),
            load: solution
                .visits
                .get(&vehicle_id)
                .map_or(0, |visits| visits.iter().map(|(_, load)| *load as u64).sum()),
            cost: route_cost(route, problem.graph.as_ref()),
        })
        .collect()
}
