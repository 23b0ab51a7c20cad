use super::*;
use ant_vrp_core::models::solution::UsedEdges;
use ant_vrp_core::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;

fn create_test_problem() -> Problem {
    let graph = GraphBuilder::from_coordinates(&[(0., 0.), (0., 3.), (4., 3.), (4., 0.)], false).build().unwrap();
    let vehicles = (0..2).map(|id| Vehicle { id, depot: 0, max_distance: 100., max_capacity: 5 }).collect();

    Problem::new(Arc::new(graph), vehicles, vec![0, 3, 2, 2]).unwrap()
}

fn create_test_results() -> Vec<(usize, AntResult)> {
    let mut routes = FxHashMap::default();
    routes.insert(1, vec![0, 3]);
    routes.insert(0, vec![0, 1, 2]);
    let mut visits = FxHashMap::default();
    visits.insert(1, vec![(0, 0), (3, 2)]);
    visits.insert(0, vec![(0, 0), (1, 3), (2, 2)]);
    let used_edges = UsedEdges::from_routes(4, routes.values());

    vec![
        (0, Ok(AntSolution { ant_id: 0, routes, visits, cost: 20., used_edges })),
        (1, Err(AntError::VehiclesExhausted { unserved: 1 })),
    ]
}

#[test]
fn can_create_round_report() {
    let problem = create_test_problem();

    let report = create_round_report(3, create_test_results().as_slice(), &problem);

    assert_eq!(report.round, 3);
    assert_eq!(report.ants.len(), 2);

    let succeeded = &report.ants[0];
    assert_eq!(succeeded.cost, Some(20.));
    assert!(succeeded.error.is_none());
    assert_eq!(succeeded.routes.iter().map(|route| route.vehicle_id).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(succeeded.routes[0].nodes, vec![0, 1, 2]);
    assert_eq!(succeeded.routes[0].load, 5);
    assert_eq!(succeeded.routes[0].cost, 12.);
    assert_eq!(succeeded.routes[1].load, 2);
    assert_eq!(succeeded.routes[1].cost, 8.);

    let failed = &report.ants[1];
    assert_eq!(failed.cost, None);
    assert!(failed.routes.is_empty());
    assert_eq!(failed.error.as_deref(), Some("no vehicles left while 1 node(s) have unserved demand"));
}

#[test]
fn can_format_ant_summary() {
    let results = create_test_results();

    assert_eq!(format_ant_summary(2, 0, &results[0].1), "round 2, ant 0: cost 20.000, 2 route(s)");
    assert_eq!(
        format_ant_summary(2, 1, &results[1].1),
        "round 2, ant 1: failed: no vehicles left while 1 node(s) have unserved demand"
    );
}

#[test]
fn can_write_round_report_as_json() {
    let problem = create_test_problem();
    let report = create_round_report(1, create_test_results().as_slice(), &problem);
    let mut buffer = Vec::new();

    write_round_report(BufWriter::new(&mut buffer), &report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(value["round"], 1);
    assert_eq!(value["ants"][0]["antId"], 0);
    assert_eq!(value["ants"][0]["routes"][1]["vehicleId"], 1);
    assert_eq!(value["ants"][0]["routes"][1]["nodes"], serde_json::json!([0, 3]));
    assert!(value["ants"][1].get("routes").is_none());
    assert!(value["ants"][1].get("cost").is_none());
    assert!(value["ants"][1]["error"].is_string());
}

fn create_test_info() -> TsplibInfo {
    TsplibInfo {
        name: Some("square".to_string()),
        comment: Some("(two trucks)".to_string()),
        coordinates: vec![(0., 0.), (0., 3.), (4., 3.), (4., 0.)],
    }
}

#[test]
fn can_format_problem_summary() {
    let problem = create_test_problem();

    assert_eq!(
        format_problem_summary(&create_test_info(), &problem),
        "problem 'square' (two trucks): type CVRP, 4 node(s), 2 vehicle(s), total demand 7"
    );
    assert_eq!(
        format_problem_summary(&TsplibInfo::default(), &problem),
        "problem 'unnamed': type CVRP, 4 node(s), 2 vehicle(s), total demand 7"
    );
}

#[test]
fn can_format_problem_details() {
    let problem = create_test_problem();

    let details = format_problem_details(&create_test_info(), &problem);

    assert_eq!(
        details,
        vec![
            "vehicle 0: depot 0, capacity 5, max distance 100",
            "vehicle 1: depot 0, capacity 5, max distance 100",
            "node 0: (0, 0), demand 0",
            "node 1: (0, 3), demand 3",
            "node 2: (4, 3), demand 2",
            "node 3: (4, 0), demand 2",
        ]
    );
}
