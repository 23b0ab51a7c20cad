use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{create_collecting_logger, create_test_environment};

fn create_test_config(ants: usize) -> ColonyConfig {
    ColonyConfig { ants, ..ColonyConfig::default() }
}

#[test]
fn can_create_default_config() {
    let config = ColonyConfig::default();

    assert_eq!(config.ants, get_cpus());
    assert_eq!(config.q0_range, DEFAULT_Q0_RANGE);
    assert_eq!(config.beta, DEFAULT_BETA);
    assert_eq!(config.rho, DEFAULT_RHO);
}

#[test]
fn can_run_rounds_and_return_results_ordered_by_ant_id() {
    let problem = Arc::new(create_single_route_problem());
    let mut runner = ColonyRunner::new(&create_test_config(3), problem, create_test_environment()).unwrap();
    assert_eq!(runner.size(), 3);

    (0..2).for_each(|_| {
        let results = runner.run_round().unwrap();

        assert_eq!(results.iter().map(|(ant_id, _)| *ant_id).collect::<Vec<_>>(), vec![0, 1, 2]);
        results.iter().for_each(|(ant_id, result)| {
            let solution = result.as_ref().expect("round has failed");
            assert_eq!(solution.ant_id, *ant_id);
            assert_eq!(solution.served_demands(4), vec![0, 3, 4, 2]);
        });
    });

    assert_eq!(runner.rounds(), 2);
    runner.shutdown().unwrap();
}

#[test]
fn can_report_failed_ants_without_stopping_colony() {
    let problem =
        Arc::new(create_test_problem(&SQUARE_COORDINATES, create_test_vehicles(1, 100., 1), vec![0, 1, 1, 0]));
    let mut runner = ColonyRunner::new(&create_test_config(2), problem, create_test_environment()).unwrap();

    let first = runner.run_round().unwrap();
    let second = runner.run_round().unwrap();

    assert!(first.iter().chain(second.iter()).all(|(_, result)| result.is_err()));
    assert_eq!(second.len(), 2);
    runner.shutdown().unwrap();
}

#[test]
fn can_log_round_summary() {
    let (logger, messages) = create_collecting_logger();
    let environment = Arc::new(Environment { logger, ..Environment::new_with_seed(Some(1)) });
    let mut runner =
        ColonyRunner::new(&create_test_config(2), Arc::new(create_single_route_problem()), environment).unwrap();

    runner.run_round().unwrap();
    runner.shutdown().unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.starts_with("round 1 finished") && msg.ends_with("2 succeeded, 0 failed")));
}

parameterized_test! {can_reject_invalid_config, (config, expected), {
    can_reject_invalid_config_impl(config, expected);
}}

can_reject_invalid_config! {
    case01_no_ants: (create_test_config(0), "colony should have at least one ant"),
    case02_reversed_q0: (ColonyConfig { q0_range: (0.9, 0.5), ..create_test_config(1) }, "invalid q0 range: [0.9, 0.5]"),
    case03_q0_above_one: (ColonyConfig { q0_range: (0.5, 1.5), ..create_test_config(1) }, "invalid q0 range: [0.5, 1.5]"),
    case04_rho: (ColonyConfig { rho: 1.5, ..create_test_config(1) }, "invalid rho: 1.5"),
    case05_beta: (ColonyConfig { beta: f64::INFINITY, ..create_test_config(1) }, "invalid beta: inf"),
}

fn can_reject_invalid_config_impl(config: ColonyConfig, expected: &str) {
    let result = ColonyRunner::new(&config, Arc::new(create_single_route_problem()), create_test_environment());

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}
