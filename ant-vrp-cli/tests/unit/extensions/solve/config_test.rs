use super::*;

#[test]
fn can_read_full_config() {
    let json = r#"{
        "ants": 4,
        "q0Range": [0.5, 0.9],
        "beta": 3.0,
        "rho": 0.2,
        "rounds": 5,
        "seed": 42,
        "verbose": true
    }"#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(config.ants, Some(4));
    assert_eq!(config.q0_range, Some((0.5, 0.9)));
    assert_eq!(config.beta, Some(3.));
    assert_eq!(config.rho, Some(0.2));
    assert_eq!(config.rounds(), 5);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.verbose, Some(true));

    let colony_config = create_colony_config(&config);
    assert_eq!(colony_config.ants, 4);
    assert_eq!(colony_config.q0_range, (0.5, 0.9));
    assert_eq!(colony_config.beta, 3.);
    assert_eq!(colony_config.rho, 0.2);
}

#[test]
fn can_use_defaults_for_missing_values() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    let colony_config = create_colony_config(&config);
    let default = ColonyConfig::default();

    assert_eq!(config.rounds(), DEFAULT_ROUNDS);
    assert_eq!(config.seed, None);
    assert_eq!(colony_config.ants, default.ants);
    assert_eq!(colony_config.q0_range, default.q0_range);
    assert_eq!(colony_config.beta, default.beta);
    assert_eq!(colony_config.rho, default.rho);
}

#[test]
fn can_reject_unknown_fields() {
    let result = read_config(BufReader::new(r#"{ "antz": 4 }"#.as_bytes()));

    assert!(result.err().is_some_and(|err| err.to_string().starts_with("cannot deserialize config")));
}
