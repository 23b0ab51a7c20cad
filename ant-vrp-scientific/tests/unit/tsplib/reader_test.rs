use super::*;
use crate::helpers::get_test_resource;
use std::fs::File;
use std::io::Read;

fn get_example_problem_string() -> String {
    let mut buffer = "".to_string();

    get_test_resource("data/tsplib/example.txt")
        .expect("cannot open file")
        .read_to_string(&mut buffer)
        .expect("cannot read file");

    buffer
}

fn get_example_problem_reader() -> BufReader<File> {
    BufReader::new(get_test_resource("data/tsplib/example.txt").expect("cannot open file"))
}

#[test]
fn can_read_meta_errors() {
    for &(from, to, error) in &[
        ("CVRP", "ASD", "expecting 'CVRP' as TYPE, got 'ASD'"),
        ("DIMENSION : 6", "DIMENSION : asd", "cannot parse DIMENSION: 'invalid float literal'"),
        ("DIMENSION : 6", "DIMENSION : 0", "cannot parse DIMENSION: '0' is not positive"),
        ("EUC_2D", "ASD", "expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got 'ASD'"),
        ("CAPACITY : 30", "CAPACITY : asd", "cannot parse CAPACITY: 'invalid float literal'"),
        ("CAPACITY : 30", "CAPACITY : -1", "cannot parse CAPACITY: '-1' is out of range"),
        ("CAPACITY : 30\n", "", "missing CAPACITY"),
        ("DIMENSION : 6\n", "", "missing DIMENSION"),
        ("NAME : example", "NAME example", "expected colon separated string, got: 'NAME example'"),
        ("NAME : example", "SOMETHING : example", "unexpected key: 'SOMETHING'"),
    ] {
        let content = get_example_problem_string().replace(from, to);
        let mut reader = TsplibReader::new(BufReader::new(content.as_bytes()));

        let result = reader.read_meta();

        assert_eq!(result, Err(error.into()));
    }
}

#[test]
fn can_read_meta_capacity_and_dimension() {
    let mut reader = TsplibReader::new(get_example_problem_reader());

    reader.read_meta().expect("cannot read meta");

    assert_eq!(reader.name.as_deref(), Some("example"));
    assert_eq!(reader.comment.as_deref(), Some("(a simple example, No of trucks: 2)"));
    assert_eq!(reader.dimension, Some(6));
    assert_eq!(reader.vehicle_capacity, Some(30));
    assert_eq!(reader.max_distance, None);
    assert_eq!(reader.vehicles, None);
}

#[test]
fn can_read_optional_keys_in_any_order() {
    let content = get_example_problem_string()
        .replace("CAPACITY : 30\n", "")
        .replace("TYPE : CVRP\n", "VEHICLES : 2\nDISTANCE : 120.5\nCAPACITY : 30\nTYPE : CVRP\n");
    let mut reader = TsplibReader::new(BufReader::new(content.as_bytes()));

    reader.read_meta().expect("cannot read meta");

    assert_eq!(reader.vehicle_capacity, Some(30));
    assert_eq!(reader.max_distance, Some(120.5));
    assert_eq!(reader.vehicles, Some(2));
}

#[test]
fn can_read_customer_data() {
    let mut reader = TsplibReader::new(get_example_problem_reader());
    reader.read_meta().expect("cannot read meta");

    let coordinates = reader.read_coordinates().expect("cannot read coordinates");
    let demands = reader.read_demands().expect("cannot read demands");

    assert_eq!(coordinates.len(), 6);
    assert_eq!(coordinates[2], (10., 10.));
    assert_eq!(demands, vec![0, 10, 12, 8, 5, 20]);
}

#[test]
fn can_read_depot_data() {
    let mut reader = TsplibReader::new(get_example_problem_reader());
    reader.read_meta().expect("cannot read meta");
    reader.read_coordinates().expect("cannot read coordinates");
    reader.read_demands().expect("cannot read demands");

    assert_eq!(reader.read_depot_data(), Ok(0));
}

parameterized_test! {can_read_data_errors, (from, to, error), {
    can_read_data_errors_impl(from, to, error);
}}

can_read_data_errors! {
    case01_wrong_columns: ("3 10 10\n", "3 10\n", "unexpected coord data: '3 10'"),
    case02_out_of_range: ("3 10 10\n", "7 10 10\n", "node id is out of range: '7'"),
    case03_duplicate: ("3 10 10\n", "2 10 10\n", "duplicate coord data for id: '2'"),
    case04_demand: ("3 12\n", "3 asd\n", "cannot parse demand: 'invalid float literal'"),
    case05_depot: ("DEPOT_SECTION\n1\n", "DEPOT_SECTION\n0\n", "node id is out of range: '0'"),
    case06_no_eof: ("\nEOF", "", "unexpected end of input"),
}

fn can_read_data_errors_impl(from: &str, to: &str, error: &str) {
    let content = get_example_problem_string().replace(from, to);

    let result = content.read_tsplib(false);

    assert_eq!(result.err(), Some(error.into()));
}

#[test]
fn can_read_problem() {
    let reader = get_example_problem_reader();

    let problem = reader.read_tsplib(false).expect("cannot read problem");

    assert_eq!(problem.graph.size(), 6);
    assert_eq!(problem.vehicles.len(), 6);
    assert!(problem.vehicles.iter().all(|vehicle| vehicle.depot == 0 && vehicle.max_capacity == 30));
    assert!(problem.vehicles.iter().all(|vehicle| vehicle.max_distance == f64::INFINITY));
    assert_eq!(problem.demands, vec![0, 10, 12, 8, 5, 20]);
    assert_eq!(problem.graph.distance(0, 1), 10.);
}

#[test]
fn can_read_problem_with_rounded_distances_and_limits() {
    let content = get_example_problem_string().replace("CAPACITY : 30", "CAPACITY : 30\nDISTANCE : 50\nVEHICLES : 3");

    let problem = content.read_tsplib(true).expect("cannot read problem");

    assert_eq!(problem.vehicles.len(), 3);
    assert!(problem.vehicles.iter().all(|vehicle| vehicle.max_distance == 50.));
    assert_eq!(problem.graph.distance(0, 4), 7.);
}

#[test]
fn can_read_problem_with_info() {
    let content = get_example_problem_string().replace("COMMENT : (a simple example, No of trucks: 2)\n", "");

    let (problem, info) = content.read_tsplib_with_info(false).expect("cannot read problem");

    assert_eq!(info.name.as_deref(), Some("example"));
    assert_eq!(info.comment, None);
    assert_eq!(info.coordinates.len(), problem.graph.size());
    assert_eq!(info.coordinates[5], (20., 0.));
}
