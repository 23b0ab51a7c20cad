#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use ant_vrp_core::models::{Demand, GraphBuilder, Problem, Vehicle};
use ant_vrp_core::prelude::GenericError;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Descriptive data of tsplib95 problem which is not part of the routing model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TsplibInfo {
    /// A value of `NAME` key.
    pub name: Option<String>,
    /// A value of `COMMENT` key.
    pub comment: Option<String>,
    /// Node coordinates in model order.
    pub coordinates: Vec<(f64, f64)>,
}

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads tsplib95 problem together with its descriptive data. Distances are rounded to the
    /// nearest integer when `is_rounded` is set.
    fn read_tsplib_with_info(self, is_rounded: bool) -> Result<(Problem, TsplibInfo), GenericError>;

    /// Reads tsplib95 problem.
    fn read_tsplib(self, is_rounded: bool) -> Result<Problem, GenericError>
    where
        Self: Sized,
    {
        self.read_tsplib_with_info(is_rounded).map(|(problem, _)| problem)
    }
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib_with_info(self, is_rounded: bool) -> Result<(Problem, TsplibInfo), GenericError> {
        TsplibReader::new(self).read_problem(is_rounded)
    }
}

impl TsplibProblem for String {
    fn read_tsplib_with_info(self, is_rounded: bool) -> Result<(Problem, TsplibInfo), GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem(is_rounded)
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    name: Option<String>,
    comment: Option<String>,
    dimension: Option<usize>,
    vehicle_capacity: Option<Demand>,
    max_distance: Option<f64>,
    vehicles: Option<usize>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self {
            buffer: String::new(),
            reader,
            name: None,
            comment: None,
            dimension: None,
            vehicle_capacity: None,
            max_distance: None,
            vehicles: None,
        }
    }

    fn read_problem(&mut self, is_rounded: bool) -> Result<(Problem, TsplibInfo), GenericError> {
        self.read_meta()?;

        let coordinates = self.read_coordinates()?;
        let demands = self.read_demands()?;
        let depot = self.read_depot_data()?;
        self.read_expected_line("EOF")?;

        let vehicle_capacity = self.vehicle_capacity.ok_or("missing CAPACITY")?;
        let max_distance = self.max_distance.unwrap_or(f64::INFINITY);
        let vehicles = (0..self.vehicles.unwrap_or(coordinates.len()))
            .map(|id| Vehicle { id, depot, max_distance, max_capacity: vehicle_capacity })
            .collect();

        let graph = GraphBuilder::from_coordinates(coordinates.as_slice(), is_rounded).build()?;

        let problem = Problem::new(Arc::new(graph), vehicles, demands)?;
        let info = TsplibInfo { name: self.name.take(), comment: self.comment.take(), coordinates };

        Ok((problem, info))
    }

    /// Reads specification part until `NODE_COORD_SECTION`, keys can go in any order.
    fn read_meta(&mut self) -> Result<(), GenericError> {
        loop {
            let line = self.read_line()?.trim().to_string();
            if line == "NODE_COORD_SECTION" {
                break;
            }

            let (key, value) = line
                .split_once(':')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| format!("expected colon separated string, got: '{line}'"))?;

            match key {
                "NAME" => self.name = Some(value.to_string()),
                "COMMENT" => self.comment = Some(value.to_string()),
                "TYPE" if value != "CVRP" => return Err(format!("expecting 'CVRP' as TYPE, got '{value}'").into()),
                "TYPE" => {}
                "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                    return Err(format!("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{value}'").into());
                }
                "EDGE_WEIGHT_TYPE" => {}
                "DIMENSION" => self.dimension = Some(parse_positive(value, "cannot parse DIMENSION")?),
                "CAPACITY" => self.vehicle_capacity = Some(parse_demand(value, "cannot parse CAPACITY")?),
                "VEHICLES" => self.vehicles = Some(parse_positive(value, "cannot parse VEHICLES")?),
                "DISTANCE" => {
                    let distance = parse_float(value, "cannot parse DISTANCE")?;
                    if distance.is_nan() || distance < 0. {
                        return Err(format!("cannot parse DISTANCE: '{value}' is negative").into());
                    }
                    self.max_distance = Some(distance);
                }
                _ => return Err(format!("unexpected key: '{key}'").into()),
            }
        }

        if self.dimension.is_none() {
            return Err("missing DIMENSION".into());
        }

        if self.vehicle_capacity.is_none() {
            return Err("missing CAPACITY".into());
        }

        Ok(())
    }

    fn read_coordinates(&mut self) -> Result<Vec<(f64, f64)>, GenericError> {
        let rows = self.read_section(3, "coord")?;

        rows.into_iter()
            .map(|data| {
                let x = parse_float(data[0].as_str(), "cannot parse coord.0")?;
                let y = parse_float(data[1].as_str(), "cannot parse coord.1")?;

                Ok::<_, GenericError>((x, y))
            })
            .collect()
    }

    fn read_demands(&mut self) -> Result<Vec<Demand>, GenericError> {
        self.read_expected_line("DEMAND_SECTION")?;

        let rows = self.read_section(2, "demand")?;

        rows.into_iter().map(|data| parse_demand(data[0].as_str(), "cannot parse demand")).collect()
    }

    /// Reads the depot section, all vehicles start at the first listed depot.
    fn read_depot_data(&mut self) -> Result<usize, GenericError> {
        self.read_expected_line("DEPOT_SECTION")?;

        let line = self.read_line()?.trim().to_string();
        let depot_id = self.read_node_id(line.as_str())?;

        loop {
            let line = self.read_line()?.trim().to_string();
            if line == "-1" {
                break;
            }

            self.read_node_id(line.as_str())?;
        }

        Ok(depot_id)
    }

    /// Reads `dimension` lines of `id value..` format, returns values ordered by node index.
    fn read_section(&mut self, columns: usize, name: &str) -> Result<Vec<Vec<String>>, GenericError> {
        let dimension = self.dimension.ok_or("missing DIMENSION")?;
        let mut rows: Vec<Option<Vec<String>>> = vec![None; dimension];

        for _ in 0..dimension {
            let line = self.read_line()?.trim().to_string();
            let data = line.split_whitespace().collect::<Vec<_>>();

            if data.len() != columns {
                return Err(format!("unexpected {name} data: '{line}'").into());
            }

            let index = self.read_node_id(data[0])?;
            if rows[index].is_some() {
                return Err(format!("duplicate {name} data for id: '{}'", data[0]).into());
            }

            rows[index] = Some(data[1..].iter().map(|value| value.to_string()).collect());
        }

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                row.ok_or_else(|| GenericError::from(format!("cannot find {name} data for id: '{}'", index + 1)))
            })
            .collect()
    }

    /// Converts one-based node id into zero-based node index.
    fn read_node_id(&self, data: &str) -> Result<usize, GenericError> {
        let dimension = self.dimension.unwrap_or_default();
        let id = parse_int(data, "cannot parse id")?;

        if id < 1 || id as usize > dimension {
            return Err(format!("node id is out of range: '{data}'").into());
        }

        Ok(id as usize - 1)
    }

    fn read_expected_line(&mut self, expected: &str) -> Result<(), GenericError> {
        let line = self.read_line()?.trim();
        if line != expected { Err(format!("expecting {expected}, got: '{line}'").into()) } else { Ok(()) }
    }

    fn read_line(&mut self) -> Result<&String, GenericError> {
        read_non_empty_line(&mut self.reader, &mut self.buffer)?;
        Ok(&self.buffer)
    }
}

fn parse_positive(data: &str, err_msg: &str) -> Result<usize, GenericError> {
    match parse_int(data, err_msg)? {
        value if value > 0 => Ok(value as usize),
        value => Err(format!("{err_msg}: '{value}' is not positive").into()),
    }
}

fn parse_demand(data: &str, err_msg: &str) -> Result<Demand, GenericError> {
    let value = parse_int(data, err_msg)?;

    Demand::try_from(value).map_err(|_| format!("{err_msg}: '{value}' is out of range").into())
}
