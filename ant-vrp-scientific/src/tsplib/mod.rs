//! Contains functionality to read a CVRP subset of TSPLIB95 format.

mod reader;
pub use self::reader::{TsplibInfo, TsplibProblem};
