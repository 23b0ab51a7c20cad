//! Scientific crate contains logic to read scientific problems used to benchmark the ant colony.
//!
//!
//! # Supported formats
//!
//! - **tsplib** CVRP subset of TSPLIB95 format as used by [CVRPLIB](http://vrp.galgos.inf.puc-rio.br/index.php/en/)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use ant_vrp_core as core;

pub mod common;
pub mod tsplib;
