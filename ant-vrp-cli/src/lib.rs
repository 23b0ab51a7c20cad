//! A command line interface library to the ant colony *Vehicle Routing Problem* solver.
//!
//! Contains the configuration, output formats and interruption handling used by the `ant-vrp`
//! binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use ant_vrp_core as core;
pub use ant_vrp_scientific as scientific;

pub mod extensions;
