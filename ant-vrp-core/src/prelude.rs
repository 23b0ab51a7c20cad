//! This module reimports a common used types.

pub use crate::construction::AntError;
pub use crate::construction::AntParams;

pub use crate::models::Demand;
pub use crate::models::GraphBuilder;
pub use crate::models::Problem;
pub use crate::models::SharedGraph;
pub use crate::models::Vehicle;
pub use crate::models::solution::AntSolution;

pub use crate::refinement::ExchangeTwoOpt;
pub use crate::refinement::LocalOperator;

pub use crate::solver::Ant;
pub use crate::solver::AntHandle;
pub use crate::solver::Colony;
pub use crate::solver::ColonyConfig;
pub use crate::solver::ColonyRunner;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
